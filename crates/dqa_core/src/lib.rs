pub mod demo;
pub mod domain;
pub mod error;
pub mod library;

#[cfg(test)]
mod tests {
    use super::error::AppError;

    #[test]
    fn app_error_is_structured() {
        let err = AppError::new("LIBRARY_TEST", "library failed").with_retryable(false);
        assert_eq!(err.code, "LIBRARY_TEST");
        assert_eq!(err.message, "library failed");
        assert_eq!(err.retryable, false);
    }

    #[test]
    fn validation_errors_share_one_code() {
        let err = AppError::validation("Question cannot be empty");
        assert_eq!(err.code, "VALIDATION_FAILED");
    }

    #[test]
    fn chat_role_round_trips_through_wire_form() {
        use super::domain::ChatRole;

        assert_eq!(ChatRole::from_str("user"), Some(ChatRole::User));
        assert_eq!(ChatRole::from_str(ChatRole::Assistant.as_str()), Some(ChatRole::Assistant));
        assert_eq!(ChatRole::from_str("system"), None);
    }

    #[test]
    fn chat_message_serializes_with_camel_case_fields() {
        use super::domain::{ChatMessage, ChatRole, Citation};

        let msg = ChatMessage {
            id: "msg-1".to_string(),
            role: ChatRole::Assistant,
            text: "Revenue grew 20% [1].".to_string(),
            citations: Some(vec![Citation {
                document_id: "doc-1".to_string(),
                passage: "Revenue grew 20%".to_string(),
                citation_number: 1,
            }]),
            is_loading: None,
        };

        let json = serde_json::to_value(&msg).expect("encode");
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["citations"][0]["documentId"], "doc-1");
        assert_eq!(json["citations"][0]["citationNumber"], 1);
        assert!(json.get("isLoading").is_none());
    }
}
