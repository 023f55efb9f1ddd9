use serde::{Deserialize, Serialize};

/// Canonical document record for a single session.
///
/// Notes:
/// - `id` is the only stable handle; it is caller-assigned and opaque.
/// - `name` is the model-facing label and is NOT guaranteed unique, which is
///   the root source of ambiguity in citation reconciliation.
/// - `added` is an RFC3339 UTC string; non-RFC3339 values are preserved as
///   given and surfaced as validation warnings (no silent guessing).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub id: String,
    pub name: String,
    pub content: String,
    pub collection_id: Option<String>,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub size: u64,
    pub added: String,
    pub content_sha256: String,
}

/// Named grouping of documents. `document_ids` is kept in insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    pub id: String,
    pub name: String,
    pub document_ids: Vec<String>,
}

/// Citation in its reconciled, caller-facing form.
///
/// `document_id` is either a canonical document id or one of the sentinels
/// (`"unknown-doc"`, `"web-search"`) when resolution failed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Citation {
    pub document_id: String,
    pub passage: String,
    pub citation_number: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "user" => Some(Self::User),
            "assistant" => Some(Self::Assistant),
            _ => None,
        }
    }
}

/// Ephemeral, request-scoped chat message. Not part of durable state.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub citations: Option<Vec<Citation>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_loading: Option<bool>,
}

/// Non-fatal diagnostic surfaced alongside results.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationWarning {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ValidationWarning {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}
