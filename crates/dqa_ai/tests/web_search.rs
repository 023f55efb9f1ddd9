use std::sync::Mutex;

use dqa_core::error::AppError;
use dqa_ai::llm::Llm;
use dqa_ai::websearch::search_web;

struct RecordingLlm {
    prompts: Mutex<Vec<String>>,
    out: String,
}

impl Llm for RecordingLlm {
    fn generate(
        &self,
        _model: &str,
        prompt: &str,
        _format: &serde_json::Value,
    ) -> Result<String, AppError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok(self.out.clone())
    }
}

#[test]
fn web_search_returns_synthesized_answer_text() {
    let llm = RecordingLlm {
        prompts: Mutex::new(Vec::new()),
        out: r#"{"answer":"The web-grounded answer."}"#.to_string(),
    };
    let answer = search_web(&llm, "mock", "latest AI market size").expect("should succeed");
    assert_eq!(answer, "The web-grounded answer.");

    let prompts = llm.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("latest AI market size"));
}

#[test]
fn empty_query_is_rejected_before_any_model_call() {
    let llm = RecordingLlm {
        prompts: Mutex::new(Vec::new()),
        out: r#"{"answer":"unused"}"#.to_string(),
    };
    let err = search_web(&llm, "mock", " ").expect_err("should error");
    assert_eq!(err.code, "VALIDATION_FAILED");
    assert_eq!(llm.prompts.lock().unwrap().len(), 0);
}

#[test]
fn malformed_web_output_fails_closed() {
    let llm = RecordingLlm {
        prompts: Mutex::new(Vec::new()),
        out: "plain prose, no JSON".to_string(),
    };
    let err = search_web(&llm, "mock", "anything").expect_err("should error");
    assert_eq!(err.code, "AI_SCHEMA_MISMATCH");
}
