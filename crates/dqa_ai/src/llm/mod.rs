use dqa_core::error::AppError;

/// One blocking structured-output model call.
///
/// `format` is the JSON schema the output must conform to; it is passed to
/// the model service verbatim. Implementations return the raw response text
/// and must not retry or reshape it — decoding (and fail-closed rejection)
/// belongs to the schema layer.
pub trait Llm: Sync {
    fn generate(
        &self,
        model: &str,
        prompt: &str,
        format: &serde_json::Value,
    ) -> Result<String, AppError>;
}

pub mod ollama_llm;
