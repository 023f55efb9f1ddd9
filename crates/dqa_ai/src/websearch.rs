use dqa_core::error::AppError;

use crate::llm::Llm;
use crate::prompts::search_web_prompt;
use crate::schema::{decode_output, validate_question, web_answer_schema, WebAnswerOutput};

/// Synthesize a web-grounded answer for the query. The model service is
/// treated as having opaque web capability; the result is plain text the
/// caller can feed into `AskQuestionRequest.web_evidence`.
pub fn search_web(llm: &dyn Llm, model: &str, query: &str) -> Result<String, AppError> {
    validate_question(query)?;
    let prompt = search_web_prompt(query);
    let raw = llm.generate(model, &prompt, &web_answer_schema())?;
    let output: WebAnswerOutput = decode_output(&raw)?;
    Ok(output.answer)
}
