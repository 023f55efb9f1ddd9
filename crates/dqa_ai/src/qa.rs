use dqa_core::domain::Citation;
use dqa_core::error::AppError;
use serde::{Deserialize, Serialize};

use crate::citations::{reconcile, WEB_SEARCH_LABEL};
use crate::llm::Llm;
use crate::prompts::answer_question_prompt;
use crate::schema::{
    decode_output, qa_output_schema, require_evidence, validate_documents, validate_question,
    DocumentInput, QaOutput,
};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AskQuestionRequest {
    pub question: String,
    pub documents: Vec<DocumentInput>,
    /// Pre-synthesized web answer, injected as an extra pseudo-document
    /// labeled "Web Search".
    pub web_evidence: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct QaAnswer {
    pub answer: String,
    pub citations: Vec<Citation>,
}

/// Grounded QA: validate, prompt over the labeled documents, one structured
/// model call, fail-closed decode, then citation reconciliation.
///
/// The passage-is-a-verbatim-substring property is a model-obeyed contract;
/// it is not re-verified here, and consumers must tolerate passages that do
/// not match the source text exactly.
pub fn answer_question(
    llm: &dyn Llm,
    model: &str,
    req: AskQuestionRequest,
) -> Result<QaAnswer, AppError> {
    validate_question(&req.question)?;
    validate_documents(&req.documents)?;
    require_evidence(&req.documents, req.web_evidence.as_deref())?;

    let mut sent = req.documents;
    if let Some(web) = req.web_evidence.as_deref() {
        if !web.trim().is_empty() {
            sent.push(DocumentInput {
                id: crate::citations::WEB_SEARCH_ID.to_string(),
                name: WEB_SEARCH_LABEL.to_string(),
                content: web.to_string(),
            });
        }
    }

    let prompt = answer_question_prompt(&req.question, &sent);
    let raw = llm.generate(model, &prompt, &qa_output_schema())?;
    let output: QaOutput = decode_output(&raw)?;

    Ok(QaAnswer {
        answer: output.answer,
        citations: reconcile(output.citations, &sent),
    })
}
