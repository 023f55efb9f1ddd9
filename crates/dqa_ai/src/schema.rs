use dqa_core::domain::Document;
use dqa_core::error::AppError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::json;

/// Canonical minimum document record for QA and summarization.
///
/// One fixed shape; callers adapt. `name` doubles as the model-facing label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocumentInput {
    pub id: String,
    pub name: String,
    pub content: String,
}

impl DocumentInput {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            content: doc.content.clone(),
        }
    }
}

/// Full candidate record sent to the ranking prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RankCandidate {
    pub id: String,
    pub name: String,
    pub content: String,
    #[serde(rename = "type")]
    pub doc_type: String,
    pub size: u64,
    pub added: String,
}

impl RankCandidate {
    pub fn from_document(doc: &Document) -> Self {
        Self {
            id: doc.id.clone(),
            name: doc.name.clone(),
            content: doc.content.clone(),
            doc_type: doc.doc_type.clone(),
            size: doc.size,
            added: doc.added.clone(),
        }
    }
}

/// Citation exactly as the model emits it: keyed by document label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawCitation {
    pub document: String,
    pub passage: String,
    #[serde(rename = "citationNumber")]
    pub citation_number: u32,
}

/// Grounded QA output shape. A missing citations array is tolerated and
/// read as empty; any other deviation is a schema mismatch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaOutput {
    pub answer: String,
    #[serde(default)]
    pub citations: Vec<RawCitation>,
}

/// Ranking output shape. An empty array is a valid result, never an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankOutput {
    #[serde(rename = "relevantDocumentIds")]
    pub relevant_document_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummaryOutput {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WebAnswerOutput {
    pub answer: String,
}

pub fn qa_output_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "answer": { "type": "string" },
            "citations": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "document": { "type": "string" },
                        "passage": { "type": "string" },
                        "citationNumber": { "type": "integer" }
                    },
                    "required": ["document", "passage", "citationNumber"]
                }
            }
        },
        "required": ["answer", "citations"]
    })
}

pub fn rank_output_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "relevantDocumentIds": {
                "type": "array",
                "items": { "type": "string" }
            }
        },
        "required": ["relevantDocumentIds"]
    })
}

pub fn summary_output_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "summary": { "type": "string" }
        },
        "required": ["summary"]
    })
}

pub fn web_answer_schema() -> serde_json::Value {
    json!({
        "type": "object",
        "properties": {
            "answer": { "type": "string" }
        },
        "required": ["answer"]
    })
}

/// Reject an empty question/query before any model call.
pub fn validate_question(question: &str) -> Result<(), AppError> {
    if question.trim().is_empty() {
        return Err(AppError::validation("Question cannot be empty"));
    }
    Ok(())
}

/// Every document sent to a prompt must carry an id, a label, and content.
pub fn validate_documents(documents: &[DocumentInput]) -> Result<(), AppError> {
    for doc in documents {
        if doc.id.trim().is_empty() || doc.name.trim().is_empty() {
            return Err(
                AppError::validation("Each document needs an id and a name")
                    .with_details(format!("id={}; name={}", doc.id, doc.name)),
            );
        }
        if doc.content.trim().is_empty() {
            return Err(
                AppError::validation("Each document needs non-empty content")
                    .with_details(format!("id={}", doc.id)),
            );
        }
    }
    Ok(())
}

/// QA requires at least one document or an alternate evidence source.
pub fn require_evidence(
    documents: &[DocumentInput],
    web_evidence: Option<&str>,
) -> Result<(), AppError> {
    let has_web = web_evidence.map(|s| !s.trim().is_empty()).unwrap_or(false);
    if documents.is_empty() && !has_web {
        return Err(AppError::validation(
            "Select at least one document or enable web search",
        ));
    }
    Ok(())
}

pub fn require_documents(documents: &[DocumentInput]) -> Result<(), AppError> {
    if documents.is_empty() {
        return Err(AppError::validation(
            "Select at least one document to summarize",
        ));
    }
    Ok(())
}

/// Fail-closed decode of raw model text into the declared output shape.
///
/// Models sometimes wrap the JSON body in a markdown fence despite the
/// structured-output contract; one surrounding fence is stripped, nothing
/// else is repaired.
pub fn decode_output<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    let body = strip_code_fence(raw);
    serde_json::from_str(body).map_err(|e| {
        AppError::new(
            "AI_SCHEMA_MISMATCH",
            "Model output did not match the declared schema",
        )
        .with_details(format!("err={e}; output={}", snippet(body, 200)))
    })
}

fn strip_code_fence(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    let Some(inner) = rest.strip_suffix("```") else {
        return trimmed;
    };
    // Drop a language tag on the opening fence line (e.g. ```json).
    match inner.split_once('\n') {
        Some((first, body)) if !first.trim().is_empty() => body.trim(),
        _ => inner.trim(),
    }
}

fn snippet(text: &str, max_chars: usize) -> String {
    if text.len() <= max_chars {
        return text.to_string();
    }
    let mut cut = max_chars;
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    format!("{}...", &text[..cut])
}
