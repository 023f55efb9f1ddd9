use dqa_core::domain::Document;
use dqa_core::error::AppError;

use crate::llm::Llm;
use crate::prompts::find_relevant_prompt;
use crate::schema::{decode_output, rank_output_schema, validate_question, RankCandidate, RankOutput};

/// "Smart search": ask the model which candidates have a strong connection
/// to the query, most-to-least relevant. Returns ids only; an empty result
/// means nothing qualified and is not an error.
pub fn find_relevant_documents(
    llm: &dyn Llm,
    model: &str,
    query: &str,
    candidates: &[RankCandidate],
) -> Result<Vec<String>, AppError> {
    validate_question(query)?;
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let prompt = find_relevant_prompt(query, candidates);
    let raw = llm.generate(model, &prompt, &rank_output_schema())?;
    let output: RankOutput = decode_output(&raw)?;
    Ok(output.relevant_document_ids)
}

/// Resolve ranked ids back to full records from the caller's canonical set.
///
/// The model's order is authoritative: output order equals input id order,
/// and no score recomputation or re-ranking happens here. Ids that match no
/// known document are dropped silently — ranking is advisory, and only
/// confirmed matches may surface.
pub fn resolve_ranked(ids: &[String], documents: &[Document]) -> Vec<Document> {
    ids.iter()
        .filter_map(|id| documents.iter().find(|d| &d.id == id).cloned())
        .collect()
}
