use dqa_core::error::AppError;

use crate::llm::Llm;
use crate::prompts::{
    summarize_combined_prompt, summarize_document_prompt, synthesize_summaries_prompt,
};
use crate::schema::{
    decode_output, require_documents, summary_output_schema, validate_documents, DocumentInput,
    SummaryOutput,
};

/// Single-document primitive, also the map step of map-reduce mode.
pub fn summarize_document(llm: &dyn Llm, model: &str, content: &str) -> Result<String, AppError> {
    if content.trim().is_empty() {
        return Err(AppError::validation(
            "Document content to summarize cannot be empty",
        ));
    }
    let prompt = summarize_document_prompt(content);
    let raw = llm.generate(model, &prompt, &summary_output_schema())?;
    let output: SummaryOutput = decode_output(&raw)?;
    Ok(output.summary)
}

/// Combined-text mode: one prompt over the name-headed concatenation of all
/// selected documents.
pub fn summarize_documents(
    llm: &dyn Llm,
    model: &str,
    documents: &[DocumentInput],
) -> Result<String, AppError> {
    require_documents(documents)?;
    validate_documents(documents)?;

    let prompt = summarize_combined_prompt(documents);
    let raw = llm.generate(model, &prompt, &summary_output_schema())?;
    let output: SummaryOutput = decode_output(&raw)?;
    Ok(output.summary)
}

/// Map-reduce mode: one summary call per document, dispatched concurrently,
/// then exactly one synthesis call over the labeled per-document summaries.
///
/// The join is all-or-nothing: if any per-document call fails the whole
/// operation fails and the synthesis call never happens. No partial summary
/// is ever assembled from a subset of documents.
pub fn summarize_documents_map_reduce(
    llm: &dyn Llm,
    model: &str,
    documents: &[DocumentInput],
) -> Result<String, AppError> {
    require_documents(documents)?;
    validate_documents(documents)?;

    let results: Vec<Result<String, AppError>> = std::thread::scope(|scope| {
        let handles: Vec<_> = documents
            .iter()
            .map(|doc| scope.spawn(move || summarize_document(llm, model, &doc.content)))
            .collect();
        handles
            .into_iter()
            .map(|h| match h.join() {
                Ok(res) => res,
                Err(_) => Err(AppError::new(
                    "AI_MODEL_FAILED",
                    "Per-document summary task panicked",
                )),
            })
            .collect()
    });

    let mut entries: Vec<(String, String)> = Vec::with_capacity(documents.len());
    for (doc, result) in documents.iter().zip(results) {
        entries.push((doc.name.clone(), result?));
    }

    let prompt = synthesize_summaries_prompt(&entries);
    let raw = llm.generate(model, &prompt, &summary_output_schema())?;
    let output: SummaryOutput = decode_output(&raw)?;
    Ok(output.summary)
}
