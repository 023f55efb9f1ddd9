use dqa_core::domain::Citation;

use crate::schema::{DocumentInput, RawCitation};

/// Label injected for web-search evidence; the matching sentinel id is
/// returned when the model cites it.
pub const WEB_SEARCH_LABEL: &str = "Web Search";
pub const WEB_SEARCH_ID: &str = "web-search";

/// Sentinel id for a citation label that matches no sent document. The
/// citation stays displayable; only its attribution is lost.
pub const UNKNOWN_DOC_ID: &str = "unknown-doc";

/// Map raw citations (keyed by document label) back to canonical ids.
///
/// Matching is exact, against the documents sent in THIS request only. When
/// two sent documents share a label the first match by list order wins.
/// Passage, numbering, and order are preserved verbatim — display numbering
/// must equal what the model emitted.
pub fn reconcile(raw: Vec<RawCitation>, sent: &[DocumentInput]) -> Vec<Citation> {
    raw.into_iter()
        .map(|citation| {
            let document_id = match sent.iter().find(|d| d.name == citation.document) {
                Some(doc) => doc.id.clone(),
                None if citation.document == WEB_SEARCH_LABEL => WEB_SEARCH_ID.to_string(),
                None => UNKNOWN_DOC_ID.to_string(),
            };
            Citation {
                document_id,
                passage: citation.passage,
                citation_number: citation.citation_number,
            }
        })
        .collect()
}
