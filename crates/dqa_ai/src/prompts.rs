use crate::schema::{DocumentInput, RankCandidate};

/// Labeled block per document. The label is the plain document name; no
/// prefix convention, so citation labels can be matched back verbatim.
pub fn document_blocks(documents: &[DocumentInput]) -> String {
    let blocks: Vec<String> = documents
        .iter()
        .map(|d| format!("--- Document: {} ---\n\n{}", d.name, d.content))
        .collect();
    blocks.join("\n\n")
}

pub fn answer_question_prompt(question: &str, documents: &[DocumentInput]) -> String {
    let blocks = document_blocks(documents);
    format!(
        r#"You are answering a question strictly from the documents provided below.

Rules (non-negotiable):
1) Use ONLY the content of the provided documents. Do not invent facts.
2) Cite supporting passages inline by citation number, e.g. [1], in order of first use.
3) For every citation, record the exact document label it came from (the text after "Document:") and quote the supporting passage verbatim from that document.
4) If the documents do not answer the question, say so plainly and cite nothing.

Question:
{question}

Documents:
{blocks}

Output:
- Return a JSON object with "answer" (the full answer text) and "citations" (array of objects with "document", "passage", "citationNumber").
"#
    )
}

pub fn find_relevant_prompt(query: &str, candidates: &[RankCandidate]) -> String {
    let blocks: Vec<String> = candidates
        .iter()
        .map(|c| {
            format!(
                "---\nDocument ID: {}\nDocument Name: {}\nDocument Content:\n{}\n---",
                c.id, c.name, c.content
            )
        })
        .collect();
    let blocks = blocks.join("\n");
    format!(
        r#"You are an expert document analysis AI finding the documents most relevant to a query.

Rules (non-negotiable):
1) Judge each document against the query on its content alone.
2) Include only documents with a STRONG connection to the query; omit weakly related or unrelated ones.
3) Order the result from most relevant to least relevant.
4) If no document qualifies, return an empty array. An empty result is a valid answer.

Query:
{query}

Documents:
{blocks}

Output:
- Return a JSON object with "relevantDocumentIds": the IDs of the qualifying documents, in relevance order.
"#
    )
}

pub fn summarize_document_prompt(content: &str) -> String {
    format!(
        r#"Summarize the following document. The summary should be concise and capture the main points.

Document:
{content}

Output:
- Return a JSON object with "summary".
"#
    )
}

pub fn summarize_combined_prompt(documents: &[DocumentInput]) -> String {
    let blocks = document_blocks(documents);
    format!(
        r#"Provide a concise, structured summary that synthesizes the key information from the following documents. The summary should represent the combined insights from all provided texts.

Documents:
{blocks}

Output:
- Return a JSON object with "summary".
"#
    )
}

/// Reduce step over per-document summaries. Each entry keeps its source
/// document name so the synthesis can attribute insights.
pub fn synthesize_summaries_prompt(entries: &[(String, String)]) -> String {
    let blocks: Vec<String> = entries
        .iter()
        .map(|(name, summary)| format!("Document: {name}\nSummary: {summary}"))
        .collect();
    let blocks = blocks.join("\n\n");
    format!(
        r#"The following are summaries of individual documents. Synthesize them into one master summary that captures the combined insights, attributing notable points to their source document where that helps.

Summaries:
{blocks}

Output:
- Return a JSON object with "summary".
"#
    )
}

pub fn search_web_prompt(query: &str) -> String {
    format!(
        r#"You are an expert web search assistant answering a question from information found on the internet.

Rules (non-negotiable):
1) Search the web for the query and analyze the results.
2) Base the answer ONLY on what the search returns; do not use prior knowledge.
3) Synthesize the most reliable sources into a single, well-written answer in clear Markdown.

User Query: {query}

Output:
- Return a JSON object with "answer".
"#
    )
}
