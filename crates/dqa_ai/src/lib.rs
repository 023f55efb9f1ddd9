pub mod citations;
pub mod llm;
pub mod ollama;
pub mod prompts;
pub mod qa;
pub mod rank;
pub mod schema;
pub mod summarize;
pub mod websearch;
