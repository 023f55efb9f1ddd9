use crate::error::AppError;
use crate::library::{Library, NewDocument};

/// Deterministic demo corpus: two collections plus one unassigned document.
///
/// Small enough to feed whole documents into prompts, varied enough that QA,
/// ranking, and summarization all have something to work with.
pub fn seed_demo_library() -> Result<Library, AppError> {
    let mut library = Library::new();

    library.create_collection("col-1", "Q3 Business Review")?;
    library.create_collection("col-2", "Competitive Intel")?;

    let docs = [
        NewDocument {
            id: "doc-1".to_string(),
            name: "Project Phoenix - Q3 Report.pdf".to_string(),
            content: "Project Phoenix: Q3 Financial Report\n\n\
                Revenue grew 20% quarter over quarter to $2.4M, driven by the \
                launch of the Nova feature set, which attracted 45 new \
                enterprise clients. Net profit margin is 15%, above the 12% \
                forecast. Technical debt in the legacy Orion module caused a \
                5% rise in support tickets; a refactoring plan is scheduled \
                for Q4. The outlook projects 25% revenue growth next quarter."
                .to_string(),
            doc_type: "PDF".to_string(),
            size: 276_480,
            added: "2022-10-15T10:00:00Z".to_string(),
            collection_id: Some("col-1".to_string()),
        },
        NewDocument {
            id: "doc-2".to_string(),
            name: "Market_Analysis_AI_Trends.pdf".to_string(),
            content: "AI Trends Market Analysis\n\n\
                The AI market is projected to reach $1.5 trillion by 2027. \
                Demand for customized large language models is at an all-time \
                high; companies that can provide fine-tuned models will have \
                a significant competitive advantage. Regulatory bodies are \
                drafting legislation, so transparent and accountable AI \
                systems are paramount for long-term trust."
                .to_string(),
            doc_type: "PDF".to_string(),
            size: 512_000,
            added: "2023-01-20T14:30:00Z".to_string(),
            collection_id: Some("col-1".to_string()),
        },
        NewDocument {
            id: "doc-3".to_string(),
            name: "Competitor_Profile_InnovateCorp.txt".to_string(),
            content: "Competitor Profile: InnovateCorp\n\n\
                Founded 2020, headquartered in San Francisco. Strengths: \
                strong R&D with several machine-learning patents and a \
                highly rated user experience. Weaknesses: limited \
                international presence and a higher price point. They \
                recently acquired the analytics startup DataWeave and raised \
                $50M to expand marketing and sales in the mid-market segment."
                .to_string(),
            doc_type: "TXT".to_string(),
            size: 51_200,
            added: "2021-11-30T09:00:00Z".to_string(),
            collection_id: Some("col-2".to_string()),
        },
        NewDocument {
            id: "doc-4".to_string(),
            name: "Technical_Spec_Nova_Feature.txt".to_string(),
            content: "Technical Specification: Nova Feature Set\n\n\
                Microservices architecture written in Go, PostgreSQL with \
                TimescaleDB for time-series data, React frontend. The \
                ingestion service indexes unstructured data through a \
                RabbitMQ queue; the query engine is powered by a fine-tuned \
                embedding model for low-latency search. All services run in \
                Kubernetes with end-to-end encryption."
                .to_string(),
            doc_type: "TXT".to_string(),
            size: 25_600,
            added: "2023-05-10T18:00:00Z".to_string(),
            collection_id: None,
        },
    ];

    for doc in docs {
        library.add_document(doc)?;
    }

    Ok(library)
}
