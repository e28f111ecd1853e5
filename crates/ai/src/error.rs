use thiserror::Error;

/// Failure of the text-generation collaborator.
///
/// Never escapes [`crate::StockCostAnalyst::analyze`]; it exists so backends
/// can report what went wrong to the log.
#[derive(Debug, Error)]
pub enum AiError {
    #[error("text generation is not configured: {0}")]
    NotConfigured(String),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error("failed to serialize snapshot: {0}")]
    Serialization(#[from] serde_json::Error),
}
