use thiserror::Error;

/// Why a call to the AI provider produced no usable answer.
#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("could not build HTTP client: {0}")]
    Client(String),

    #[error("request failed: {0}")]
    Request(String),

    #[error("provider returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("provider returned no text")]
    EmptyResponse,

    #[error("unexpected response shape: {0}")]
    Malformed(String),

    #[error("could not encode catalog: {0}")]
    Encode(#[from] serde_json::Error),
}
