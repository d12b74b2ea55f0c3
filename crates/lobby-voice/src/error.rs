use thiserror::Error;

/// Failure kinds of conversation-token issuance. One variant per outcome the
/// API surfaces, so handlers can map each deterministically to a response.
#[derive(Error, Debug)]
pub enum TokenError {
    /// The API key is absent from configuration. Checked before any request
    /// is attempted.
    #[error("ELEVENLABS_API_KEY not configured")]
    MissingApiKey,

    /// The upstream answered with a non-success status.
    #[error("upstream returned status {status}")]
    UpstreamStatus { status: u16, body: String },

    /// The upstream answered 2xx but no recognizable token field was present.
    #[error("token missing in upstream response")]
    MissingToken,

    /// Transport-level failure reaching the upstream: timeout, connection
    /// refused, DNS failure.
    #[error("network error contacting upstream: {0}")]
    Network(#[from] reqwest::Error),

    /// Anything else, reported with the underlying error's message.
    #[error("{0}")]
    Unexpected(String),
}
