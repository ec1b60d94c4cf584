use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// The connectivity check against the provider failed.
    #[error("failed to connect to {provider}: {source}")]
    Connection {
        provider: &'static str,
        #[source]
        source: RequestFailure,
    },

    /// The completion request failed or returned an unusable body.
    #[error("generation failed: {0}")]
    Generation(#[source] RequestFailure),

    #[error("API key cannot be sent as an HTTP header")]
    InvalidApiKey,

    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
}

#[derive(Debug, thiserror::Error)]
pub enum RequestFailure {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    #[error("upstream returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("malformed response: {0}")]
    Malformed(String),
}
