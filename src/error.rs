use crate::api::RemoteFailure;

/// Possible error types while working with Telegraph.
///
/// Non-200 responses are not errors: they come back as
/// [`ApiResponse::Failure`](crate::api::ApiResponse::Failure). Everything here
/// means an assumption about the remote contract (or the caller's input) broke.
#[derive(Debug, thiserror::Error)]
pub enum TelegraphError {
    /// The request could not be built, sent, or its body read.
    #[error("HTTP transport error: {0}")]
    Reqwest(#[from] reqwest::Error),

    /// A 200 response did not contain the JSON we expected.
    #[error("unable to parse response JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The image fetched for re-upload carried no `Content-Type` header.
    #[error("response from {url} has no Content-Type header")]
    MissingContentType { url: String },

    #[error("response from {url} has a non-ASCII Content-Type header")]
    InvalidContentType { url: String },

    #[error("invalid MIME type `{mime}`: {source}")]
    InvalidMimeType {
        mime: String,
        #[source]
        source: reqwest::Error,
    },

    /// Raised only when a caller converts a failed response into a `Result`.
    #[error("{0}")]
    Remote(RemoteFailure),

    /// The service answered 200 but reported `ok: false`.
    #[error("Telegraph reported an error: {0}")]
    Service(String),

    #[error("Telegraph response has no `result` field")]
    MissingResult,
}

pub type Result<T, E = TelegraphError> = std::result::Result<T, E>;
