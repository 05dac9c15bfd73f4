use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use std::fmt;

use super::types::UploadedSource;
use crate::error::{Result, TelegraphError};

/// The normalized outcome of every Telegraph operation.
///
/// A response is `Success` only when the server answered HTTP 200; the
/// service-level `ok` field is left untouched inside the payload.
/// Any other status becomes `Failure`.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiResponse<T = Value> {
    Success(T),
    Failure(RemoteFailure),
}

/// Details of a non-200 response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteFailure {
    /// The HTTP status code, e.g. `404`.
    pub status: u16,
    /// The canonical reason phrase for `status`, or empty if there is none.
    pub reason: String,
    /// The raw response body.
    pub body: String,
}

impl fmt::Display for RemoteFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "request failed with status code {}, reason: {}, error message: {}",
            self.status, self.reason, self.body
        )
    }
}

impl<T> ApiResponse<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiResponse::Success(_))
    }

    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Returns the payload, discarding any failure detail.
    pub fn success(self) -> Option<T> {
        match self {
            ApiResponse::Success(payload) => Some(payload),
            ApiResponse::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&RemoteFailure> {
        match self {
            ApiResponse::Success(_) => None,
            ApiResponse::Failure(failure) => Some(failure),
        }
    }

    /// Converts a failed response into [`TelegraphError::Remote`] so it can be
    /// propagated with `?`.
    pub fn into_result(self) -> Result<T> {
        match self {
            ApiResponse::Success(payload) => Ok(payload),
            ApiResponse::Failure(failure) => Err(TelegraphError::Remote(failure)),
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> ApiResponse<U> {
        match self {
            ApiResponse::Success(payload) => ApiResponse::Success(f(payload)),
            ApiResponse::Failure(failure) => ApiResponse::Failure(failure),
        }
    }
}

/// The envelope every `api.telegra.ph` method wraps its result in.
#[derive(Deserialize)]
struct Envelope<T> {
    ok: bool,
    result: Option<T>,
    error: Option<String>,
}

/// `telegra.ph/upload` answers with either a list of sources or an error object.
#[derive(Deserialize)]
#[serde(untagged)]
enum UploadOutcome {
    Uploaded(Vec<UploadedSource>),
    Rejected { error: String },
}

impl ApiResponse<Value> {
    /// Decodes an `{"ok": .., "result": .., "error": ..}` payload into `T`.
    ///
    /// Failures pass through untouched. A payload with `ok: false` becomes
    /// [`TelegraphError::Service`].
    pub fn decode<T: DeserializeOwned>(self) -> Result<ApiResponse<T>> {
        let payload = match self {
            ApiResponse::Success(payload) => payload,
            ApiResponse::Failure(failure) => return Ok(ApiResponse::Failure(failure)),
        };

        let envelope: Envelope<T> = serde_json::from_value(payload)?;
        if !envelope.ok {
            return Err(TelegraphError::Service(envelope.error.unwrap_or_default()));
        }

        match envelope.result {
            Some(result) => Ok(ApiResponse::Success(result)),
            None => Err(TelegraphError::MissingResult),
        }
    }

    /// Decodes the payload of [`upload_file`](super::TelegraphClient::upload_file).
    pub fn decode_uploads(self) -> Result<ApiResponse<Vec<UploadedSource>>> {
        let payload = match self {
            ApiResponse::Success(payload) => payload,
            ApiResponse::Failure(failure) => return Ok(ApiResponse::Failure(failure)),
        };

        match serde_json::from_value(payload)? {
            UploadOutcome::Uploaded(sources) => Ok(ApiResponse::Success(sources)),
            UploadOutcome::Rejected { error } => Err(TelegraphError::Service(error)),
        }
    }
}
