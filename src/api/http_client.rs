use reqwest::{RequestBuilder, Response, StatusCode};

use super::response::{ApiResponse, RemoteFailure};
use crate::error::Result;

/// Sends the request and normalizes whatever comes back.
pub(super) async fn execute(request: RequestBuilder) -> Result<ApiResponse> {
    let response = request.send().await?;
    normalize(response).await
}

/// Only an HTTP 200 counts as success, and its body must be JSON.
/// Anything else becomes a failure carrying the status, reason and body.
pub(super) async fn normalize(response: Response) -> Result<ApiResponse> {
    if response.status() != StatusCode::OK {
        return Ok(ApiResponse::Failure(into_failure(response).await?));
    }

    // A 200 with an unparseable body means the remote contract is broken,
    // so that propagates rather than becoming a failure.
    let body = response.bytes().await?;
    let payload = serde_json::from_slice(&body)?;
    Ok(ApiResponse::Success(payload))
}

/// Consumes a non-200 response, emitting exactly one diagnostic for it.
pub(super) async fn into_failure(response: Response) -> Result<RemoteFailure> {
    let status = response.status();
    let failure = RemoteFailure {
        status: status.as_u16(),
        reason: status.canonical_reason().unwrap_or_default().to_string(),
        body: response.text().await?,
    };

    tracing::error!(
        status = failure.status,
        reason = %failure.reason,
        body = %failure.body,
        "request to Telegraph failed"
    );
    Ok(failure)
}
