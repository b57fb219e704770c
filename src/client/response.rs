//! Status classification shared by every operation

use reqwest::Response;
use serde::de::DeserializeOwned;

use crate::error::{LiteAgentError, Result};
use crate::types::responses::ErrorResponse;

/// Pass through responses below 400; turn everything else into an error
///
/// # Errors
/// Returns the classified server error, or a transport error if the error
/// body cannot be read
pub(crate) async fn check_status(response: Response) -> Result<Response> {
    let status = response.status().as_u16();
    if status < 400 {
        return Ok(response);
    }

    let body = response.text().await?;
    Err(classify_error(status, &body))
}

/// Read a successful body as `T`
///
/// # Errors
/// Returns a classified error for statuses >= 400 and `Decode` if the body
/// does not match `T`
pub(crate) async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let response = check_status(response).await?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Build the error for a status >= 400 from its body
///
/// Bodies shaped like `{"error": ..., "details"?: ...}` keep the server's
/// message; anything else becomes `HTTP <status>: <body>`.
pub(crate) fn classify_error(status: u16, body: &str) -> LiteAgentError {
    match serde_json::from_str::<ErrorResponse>(body) {
        Ok(ErrorResponse { error, details }) => LiteAgentError::api(status, error, details),
        Err(_) => LiteAgentError::api(status, format!("HTTP {status}: {body}"), None),
    }
}
