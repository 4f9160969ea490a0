//! Response classification shared by every operation.
//!
//! A transport outcome is turned into either the response to decode or one
//! of the three [`ApiError`] kinds. Decoding helpers map body parse failures
//! to [`ApiError::Decode`].

use serde::de::{DeserializeOwned, Error as _};

use crate::clients::{HttpResponse, TransportError};
use crate::rest::{ApiError, OperationSpec, Page, ServerError};

/// Classifies a transport outcome against the expected success status.
///
/// # Errors
///
/// - [`ApiError::Connection`] if the transport produced no response
/// - [`ApiError::Server`] if the status differs from `expected_status`
pub fn classify(
    outcome: Result<HttpResponse, TransportError>,
    spec: &OperationSpec,
    expected_status: u16,
) -> Result<HttpResponse, ApiError> {
    let response = outcome.map_err(|source| {
        tracing::warn!(
            "{} {} failed: unable to connect to server: {}",
            spec.resource,
            spec.kind,
            source
        );
        ApiError::Connection {
            resource: spec.resource,
            operation: spec.kind,
            source,
        }
    })?;

    if response.code == expected_status {
        return Ok(response);
    }

    let error = ServerError::from_response(response.code, &response.body, response.request_id());
    tracing::warn!(
        "{} {} rejected with status {} (expected {}): {}",
        spec.resource,
        spec.kind,
        response.code,
        expected_status,
        error.message
    );
    Err(ApiError::Server(error))
}

/// Decodes a single record from a classified response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body does not match `T`.
pub fn decode_record<T: DeserializeOwned>(
    spec: &OperationSpec,
    response: &HttpResponse,
) -> Result<T, ApiError> {
    let body = readable_body(spec, response)?;
    serde_json::from_str(body).map_err(|source| decode_error(spec, source))
}

/// Decodes a page of records from a classified response.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the page envelope or any record is malformed.
pub fn decode_page<T: DeserializeOwned>(
    spec: &OperationSpec,
    records_key: &str,
    response: &HttpResponse,
) -> Result<Page<T>, ApiError> {
    let body = readable_body(spec, response)?;
    Page::from_json(records_key, body).map_err(|source| decode_error(spec, source))
}

fn readable_body<'r>(
    spec: &OperationSpec,
    response: &'r HttpResponse,
) -> Result<&'r str, ApiError> {
    match &response.body_error {
        Some(reason) => Err(decode_error(
            spec,
            serde_json::Error::custom(format!("unreadable response body: {reason}")),
        )),
        None => Ok(&response.body),
    }
}

fn decode_error(spec: &OperationSpec, source: serde_json::Error) -> ApiError {
    tracing::warn!(
        "{} {} returned a body that failed to decode: {}",
        spec.resource,
        spec.kind,
        source
    );
    ApiError::Decode {
        resource: spec.resource,
        operation: spec.kind,
        source,
    }
}
