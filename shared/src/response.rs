use crate::error::StudentError;
use crate::types::ErrorResponse;
use lambda_http::{http::StatusCode, Body, Error, Response};
use serde::Serialize;
use serde_json::Value;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "Content-Type,Authorization";
pub const ALLOW_METHODS: &str = "GET,POST,PUT,DELETE,OPTIONS";

/// JSON response carrying the CORS header set
pub fn json<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", ALLOW_ORIGIN)
        .header("Access-Control-Allow-Headers", ALLOW_HEADERS)
        .header("Access-Control-Allow-Methods", ALLOW_METHODS)
        .body(serde_json::to_string(body)?.into())
        .map_err(Box::new)?)
}

pub fn error(err: &StudentError) -> Result<Response<Body>, Error> {
    json(
        err.status_code(),
        &ErrorResponse {
            error: err.to_string(),
        },
    )
}

/// Answered before any business logic runs
pub fn preflight() -> Result<Response<Body>, Error> {
    json(StatusCode::OK, &Value::Object(Default::default()))
}

pub fn from_outcome(outcome: Result<Value, StudentError>) -> Result<Response<Body>, Error> {
    match outcome {
        Ok(body) => json(StatusCode::OK, &body),
        Err(err) => {
            if err.status_code().is_server_error() {
                tracing::error!("Request failed: {}", err);
            } else {
                tracing::warn!("Request rejected: {}", err);
            }
            error(&err)
        }
    }
}
