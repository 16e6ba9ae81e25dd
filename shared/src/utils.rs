use crate::core::ErrorResponse;
use lambda_http::http::StatusCode;
use lambda_http::{Error, Response};
use serde::Serialize;

pub fn json_response(
    status: &StatusCode,
    body: &impl Serialize,
) -> Result<Response<String>, Error> {
    let response = Response::builder()
        .status(status)
        .header("content-type", "application/json")
        .body(serde_json::to_string(&body).unwrap())
        .map_err(Box::new)?;

    Ok(response)
}

pub fn error_response(
    status: &StatusCode,
    message: &str,
    detail: &str,
) -> Result<Response<String>, Error> {
    json_response(
        status,
        &ErrorResponse {
            message: message.to_string(),
            detail: detail.to_string(),
        },
    )
}
