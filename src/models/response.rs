//! Success envelope shared by all JSON endpoints.

use axum::http::StatusCode;
use serde::Serialize;

/// `{ "statusCode": 200, "data": ... }`
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseDto<T> {
    pub status_code: u16,
    pub data: T,
}

impl<T> ResponseDto<T> {
    pub fn ok(data: T) -> Self {
        Self {
            status_code: StatusCode::OK.as_u16(),
            data,
        }
    }
}
