use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json
};
use serde::{Serialize, Deserialize};
use thiserror::Error;

use crate::core::UserError;

/// Body of every non-2xx response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String
}

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request body is not a user record.
    #[error("{0}")]
    Decode(String),
    /// The `id` query parameter is absent or empty.
    #[error("query id is missing")]
    MissingId,
    #[error(transparent)]
    User(#[from] UserError),
    #[error("the request can't be process")]
    UnsupportedMethod(Method)
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl ServiceError {
    // Unknown ids are reported as 400, not 404; clients depend on it.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::UnsupportedMethod(_) => StatusCode::NOT_FOUND,
            Self::Decode(_) | Self::MissingId | Self::User(_) => StatusCode::BAD_REQUEST
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            Self::UnsupportedMethod(method) => log::warn!("rejected {} request", method),
            err => log::warn!("request failed: {}", err)
        }
        let body = ErrorResponse { message: self.to_string() };
        (status, Json(body)).into_response()
    }
}
