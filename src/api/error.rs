use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::any::Any;
use thiserror::Error;

use crate::model::{FailureDetail, ResponseCode, ResponseEnvelope};
use crate::store::traits::QueryError;

/// Failure of a viewer request, rendered as a failure envelope
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed or missing query parameters, detected before any query runs
    #[error("{0}")]
    InvalidParams(String),

    #[error(transparent)]
    Query(#[from] QueryError),
}

impl ApiError {
    pub fn code(&self) -> ResponseCode {
        match self {
            ApiError::InvalidParams(_) => ResponseCode::InvalidParams,
            ApiError::Query(QueryError::RepoNotExist(_)) => ResponseCode::RepoNotExist,
            ApiError::Query(QueryError::InvalidArgument(_)) => ResponseCode::InvalidParams,
            ApiError::Query(QueryError::Storage(_) | QueryError::Internal(_)) => {
                ResponseCode::QueryFailed
            }
        }
    }

    /// Every failure is reported as 400, whatever its code
    pub fn status_code(&self) -> StatusCode {
        StatusCode::BAD_REQUEST
    }

    pub fn failure_detail(&self) -> FailureDetail {
        FailureDetail {
            code: self.code(),
            msg: self.to_string(),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidParams(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidParams(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = self.failure_detail();
        log::warn!("Request failed: code={} msg={}", detail.code, detail.msg);

        (self.status_code(), Json(ResponseEnvelope::failure(detail))).into_response()
    }
}

/// Turns a handler panic into a failure envelope for that request only
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let msg = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "Unknown panic while handling request".to_string()
    };
    log::error!("Handler panicked: {}", msg);

    ApiError::Query(QueryError::Internal(msg)).into_response()
}
