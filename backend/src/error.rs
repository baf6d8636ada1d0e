use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use log::error;
use serde_json::json;
use thiserror::Error;

use crate::payment::PaymentError;
use crate::store::StoreError;

/// Every handler failure. Status codes are decided here and nowhere else.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Unauthenticated(&'static str),
    #[error("{0}")]
    Forbidden(&'static str),
    #[error("{0}")]
    InvalidInput(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Payment(#[from] PaymentError),
    #[error("{0}")]
    Internal(String),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Payment(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let body = match self {
            ApiError::Unauthenticated(_) | ApiError::Forbidden(_) => json!({
                "error": true,
                "message": self.to_string(),
                "code": status.as_u16(),
            }),
            _ => {
                if status.is_server_error() {
                    error!("Unhandled error: {}", self);
                }
                json!({ "error": true, "message": self.to_string() })
            }
        };
        HttpResponse::build(status).json(body)
    }
}
