use std::path::PathBuf;

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use thiserror::Error;

use crate::models::validation::ValidationError;

/// Integrity failures while loading the center catalog. Fatal at startup.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("failed to read reference dataset {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("reference dataset {path} is not valid")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("center {center_id} references unknown center type {center_type_id}")]
    UnknownCenterType { center_id: i32, center_type_id: i32 },
    #[error("center type {0} is listed more than once")]
    DuplicateCenterType(i32),
    #[error("center {0} is listed more than once")]
    DuplicateCenter(i32),
}

/// Request-level failures of the appointment and center endpoints.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("record not found")]
    NotFound,
    #[error("appointment failed validation with {} error(s)", .0.len())]
    Validation(Vec<ValidationError>),
}

impl ResponseError for ServiceError {
    fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::NotFound => StatusCode::NOT_FOUND,
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ServiceError::NotFound => HttpResponse::NotFound().finish(),
            ServiceError::Validation(errors) => HttpResponse::BadRequest().json(errors),
        }
    }
}
