use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

use crate::extract::ExtractError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid file type: {0}")]
    UnsupportedFileType(String),

    #[error("No file provided")]
    MissingFile,

    #[error("Malformed upload: {0}")]
    Multipart(#[from] axum::extract::multipart::MultipartError),

    #[error("Extraction error: {0}")]
    Extraction(#[from] ExtractError),

    #[error("Extracted text is empty")]
    EmptyExtraction,

    #[error("Parsed syllabus failed structural validation")]
    InvalidStructure,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name} is not valid: {value}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            AppError::UnsupportedFileType(_) | AppError::Extraction(ExtractError::UnsupportedType(_)) => (
                StatusCode::BAD_REQUEST,
                "Invalid file type. Please upload a PDF, Word document, or text file.".to_string(),
                None,
            ),
            AppError::MissingFile => (StatusCode::BAD_REQUEST, "No file provided.".to_string(), None),
            AppError::Multipart(e) => (
                e.status(),
                "Failed to read upload.".to_string(),
                Some(e.body_text()),
            ),
            AppError::Extraction(e) => {
                error!("text extraction failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Failed to extract text from file: {}", e),
                    None,
                )
            }
            AppError::EmptyExtraction => (
                StatusCode::BAD_REQUEST,
                "Extracted text is empty. Please check the file content.".to_string(),
                None,
            ),
            AppError::InvalidStructure => {
                error!("parsed syllabus failed structural validation");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to generate valid syllabus structure".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message,
            detail,
        });

        (status, body).into_response()
    }
}
