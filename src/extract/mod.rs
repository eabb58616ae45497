//! Binary document to text.
//!
//! The parser only ever sees a flat string; this module owns decoding of the
//! uploaded bytes according to their declared MIME type.

mod docx;

use std::fmt;

use async_trait::async_trait;
use thiserror::Error;
use tracing::error;

pub const PDF_MIME: &str = "application/pdf";
pub const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const TEXT_MIME: &str = "text/plain";

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Unsupported file type: {0}")]
    UnsupportedType(String),

    #[error("Failed to extract text from PDF: {0}")]
    Pdf(String),

    #[error("Failed to extract text from DOCX: {0}")]
    Docx(String),

    #[error("Text is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),

    #[error("Extraction task failed: {0}")]
    Task(String),
}

pub type ExtractResult<T> = Result<T, ExtractError>;

/// Document formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Resolve a declared content type, ignoring parameters like `charset`.
    pub fn from_content_type(content_type: &str) -> ExtractResult<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            PDF_MIME => Ok(Self::Pdf),
            DOCX_MIME => Ok(Self::Docx),
            TEXT_MIME => Ok(Self::PlainText),
            _ => Err(ExtractError::UnsupportedType(content_type.to_string())),
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
            Self::PlainText => TEXT_MIME,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Pdf => "pdf",
            Self::Docx => "docx",
            Self::PlainText => "txt",
        };
        f.write_str(name)
    }
}

#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, content: &[u8], content_type: &str) -> ExtractResult<String>;
}

/// Decodes PDF, DOCX and UTF-8 text on the blocking pool.
#[derive(Debug, Clone, Default)]
pub struct DocumentExtractor;

impl DocumentExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_sync(content: Vec<u8>, kind: DocumentKind) -> ExtractResult<String> {
        match kind {
            DocumentKind::Pdf => pdf_extract::extract_text_from_mem(&content)
                .map_err(|e| ExtractError::Pdf(e.to_string())),
            DocumentKind::Docx => docx::extract_text(&content),
            DocumentKind::PlainText => Ok(String::from_utf8(content)?),
        }
    }
}

#[async_trait]
impl TextExtractor for DocumentExtractor {
    async fn extract(&self, content: &[u8], content_type: &str) -> ExtractResult<String> {
        let kind = DocumentKind::from_content_type(content_type)?;
        let content = content.to_vec();

        tokio::task::spawn_blocking(move || Self::extract_sync(content, kind))
            .await
            .map_err(|e| {
                error!("{} extraction task failed: {}", kind, e);
                ExtractError::Task(e.to_string())
            })?
    }
}
