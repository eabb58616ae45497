use axum::Json;
use axum::extract::{DefaultBodyLimit, Multipart};
use axum::http::{HeaderValue, StatusCode};
use axum::routing::post;
use axum::{Router, extract::State, routing::get};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::error::AppError;
use crate::extract::{DocumentKind, TEXT_MIME};
use crate::models::*;
use crate::parser;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.allowed_origins);
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/parse-syllabus", post(parse_syllabus))
        .route("/api/parse-text", post(parse_text))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Credentialed CORS for the configured origins; methods and headers are mirrored.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) if origin != "*" => Some(value),
            _ => {
                warn!("ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

async fn root() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "online".to_string(),
        message: "Syllabus Parser API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

async fn health() -> StatusCode {
    StatusCode::OK
}

struct Upload {
    file_name: Option<String>,
    content_type: Option<String>,
    bytes: Vec<u8>,
}

async fn parse_syllabus(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ParseResponse>, AppError> {
    let mut upload: Option<Upload> = None;
    // The upload form also sends the browser's MIME guess as a separate part.
    let mut declared_type: Option<String> = None;

    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field
                    .content_type()
                    .filter(|ct| !ct.is_empty())
                    .map(str::to_string);
                let bytes = field.bytes().await?.to_vec();
                upload = Some(Upload {
                    file_name,
                    content_type,
                    bytes,
                });
            }
            "file_type" => {
                let value = field.text().await?;
                if !value.trim().is_empty() {
                    declared_type = Some(value.trim().to_string());
                }
            }
            _ => {}
        }
    }

    let upload = upload.ok_or(AppError::MissingFile)?;
    let content_type = upload
        .content_type
        .or(declared_type)
        .unwrap_or_default();

    let kind = DocumentKind::from_content_type(&content_type)
        .map_err(|_| AppError::UnsupportedFileType(content_type.clone()))?;

    info!(
        "Processing file: {} ({})",
        upload.file_name.as_deref().unwrap_or("<unnamed>"),
        kind
    );

    let text = state.extractor.extract(&upload.bytes, kind.mime()).await?;
    let record = parse_checked(&text)?;

    info!("Successfully parsed syllabus: {}", record.course_name);
    Ok(Json(ParseResponse::success(
        record,
        upload.file_name,
        kind.mime().to_string(),
    )))
}

async fn parse_text(Json(req): Json<ParseTextRequest>) -> Result<Json<ParseResponse>, AppError> {
    let record = parse_checked(&req.text)?;

    info!("Successfully parsed syllabus text: {}", record.course_name);
    Ok(Json(ParseResponse::success(
        record,
        None,
        TEXT_MIME.to_string(),
    )))
}

/// Blank text is rejected before parsing; the parsed record must pass validation.
fn parse_checked(text: &str) -> Result<SyllabusRecord, AppError> {
    if text.trim().is_empty() {
        return Err(AppError::EmptyExtraction);
    }

    let record = parser::parse(text);
    if !parser::validate_record(&record) {
        return Err(AppError::InvalidStructure);
    }

    Ok(record)
}
