//! HTTP front end: `GET /health` and `POST /process`.
//!
//! `POST /process` takes a `multipart/form-data` body whose `file` field holds the CSV and
//! answers with a [`Report`]. Query parameters `top_column` and `limit` request the
//! `top_values` section. Every request loads its own dataset from its own upload file.

pub mod upload;

use std::sync::Arc;

use actix_multipart::{Multipart, MultipartError};
use actix_web::error::BlockingError;
use actix_web::http::StatusCode;
use actix_web::{get, post, web, App, HttpResponse, HttpServer, ResponseError};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::error::{ErrorKind, SummaryError};
use crate::ingestion::{LoadOptions, TracingObserver};
use crate::report::{Report, TopRequest};
use crate::summarizer::Summarizer;

/// Shared, read-only state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: ServiceConfig,
}

/// Errors surfaced by the HTTP handlers, rendered as `{"error": message}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("No file provided")]
    NoFile,

    #[error("Empty filename")]
    EmptyFilename,

    #[error("upload exceeds {limit} bytes")]
    TooLarge { limit: usize },

    #[error("invalid multipart body: {0}")]
    Multipart(String),

    #[error("invalid query string: {0}")]
    Query(String),

    #[error("upload storage failed: {0}")]
    Storage(#[from] std::io::Error),

    #[error(transparent)]
    Summary(#[from] SummaryError),

    #[error("worker pool unavailable")]
    Blocking,
}

impl From<MultipartError> for ApiError {
    fn from(e: MultipartError) -> Self {
        ApiError::Multipart(e.to_string())
    }
}

impl From<BlockingError> for ApiError {
    fn from(_: BlockingError) -> Self {
        ApiError::Blocking
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NoFile
            | ApiError::EmptyFilename
            | ApiError::Multipart(_)
            | ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::TooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Storage(_) | ApiError::Blocking => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Summary(e) => match e.kind() {
                ErrorKind::Io => StatusCode::INTERNAL_SERVER_ERROR,
                ErrorKind::Parse | ErrorKind::ValueFormat => StatusCode::UNPROCESSABLE_ENTITY,
                ErrorKind::MissingColumn => StatusCode::BAD_REQUEST,
            },
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}

#[derive(Debug, Deserialize)]
pub struct ProcessQuery {
    pub top_column: Option<String>,
    pub limit: Option<usize>,
}

#[get("/health")]
async fn health() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "status": "ok" }))
}

#[post("/process")]
async fn process(
    state: web::Data<AppState>,
    query: web::Query<ProcessQuery>,
    payload: Multipart,
) -> Result<HttpResponse, ApiError> {
    let config = &state.config;
    let upload = upload::save_upload(payload, &config.upload_dir, config.max_upload_bytes)
        .await
        .inspect_err(|e| warn!(error = %e, "rejected upload"))?;
    info!(
        file = upload.original_name(),
        bytes = upload.bytes(),
        "processing upload"
    );

    let ProcessQuery { top_column, limit } = query.into_inner();
    let top = top_column.map(|c| TopRequest::new(c, limit.unwrap_or(config.default_top_limit)));
    let path = upload.path().to_path_buf();

    let result = web::block(move || {
        let options = LoadOptions {
            observer: Some(Arc::new(TracingObserver)),
            ..LoadOptions::default()
        };
        let summarizer = Summarizer::from_path(&path, &options)?;
        Report::build(&summarizer, top.as_ref())
    })
    .await;
    drop(upload);

    let report = result?.inspect_err(|e| warn!(error = %e, "processing failed"))?;
    Ok(HttpResponse::Ok().json(report))
}

/// Register the routes on an actix [`App`].
pub fn routes(cfg: &mut web::ServiceConfig) {
    let query = web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::Query(err.to_string()).into());
    cfg.app_data(query).service(health).service(process);
}

pub fn app_state(config: ServiceConfig) -> web::Data<AppState> {
    web::Data::new(AppState { config })
}

/// Bind and serve until the server is stopped.
pub async fn run(config: ServiceConfig) -> std::io::Result<()> {
    std::fs::create_dir_all(&config.upload_dir)?;
    info!(
        host = %config.host,
        port = config.port,
        upload_dir = %config.upload_dir.display(),
        "starting http service"
    );

    let bind = (config.host.clone(), config.port);
    let state = app_state(config);
    HttpServer::new(move || App::new().app_data(state.clone()).configure(routes))
        .bind(bind)?
        .run()
        .await
}
