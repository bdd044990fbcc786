use crate::extractor::{self, Error as ExtractError, FormatEntry, MediaSummary};
use crate::server::AppContext;
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;

pub fn api_routes() -> Router<AppContext> {
    Router::new()
        .route("/extract", get(extract))
        .route("/formats", get(formats))
        .route("/youtube", get(youtube))
}

/// Errors surfaced to API clients as `{"error": "<message>"}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// A required query parameter is missing or empty.
    #[error("{0}")]
    BadRequest(String),

    /// The extraction layer failed.
    #[error(transparent)]
    Extraction(#[from] ExtractError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message),
            ApiError::Extraction(e) if e.is_parse_error() => {
                // Parser internals stay server-side.
                tracing::error!("extraction parse failure: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not process media information".to_string(),
                )
            }
            ApiError::Extraction(e) => {
                tracing::error!("extraction failed: {}", e);
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Capability descriptor served at the root path. No external calls.
pub async fn index() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Linkextract API server is running",
        "endpoints": {
            "extract": "/api/extract?url=MEDIA_URL",
            "formats": "/api/formats?url=MEDIA_URL",
            "youtube": "/api/youtube?id=YOUTUBE_VIDEO_ID"
        }
    }))
}

#[derive(Deserialize)]
struct UrlQuery {
    url: Option<String>,
}

fn require_param(value: Option<String>, name: &str) -> Result<String, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| ApiError::BadRequest(format!("{} query parameter is required", name)))
}

async fn extract(
    State(ctx): State<AppContext>,
    Query(params): Query<UrlQuery>,
) -> Result<Json<MediaSummary>, ApiError> {
    let url = require_param(params.url, "url")?;
    tracing::info!("Extracting media info for URL: {}", url);

    let summary = extractor::extract_info(&ctx.config.tool.binary, &url, &[]).await?;
    Ok(Json(summary))
}

#[derive(Serialize)]
struct FormatsResponse {
    formats: Vec<FormatEntry>,
}

async fn formats(
    State(ctx): State<AppContext>,
    Query(params): Query<UrlQuery>,
) -> Result<Json<FormatsResponse>, ApiError> {
    let url = require_param(params.url, "url")?;
    tracing::info!("Listing formats for URL: {}", url);

    let formats = extractor::list_formats(&ctx.config.tool.binary, &url).await?;
    Ok(Json(FormatsResponse { formats }))
}

#[derive(Deserialize)]
struct YoutubeQuery {
    id: Option<String>,
}

/// Media summary augmented with YouTube-specific fields.
#[derive(Serialize)]
struct YoutubeSummary {
    #[serde(flatten)]
    summary: MediaSummary,
    video_id: String,
    platform: &'static str,
}

async fn youtube(
    State(ctx): State<AppContext>,
    Query(params): Query<YoutubeQuery>,
) -> Result<Json<YoutubeSummary>, ApiError> {
    let video_id = require_param(params.id, "id")?;
    tracing::info!("Extracting YouTube video: {}", video_id);

    let url = format!("https://www.youtube.com/watch?v={}", video_id);
    let summary =
        extractor::extract_info(&ctx.config.tool.binary, &url, extractor::YOUTUBE_ARGS).await?;

    Ok(Json(YoutubeSummary {
        summary,
        video_id,
        platform: "youtube",
    }))
}
