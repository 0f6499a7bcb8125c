use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use serde_json::json;
use tracing::error;

use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    pub company: Option<String>,
    #[serde(default, alias = "maxArticles")]
    pub max_articles: Option<usize>,
}

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "error": message }))).into_response()
}

pub async fn home() -> impl IntoResponse {
    Json(json!({ "message": "Welcome to the News Sentiment Analyzer API" }))
}

pub async fn analyze(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AnalyzeQuery>,
) -> Response {
    let company = match query.company.as_deref().map(str::trim) {
        Some(company) if !company.is_empty() => company.to_string(),
        _ => return error_response(StatusCode::BAD_REQUEST, "Company name is required"),
    };

    let max_articles = query
        .max_articles
        .unwrap_or(state.pipeline.config().max_articles);

    match state.pipeline.analyze(&company, max_articles).await {
        Ok(Some(report)) => Json(report).into_response(),
        Ok(None) => error_response(StatusCode::NOT_FOUND, "No articles found"),
        Err(e) => {
            error!("Analysis failed for '{}': {}", company, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Analysis failed")
        }
    }
}

pub async fn audio_summary(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AnalyzeQuery>,
) -> Response {
    let company = match query.company.as_deref().map(str::trim) {
        Some(company) if !company.is_empty() => company.to_string(),
        _ => return error_response(StatusCode::BAD_REQUEST, "Company name is required"),
    };

    let max_articles = query
        .max_articles
        .unwrap_or(state.pipeline.config().max_articles);

    match state.pipeline.analyze(&company, max_articles).await {
        Ok(Some(report)) if !report.audio.is_empty() => (
            [
                (header::CONTENT_TYPE, "audio/mp3".to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}_summary.mp3\"", company),
                ),
            ],
            report.audio,
        )
            .into_response(),
        Ok(_) => error_response(StatusCode::NOT_FOUND, "Audio summary not available"),
        Err(e) => {
            error!("Audio summary failed for '{}': {}", company, e);
            error_response(StatusCode::INTERNAL_SERVER_ERROR, "Audio summary failed")
        }
    }
}
