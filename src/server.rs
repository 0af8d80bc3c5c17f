//! HTTP surface: `POST /endpoint` takes `{"day", "month"}` and answers with the
//! date page's events. Fetch failures come back as 502 so callers can tell them
//! apart from a date with no events.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::calendar::CalendarDate;
use crate::fetcher::{self, HttpFetcher, PageSource};
use crate::parser::EventCollection;
use crate::settings::Settings;

pub struct AppState<S> {
    source: Arc<S>,
    base_url: Arc<str>,
}

impl<S> AppState<S> {
    pub fn new(source: S, base_url: &str) -> Self {
        Self {
            source: Arc::new(source),
            base_url: Arc::from(base_url),
        }
    }
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            base_url: Arc::clone(&self.base_url),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DateResponse {
    pub message: &'static str,
    pub date: String,
    pub date_data: CalendarDate,
    pub scraped_data: EventCollection,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn error_response(status: StatusCode, error: impl Into<String>) -> Response {
    (status, Json(ErrorBody { error: error.into() })).into_response()
}

pub fn router<S>(state: AppState<S>) -> Router
where
    S: PageSource + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(health))
        .route("/endpoint", post(events_for_date::<S>))
        .layer(cors)
        .with_state(state)
}

pub async fn serve(settings: &Settings) -> Result<()> {
    let fetcher = HttpFetcher::new(settings)?;
    let app = router(AppState::new(fetcher, &settings.base_url));

    let listener = tokio::net::TcpListener::bind(&settings.addr)
        .await
        .with_context(|| format!("Failed to bind {}", settings.addr))?;
    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}

async fn events_for_date<S>(
    State(state): State<AppState<S>>,
    body: Result<Json<CalendarDate>, JsonRejection>,
) -> Response
where
    S: PageSource + Send + Sync + 'static,
{
    let Json(date) = match body {
        Ok(body) => body,
        Err(rejection) => {
            warn!("Rejected request body: {}", rejection.body_text());
            return error_response(StatusCode::BAD_REQUEST, "Cannot parse JSON");
        }
    };

    info!(day = date.day, month = date.month, "Date received");
    match fetcher::fetch_events(state.source.as_ref(), &state.base_url, date).await {
        Ok(events) => Json(DateResponse {
            message: "Fecha recibida",
            date: date.page_slug(),
            date_data: date,
            scraped_data: events,
        })
        .into_response(),
        Err(e) => {
            warn!("Fetch failed for {}: {}", date.page_slug(), e);
            error_response(StatusCode::BAD_GATEWAY, e.to_string())
        }
    }
}

// ── Tests ──
