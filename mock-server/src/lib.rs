//! Stand-in for `api-ssl.bitly.com` serving the v3 plain-text surface.
//!
//! Supports `GET /v3/shorten` and `GET /v3/expand` with `format=txt` only.
//! Short codes are minted per process and kept in memory; bodies end with a
//! single `\n` like the real service's txt responses.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Host the minted short URLs point at.
pub const SHORT_HOST: &str = "http://bit.ly";

pub type Links = Arc<RwLock<HashMap<String, String>>>;

#[derive(Clone)]
pub struct AppState {
    token: String,
    links: Links,
}

pub fn app(token: &str) -> Router {
    let state = AppState {
        token: token.to_string(),
        links: Arc::new(RwLock::new(HashMap::new())),
    };
    Router::new()
        .route("/v3/shorten", get(shorten))
        .route("/v3/expand", get(expand))
        .with_state(state)
}

pub async fn run(listener: TcpListener, token: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(token)).await
}

#[derive(Deserialize)]
pub struct ShortenParams {
    access_token: String,
    #[serde(rename = "longUrl")]
    long_url: String,
    format: Option<String>,
}

#[derive(Deserialize)]
pub struct ExpandParams {
    access_token: String,
    #[serde(rename = "shortUrl")]
    short_url: String,
    format: Option<String>,
}

async fn shorten(
    State(state): State<AppState>,
    Query(params): Query<ShortenParams>,
) -> Response {
    if let Some(rejection) = reject(&state, &params.access_token, params.format.as_deref()) {
        return rejection;
    }
    let mut code = Uuid::new_v4().simple().to_string();
    code.truncate(7);
    state
        .links
        .write()
        .await
        .insert(code.clone(), params.long_url);
    text(StatusCode::OK, format!("{SHORT_HOST}/{code}\n"))
}

async fn expand(
    State(state): State<AppState>,
    Query(params): Query<ExpandParams>,
) -> Response {
    if let Some(rejection) = reject(&state, &params.access_token, params.format.as_deref()) {
        return rejection;
    }
    let code = params.short_url.rsplit('/').next().unwrap_or("");
    match state.links.read().await.get(code) {
        Some(long_url) => text(StatusCode::OK, format!("{long_url}\n")),
        None => text(StatusCode::NOT_FOUND, "NOT_FOUND\n".to_string()),
    }
}

/// Shared validation for both endpoints: only `format=txt` is served, and
/// the access token must match the one the server was started with.
fn reject(state: &AppState, access_token: &str, format: Option<&str>) -> Option<Response> {
    if format != Some("txt") {
        return Some(text(StatusCode::BAD_REQUEST, "INVALID_ARG_FORMAT\n".to_string()));
    }
    if access_token != state.token {
        return Some(text(StatusCode::FORBIDDEN, "INVALID_ACCESS_TOKEN\n".to_string()));
    }
    None
}

fn text(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, "text/plain")], body).into_response()
}
