//! HTTP server assembly for Campus: configuration and the middleware stack
//! wrapped around [`campus_api::api_router`].

use std::path::PathBuf;

use anyhow::Context as _;
use axum::{
  Router,
  extract::DefaultBodyLimit,
  http::{HeaderValue, Method},
};
use campus_api::AppState;
use campus_core::store::CampusStore;
use serde::Deserialize;
use tower_http::{
  cors::{AllowHeaders, AllowOrigin, CorsLayer},
  trace::TraceLayer,
};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `CAMPUS_*` environment variables. Every field has a default.
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
  pub host:             String,
  pub port:             u16,
  pub database_path:    PathBuf,
  /// Origins allowed to make credentialed cross-origin requests.
  pub cors_origins:     Vec<String>,
  /// Upper bound on request bodies, sized for avatar uploads.
  pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:             "127.0.0.1".to_string(),
      port:             3001,
      database_path:    PathBuf::from("campus.db"),
      cors_origins:     vec![
        "http://localhost:9002".to_string(),
        "http://localhost:3000".to_string(),
      ],
      max_upload_bytes: 10 * 1024 * 1024,
    }
  }
}

// ─── Middleware ───────────────────────────────────────────────────────────────

fn cors_layer(origins: &[String]) -> anyhow::Result<CorsLayer> {
  let allow_origin = if origins.iter().any(|o| o == "*") {
    tracing::warn!("CORS configured with \"*\"; reflecting every request origin");
    AllowOrigin::mirror_request()
  } else {
    let origins = origins
      .iter()
      .map(|o| {
        HeaderValue::from_str(o).with_context(|| format!("invalid CORS origin {o:?}"))
      })
      .collect::<anyhow::Result<Vec<_>>>()?;
    AllowOrigin::list(origins)
  };

  Ok(
    CorsLayer::new()
      .allow_origin(allow_origin)
      .allow_credentials(true)
      .allow_headers(AllowHeaders::mirror_request())
      .allow_methods([
        Method::GET,
        Method::HEAD,
        Method::PUT,
        Method::PATCH,
        Method::POST,
        Method::DELETE,
      ]),
  )
}

/// The API router with body-limit, CORS and tracing layers applied.
pub fn app<S>(state: AppState<S>, config: &ServerConfig) -> anyhow::Result<Router>
where
  S: CampusStore + 'static,
{
  Ok(
    campus_api::api_router(state)
      .layer(DefaultBodyLimit::max(config.max_upload_bytes))
      .layer(cors_layer(&config.cors_origins)?)
      .layer(TraceLayer::new_for_http()),
  )
}
