//! HTTP server.
//!
//! Every page request passes through `resolve_locale` before any handler
//! runs. The middleware either answers directly (redirect / not found) or
//! binds the validated locale to the request as a `ResolvedPath` extension,
//! which the page handler reads. There is no other source of locale.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Request, State};
use axum::http::{StatusCode, Uri};
use axum::middleware::{self, Next};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::i18n::{CatalogValidator, Catalogs, Locale, ResolutionMetrics};
use crate::routing::{LinkBuilder, LocaleResolver, Resolution, ResolvedPath, RouteTable};
use crate::site::{self, PageContext};

/// Shared, read-only server state (plus atomic counters).
pub struct AppState {
    pub resolver: LocaleResolver,
    pub links: LinkBuilder,
    pub catalogs: Catalogs,
    pub metrics: ResolutionMetrics,
}

impl AppState {
    pub fn new(config: &Config, catalogs: Catalogs) -> Self {
        Self {
            resolver: LocaleResolver::new(config.base_path.clone()),
            links: LinkBuilder::new(config.base_path.clone(), RouteTable::standard()),
            catalogs,
            metrics: ResolutionMetrics::new(),
        }
    }

    /// Load every catalog from `config.messages_dir` and build the state.
    ///
    /// A missing or malformed catalog is returned as an error; callers treat
    /// it as fatal. Inconsistencies between catalogs are only logged.
    pub async fn load(config: &Config) -> Result<Self> {
        let catalogs = Catalogs::load_all(&config.messages_dir)
            .await
            .with_context(|| {
                format!(
                    "Failed to load message catalogs from {}",
                    config.messages_dir.display()
                )
            })?;

        for (locale, report) in CatalogValidator::validate_all(&catalogs) {
            for error in &report.errors {
                warn!(%locale, "{}", error);
            }
            for warning in &report.warnings {
                debug!(%locale, "{}", warning);
            }
        }

        info!(
            "Loaded message catalogs for {} locales (default: {})",
            catalogs.iter().count(),
            Locale::default_locale()
        );

        Ok(Self::new(config, catalogs))
    }
}

/// Build the application router.
pub fn router(state: Arc<AppState>) -> Router {
    let pages = Router::new()
        .fallback(get(serve_page))
        .layer(middleware::from_fn_with_state(state.clone(), resolve_locale))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(health))
        .with_state(state)
        .fallback_service(pages)
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until Ctrl+C.
pub async fn serve(config: &Config, state: Arc<AppState>) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        "Listening on {} (base path: '{}')",
        addr,
        config.base_path
    );

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}

/// Locale resolution boundary: Unresolved → Resolved happens here, once.
async fn resolve_locale(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let path = request.uri().path().to_string();

    match state.resolver.resolve(&path) {
        Resolution::Resolved(resolved) => {
            state.metrics.record_resolved();
            request.extensions_mut().insert(resolved);
            next.run(request).await
        }
        Resolution::Redirect(target) => {
            state.metrics.record_redirect();
            let target = match request.uri().query() {
                Some(query) => format!("{}?{}", target, query),
                None => target,
            };
            debug!("Redirecting {} to {}", path, target);
            Redirect::temporary(&target).into_response()
        }
        Resolution::NotFound => {
            state.metrics.record_not_found();
            debug!("No supported locale in {}", path);
            not_found(&state, Locale::default_locale(), &path)
        }
    }
}

async fn serve_page(
    State(state): State<Arc<AppState>>,
    Extension(resolved): Extension<ResolvedPath>,
    uri: Uri,
) -> Response {
    let path = uri.path();

    match state.links.routes().match_path(&resolved.remainder) {
        Some(route) => {
            let ctx = PageContext::new(resolved.locale, path, &state.links, &state.catalogs);
            Html(site::render_page(route, &ctx)).into_response()
        }
        None => {
            debug!("No route for {} under '{}'", resolved.remainder, resolved.locale);
            not_found(&state, resolved.locale, path)
        }
    }
}

fn not_found(state: &AppState, locale: Locale, path: &str) -> Response {
    let ctx = PageContext::new(locale, path, &state.links, &state.catalogs);
    (StatusCode::NOT_FOUND, Html(site::render_not_found(&ctx))).into_response()
}

async fn health(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let locales: Vec<_> = Locale::all().iter().map(Locale::code).collect();

    Json(json!({
        "status": "ok",
        "locales": locales,
        "default_locale": Locale::default_locale().code(),
        "base_path": state.links.base_path().as_str(),
        "resolutions": state.metrics.report(),
    }))
}
