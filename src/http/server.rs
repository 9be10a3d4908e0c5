//! HTTP server setup.
//!
//! # Responsibilities
//! - Create the Axum router (a single history fallback)
//! - Wire up middleware (tracing, timeout)
//! - Serve every in-app URL with the app shell for its view
//! - Stop on the shutdown signal
//!
//! # Design Decisions
//! - One fallback handler: history mode means any URL may be an app route
//! - The base never becomes an axum pattern; it is stripped by the history layer
//! - Unknown paths get 404 rather than the shell

use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::State,
    http::{Method, StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    Json, Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::AppConfig;
use crate::routing::{Route, Router as AppRouter};

/// In-app path of the route listing.
pub const ROUTES_PATH: &str = "/_routes";

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub router: Arc<AppRouter>,
}

/// HTTP host for the single-page app.
pub struct AppServer {
    router: Router,
    config: AppConfig,
}

impl AppServer {
    /// Create a server with the application router built from `config`.
    pub fn new(config: AppConfig) -> Self {
        let app_router = AppRouter::from_config(&config);
        Self::with_router(config, app_router)
    }

    /// Create a server around an existing router.
    pub fn with_router(config: AppConfig, app_router: AppRouter) -> Self {
        let state = AppState {
            router: Arc::new(app_router),
        };
        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    #[allow(deprecated)]
    fn build_router(config: &AppConfig, state: AppState) -> Router {
        Router::new()
            .fallback(app_shell)
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(TraceLayer::new_for_http())
    }

    /// The Axum router, for serving or in-process testing.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Serve on `listener` until `shutdown` fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            base = %self.config.base_url,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

fn list_routes(router: &AppRouter) -> Json<Vec<Route>> {
    Json(router.table().iter().cloned().collect())
}

async fn app_shell(State(state): State<AppState>, method: Method, uri: Uri) -> Response {
    if method != Method::GET && method != Method::HEAD {
        return StatusCode::METHOD_NOT_ALLOWED.into_response();
    }

    let url = uri
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path());

    let history = state.router.history();
    if history.is_under_base(uri.path()) && history.location(url).path == ROUTES_PATH {
        return list_routes(&state.router).into_response();
    }

    match state.router.resolve(url) {
        Some(resolved) => {
            let route = resolved.route;
            Html(render_shell(route, &resolved.href)).into_response()
        }
        None => {
            tracing::warn!(path = %uri.path(), "No route matched");
            (StatusCode::NOT_FOUND, "No matching route found").into_response()
        }
    }
}

fn render_shell(route: &Route, href: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><link rel=\"canonical\" href=\"{href}\"></head>\n\
         <body><div id=\"app\" data-route=\"{name}\" data-view=\"{view}\"></div></body>\n\
         </html>\n",
        href = href,
        name = route.name,
        view = route.view.component(),
    )
}
