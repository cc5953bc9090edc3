//! Development server for the host pages and the wasm runtime files

use axum::{
    Router,
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
};
use std::net::{SocketAddr, TcpListener};
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;

use crate::assets::WASM_DIR;
use crate::config::{PageEntry, ResolvedSite};
use crate::shell::render_page;
use crate::{Error, Result};

/// Port tried first when none is given
pub const DEFAULT_PORT: u16 = 8000;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Pages served, rendered on every request
    pub pages: Arc<Vec<PageEntry>>,
}

impl AppState {
    fn find(&self, path: &str) -> Option<&PageEntry> {
        self.pages
            .iter()
            .find(|page| page.route() == path || format!("/{}", page.path) == path)
    }
}

/// Directory the `/wasm` routes are served from: the configured wasm build
/// directory, or `<out_dir>/wasm` from a previous build.
pub fn asset_root(site: &ResolvedSite) -> PathBuf {
    site.wasm_dir()
        .map(|dir| dir.to_path_buf())
        .unwrap_or_else(|| site.out_dir().join(WASM_DIR))
}

/// Build the router for `site`.
pub fn router(site: &ResolvedSite) -> Router {
    let state = AppState {
        pages: Arc::new(site.pages().to_vec()),
    };

    Router::new()
        .nest_service(&format!("/{}", WASM_DIR), ServeDir::new(asset_root(site)))
        .fallback(serve_page)
        .with_state(state)
}

/// Render the page mounted at the request path
async fn serve_page(State(state): State<AppState>, uri: Uri) -> Response {
    match state.find(uri.path()) {
        Some(page) => {
            tracing::debug!("Serving {} as {}", uri.path(), page.path);
            Html(render_page(&page.page_config()).to_html()).into_response()
        }
        None => {
            tracing::debug!("No page at {}", uri.path());
            (StatusCode::NOT_FOUND, "404 Not Found").into_response()
        }
    }
}

/// Find the first port at or above `start` that can be bound on `host`.
pub fn find_available_port(host: &str, start: u16) -> Option<u16> {
    (start..=start.saturating_add(100)).find(|port| TcpListener::bind((host, *port)).is_ok())
}

/// Start the development server and run until the process is stopped
pub async fn start_server(site: &ResolvedSite, port: u16, host: &str) -> Result<()> {
    let app = router(site);

    let host_addr: std::net::IpAddr = host
        .parse()
        .map_err(|e| Error::Other(format!("Invalid host address '{}': {}", host, e)))?;
    let addr = SocketAddr::from((host_addr, port));

    tracing::info!(
        "Serving {} page(s), runtime files from {}",
        site.pages().len(),
        asset_root(site).display()
    );
    println!("Serving Explore at http://{}", addr);
    println!("Press Ctrl+C to stop");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
