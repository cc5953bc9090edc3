//! Explore host - page shell and static site tooling for the Explore client.
//!
//! This library renders the page that hosts the externally-built Explore
//! WebAssembly binary: a fixed-size canvas the binary attaches to, plus the
//! two runtime scripts that boot it. Around that harness it provides the
//! `explore-host` CLI's static site build and development server.

pub mod assets;
pub mod html;
pub mod page;
pub mod shell;

#[cfg(not(target_arch = "wasm32"))]
pub mod cli;
#[cfg(not(target_arch = "wasm32"))]
pub mod commands;
#[cfg(not(target_arch = "wasm32"))]
pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod logging;
#[cfg(feature = "serve")]
pub mod serve;
#[cfg(not(target_arch = "wasm32"))]
pub mod site;
pub mod wasm;

pub use assets::{PostBody, ScriptInjector, ScriptRef};
pub use page::{HostPage, PageConfig};
pub use shell::{Document, PageShell, render_page};

/// Library-level error type for explore-host operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for explore-host operations.
pub type Result<T> = std::result::Result<T, Error>;
