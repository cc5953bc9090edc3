//! Local development server for the Explore host pages
//!
//! Serves every configured page at its route, rendered on request, and the
//! wasm runtime files under `/wasm/` straight from the wasm build directory,
//! so a fresh wasm build is picked up without rebuilding the site.

mod server;

pub use server::{AppState, DEFAULT_PORT, asset_root, find_available_port, router, start_server};
