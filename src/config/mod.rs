//! Site configuration for explore-host.
//!
//! ## explore.toml - project settings
//!
//! Located in the project directory (or passed with `--config` /
//! `EXPLORE_CONFIG`). Contains:
//! - `out_dir` - where the built site is written (default `public`)
//! - `wasm_dir` - directory holding the wasm build output to copy into the site
//! - `[[pages]]` - pages to render, each with `path`, `title`, `show_instructions`
//!
//! ## Precedence
//!
//! CLI flag > environment variable > explore.toml > defaults
//!
//! Use the [`resolver`] module for unified precedence resolution.

pub mod resolver;
pub mod schema;

pub use resolver::{
    OUT_DIR_ENV, Resolved, ResolvedSite, SiteOverrides, ValueSource, WASM_DIR_ENV, resolve_site,
    resolve_site_with_env,
};
pub use schema::{
    CONFIG_FILE_NAME, DEFAULT_OUT_DIR, PageEntry, SiteConfig, default_pages, validate_page_path,
};
