//! TOML schema for `explore.toml`.
//!
//! ```toml
//! out_dir = "public"
//! wasm_dir = "wasm-build"
//!
//! [[pages]]
//! path = "index.html"
//! title = "Explore"
//! show_instructions = true
//! ```
//!
//! Every key is optional. Unknown keys are rejected so typos surface as
//! errors instead of silently falling back to defaults.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::page::PageConfig;
use crate::{Error, Result};

/// Name of the config file looked up in the project directory
pub const CONFIG_FILE_NAME: &str = "explore.toml";

/// Output directory used when nothing else is configured
pub const DEFAULT_OUT_DIR: &str = "public";

/// A page entry: where it is written and how it is rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageEntry {
    /// File name at the site root, e.g. `index.html`
    pub path: String,
    /// Document title
    pub title: String,
    /// Show the instructions around the canvas
    #[serde(default)]
    pub show_instructions: bool,
}

impl PageEntry {
    pub fn new(path: impl Into<String>, config: PageConfig) -> Self {
        Self {
            path: path.into(),
            title: config.title,
            show_instructions: config.show_instructions,
        }
    }

    /// Template options for this entry
    pub fn page_config(&self) -> PageConfig {
        PageConfig::new(self.title.clone(), self.show_instructions)
    }

    /// URL path this page is served at (`index.html` is served at `/`)
    pub fn route(&self) -> String {
        match self.path.as_str() {
            "index.html" => "/".to_string(),
            path => format!("/{}", path),
        }
    }
}

/// The pages built when the config does not list any
pub fn default_pages() -> Vec<PageEntry> {
    vec![
        PageEntry::new("index.html", PageConfig::explore()),
        PageEntry::new("home.html", PageConfig::home()),
    ]
}

/// Contents of `explore.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Where the built site is written
    pub out_dir: Option<PathBuf>,

    /// Directory holding the wasm build output (`explore.js`, `binding.js`, `*.wasm`)
    pub wasm_dir: Option<PathBuf>,

    /// Pages to render; `None` means the default pages
    pub pages: Option<Vec<PageEntry>>,
}

impl SiteConfig {
    /// Create an empty config with no values set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate TOML text.
    pub fn parse(text: &str) -> Result<Self> {
        let config: SiteConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a config file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Serialize back to TOML.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Other(e.to_string()))
    }

    /// Check page entries for usable, unique output paths.
    pub fn validate(&self) -> Result<()> {
        let Some(pages) = &self.pages else {
            return Ok(());
        };

        if pages.is_empty() {
            return Err(Error::InvalidConfig(
                "pages must list at least one page".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for page in pages {
            validate_page_path(&page.path)?;
            if !seen.insert(page.path.as_str()) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate page path '{}'",
                    page.path
                )));
            }
        }
        Ok(())
    }
}

/// A page path must be a plain `.html` file name at the site root.
///
/// Pages reference the runtime scripts as `wasm/...` relative to their own
/// location, so a page in a subdirectory could never load them.
pub fn validate_page_path(path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(Error::InvalidConfig("page path is empty".to_string()));
    }
    if !path.ends_with(".html") {
        return Err(Error::InvalidConfig(format!(
            "page path '{}' must end with .html",
            path
        )));
    }
    if path.contains(['/', '\\']) || path.starts_with('.') {
        return Err(Error::InvalidConfig(format!(
            "page path '{}' must be a file name at the site root",
            path
        )));
    }
    Ok(())
}
