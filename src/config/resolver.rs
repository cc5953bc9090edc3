//! Unified site configuration resolution.
//!
//! Precedence (highest to lowest), tracked per value:
//! 1. CLI flags
//! 2. Environment variables (`EXPLORE_OUT_DIR`, `EXPLORE_WASM_DIR`)
//! 3. `explore.toml`
//! 4. Built-in defaults
//!
//! Relative paths from the environment, the config file, or the defaults are
//! anchored at the project directory. CLI paths are used as given.

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::schema::{CONFIG_FILE_NAME, DEFAULT_OUT_DIR, PageEntry, SiteConfig, default_pages};
use crate::{Error, Result};

/// Environment variable overriding the output directory
pub const OUT_DIR_ENV: &str = "EXPLORE_OUT_DIR";

/// Environment variable overriding the wasm artifact directory
pub const WASM_DIR_ENV: &str = "EXPLORE_WASM_DIR";

/// Source of a resolved configuration value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValueSource {
    /// Value from environment variable
    EnvVar(String),
    /// Value from the config file
    ConfigFile,
    /// Value from CLI flag
    CliFlag,
    /// Built-in default value
    Default,
}

impl std::fmt::Display for ValueSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueSource::EnvVar(name) => write!(f, "env:{}", name),
            ValueSource::ConfigFile => write!(f, "config"),
            ValueSource::CliFlag => write!(f, "cli"),
            ValueSource::Default => write!(f, "default"),
        }
    }
}

impl Serialize for ValueSource {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A resolved value with its source.
#[derive(Debug, Clone, Serialize)]
pub struct Resolved<T> {
    /// The resolved value
    pub value: T,
    /// Where the value came from
    pub source: ValueSource,
}

impl<T> Resolved<T> {
    /// Create a new resolved value.
    pub fn new(value: T, source: ValueSource) -> Self {
        Self { value, source }
    }
}

/// CLI overrides for site resolution.
#[derive(Debug, Clone, Default)]
pub struct SiteOverrides {
    /// Explicit config file (`--config`)
    pub config_path: Option<PathBuf>,
    /// Output directory override (`--out`)
    pub out_dir: Option<PathBuf>,
    /// Wasm artifact directory override (`--wasm-dir`)
    pub wasm_dir: Option<PathBuf>,
}

impl SiteOverrides {
    /// Create empty overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_out_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.out_dir = Some(dir.into());
        self
    }

    pub fn with_wasm_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.wasm_dir = Some(dir.into());
        self
    }
}

/// Fully resolved site configuration with source tracking.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedSite {
    /// Project directory all relative paths are anchored at
    pub project_dir: PathBuf,
    /// Config file that was loaded, if any
    pub config_file: Option<PathBuf>,
    /// Output directory
    pub out_dir: Resolved<PathBuf>,
    /// Wasm artifact directory, if configured
    pub wasm_dir: Option<Resolved<PathBuf>>,
    /// Pages to render
    pub pages: Resolved<Vec<PageEntry>>,
}

impl ResolvedSite {
    pub fn out_dir(&self) -> &Path {
        &self.out_dir.value
    }

    pub fn wasm_dir(&self) -> Option<&Path> {
        self.wasm_dir.as_ref().map(|r| r.value.as_path())
    }

    pub fn pages(&self) -> &[PageEntry] {
        &self.pages.value
    }

    /// Look up a page by output path (`index.html`) or route (`/`).
    pub fn find_page(&self, name: &str) -> Result<&PageEntry> {
        self.pages()
            .iter()
            .find(|p| p.path == name || p.route() == name)
            .ok_or_else(|| Error::PageNotFound(name.to_string()))
    }
}

/// Resolve the site configuration using the process environment.
pub fn resolve_site(project_dir: &Path, overrides: &SiteOverrides) -> Result<ResolvedSite> {
    resolve_site_with_env(project_dir, overrides, |key| std::env::var(key).ok())
}

/// Resolve the site configuration with an injectable environment lookup.
pub fn resolve_site_with_env<F>(
    project_dir: &Path,
    overrides: &SiteOverrides,
    env: F,
) -> Result<ResolvedSite>
where
    F: Fn(&str) -> Option<String>,
{
    let config_file = match &overrides.config_path {
        Some(path) if !path.exists() => {
            return Err(Error::InvalidConfig(format!(
                "config file not found: {}",
                path.display()
            )));
        }
        Some(path) => Some(path.clone()),
        None => {
            let candidate = project_dir.join(CONFIG_FILE_NAME);
            candidate.exists().then_some(candidate)
        }
    };

    let file_config = match &config_file {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            SiteConfig::load(path)?
        }
        None => SiteConfig::new(),
    };

    let anchor = |path: PathBuf| {
        if path.is_absolute() {
            path
        } else {
            project_dir.join(path)
        }
    };
    let from_env = |key: &str| env(key).filter(|v| !v.is_empty()).map(PathBuf::from);

    let out_dir = if let Some(dir) = &overrides.out_dir {
        Resolved::new(dir.clone(), ValueSource::CliFlag)
    } else if let Some(dir) = from_env(OUT_DIR_ENV) {
        Resolved::new(anchor(dir), ValueSource::EnvVar(OUT_DIR_ENV.to_string()))
    } else if let Some(dir) = file_config.out_dir.clone() {
        Resolved::new(anchor(dir), ValueSource::ConfigFile)
    } else {
        Resolved::new(anchor(PathBuf::from(DEFAULT_OUT_DIR)), ValueSource::Default)
    };

    let wasm_dir = if let Some(dir) = &overrides.wasm_dir {
        Some(Resolved::new(dir.clone(), ValueSource::CliFlag))
    } else if let Some(dir) = from_env(WASM_DIR_ENV) {
        Some(Resolved::new(
            anchor(dir),
            ValueSource::EnvVar(WASM_DIR_ENV.to_string()),
        ))
    } else {
        file_config
            .wasm_dir
            .clone()
            .map(|dir| Resolved::new(anchor(dir), ValueSource::ConfigFile))
    };

    let pages = match file_config.pages {
        Some(pages) => Resolved::new(pages, ValueSource::ConfigFile),
        None => Resolved::new(default_pages(), ValueSource::Default),
    };

    Ok(ResolvedSite {
        project_dir: project_dir.to_path_buf(),
        config_file,
        out_dir,
        wasm_dir,
        pages,
    })
}
