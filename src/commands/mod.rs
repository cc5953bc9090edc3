//! Command implementations for the explore-host CLI.
//!
//! Each command returns a result type implementing [`CommandResult`] so
//! `main` can print it as JSON (default) or human-readable text.

use serde::Serialize;
use std::path::PathBuf;

use crate::Result;
use crate::assets::{ScriptInjector, ScriptRef};
use crate::config::{PageEntry, Resolved, ResolvedSite};
use crate::shell::render_page;
use crate::site::{self, BuildReport};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait CommandResult {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json_of<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| format!(r#"{{"error": "{}"}}"#, e))
}

// === render ===

/// A rendered page document
#[derive(Debug, Serialize)]
pub struct RenderResult {
    pub path: String,
    pub title: String,
    pub html: String,
}

impl CommandResult for RenderResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    /// Raw HTML, so `-H render > page.html` produces a usable file
    fn to_human(&self) -> String {
        self.html.trim_end().to_string()
    }
}

/// Render one configured page (by path or route).
pub fn render(site: &ResolvedSite, page: &str) -> Result<RenderResult> {
    let entry = site.find_page(page)?;
    let doc = render_page(&entry.page_config());
    Ok(RenderResult {
        path: entry.path.clone(),
        title: entry.title.clone(),
        html: doc.to_html(),
    })
}

// === pages ===

#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub path: String,
    pub route: String,
    pub title: String,
    pub show_instructions: bool,
}

#[derive(Debug, Serialize)]
pub struct PagesResult {
    pub count: usize,
    pub pages: Vec<PageSummary>,
}

impl CommandResult for PagesResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        let mut lines = vec![format!("{} page(s):", self.count)];
        for page in &self.pages {
            let instructions = if page.show_instructions {
                "instructions"
            } else {
                "canvas only"
            };
            lines.push(format!(
                "  {} -> {} \"{}\" ({})",
                page.route, page.path, page.title, instructions
            ));
        }
        lines.join("\n")
    }
}

/// List configured pages.
pub fn pages(site: &ResolvedSite) -> PagesResult {
    let pages: Vec<PageSummary> = site
        .pages()
        .iter()
        .map(|entry: &PageEntry| PageSummary {
            path: entry.path.clone(),
            route: entry.route(),
            title: entry.title.clone(),
            show_instructions: entry.show_instructions,
        })
        .collect();
    PagesResult {
        count: pages.len(),
        pages,
    }
}

// === scripts ===

#[derive(Debug, Serialize)]
pub struct ScriptsResult {
    pub scripts: Vec<ScriptRef>,
}

impl CommandResult for ScriptsResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        self.scripts
            .iter()
            .enumerate()
            .map(|(i, s)| format!("{}. {} ({})", i + 1, s.src, s.mime))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// List the injected runtime scripts in declaration order.
pub fn scripts() -> ScriptsResult {
    ScriptsResult {
        scripts: ScriptInjector::new().post_body_scripts(),
    }
}

// === build ===

impl CommandResult for BuildReport {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        let mut lines = vec![format!(
            "Built {} page(s) into {}",
            self.pages.len(),
            self.out_dir.display()
        )];
        for page in &self.pages {
            lines.push(format!("  {} ({} bytes)", page.path, page.bytes));
        }
        if !self.copied_assets.is_empty() {
            lines.push(format!("Copied assets: {}", self.copied_assets.join(", ")));
        }
        if !self.missing_assets.is_empty() {
            lines.push(format!(
                "Warning: missing runtime scripts: {}",
                self.missing_assets.join(", ")
            ));
        }
        lines.join("\n")
    }
}

/// Build the static site.
pub fn build(site: &ResolvedSite) -> Result<BuildReport> {
    site::build_site(site)
}

// === config show ===

#[derive(Debug, Serialize)]
pub struct ConfigShowResult {
    pub config_file: Option<PathBuf>,
    pub out_dir: Resolved<PathBuf>,
    pub wasm_dir: Option<Resolved<PathBuf>>,
    pub pages: Resolved<Vec<PageEntry>>,
}

impl CommandResult for ConfigShowResult {
    fn to_json(&self) -> String {
        json_of(self)
    }

    fn to_human(&self) -> String {
        let config_file = self
            .config_file
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "(none)".to_string());
        let wasm_dir = self
            .wasm_dir
            .as_ref()
            .map(|r| format!("{} [{}]", r.value.display(), r.source))
            .unwrap_or_else(|| "(not set)".to_string());
        let page_paths: Vec<&str> = self.pages.value.iter().map(|p| p.path.as_str()).collect();

        [
            format!("config file: {}", config_file),
            format!(
                "out_dir: {} [{}]",
                self.out_dir.value.display(),
                self.out_dir.source
            ),
            format!("wasm_dir: {}", wasm_dir),
            format!("pages: {} [{}]", page_paths.join(", "), self.pages.source),
        ]
        .join("\n")
    }
}

/// Show the resolved configuration and where each value came from.
pub fn config_show(site: &ResolvedSite) -> ConfigShowResult {
    ConfigShowResult {
        config_file: site.config_file.clone(),
        out_dir: site.out_dir.clone(),
        wasm_dir: site.wasm_dir.clone(),
        pages: site.pages.clone(),
    }
}
