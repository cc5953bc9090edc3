//! Static site build.
//!
//! Renders every configured page into the output directory, copies the wasm
//! build output into `<out>/wasm/`, and writes `manifest.json` describing the
//! result. Missing runtime scripts are reported but never fail the build: the
//! page is still valid markup, it just stays inert in the browser.

use serde::Serialize;
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::assets::{ScriptInjector, ScriptRef, WASM_DIR};
use crate::config::ResolvedSite;
use crate::shell::render_page;
use crate::wasm::{AttachStatus, CanvasContract};

/// Manifest file written at the site root
pub const MANIFEST_FILE: &str = "manifest.json";

/// File extensions copied from the wasm build directory
const WASM_ARTIFACT_EXTENSIONS: &[&str] = &["js", "wasm"];

/// A page written by the build
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuiltPage {
    /// File name at the site root
    pub path: String,
    pub title: String,
    /// Hex SHA-256 of the written HTML
    pub sha256: String,
    pub bytes: usize,
    /// Canvas attachment point as found in the written page
    pub canvas: AttachStatus,
}

/// Outcome of a site build
#[derive(Debug, Clone, Serialize)]
pub struct BuildReport {
    pub out_dir: PathBuf,
    pub pages: Vec<BuiltPage>,
    /// Scripts every page references, in declaration order
    pub scripts: Vec<ScriptRef>,
    /// Files copied into `<out>/wasm/`, relative to that directory
    pub copied_assets: Vec<String>,
    /// Injected scripts with no matching file in `<out>/wasm/`
    pub missing_assets: Vec<String>,
}

impl BuildReport {
    /// Whether both runtime scripts are present in the output
    pub fn is_complete(&self) -> bool {
        self.missing_assets.is_empty()
    }
}

/// Manifest stored next to the pages
#[derive(Debug, Serialize)]
struct Manifest<'a> {
    generator: String,
    pages: &'a [BuiltPage],
    scripts: &'a [ScriptRef],
}

/// Hex-encoded SHA-256 digest
pub fn sha256_hex(bytes: &[u8]) -> String {
    Sha256::digest(bytes)
        .iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}

/// Build the site described by `site`.
pub fn build_site(site: &ResolvedSite) -> Result<BuildReport> {
    let out_dir = site.out_dir();
    tracing::info!("Building site into {}", out_dir.display());
    fs::create_dir_all(out_dir)?;

    let mut pages = Vec::with_capacity(site.pages().len());
    for entry in site.pages() {
        let document = render_page(&entry.page_config());
        let canvas = CanvasContract::default().check_tree(document.root());
        if !canvas.is_ready() {
            tracing::warn!("{}: {}", entry.path, canvas);
        }

        let html = document.to_html();
        let target = out_dir.join(&entry.path);
        fs::write(&target, &html)?;
        tracing::debug!("Wrote {} ({} bytes, {})", target.display(), html.len(), canvas);

        pages.push(BuiltPage {
            path: entry.path.clone(),
            title: entry.title.clone(),
            sha256: sha256_hex(html.as_bytes()),
            bytes: html.len(),
            canvas,
        });
    }

    let asset_dir = out_dir.join(WASM_DIR);
    let copied_assets = match site.wasm_dir() {
        Some(source) => copy_wasm_artifacts(source, &asset_dir)?,
        None => Vec::new(),
    };

    let scripts = ScriptInjector::new().post_body_scripts();
    let missing_assets = missing_scripts(out_dir, &scripts);
    for missing in &missing_assets {
        tracing::warn!(
            "Runtime script {} not found in build output; pages will load without the game",
            missing
        );
    }

    let manifest = Manifest {
        generator: generator(),
        pages: &pages,
        scripts: &scripts,
    };
    fs::write(
        out_dir.join(MANIFEST_FILE),
        serde_json::to_string_pretty(&manifest)?,
    )?;

    tracing::info!(
        "Built {} page(s), copied {} asset(s)",
        pages.len(),
        copied_assets.len()
    );

    Ok(BuildReport {
        out_dir: out_dir.to_path_buf(),
        pages,
        scripts,
        copied_assets,
        missing_assets,
    })
}

/// Copy `*.js` and `*.wasm` files (top level only) from `source` into `dest`.
///
/// Returns the copied file names, sorted.
pub fn copy_wasm_artifacts(source: &Path, dest: &Path) -> Result<Vec<String>> {
    if !source.is_dir() {
        tracing::warn!("Wasm directory {} does not exist", source.display());
        return Ok(Vec::new());
    }
    fs::create_dir_all(dest)?;

    let mut copied = Vec::new();
    for entry in fs::read_dir(source)? {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() || !is_wasm_artifact(&path) {
            continue;
        }
        let name = entry.file_name().to_string_lossy().to_string();
        fs::copy(&path, dest.join(&name))?;
        tracing::debug!("Copied {}", name);
        copied.push(name);
    }
    copied.sort();
    Ok(copied)
}

fn is_wasm_artifact(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| WASM_ARTIFACT_EXTENSIONS.contains(&ext))
}

/// Script paths (site-relative) with no file under `out_dir`
fn missing_scripts(out_dir: &Path, scripts: &[ScriptRef]) -> Vec<String> {
    scripts
        .iter()
        .filter(|script| !out_dir.join(script.src).is_file())
        .map(|script| script.src.to_string())
        .collect()
}

fn generator() -> String {
    format!(
        "explore-host {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("EXPLORE_GIT_COMMIT")
    )
}
