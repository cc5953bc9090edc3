//! Canvas attachment contract between the host page and the wasm runtime
//!
//! The external binary finds its drawing surface with
//! `document.getElementById("canvas")` and assumes a 640×480 canvas. A
//! mismatch makes attachment fail silently, so this module describes the
//! contract once and offers a probe that checks a live document against it.
//!
//! # Modules
//!
//! - `bindings`: wasm-bindgen exports that run the probe in the browser
//!   (only with the `wasm` feature on `wasm32`)
//!
//! # Usage
//!
//! ```javascript
//! import init, { verify_attachment_point } from './explore_host.js';
//!
//! await init();
//! if (!verify_attachment_point()) {
//!     console.warn('Explore canvas missing or resized');
//! }
//! ```

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
mod bindings;

#[cfg(all(feature = "wasm", target_arch = "wasm32"))]
pub use bindings::*;

use serde::Serialize;

use crate::page::{CANVAS_HEIGHT, CANVAS_ID, CANVAS_WIDTH};

/// What the probe found under the contract's identifier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObservedElement {
    /// Lower-case tag name
    pub tag: String,
    pub width: u32,
    pub height: u32,
}

/// Result of checking a document against the contract
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AttachStatus {
    /// A canvas with the expected size is present
    Ready,
    /// Nothing carries the identifier
    Missing,
    /// The identifier belongs to a non-canvas element
    WrongElement { tag: String },
    /// The canvas exists but has a different size
    WrongSize { width: u32, height: u32 },
}

impl AttachStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, AttachStatus::Ready)
    }
}

impl std::fmt::Display for AttachStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AttachStatus::Ready => write!(f, "canvas ready"),
            AttachStatus::Missing => write!(f, "no element with id '{}'", CANVAS_ID),
            AttachStatus::WrongElement { tag } => {
                write!(f, "element '{}' is a <{}>, not a <canvas>", CANVAS_ID, tag)
            }
            AttachStatus::WrongSize { width, height } => write!(
                f,
                "canvas is {}x{}, expected {}x{}",
                width, height, CANVAS_WIDTH, CANVAS_HEIGHT
            ),
        }
    }
}

/// Identifier and size the compiled binary expects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CanvasContract {
    pub id: &'static str,
    pub width: u32,
    pub height: u32,
}

impl Default for CanvasContract {
    fn default() -> Self {
        Self {
            id: CANVAS_ID,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
        }
    }
}

impl CanvasContract {
    /// Check what was found under `self.id`.
    pub fn check(&self, observed: Option<&ObservedElement>) -> AttachStatus {
        match observed {
            None => AttachStatus::Missing,
            Some(el) if !el.tag.eq_ignore_ascii_case("canvas") => AttachStatus::WrongElement {
                tag: el.tag.to_ascii_lowercase(),
            },
            Some(el) if el.width != self.width || el.height != self.height => {
                AttachStatus::WrongSize {
                    width: el.width,
                    height: el.height,
                }
            }
            Some(_) => AttachStatus::Ready,
        }
    }

    /// Check a rendered element tree, e.g. a page before it is served.
    pub fn check_tree(&self, root: &crate::html::Element) -> AttachStatus {
        let observed = root.find_by_id(self.id).map(|el| ObservedElement {
            tag: el.tag().to_string(),
            width: parse_dimension(el.get_attr("width")),
            height: parse_dimension(el.get_attr("height")),
        });
        self.check(observed.as_ref())
    }
}

/// Missing or malformed dimensions read as 0
fn parse_dimension(value: Option<&str>) -> u32 {
    value.and_then(|v| v.trim().parse().ok()).unwrap_or(0)
}

/// Version information for the wasm module
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
