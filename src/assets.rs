//! Script references that boot the external WebAssembly runtime
//!
//! The Explore client is a precompiled module loaded in two stages:
//!
//! 1. `wasm/explore.js` fetches and instantiates the binary
//! 2. `wasm/binding.js` exposes the JavaScript-callable surface over it
//!
//! The glue script relies on globals set up by the loader, so the two are
//! always declared in that order at the end of `<body>`. Paths are relative to
//! the built site root and must match what the wasm build step produces.

use serde::Serialize;

use crate::html::Element;

/// Runtime loader script (fetch + instantiate)
pub const LOADER_SCRIPT: &str = "wasm/explore.js";

/// Glue/bindings script, depends on the loader having executed
pub const GLUE_SCRIPT: &str = "wasm/binding.js";

/// Content type declared on every injected script
pub const SCRIPT_MIME: &str = "text/javascript";

/// Directory (relative to the site root) the scripts live in
pub const WASM_DIR: &str = "wasm";

/// A static script reference emitted into the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScriptRef {
    /// Path relative to the site root
    pub src: &'static str,
    /// Declared MIME type
    #[serde(rename = "type")]
    pub mime: &'static str,
}

impl ScriptRef {
    /// The loader reference
    pub const fn loader() -> Self {
        Self {
            src: LOADER_SCRIPT,
            mime: SCRIPT_MIME,
        }
    }

    /// The glue reference
    pub const fn glue() -> Self {
        Self {
            src: GLUE_SCRIPT,
            mime: SCRIPT_MIME,
        }
    }

    /// File name without the directory prefix
    pub fn file_name(&self) -> &'static str {
        self.src.rsplit('/').next().unwrap_or(self.src)
    }

    /// `<script src="..." type="..."></script>`
    pub fn to_element(&self) -> Element {
        Element::new("script")
            .attr("src", self.src)
            .attr("type", self.mime)
    }
}

/// Ordered list of elements appended to the end of `<body>`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PostBody {
    scripts: Vec<ScriptRef>,
}

impl PostBody {
    /// Empty list
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a script at the end
    pub fn push(&mut self, script: ScriptRef) {
        self.scripts.push(script);
    }

    /// Scripts in declaration order
    pub fn scripts(&self) -> &[ScriptRef] {
        &self.scripts
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// Script elements in declaration order
    pub fn to_elements(&self) -> Vec<Element> {
        self.scripts.iter().map(ScriptRef::to_element).collect()
    }
}

impl FromIterator<ScriptRef> for PostBody {
    fn from_iter<I: IntoIterator<Item = ScriptRef>>(iter: I) -> Self {
        Self {
            scripts: iter.into_iter().collect(),
        }
    }
}

/// Produces the script references every rendered page needs
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptInjector;

impl ScriptInjector {
    pub fn new() -> Self {
        Self
    }

    /// Loader first, glue second.
    pub fn post_body_scripts(&self) -> Vec<ScriptRef> {
        vec![ScriptRef::loader(), ScriptRef::glue()]
    }

    /// Render hook: append both scripts to the end-of-body list.
    pub fn on_render_body(&self, body: &mut PostBody) {
        for script in self.post_body_scripts() {
            body.push(script);
        }
    }

    /// A fresh end-of-body list holding only the injected scripts
    pub fn post_body(&self) -> PostBody {
        self.post_body_scripts().into_iter().collect()
    }
}
