//! Host page template for the Explore client
//!
//! One parameterized template replaces the hand-copied page variants. A page
//! is described by [`PageConfig`] (title plus whether to show the play
//! instructions) and always contains exactly one [`canvas`](canvas_element)
//! with the identifier and size the compiled binary expects.
//!
//! All interactivity (movement, item keys) lives inside the external binary;
//! the key bindings listed here are display copy only.

use serde::{Deserialize, Serialize};

use crate::html::Element;

/// Identifier the external runtime uses to look up its drawing surface
pub const CANVAS_ID: &str = "canvas";

/// Canvas width in pixels
pub const CANVAS_WIDTH: u32 = 640;

/// Canvas height in pixels
pub const CANVAS_HEIGHT: u32 = 480;

/// Welcome line shown above the instructions
pub const WELCOME: &str = "Welcome to Explore, traveller!";

/// Movement hint
pub const MOVEMENT_HINT: &str = "Press the arrow keys to move your character.";

/// Note shown under the canvas
pub const FOOTER_NOTE: &str =
    "Explore is written in Rust and compiled into WebAssembly. This page is best viewed on desktop.";

/// Author profile link
pub const PROFILE_URL: &str = "https://github.com/smonfourny";

/// Profile link text
pub const PROFILE_TEXT: &str = "> Find me on GitHub";

/// A key handled by the external binary, listed for the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

/// Keys listed in the instructions, in display order
pub const KEY_BINDINGS: &[KeyBinding] = &[
    KeyBinding {
        key: "g",
        action: "Pick up item",
    },
    KeyBinding {
        key: "d",
        action: "Drop item",
    },
    KeyBinding {
        key: "i",
        action: "Open inventory",
    },
];

/// Full-viewport grid that centers the page content
const LAYOUT_CLASS: &str = "bg-gray-200 h-screen grid place-content-center";

/// Options recognized by the host page template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageConfig {
    /// Document title
    pub title: String,
    /// Render the welcome text, key list, and footer around the canvas
    #[serde(default)]
    pub show_instructions: bool,
}

impl PageConfig {
    pub fn new(title: impl Into<String>, show_instructions: bool) -> Self {
        Self {
            title: title.into(),
            show_instructions,
        }
    }

    /// The full game page: title "Explore" with instructions
    pub fn explore() -> Self {
        Self::new("Explore", true)
    }

    /// The minimal page: title "Home Page", canvas only
    pub fn home() -> Self {
        Self::new("Home Page", false)
    }
}

/// Stateless renderer for a configured host page
#[derive(Debug, Clone)]
pub struct HostPage {
    config: PageConfig,
}

impl HostPage {
    pub fn new(config: PageConfig) -> Self {
        Self { config }
    }

    pub fn title(&self) -> &str {
        &self.config.title
    }

    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    /// Render the `<main>` scaffold: one centered layout container holding
    /// the canvas and, when enabled, the instructions around it.
    ///
    /// Identical config always yields an identical tree.
    pub fn render(&self) -> Element {
        let mut layout = Element::new("div").class(LAYOUT_CLASS);

        if self.config.show_instructions {
            layout.push(
                Element::new("p")
                    .class("px-6 font-bold")
                    .child(WELCOME),
            );
            layout.push(
                Element::new("p")
                    .class("px-6 font-light mb-4")
                    .child(MOVEMENT_HINT),
            );
            layout.push(key_list());
        }

        layout.push(canvas_frame());

        if self.config.show_instructions {
            layout.push(
                Element::new("p")
                    .class("px-6 text-sm font-light")
                    .child(FOOTER_NOTE),
            );
            layout.push(
                Element::new("a")
                    .attr("href", PROFILE_URL)
                    .class("px-6 font-bold text-red-600")
                    .child(PROFILE_TEXT),
            );
        }

        Element::new("main").child(layout)
    }
}

/// The attachment point for the external binary
pub fn canvas_element() -> Element {
    Element::new("canvas")
        .id(CANVAS_ID)
        .attr("width", CANVAS_WIDTH)
        .attr("height", CANVAS_HEIGHT)
}

fn canvas_frame() -> Element {
    Element::new("div").class("p-6 flex justify-center").child(
        Element::new("div")
            .class("flex-shrink-0 shadow-2xl")
            .child(canvas_element().class("rounded-lg")),
    )
}

fn key_list() -> Element {
    Element::new("ul").children(KEY_BINDINGS.iter().map(|binding| {
        Element::new("li")
            .class("px-6")
            .child(Element::new("kbd").child(binding.key))
            .child(" - ")
            .child(Element::new("span").child(binding.action))
    }))
}
