//! JavaScript bindings for the attachment probe
//!
//! Exposes the canvas check to the page so a loader can tell a missing or
//! resized canvas apart from a failed binary load.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use super::{AttachStatus, CanvasContract, ObservedElement};

/// Install the panic hook so Rust panics show up in the browser console
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Look up the attachment point in the current document.
fn observe(contract: &CanvasContract) -> Option<ObservedElement> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(contract.id)?;
    let tag = element.tag_name().to_ascii_lowercase();

    Some(match element.dyn_into::<web_sys::HtmlCanvasElement>() {
        Ok(canvas) => ObservedElement {
            tag,
            width: canvas.width(),
            height: canvas.height(),
        },
        Err(_) => ObservedElement {
            tag,
            width: 0,
            height: 0,
        },
    })
}

/// Check the live document and return the status as a string
/// (`"canvas ready"` or a description of the mismatch).
#[wasm_bindgen]
pub fn attachment_status() -> String {
    let contract = CanvasContract::default();
    contract.check(observe(&contract).as_ref()).to_string()
}

/// `true` when the canvas the runtime expects is present and correctly sized.
/// Mismatches are logged to the browser console.
#[wasm_bindgen]
pub fn verify_attachment_point() -> bool {
    let contract = CanvasContract::default();
    let status = contract.check(observe(&contract).as_ref());
    if !matches!(status, AttachStatus::Ready) {
        web_sys::console::warn_1(&JsValue::from_str(&status.to_string()));
    }
    status.is_ready()
}
