//! Dark/light theme preference for server-rendered pages.
//!
//! This crate is compiled to WebAssembly and runs in the browser. On page
//! load it resolves the active theme (stored preference first, then the OS
//! `prefers-color-scheme` signal, then light), projects it as the
//! `dark-mode` class on the document body, and wires every
//! `.theme-toggle-button` element to flip and persist the choice. The
//! hosting page supplies the markup and the CSS that gives the class its
//! visual effect.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | The two-state [`theme::Theme`] preference and its stored form |
//! | [`controller`] | Resolution/apply/toggle state machine over injected ports |
//! | [`dom`] | `web-sys` port implementations and click wiring |

pub mod controller;
pub mod dom;
pub mod theme;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::wasm_bindgen;

/// Module entry point: install the diagnostics stack, then run the wiring
/// once the page's structural content has finished parsing.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // A second instantiation keeps the first logger.
    console_log::init_with_level(log::Level::Debug).unwrap_or_default();

    let Some(window) = web_sys::window() else {
        log::error!("theme: no window; not running in a browser");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("theme: window has no document");
        return;
    };

    // Wasm modules normally load deferred, so the DOM is already parsed by
    // the time this runs; the listener covers hosts that instantiate the
    // module eagerly while the parser is still working.
    if document.ready_state() == "loading" {
        let deferred_window = window.clone();
        let deferred_document = document.clone();
        let on_ready = Closure::once(move || {
            log::info!("theme: document parsed");
            dom::wire_document(&deferred_window, &deferred_document);
        });
        match document.add_event_listener_with_callback("DOMContentLoaded", on_ready.as_ref().unchecked_ref()) {
            Ok(()) => on_ready.forget(),
            Err(_) => {
                log::warn!("theme: could not defer to DOMContentLoaded; wiring immediately");
                dom::wire_document(&window, &document);
            }
        }
    } else {
        dom::wire_document(&window, &document);
    }
}
