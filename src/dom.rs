//! Browser bindings: this is the only module that touches `web-sys`.
//!
//! Implements the controller's ports over `localStorage`, the
//! `prefers-color-scheme` media query, and the body's class list, and wires
//! a click responder onto every `.theme-toggle-button` element. Failures
//! here degrade by logging: a missing body disables the feature for the
//! page, a missing facility falls back to the defaults the controller
//! specifies.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, HtmlElement, MediaQueryList, NodeList, Storage, Window};

use crate::controller::{PreferenceStore, SystemScheme, ThemeController, ThemeSurface};

/// Class that marks the body as dark-themed.
const DARK_CLASS: &str = "dark-mode";

/// Selector for the elements that flip the theme on click.
const TOGGLE_SELECTOR: &str = ".theme-toggle-button";

/// `localStorage`-backed preference store.
pub struct LocalStore {
    storage: Option<Storage>,
}

impl LocalStore {
    /// Bind to the window's `localStorage`, if the browser exposes one.
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let storage = match window.local_storage() {
            Ok(Some(storage)) => Some(storage),
            Ok(None) => {
                log::warn!("theme: localStorage is unavailable; preference will not persist");
                None
            }
            Err(_) => {
                log::warn!("theme: localStorage access was denied; preference will not persist");
                None
            }
        };
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(_) => {
                log::warn!("theme: failed to read {key:?} from localStorage");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        let Some(storage) = self.storage.as_ref() else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            log::warn!("theme: failed to persist {key:?} = {value:?}");
        }
    }
}

/// `matchMedia("(prefers-color-scheme: dark)")`-backed scheme signal.
///
/// The query runs once per page load, when this adapter is constructed.
pub struct MediaQueryScheme {
    query: Option<MediaQueryList>,
}

impl MediaQueryScheme {
    #[must_use]
    pub fn new(window: &Window) -> Self {
        let query = match window.match_media("(prefers-color-scheme: dark)") {
            Ok(query) => query,
            Err(_) => {
                log::warn!("theme: matchMedia is unavailable; skipping the OS preference");
                None
            }
        };
        Self { query }
    }
}

impl SystemScheme for MediaQueryScheme {
    fn prefers_dark(&self) -> Option<bool> {
        self.query.as_ref().map(MediaQueryList::matches)
    }
}

/// The document body's `dark-mode` class as a theme surface.
pub struct BodySurface {
    body: HtmlElement,
}

impl BodySurface {
    #[must_use]
    pub fn new(body: HtmlElement) -> Self {
        Self { body }
    }
}

impl ThemeSurface for BodySurface {
    fn set_dark_marker(&mut self, on: bool) {
        let classes = self.body.class_list();
        let result = if on {
            classes.add_1(DARK_CLASS)
        } else {
            classes.remove_1(DARK_CLASS)
        };
        if result.is_err() {
            log::warn!("theme: failed to update the {DARK_CLASS:?} class on the body");
        }
    }

    fn dark_marker(&self) -> bool {
        self.body.class_list().contains(DARK_CLASS)
    }
}

/// Resolve the initial theme and wire every toggle control on the page.
///
/// Returns without effect (beyond an error log) when the document has no
/// body: theme marking requires one. Zero toggle controls is valid degraded
/// operation — the resolved theme still applies, the page just cannot
/// switch it.
pub fn wire_document(window: &Window, document: &Document) {
    let Some(body) = document.body() else {
        log::error!("theme: document has no body; theme handling disabled");
        return;
    };

    let controls = match document.query_selector_all(TOGGLE_SELECTOR) {
        Ok(list) => {
            if list.length() == 0 {
                log::warn!(
                    "theme: no {TOGGLE_SELECTOR:?} elements found; theme applies on load but cannot be toggled"
                );
            } else {
                log::info!("theme: found {} toggle control(s)", list.length());
            }
            Some(list)
        }
        Err(_) => {
            log::warn!("theme: query for {TOGGLE_SELECTOR:?} failed; toggling disabled");
            None
        }
    };

    let mut controller = ThemeController::new(LocalStore::new(window), BodySurface::new(body));
    controller.initialize(&MediaQueryScheme::new(window));

    if let Some(controls) = controls {
        attach_toggle_handlers(&controls, controller);
    }
}

/// Attach a synchronous click responder to every collected control.
///
/// Controls live for the page lifetime, so the closures are handed to the
/// browser rather than kept on the Rust side.
fn attach_toggle_handlers(controls: &NodeList, controller: ThemeController<LocalStore, BodySurface>) {
    let controller = Rc::new(RefCell::new(controller));
    for index in 0..controls.length() {
        let Some(control) = controls.item(index) else {
            continue;
        };
        let controller = Rc::clone(&controller);
        let on_click = Closure::wrap(Box::new(move || {
            log::debug!("theme: toggle control clicked");
            controller.borrow_mut().toggle();
        }) as Box<dyn FnMut()>);
        if control
            .add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref())
            .is_err()
        {
            log::warn!("theme: failed to attach a click handler to toggle control #{index}");
        }
        on_click.forget();
    }
}
