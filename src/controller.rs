//! Theme resolution, application, and toggling.
//!
//! All logic that doesn't depend on the browser lives here, behind three
//! small ports — the preference store, the OS color-scheme signal, and the
//! document surface — so the state machine can be tested without
//! WASM/browser dependencies. [`crate::dom`] provides the real
//! implementations.

use crate::theme::Theme;

#[cfg(test)]
#[path = "controller_test.rs"]
mod controller_test;

/// Key under which the preference is persisted.
pub const STORAGE_KEY: &str = "theme";

/// Synchronous key→string store scoped to the page's origin.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// OS-level "prefers dark" signal.
///
/// `None` means the query facility itself is unavailable.
pub trait SystemScheme {
    fn prefers_dark(&self) -> Option<bool>;
}

/// Handle on the document's theme marker.
///
/// The marker is a projection of the last-applied theme, never a second
/// source of truth for the persisted preference.
pub trait ThemeSurface {
    fn set_dark_marker(&mut self, on: bool);
    fn dark_marker(&self) -> bool;
}

/// Keeps the surface marker, the persisted preference, and user intent in sync.
pub struct ThemeController<S, D> {
    pub store: S,
    pub surface: D,
}

impl<S: PreferenceStore, D: ThemeSurface> ThemeController<S, D> {
    #[must_use]
    pub fn new(store: S, surface: D) -> Self {
        Self { store, surface }
    }

    /// Resolve and apply the initial theme. Runs once per page load.
    ///
    /// Priority: stored preference used verbatim, then the OS signal
    /// (persisted immediately when it selects dark, so future loads skip
    /// re-detection), then light as a live default that is not written back.
    pub fn initialize(&mut self, scheme: &dyn SystemScheme) -> Theme {
        let theme = match self.store.get(STORAGE_KEY) {
            Some(raw) => {
                log::info!("theme: stored preference is {raw:?}");
                Theme::from_stored(&raw)
            }
            None => match scheme.prefers_dark() {
                Some(true) => {
                    log::info!("theme: no stored preference, OS prefers dark");
                    self.store.set(STORAGE_KEY, Theme::Dark.as_str());
                    Theme::Dark
                }
                _ => {
                    log::info!("theme: no stored preference, defaulting to light");
                    Theme::Light
                }
            },
        };
        self.apply(theme);
        theme
    }

    /// Project `theme` onto the surface marker. Idempotent.
    pub fn apply(&mut self, theme: Theme) {
        self.surface.set_dark_marker(theme.is_dark());
    }

    /// Flip to the opposite of what the surface currently shows, apply it,
    /// and persist it unconditionally.
    ///
    /// The marker, not the store, is read for the current state, so a store
    /// that drifted out from under us self-corrects on the next click.
    pub fn toggle(&mut self) -> Theme {
        let next = self.current().toggled();
        self.apply(next);
        self.store.set(STORAGE_KEY, next.as_str());
        log::info!("theme: toggled to {}", next.as_str());
        next
    }

    /// The theme currently projected on the surface.
    #[must_use]
    pub fn current(&self) -> Theme {
        if self.surface.dark_marker() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}
