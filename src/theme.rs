//! The two-state theme preference and its stored string form.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// A page-wide visual theme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    /// Default appearance; the body carries no marker class.
    #[default]
    Light,
    /// Dark appearance, projected as the `dark-mode` class on the body.
    Dark,
}

impl Theme {
    /// Parse a stored preference value.
    ///
    /// Anything other than the literal `"dark"` collapses to [`Theme::Light`].
    /// The store is only ever written by this crate, so a foreign value means
    /// outside interference; it is traced rather than rejected.
    #[must_use]
    pub fn from_stored(raw: &str) -> Self {
        match raw {
            "dark" => Self::Dark,
            "light" => Self::Light,
            other => {
                log::debug!("theme: treating unrecognized stored value {other:?} as light");
                Self::Light
            }
        }
    }

    /// The exact literal written to the preference store.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Whether this theme projects the dark marker.
    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}
