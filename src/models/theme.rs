//! Color theme.

/// Site color theme. Dark unless explicitly turned off.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Interpret the stored flag. Only the exact string `"false"` selects light mode.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("false") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Value persisted for this theme.
    pub fn stored_value(self) -> &'static str {
        match self {
            Self::Dark => "true",
            Self::Light => "false",
        }
    }

    #[inline]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}
