//! Render configuration.
//!
//! With the `serde` feature enabled, [`RenderOptions`] can be loaded from a
//! config file section. Every field is optional:
//!
//! ```toml
//! mode = { indented = { spaces = 4 } }
//! escape_attributes = true
//! ```

use crate::mode::RenderMode;

/// Options for a single render.
///
/// Defaults to minified output with attribute values written literally.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Output mode.
    pub mode: RenderMode,
    /// HTML-escape attribute values.
    ///
    /// Off by default: values are substituted verbatim and callers are
    /// responsible for sanitizing quotes and angle brackets.
    pub escape_attributes: bool,
}

impl RenderOptions {
    /// Options with the given mode and literal attribute values.
    #[must_use]
    pub fn new(mode: RenderMode) -> Self {
        Self {
            mode,
            escape_attributes: false,
        }
    }

    #[must_use]
    pub fn with_mode(mut self, mode: RenderMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable HTML escaping of attribute values.
    #[must_use]
    pub fn with_attribute_escaping(mut self, enabled: bool) -> Self {
        self.escape_attributes = enabled;
        self
    }
}

impl From<RenderMode> for RenderOptions {
    fn from(mode: RenderMode) -> Self {
        Self::new(mode)
    }
}
