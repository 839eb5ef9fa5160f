//! Output modes.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Indentation width used when `"indented"` is parsed without an explicit width.
pub const DEFAULT_INDENT: usize = 2;

/// How a tree is serialized.
///
/// Two indented modes are equal only when their widths match.
///
/// # Example
///
/// ```
/// use hypertext::RenderMode;
///
/// let mode: RenderMode = "indented:4".parse().unwrap();
/// assert_eq!(mode, RenderMode::Indented { spaces: 4 });
/// assert_eq!(mode.add_spaces(4), 8);
/// assert_eq!(RenderMode::Minified.add_spaces(4), 4);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RenderMode {
    /// No whitespace is added anywhere.
    #[default]
    Minified,
    /// Tags and their content occupy separate lines, each nesting level
    /// indented by `spaces` more than its parent.
    Indented {
        /// Width of one indentation level.
        spaces: usize,
    },
}

/// Error building or parsing a [`RenderMode`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderModeError {
    /// Indentation width of zero.
    #[error("indentation width must be a positive integer")]
    ZeroSpaces,

    /// Width after `indented:` is not a number.
    #[error("invalid indentation width {value:?}")]
    InvalidSpaces {
        /// Text that failed to parse.
        value: String,
        /// Underlying integer parse error.
        #[source]
        source: ParseIntError,
    },

    /// Mode name is neither `minified` nor `indented`.
    #[error("unknown render mode {0:?}, expected \"minified\" or \"indented[:N]\"")]
    UnknownMode(String),
}

impl RenderMode {
    /// Indented mode with a validated, positive width.
    pub fn indented(spaces: usize) -> Result<Self, RenderModeError> {
        if spaces == 0 {
            return Err(RenderModeError::ZeroSpaces);
        }
        Ok(Self::Indented { spaces })
    }

    /// Offset of the next nesting level, starting from `offset`.
    #[must_use]
    pub fn add_spaces(self, offset: usize) -> usize {
        offset + self.spaces_per_level()
    }

    /// Width of one indentation level (zero when minified).
    #[must_use]
    pub fn spaces_per_level(self) -> usize {
        match self {
            Self::Minified => 0,
            Self::Indented { spaces } => spaces,
        }
    }

    #[must_use]
    pub fn is_minified(self) -> bool {
        matches!(self, Self::Minified)
    }
}

impl fmt::Display for RenderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Minified => f.write_str("minified"),
            Self::Indented { spaces } => write!(f, "indented:{spaces}"),
        }
    }
}

impl FromStr for RenderMode {
    type Err = RenderModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, width) = match s.split_once(':') {
            Some((name, width)) => (name.trim(), Some(width.trim())),
            None => (s, None),
        };

        if name.eq_ignore_ascii_case("minified") && width.is_none() {
            return Ok(Self::Minified);
        }
        if !name.eq_ignore_ascii_case("indented") {
            return Err(RenderModeError::UnknownMode(s.to_owned()));
        }

        match width {
            None => Self::indented(DEFAULT_INDENT),
            Some(width) => {
                let spaces = width
                    .parse::<usize>()
                    .map_err(|source| RenderModeError::InvalidSpaces {
                        value: width.to_owned(),
                        source,
                    })?;
                Self::indented(spaces)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_minified() {
        assert_eq!(RenderMode::default(), RenderMode::Minified);
        assert!(RenderMode::default().is_minified());
    }

    #[test]
    fn test_equality() {
        assert_eq!(
            RenderMode::Indented { spaces: 2 },
            RenderMode::Indented { spaces: 2 }
        );
        assert_ne!(
            RenderMode::Indented { spaces: 2 },
            RenderMode::Indented { spaces: 4 }
        );
        assert_ne!(RenderMode::Minified, RenderMode::Indented { spaces: 2 });
    }

    #[test]
    fn test_indented_rejects_zero() {
        assert_eq!(RenderMode::indented(0), Err(RenderModeError::ZeroSpaces));
        assert_eq!(
            RenderMode::indented(3),
            Ok(RenderMode::Indented { spaces: 3 })
        );
    }

    #[test]
    fn test_add_spaces() {
        assert_eq!(RenderMode::Minified.add_spaces(6), 6);
        assert_eq!(RenderMode::Indented { spaces: 2 }.add_spaces(6), 8);
        assert_eq!(RenderMode::Indented { spaces: 3 }.add_spaces(0), 3);
    }

    #[test]
    fn test_parse() {
        assert_eq!("minified".parse::<RenderMode>(), Ok(RenderMode::Minified));
        assert_eq!(" Minified ".parse::<RenderMode>(), Ok(RenderMode::Minified));
        assert_eq!(
            "indented".parse::<RenderMode>(),
            Ok(RenderMode::Indented {
                spaces: DEFAULT_INDENT
            })
        );
        assert_eq!(
            "indented: 4".parse::<RenderMode>(),
            Ok(RenderMode::Indented { spaces: 4 })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "pretty".parse::<RenderMode>(),
            Err(RenderModeError::UnknownMode("pretty".to_owned()))
        );
        assert_eq!(
            "indented:0".parse::<RenderMode>(),
            Err(RenderModeError::ZeroSpaces)
        );
        assert!(matches!(
            "indented:two".parse::<RenderMode>(),
            Err(RenderModeError::InvalidSpaces { ref value, .. }) if value == "two"
        ));
        assert!(matches!(
            "minified:2".parse::<RenderMode>(),
            Err(RenderModeError::UnknownMode(_))
        ));
    }

    #[test]
    fn test_display_parses_back() {
        for mode in [RenderMode::Minified, RenderMode::Indented { spaces: 4 }] {
            assert_eq!(mode.to_string().parse::<RenderMode>(), Ok(mode));
        }
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            RenderModeError::ZeroSpaces.to_string(),
            "indentation width must be a positive integer"
        );
        assert_eq!(
            RenderModeError::UnknownMode("x".to_owned()).to_string(),
            r#"unknown render mode "x", expected "minified" or "indented[:N]""#
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_json() {
        let mode: RenderMode = serde_json::from_str(r#"{"indented":{"spaces":4}}"#).unwrap();
        assert_eq!(mode, RenderMode::Indented { spaces: 4 });
        let mode: RenderMode = serde_json::from_str(r#""minified""#).unwrap();
        assert_eq!(mode, RenderMode::Minified);
    }
}
