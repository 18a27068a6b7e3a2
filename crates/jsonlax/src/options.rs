//! Parser configuration.

/// Configuration options for [`parse`](crate::parse) and
/// [`parse_many`](crate::parse_many).
///
/// # Examples
///
/// ```
/// use jsonlax::{parse, Options};
///
/// assert!(parse(b"[a]", Options::default()).is_err());
/// assert!(parse(b"[a]", Options::lenient()).is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Options {
    /// Whether to accept the lenient superset of RFC 7159.
    ///
    /// Lenient mode additionally accepts unquoted string literals
    /// (`[hello]`) and trailing commas in arrays and objects (`[1,2,]`).
    /// Every strict-mode document parses to the same value in lenient mode.
    /// Comment syntax (`//`, `#`, `/* */`) is reserved but not accepted in
    /// either mode.
    ///
    /// # Default
    ///
    /// `false`
    pub lenient: bool,
}

impl Options {
    /// Options with `lenient` enabled.
    #[must_use]
    pub fn lenient() -> Self {
        Options { lenient: true }
    }
}
