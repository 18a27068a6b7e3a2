//! Input encoding detection.
//!
//! JSON text that is not UTF-8 betrays itself through the zero bytes a
//! wider encoding puts around the ASCII characters every document starts
//! with. Only detection is provided here; the parser decodes UTF-8 alone
//! and rejects everything else up front.

use core::fmt;

/// Encodings distinguishable from the leading byte pattern of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// The only encoding the parser accepts.
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Encoding::Utf8 => "UTF-8",
            Encoding::Utf16Le => "UTF-16LE",
            Encoding::Utf16Be => "UTF-16BE",
            Encoding::Utf32Le => "UTF-32LE",
            Encoding::Utf32Be => "UTF-32BE",
        })
    }
}

/// Classify the first up-to-four bytes of `input` by their zero-byte
/// pattern. Anything that matches no wider-encoding pattern is UTF-8.
#[must_use]
pub fn detect_encoding(input: &[u8]) -> Encoding {
    let zero = |i: usize| input.get(i) == Some(&0u8);
    if input.len() >= 4 {
        match (zero(0), zero(1), zero(2), zero(3)) {
            (true, true, true, false) => return Encoding::Utf32Be,
            (true, false, true, false) => return Encoding::Utf16Be,
            (false, true, true, true) => return Encoding::Utf32Le,
            (false, true, false, true) => return Encoding::Utf16Le,
            _ => {}
        }
    }
    if input.len() >= 2 {
        match (zero(0), zero(1)) {
            (true, false) => return Encoding::Utf16Be,
            (false, true) => return Encoding::Utf16Le,
            _ => {}
        }
    }
    Encoding::Utf8
}
