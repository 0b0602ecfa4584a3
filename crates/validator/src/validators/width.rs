//! Width and encoding-class validators.
//!
//! "Half width" covers printable ASCII plus the half-width katakana/hangul
//! and symbol blocks (U+FF61..U+FF9F, U+FFA0..U+FFDC, U+FFE8..U+FFEE).
//! Everything else counts as full width. These checks look for *presence*,
//! not exclusivity: `FullWidth` passes as soon as one full-width char appears.

use std::sync::LazyLock;

use regex::Regex;

use crate::foundation::ValidationError;

static MULTIBYTE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\x7F]").unwrap());
static FULL_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^\x20-\x7E\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]").unwrap()
});
static HALF_WIDTH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[\x20-\x7E\x{FF61}-\x{FF9F}\x{FFA0}-\x{FFDC}\x{FFE8}-\x{FFEE}0-9a-zA-Z]").unwrap()
});

crate::validator! {
    /// Contains at least one char outside ASCII (more than one UTF-8 byte).
    pub MultiByte for str;
    rule(input) { MULTIBYTE.is_match(input) }
    error(input) { ValidationError::new("multibyte", "Input must contain a multibyte character") }
    fn multibyte();
}

crate::validator! {
    /// Contains at least one full-width char.
    pub FullWidth for str;
    rule(input) { FULL_WIDTH.is_match(input) }
    error(input) {
        ValidationError::new("full_width", "Input must contain a full-width character")
    }
    fn full_width();
}

crate::validator! {
    /// Contains at least one half-width char.
    pub HalfWidth for str;
    rule(input) { HALF_WIDTH.is_match(input) }
    error(input) {
        ValidationError::new("half_width", "Input must contain a half-width character")
    }
    fn half_width();
}

crate::validator! {
    /// Mixes full-width and half-width chars.
    pub VariableWidth for str;
    rule(input) { FULL_WIDTH.is_match(input) && HALF_WIDTH.is_match(input) }
    error(input) {
        ValidationError::new(
            "variable_width",
            "Input must mix full-width and half-width characters",
        )
    }
    fn variable_width();
}

crate::validator! {
    /// Contains a char outside the Basic Multilingual Plane, i.e. one that
    /// needs a surrogate pair in UTF-16.
    pub SurrogatePair for str;
    rule(input) { input.chars().any(|c| c > '\u{FFFF}') }
    error(input) {
        ValidationError::new("surrogate_pair", "Input must contain a surrogate-pair character")
    }
    fn surrogate_pair();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;

    #[test]
    fn test_multibyte() {
        assert!(multibyte().is_valid("ひらがな・カタカナ、．漢字"));
        assert!(multibyte().is_valid("abc123ｶﾀｶﾅ"));
        assert!(!multibyte().is_valid("abc"));
        assert!(!multibyte().is_valid(""));
    }

    #[test]
    fn test_full_width() {
        assert!(full_width().is_valid("ひらがな・カタカナ、．漢字"));
        assert!(full_width().is_valid("３ー０　ａ＠ｃｏｍ"));
        assert!(!full_width().is_valid("abc"));
        assert!(!full_width().is_valid("ｶﾀｶﾅﾞﾬ"));
    }

    #[test]
    fn test_half_width() {
        assert!(half_width().is_valid("!\"#$%&()<>/+=-_? ~^|.,@`{}[]"));
        assert!(half_width().is_valid("ｶﾀｶﾅﾞﾬ"));
        assert!(!half_width().is_valid("あいうえお"));
        assert!(!half_width().is_valid("００１１"));
    }

    #[test]
    fn test_variable_width() {
        assert!(variable_width().is_valid("ひらがなカタカナ漢字ABCDE"));
        assert!(variable_width().is_valid("Ｆｶﾀｶﾅﾞﾬ"));
        assert!(!variable_width().is_valid("ひらがな"));
        assert!(!variable_width().is_valid("abc"));
    }

    #[test]
    fn test_surrogate_pair() {
        assert!(surrogate_pair().is_valid("𠮷野𠮷"));
        assert!(surrogate_pair().is_valid("ABC千𥧄1-2-3"));
        assert!(!surrogate_pair().is_valid("吉野竈"));
        assert!(!surrogate_pair().is_valid("ABC1-2-3"));
    }
}
