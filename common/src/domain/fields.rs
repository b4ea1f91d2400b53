use std::sync::LazyLock;

use nutype::nutype;
use regex::Regex;

// A regex for agenda display colors: six-digit hex, leading '#'.
// Example: "#1a2b3c" is valid; "red" or "#fff" are not.
pub const HEX_COLOR_REGEX: &str = r"^#[0-9a-fA-F]{6}$";

static HEX_COLOR_REGEX_COMPILED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(HEX_COLOR_REGEX).expect("HEX_COLOR_REGEX must be a valid regex")
});

pub fn is_hex_color(value: &str) -> bool {
    HEX_COLOR_REGEX_COMPILED.is_match(value)
}

/// A listener question for the live show. Whitespace-only submissions are
/// rejected before they reach storage.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = 500),
    derive(
        Clone,
        Debug,
        Display,
        AsRef,
        PartialEq,
        Eq,
        Serialize,
        Deserialize
    )
)]
pub struct QuestionText(String);

#[nutype(
    sanitize(trim),
    validate(predicate = is_hex_color),
    derive(
        Clone,
        Debug,
        Display,
        AsRef,
        PartialEq,
        Eq,
        Serialize,
        Deserialize
    )
)]
pub struct EventColor(String);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn question_text_trims_and_rejects_blank() {
        let q = QuestionText::try_new("  Quelle est la programmation ?  ").unwrap();
        assert_eq!(q.as_ref(), "Quelle est la programmation ?");

        assert!(QuestionText::try_new("   ").is_err());
        assert!(QuestionText::try_new("").is_err());
    }

    #[test]
    fn event_color_requires_full_hex() {
        assert!(EventColor::try_new("#1a2B3c").is_ok());
        assert!(EventColor::try_new("#fff").is_err());
        assert!(EventColor::try_new("1a2b3c").is_err());
        assert!(EventColor::try_new("rouge").is_err());
    }
}
