//! Colour name to constant identifier normalisation.

use regex::Regex;
use std::sync::LazyLock;

/// Turn a colour table key into a constant identifier.
///
/// `:`, `'` and space become `_`, `/` becomes `_slash_`, and the result is
/// uppercased. Applying it to its own output changes nothing.
///
/// ```
/// use named_color_consts::name::normalize_name;
///
/// assert_eq!(normalize_name("forest green"), "FOREST_GREEN");
/// assert_eq!(normalize_name("xkcd:baby's breath"), "XKCD_BABY_S_BREATH");
/// assert_eq!(normalize_name("xkcd:blue/green"), "XKCD_BLUE_SLASH_GREEN");
/// ```
#[must_use]
pub fn normalize_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len() + 8);
    for c in raw.chars() {
        match c {
            ':' | '\'' | ' ' => out.push('_'),
            '/' => out.push_str("_slash_"),
            _ => out.push(c),
        }
    }
    out.to_uppercase()
}

/// Whether `name` can be used as a constant identifier.
#[must_use]
pub fn is_valid_identifier(name: &str) -> bool {
    static IDENT_RE: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").expect("valid regex"));

    // A lone underscore is not an identifier.
    name != "_" && IDENT_RE.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_simple() {
        assert_eq!(normalize_name("r"), "R");
        assert_eq!(normalize_name("aliceblue"), "ALICEBLUE");
        assert_eq!(normalize_name("forest green"), "FOREST_GREEN");
    }

    #[test]
    fn test_normalize_xkcd_prefix_and_apostrophe() {
        assert_eq!(normalize_name("xkcd:baby's breath"), "XKCD_BABY_S_BREATH");
    }

    #[test]
    fn test_normalize_slash() {
        assert_eq!(normalize_name("xkcd:green/blue"), "XKCD_GREEN_SLASH_BLUE");
        assert_eq!(normalize_name("a/b/c"), "A_SLASH_B_SLASH_C");
    }

    #[test]
    fn test_normalize_mixed_specials() {
        assert_eq!(normalize_name("a: b'/c"), "A__B__SLASH_C");
    }

    #[test]
    fn test_normalize_idempotent_examples() {
        for raw in ["xkcd:baby's breath", "blue/green", "Tab:Blue", ""] {
            let once = normalize_name(raw);
            assert_eq!(normalize_name(&once), once);
        }
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(is_valid_identifier("R"));
        assert!(is_valid_identifier("XKCD_BABY_S_BREATH"));
        assert!(is_valid_identifier("_PRIVATE2"));
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(!is_valid_identifier(""));
        assert!(!is_valid_identifier("_"));
        assert!(!is_valid_identifier("1ST_COLOR"));
        assert!(!is_valid_identifier("BURNT-ORANGE"));
        assert!(!is_valid_identifier("CAFÉ"));
    }
}
