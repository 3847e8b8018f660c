use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Deserialize)]
struct LexiconConfig {
    mappings: BTreeMap<String, String>,
}

#[derive(Debug, thiserror::Error)]
pub enum LexiconConfigError {
    #[error("TOML parse error: {0}")]
    Parse(String),
    #[error("[mappings] table is empty")]
    Empty,
    #[error("non-ASCII key: {0}")]
    NonAsciiKey(String),
    #[error("bad codepoint {value:?} for key {key}")]
    BadCodepoint { key: String, value: String },
    #[error("missing bracket entry: {0:?}")]
    MissingBracket(char),
    #[error("lexicon already initialized")]
    AlreadyInitialized,
}

/// Parse TOML text into a sorted `BTreeMap<token, glyph>`.
///
/// Values are hex codepoints, with or without a `U+` prefix. The table must
/// map both `[` and `]`; the converter's bracket pass relies on them.
pub fn parse_lexicon_toml(toml_str: &str) -> Result<BTreeMap<String, char>, LexiconConfigError> {
    let config: LexiconConfig =
        toml::from_str(toml_str).map_err(|e| LexiconConfigError::Parse(e.to_string()))?;

    if config.mappings.is_empty() {
        return Err(LexiconConfigError::Empty);
    }

    let mut map = BTreeMap::new();
    for (key, value) in &config.mappings {
        if !key.is_ascii() {
            return Err(LexiconConfigError::NonAsciiKey(key.clone()));
        }
        let glyph = parse_codepoint(value).ok_or_else(|| LexiconConfigError::BadCodepoint {
            key: key.clone(),
            value: value.clone(),
        })?;
        map.insert(key.clone(), glyph);
    }

    for bracket in ['[', ']'] {
        if !map.contains_key(bracket.to_string().as_str()) {
            return Err(LexiconConfigError::MissingBracket(bracket));
        }
    }

    Ok(map)
}

/// Parse a hex codepoint value ("F196C" or "U+F196C") into a scalar value.
fn parse_codepoint(value: &str) -> Option<char> {
    let hex = value.strip_prefix("U+").unwrap_or(value);
    if hex.is_empty() {
        return None;
    }
    let n = u32::from_str_radix(hex, 16).ok()?;
    char::from_u32(n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_toml() {
        let toml = r#"
[mappings]
toki = "F196C"
pona = "U+F1954"
"[" = "F1990"
"]" = "F1991"
"#;
        let map = parse_lexicon_toml(toml).unwrap();
        assert_eq!(map.len(), 4);
        assert_eq!(map["toki"], '\u{F196C}');
        assert_eq!(map["pona"], '\u{F1954}');
        assert_eq!(map["["], '\u{F1990}');
    }

    #[test]
    fn parse_default_toml() {
        let map = parse_lexicon_toml(super::super::table::DEFAULT_TOML).unwrap();
        assert!(map.len() > 140, "expected 140+ mappings, got {}", map.len());
        assert_eq!(map["a"], '\u{F1900}');
        assert_eq!(map["powe"], '\u{F19A3}');
    }

    #[test]
    fn error_empty_mappings() {
        let toml = "[mappings]\n";
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconConfigError::Empty));
    }

    #[test]
    fn error_non_ascii_key() {
        let toml = "
[mappings]
\"あ\" = \"F1900\"
\"[\" = \"F1990\"
\"]\" = \"F1991\"
";
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconConfigError::NonAsciiKey(_)));
    }

    #[test]
    fn error_bad_codepoint() {
        let toml = r#"
[mappings]
toki = "not-hex"
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconConfigError::BadCodepoint { .. }));
    }

    #[test]
    fn error_surrogate_codepoint() {
        let toml = r#"
[mappings]
toki = "D800"
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconConfigError::BadCodepoint { .. }));
    }

    #[test]
    fn error_empty_value() {
        let toml = r#"
[mappings]
toki = ""
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconConfigError::BadCodepoint { .. }));
    }

    #[test]
    fn error_missing_brackets() {
        let toml = r#"
[mappings]
toki = "F196C"
"#;
        let err = parse_lexicon_toml(toml).unwrap_err();
        assert!(matches!(err, LexiconConfigError::MissingBracket('[')));
    }

    #[test]
    fn error_invalid_toml() {
        let err = parse_lexicon_toml("not valid toml {{{").unwrap_err();
        assert!(matches!(err, LexiconConfigError::Parse(_)));
    }
}
