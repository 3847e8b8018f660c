use std::collections::BTreeMap;
use std::sync::OnceLock;

use super::config::{parse_lexicon_toml, LexiconConfigError};
use super::table::DEFAULT_TOML;

static CUSTOM_TOML: OnceLock<String> = OnceLock::new();

/// Immutable token-to-glyph map. Built once, never mutated, so it is safe to
/// share across threads without locking.
pub struct Lexicon {
    map: BTreeMap<String, char>,
    open_bracket: char,
    close_bracket: char,
}

impl Lexicon {
    /// Build a lexicon from TOML text.
    pub fn from_toml(toml_str: &str) -> Result<Lexicon, LexiconConfigError> {
        let map = parse_lexicon_toml(toml_str)?;
        // Validation guarantees both bracket entries exist.
        let open_bracket = map["["];
        let close_bracket = map["]"];
        Ok(Lexicon {
            map,
            open_bracket,
            close_bracket,
        })
    }

    /// Set custom TOML before first `global()` call.
    pub fn init_custom(toml_content: String) -> Result<(), LexiconConfigError> {
        // Validate eagerly
        parse_lexicon_toml(&toml_content)?;
        CUSTOM_TOML
            .set(toml_content)
            .map_err(|_| LexiconConfigError::AlreadyInitialized)
    }

    /// Get or initialize the global singleton.
    pub fn global() -> &'static Lexicon {
        static INSTANCE: OnceLock<Lexicon> = OnceLock::new();
        INSTANCE.get_or_init(|| {
            let toml_str = CUSTOM_TOML
                .get()
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_TOML);
            Lexicon::from_toml(toml_str).expect("lexicon TOML must be valid")
        })
    }

    /// Case-sensitive exact lookup. Absence means the token passes through
    /// the converter unchanged; it is not an error.
    pub fn glyph_for(&self, token: &str) -> Option<char> {
        self.map.get(token).copied()
    }

    /// Glyph for the opening cartouche bracket `[`.
    pub fn open_bracket(&self) -> char {
        self.open_bracket
    }

    /// Glyph for the closing cartouche bracket `]`.
    pub fn close_bracket(&self) -> char {
        self.close_bracket
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Iterate entries in token order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, char)> {
        self.map.iter().map(|(token, glyph)| (token.as_str(), *glyph))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_word() {
        let lex = Lexicon::global();
        assert_eq!(lex.glyph_for("toki"), Some('\u{F196C}'));
        assert_eq!(lex.glyph_for("pona"), Some('\u{F1954}'));
        assert_eq!(lex.glyph_for("mi"), Some('\u{F1934}'));
    }

    #[test]
    fn test_unknown_word() {
        let lex = Lexicon::global();
        assert_eq!(lex.glyph_for("hello"), None);
    }

    #[test]
    fn test_case_sensitive() {
        let lex = Lexicon::global();
        assert_eq!(lex.glyph_for("TOKI"), None);
        assert_eq!(lex.glyph_for("Toki"), None);
    }

    #[test]
    fn test_brackets() {
        let lex = Lexicon::global();
        assert_eq!(lex.open_bracket(), '\u{F1990}');
        assert_eq!(lex.close_bracket(), '\u{F1991}');
        assert_eq!(lex.glyph_for("["), Some('\u{F1990}'));
        assert_eq!(lex.glyph_for("]"), Some('\u{F1991}'));
    }

    #[test]
    fn test_single_letter_words() {
        // "a", "e", "n", "o" are real Toki Pona words, not noise.
        let lex = Lexicon::global();
        assert_eq!(lex.glyph_for("a"), Some('\u{F1900}'));
        assert_eq!(lex.glyph_for("e"), Some('\u{F1909}'));
        assert_eq!(lex.glyph_for("n"), Some('\u{F1986}'));
        assert_eq!(lex.glyph_for("o"), Some('\u{F1944}'));
    }

    #[test]
    fn test_all_mappings_roundtrip() {
        let lex = Lexicon::global();
        let map = parse_lexicon_toml(DEFAULT_TOML).unwrap();
        assert_eq!(lex.len(), map.len());
        for (token, glyph) in &map {
            assert_eq!(
                lex.glyph_for(token),
                Some(*glyph),
                "mapping mismatch for token={token}"
            );
        }
    }

    #[test]
    fn test_from_toml_independent_of_global() {
        let lex = Lexicon::from_toml(
            r#"
[mappings]
toki = "F196C"
"[" = "F1990"
"]" = "F1991"
"#,
        )
        .unwrap();
        assert_eq!(lex.len(), 3);
        assert_eq!(lex.glyph_for("toki"), Some('\u{F196C}'));
        assert_eq!(lex.glyph_for("pona"), None);
    }
}
