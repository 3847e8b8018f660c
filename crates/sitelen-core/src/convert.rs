//! ASCII Toki Pona to Sitelen Pona text transform.
//!
//! Splits input on whitespace, substitutes each recognized word with its
//! UCSUR glyph, joins with no separator, then replaces any remaining literal
//! `[`/`]` with the cartouche bracket glyphs.

use tracing::debug;

use crate::lexicon::Lexicon;

/// Convert using the process-wide default lexicon.
pub fn convert(text: &str) -> String {
    Lexicon::global().convert(text)
}

impl Lexicon {
    /// Convert whitespace-delimited ASCII Toki Pona into Sitelen Pona.
    ///
    /// Unknown tokens pass through verbatim. The original whitespace is not
    /// reinserted: glyphs abut in the output. Total over all inputs; empty or
    /// all-whitespace input yields `""`.
    pub fn convert(&self, text: &str) -> String {
        let joined: String = text
            .split_whitespace()
            .map(|token| match self.glyph_for(token) {
                Some(glyph) => glyph.to_string(),
                None => token.to_owned(),
            })
            .collect();

        // Bracket pass runs over the joined string, so brackets inside
        // unmapped tokens are replaced too: "[mi]" fails lookup as a whole
        // token and comes out as bracket-glyph + "mi" + bracket-glyph, not
        // the mi glyph.
        let converted: String = joined
            .chars()
            .map(|c| match c {
                '[' => self.open_bracket(),
                ']' => self.close_bracket(),
                c => c,
            })
            .collect();

        debug!(
            input_len = text.len(),
            output_chars = converted.chars().count(),
            "converted query"
        );
        converted
    }
}
