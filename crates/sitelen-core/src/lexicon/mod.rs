//! Token-to-glyph lexicon for Sitelen Pona conversion.
//!
//! The lexicon maps lowercase ASCII Toki Pona words to single UCSUR
//! private-use codepoints. The default table is embedded as TOML and built
//! into a process-wide immutable map on first use; a custom table can be
//! installed before that with [`Lexicon::init_custom`].

mod config;
mod map;
mod table;

pub use config::{parse_lexicon_toml, LexiconConfigError};
pub use map::Lexicon;
