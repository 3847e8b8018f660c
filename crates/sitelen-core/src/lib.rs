pub mod convert;
pub mod lexicon;

pub use convert::convert;
pub use lexicon::{Lexicon, LexiconConfigError};
