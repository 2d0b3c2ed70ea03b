//! CSV reading utilities.

mod tokenizer;

pub use tokenizer::{RawRow, Tokenizer, parse_rows};
