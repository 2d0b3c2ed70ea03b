//! Lenient CSV tokenizer.
//!
//! Fields are comma separated and may be wrapped in double quotes, with `""`
//! as an escaped quote inside a quoted field. Nothing is ever rejected:
//!
//! - text between a closing quote and the next delimiter is discarded,
//! - quotes inside unquoted fields are literal,
//! - an unterminated quoted field runs to the end of the input,
//! - rows may have any number of fields.
//!
//! Each byte of input is visited once, so tokenizing is linear in the input
//! length.

/// One tokenized line: the fields in column order.
pub type RawRow = Vec<String>;

/// Splits `text` into rows of fields.
///
/// A final row consisting of a single empty field is dropped, so input with
/// and without a trailing line terminator yields the same rows.
pub fn parse_rows(text: &str) -> Vec<RawRow> {
    Tokenizer::new(text).collect()
}

/// Row iterator over a CSV document.
#[derive(Debug, Clone)]
pub struct Tokenizer<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    fn bytes(&self) -> &'a [u8] {
        self.text.as_bytes()
    }

    fn at_end(&self) -> bool {
        self.pos >= self.text.len()
    }

    fn peek(&self) -> Option<u8> {
        self.bytes().get(self.pos).copied()
    }

    fn read_row(&mut self) -> RawRow {
        let mut row = Vec::new();
        while !self.at_end() {
            let field = if self.peek() == Some(b'"') {
                self.read_quoted()
            } else {
                self.read_unquoted().to_string()
            };
            row.push(field);

            if self.peek() == Some(b',') {
                self.pos += 1;
            } else {
                break;
            }
        }
        self.skip_terminator();
        row
    }

    /// Reads a quoted field starting at its opening quote, then discards
    /// anything up to the next delimiter or line end.
    fn read_quoted(&mut self) -> String {
        let bytes = self.bytes();
        self.pos += 1;
        let mut field = String::new();
        let mut chunk_start = self.pos;
        while let Some(&byte) = bytes.get(self.pos) {
            if byte != b'"' {
                self.pos += 1;
                continue;
            }
            field.push_str(&self.text[chunk_start..self.pos]);
            if bytes.get(self.pos + 1) == Some(&b'"') {
                field.push('"');
                self.pos += 2;
                chunk_start = self.pos;
            } else {
                self.pos += 1;
                self.skip_field_remainder();
                return field;
            }
        }
        // Unterminated: keep everything up to end of input.
        field.push_str(&self.text[chunk_start..self.pos]);
        field
    }

    fn read_unquoted(&mut self) -> &'a str {
        let text = self.text;
        let start = self.pos;
        self.skip_field_remainder();
        &text[start..self.pos]
    }

    fn skip_field_remainder(&mut self) {
        let bytes = self.bytes();
        while bytes
            .get(self.pos)
            .is_some_and(|byte| !matches!(byte, b',' | b'\n' | b'\r'))
        {
            self.pos += 1;
        }
    }

    /// Consumes at most one `\r` and one `\n`, in either order.
    fn skip_terminator(&mut self) {
        match self.peek() {
            Some(b'\r') => {
                self.pos += 1;
                if self.peek() == Some(b'\n') {
                    self.pos += 1;
                }
            }
            Some(b'\n') => {
                self.pos += 1;
                if self.peek() == Some(b'\r') {
                    self.pos += 1;
                }
            }
            _ => {}
        }
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = RawRow;

    fn next(&mut self) -> Option<RawRow> {
        if self.at_end() {
            return None;
        }
        let row = self.read_row();
        if self.at_end() && row.len() == 1 && row[0].is_empty() {
            return None;
        }
        Some(row)
    }
}
