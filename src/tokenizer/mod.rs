//! RFC 4180 style CSV tokenizer.
//!
//! Turns decoded text into a header record followed by a lazy, forward-only
//! sequence of data records. Cell values are returned raw: no trimming and no
//! cell-count reconciliation against the header (that happens in the matcher).

use crate::error::ParseError;

/// Byte-order mark stripped from the front of the input.
pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub const DEFAULT_DELIMITER: char = ',';

const QUOTE: char = '"';

/// One tokenized CSV record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// 1-based physical line on which the record starts.
    pub line: usize,
    pub fields: Vec<String>,
}

/// Decode raw upload bytes as UTF-8, stripping a leading BOM.
///
/// # Errors
/// Returns [`ParseError::Utf8`] with the byte offset of the first invalid sequence.
pub fn decode(input: &[u8]) -> Result<&str, ParseError> {
    let bytes = input.strip_prefix(UTF8_BOM).unwrap_or(input);
    let bom_len = input.len() - bytes.len();
    std::str::from_utf8(bytes).map_err(|e| ParseError::Utf8 {
        offset: bom_len + e.valid_up_to(),
    })
}

/// Header plus the not-yet-consumed data records.
pub struct Tokenized<'a> {
    pub header: Vec<String>,
    pub rows: Tokenizer<'a>,
}

/// Split text into the header record and a lazy iterator over the data records.
///
/// # Errors
/// Returns [`ParseError::EmptyInput`] when the text holds no record at all, or the
/// header's own parse error.
pub fn tokenize(text: &str, delimiter: char) -> Result<Tokenized<'_>, ParseError> {
    let mut rows = Tokenizer::new(text).with_delimiter(delimiter);
    let header = rows.next().ok_or(ParseError::EmptyInput)??;
    Ok(Tokenized {
        header: header.fields,
        rows,
    })
}

/// Lazy single-pass record iterator over decoded CSV text.
///
/// Completely empty lines are skipped. After the first error the iterator is
/// exhausted.
pub struct Tokenizer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    delimiter: char,
    done: bool,
}

impl<'a> Tokenizer<'a> {
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            delimiter: DEFAULT_DELIMITER,
            done: false,
        }
    }

    #[must_use]
    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    fn skip_empty_lines(&mut self) {
        while let Some(len) = line_break_len(&self.input[self.pos..]) {
            self.pos += len;
            self.line += 1;
        }
    }

    fn read_record(&mut self) -> Result<Record, ParseError> {
        let start_line = self.line;
        let base = self.pos;
        let mut fields = Vec::new();
        let mut field = String::new();
        let mut in_quotes = false;
        let mut at_field_start = true;
        let mut chars = self.input[base..].char_indices().peekable();

        while let Some((offset, ch)) = chars.next() {
            if in_quotes {
                match ch {
                    QUOTE if matches!(chars.peek(), Some((_, QUOTE))) => {
                        chars.next();
                        field.push(QUOTE);
                    }
                    QUOTE => in_quotes = false,
                    _ => {
                        // A CRLF pair counts once, on its '\n'.
                        let crlf = ch == '\r' && matches!(chars.peek(), Some((_, '\n')));
                        if (ch == '\n' || ch == '\r') && !crlf {
                            self.line += 1;
                        }
                        field.push(ch);
                    }
                }
                continue;
            }

            match ch {
                QUOTE if at_field_start => {
                    in_quotes = true;
                    at_field_start = false;
                }
                '\r' | '\n' => {
                    let mut consumed = offset + 1;
                    if ch == '\r' && matches!(chars.peek(), Some((_, '\n'))) {
                        consumed += 1;
                    }
                    self.pos = base + consumed;
                    self.line += 1;
                    fields.push(field);
                    return Ok(Record {
                        line: start_line,
                        fields,
                    });
                }
                c if c == self.delimiter => {
                    fields.push(std::mem::take(&mut field));
                    at_field_start = true;
                }
                _ => {
                    field.push(ch);
                    at_field_start = false;
                }
            }
        }

        self.pos = self.input.len();
        if in_quotes {
            return Err(ParseError::UnterminatedQuote { line: start_line });
        }
        fields.push(field);
        Ok(Record {
            line: start_line,
            fields,
        })
    }
}

impl Iterator for Tokenizer<'_> {
    type Item = Result<Record, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        self.skip_empty_lines();
        if self.pos >= self.input.len() {
            self.done = true;
            return None;
        }
        let record = self.read_record();
        if record.is_err() {
            self.done = true;
        }
        Some(record)
    }
}

fn line_break_len(rest: &str) -> Option<usize> {
    if rest.starts_with("\r\n") {
        Some(2)
    } else if rest.starts_with('\n') || rest.starts_with('\r') {
        Some(1)
    } else {
        None
    }
}

#[cfg(test)]
#[path = "tokenizer_tests.rs"]
mod tests;
