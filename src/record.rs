use thiserror::Error;

/// One parsed input line: trimmed content, its embedded sequence number, and
/// the character count of the trimmed content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub text: String,
    pub sequence: i64,
    pub length: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("line {line}: missing {delimiter:?} delimiter")]
    MissingDelimiter { line: usize, delimiter: char },

    #[error("line {line}: sequence field {field:?} is not an integer")]
    BadSequence { line: usize, field: String },
}

/// Splits delimited lines into [`Record`]s. Operates on in-memory text so the
/// format rules stay testable without touching the filesystem.
pub struct RecordParser {
    delimiter: char,
}

impl RecordParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parses every line of `source`, in file order. Empty input yields an
    /// empty vec; any malformed line fails the whole file.
    pub fn parse(&self, source: &str) -> Result<Vec<Record>, ParseError> {
        source
            .lines()
            .enumerate()
            .map(|(index, line)| self.parse_line(line, index + 1))
            .collect()
    }

    fn parse_line(&self, line: &str, number: usize) -> Result<Record, ParseError> {
        let mut fields = line.split(self.delimiter);
        // split always yields at least one field
        let text = fields.next().unwrap_or("").trim();
        let sequence_field = fields
            .next()
            .ok_or(ParseError::MissingDelimiter {
                line: number,
                delimiter: self.delimiter,
            })?
            .trim();
        // fields past the second are ignored
        let sequence = sequence_field
            .parse::<i64>()
            .map_err(|_| ParseError::BadSequence {
                line: number,
                field: sequence_field.to_string(),
            })?;

        Ok(Record {
            length: text.chars().count(),
            text: text.to_string(),
            sequence,
        })
    }
}

impl Default for RecordParser {
    fn default() -> Self {
        Self::new('|')
    }
}
