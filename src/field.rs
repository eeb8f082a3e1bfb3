//! Field descriptors and field-level decoding.
//!
//! A field is a named byte range of a fixed-width record plus the format the
//! range is declared with. Decoding never fails on numeric corruption: a
//! numeric field that does not parse decodes to integer zero.

use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Width of every TC 33 record, in bytes.
pub const RECORD_WIDTH: usize = 168;

/// Declared data format of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldFormat {
    /// `UN`: unpacked numeric.
    UnpackedNumeric,
    /// `N`: numeric.
    Numeric,
    /// `AN`: alphanumeric.
    Alphanumeric,
    /// `ANS`: alphanumeric with special characters.
    AlphanumericSpecial,
    /// `DX`: display hexadecimal. Kept as opaque text.
    DisplayHex,
}

impl FieldFormat {
    /// Returns `true` for the formats decoded as numbers.
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldFormat::UnpackedNumeric | FieldFormat::Numeric)
    }
}

/// One named field of a record layout.
///
/// `start` is the 1-based column from the format documentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub start: usize,
    pub length: usize,
    pub format: FieldFormat,
}

impl FieldDescriptor {
    pub const fn new(name: &'static str, start: usize, length: usize, format: FieldFormat) -> Self {
        FieldDescriptor {
            name,
            start,
            length,
            format,
        }
    }

    /// Zero-based, inclusive start offset.
    pub fn begin(&self) -> usize {
        self.start.saturating_sub(1)
    }

    /// Zero-based, exclusive end offset.
    pub fn end(&self) -> usize {
        self.begin() + self.length
    }

    /// Zero-based half-open byte range `[begin, end)`.
    pub fn range(&self) -> Range<usize> {
        self.begin()..self.end()
    }

    /// Returns the bytes of this field in `line`.
    ///
    /// A line shorter than the field's end behaves as if right-padded with
    /// spaces, so a missing tail reads as empty.
    pub fn slice<'a>(&self, line: &'a [u8]) -> &'a [u8] {
        let end = self.end().min(line.len());
        let begin = self.begin().min(end);
        &line[begin..end]
    }

    /// Decodes this field from a full record line.
    ///
    /// Only the field's own bytes are interpreted as text, so an invalid
    /// UTF-8 byte elsewhere in the line never moves this field.
    pub fn decode(&self, line: &[u8]) -> FieldValue {
        let raw = String::from_utf8_lossy(self.slice(line));
        let text = raw.trim();

        if self.format.is_numeric() {
            decode_numeric(text)
        } else {
            FieldValue::Text(text.to_string())
        }
    }
}

/// Parses trimmed numeric text, degrading to zero on anything unparseable.
fn decode_numeric(text: &str) -> FieldValue {
    if text.is_empty() {
        return FieldValue::Integer(0);
    }

    let parsed = if text.contains('.') {
        Decimal::from_str(text).ok().map(FieldValue::Real)
    } else {
        text.parse::<i128>().ok().map(FieldValue::Integer)
    };

    parsed.unwrap_or(FieldValue::Integer(0))
}

/// A decoded field value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Integer(i128),
    Real(Decimal),
    Text(String),
}

impl FieldValue {
    /// Returns the text of an alphanumeric field.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(n) => write!(f, "{}", n),
            FieldValue::Real(d) => write!(f, "{}", d),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}
