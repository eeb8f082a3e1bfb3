//! Record schemas: an ordered field table plus the metadata that identifies
//! which lines it applies to.

use crate::field::{FieldDescriptor, FieldValue, RECORD_WIDTH};
use indexmap::IndexMap;
use std::borrow::Cow;
use std::ops::Range;

const RECORD_TYPE_COLUMNS: Range<usize> = 0..2;
const QUALIFIER_COLUMNS: Range<usize> = 2..3;
const SEQUENCE_TAG_COLUMNS: Range<usize> = 3..4;
const APPLICATION_GROUP_COLUMNS: Range<usize> = 16..20;

/// Layout of one kind of TC 33 record.
///
/// Schemas are `static` items; two schemas are the same schema only if they
/// are the same item (see [`RecordSchema::is`]).
#[derive(Debug)]
pub struct RecordSchema {
    pub name: &'static str,
    pub record_type: &'static str,
    pub qualifier: &'static str,
    pub sequence_tag: char,
    pub application_group: &'static str,
    pub fields: &'static [FieldDescriptor],
}

impl RecordSchema {
    /// Identity comparison.
    pub fn is(&self, other: &RecordSchema) -> bool {
        std::ptr::eq(self, other)
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field(name).is_some()
    }

    /// Decodes every declared field, in declaration order.
    pub fn decode_fields(&self, line: &[u8]) -> IndexMap<String, FieldValue> {
        self.fields
            .iter()
            .map(|f| (f.name.to_string(), f.decode(line)))
            .collect()
    }
}

/// Right-pads `line` with spaces to the record width.
pub fn normalize(line: &[u8]) -> Cow<'_, [u8]> {
    if line.len() >= RECORD_WIDTH {
        return Cow::Borrowed(line);
    }

    let mut padded = Vec::with_capacity(RECORD_WIDTH);
    padded.extend_from_slice(line);
    padded.resize(RECORD_WIDTH, b' ');
    Cow::Owned(padded)
}

/// The positional tokens used to pick a schema for a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineTokens {
    pub record_type: String,
    pub qualifier: String,
    /// `None` when column 4 is blank or not a single character.
    pub sequence_tag: Option<char>,
    pub application_group: String,
}

impl LineTokens {
    /// Extracts the tokens from a normalized line.
    pub fn extract(line: &[u8]) -> Self {
        let tag = column(line, SEQUENCE_TAG_COLUMNS);
        let mut chars = tag.chars();
        let sequence_tag = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };

        LineTokens {
            record_type: column(line, RECORD_TYPE_COLUMNS),
            qualifier: column(line, QUALIFIER_COLUMNS),
            sequence_tag,
            application_group: column(line, APPLICATION_GROUP_COLUMNS),
        }
    }

    pub fn sequence_tag_str(&self) -> String {
        self.sequence_tag.map(String::from).unwrap_or_default()
    }
}

fn column(line: &[u8], range: Range<usize>) -> String {
    line.get(range)
        .map(|bytes| String::from_utf8_lossy(bytes).trim().to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldFormat;

    static FIELDS: [FieldDescriptor; 3] = [
        FieldDescriptor::new("Transaction Code", 1, 2, FieldFormat::UnpackedNumeric),
        FieldDescriptor::new("Label", 5, 4, FieldFormat::Alphanumeric),
        FieldDescriptor::new("Count", 9, 3, FieldFormat::Numeric),
    ];

    static SAMPLE: RecordSchema = RecordSchema {
        name: "SAMPLE_TCR0",
        record_type: "33",
        qualifier: "0",
        sequence_tag: '0',
        application_group: "SMPL",
        fields: &FIELDS,
    };

    static LOOKALIKE: RecordSchema = RecordSchema {
        name: "SAMPLE_TCR0",
        record_type: "33",
        qualifier: "0",
        sequence_tag: '0',
        application_group: "SMPL",
        fields: &FIELDS,
    };

    #[test]
    fn test_identity_is_not_structural() {
        assert!(SAMPLE.is(&SAMPLE));
        assert!(!SAMPLE.is(&LOOKALIKE));
    }

    #[test]
    fn test_decode_fields_in_declaration_order() {
        let fields = SAMPLE.decode_fields(b"3300ABCD042");
        let names: Vec<&str> = fields.keys().map(String::as_str).collect();
        assert_eq!(names, ["Transaction Code", "Label", "Count"]);
        assert_eq!(fields["Transaction Code"], FieldValue::Integer(33));
        assert_eq!(fields["Label"], FieldValue::Text("ABCD".to_string()));
        assert_eq!(fields["Count"], FieldValue::Integer(42));
    }

    #[test]
    fn test_decode_fields_with_multibyte_text() {
        // 'ß' spans bytes 7..9, so the Label field (bytes 4..8) ends inside it.
        let fields = SAMPLE.decode_fields("3300ABCß42".as_bytes());
        assert_eq!(fields["Label"], FieldValue::Text("ABC\u{FFFD}".to_string()));
        // Count (bytes 8..11) starts on the second byte of 'ß' and degrades to zero.
        assert_eq!(fields["Count"], FieldValue::Integer(0));
    }

    #[test]
    fn test_normalize_pads_to_record_width() {
        assert_eq!(normalize(b"33").len(), RECORD_WIDTH);
        assert!(normalize(b"33").ends_with(b" "));
        let long = vec![b'9'; RECORD_WIDTH + 2];
        assert_eq!(normalize(&long).len(), RECORD_WIDTH + 2);
    }

    #[test]
    fn test_extract_tokens() {
        let raw = format!("{:<16}{}", "3301", "CP01MSG000000000001");
        let line = normalize(raw.as_bytes());
        let tokens = LineTokens::extract(&line);
        assert_eq!(tokens.record_type, "33");
        assert_eq!(tokens.qualifier, "0");
        assert_eq!(tokens.sequence_tag, Some('1'));
        assert_eq!(tokens.application_group, "CP01");
    }

    #[test]
    fn test_blank_sequence_tag() {
        let line = normalize(b"330 ");
        assert_eq!(LineTokens::extract(&line).sequence_tag, None);
        assert_eq!(LineTokens::extract(&line).sequence_tag_str(), "");
    }
}
