//! Decoded records and the per-file parse result.

use crate::field::FieldValue;
use indexmap::IndexMap;
use serde::Serialize;

/// One accepted line, decoded against its resolved schema.
///
/// Created once per line and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecodedRecord {
    /// Name of the schema the line was decoded with, e.g. `CP01_TCR3`.
    pub schema_name: &'static str,

    /// Transaction code from columns 1-2 of the line.
    pub record_type: String,

    /// Qualifier from column 3 of the line.
    pub qualifier: String,

    /// Sequence tag from column 4 of the line.
    pub sequence_tag: String,

    /// Application group of the schema.
    pub application_group: &'static str,

    /// Decoded values in layout order.
    pub fields: IndexMap<String, FieldValue>,

    /// Trimmed source line, for diagnostics.
    pub raw_text: String,
}

impl DecodedRecord {
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Returns the value of an alphanumeric field.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(FieldValue::as_text)
    }
}

/// Everything recovered from one capture file.
#[derive(Debug, Default, Serialize)]
pub struct ParseResult {
    /// Last file header seen.
    pub header: Option<DecodedRecord>,

    /// Last file trailer seen.
    pub trailer: Option<DecodedRecord>,

    /// Records grouped by Message Identifier, in file order.
    pub transactions: IndexMap<String, Vec<DecodedRecord>>,
}

impl ParseResult {
    /// Returns `true` if nothing at all was recognised.
    pub fn is_empty(&self) -> bool {
        self.header.is_none() && self.trailer.is_none() && self.transactions.is_empty()
    }

    pub fn transaction(&self, message_id: &str) -> Option<&[DecodedRecord]> {
        self.transactions.get(message_id).map(Vec::as_slice)
    }

    /// Total number of records grouped under any transaction.
    pub fn record_count(&self) -> usize {
        self.transactions.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(schema_name: &'static str, fields: &[(&str, FieldValue)]) -> DecodedRecord {
        DecodedRecord {
            schema_name,
            record_type: "33".to_string(),
            qualifier: "0".to_string(),
            sequence_tag: "1".to_string(),
            application_group: "CP01",
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            raw_text: String::new(),
        }
    }

    #[test]
    fn test_text_accessor_ignores_numbers() {
        let rec = record(
            "CP01_TCR1",
            &[
                ("Card ID", FieldValue::Text("VI".to_string())),
                ("Capture Date", FieldValue::Integer(1231)),
            ],
        );
        assert_eq!(rec.text("Card ID"), Some("VI"));
        assert_eq!(rec.text("Capture Date"), None);
        assert_eq!(rec.text("Missing"), None);
    }

    #[test]
    fn test_empty_result() {
        let result = ParseResult::default();
        assert!(result.is_empty());
        assert_eq!(result.record_count(), 0);
        assert!(result.transaction("MSG000000000001").is_none());
    }

    #[test]
    fn test_record_count_spans_transactions() {
        let mut result = ParseResult::default();
        result
            .transactions
            .insert("A".to_string(), vec![record("CP01_TCR0", &[]), record("CP01_TCR1", &[])]);
        result
            .transactions
            .insert("B".to_string(), vec![record("CP01_TCR0", &[])]);

        assert!(!result.is_empty());
        assert_eq!(result.record_count(), 3);
        assert_eq!(result.transaction("A").unwrap().len(), 2);
    }
}
