//! Flattened, per-transaction view of a parse result, split by card brand.
//!
//! Each transaction becomes one row whose columns are the fields of all its
//! records, prefixed by schema name. Rows are classified by the Card ID of
//! the transaction's CP01 TCR 1. Rendering is plain CSV.

use crate::error::Result;
use crate::layouts::{self, CARD_ID};
use crate::record::{DecodedRecord, ParseResult};
use indexmap::{IndexMap, IndexSet};
use log::info;
use serde::Serialize;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

pub const MESSAGE_ID_COLUMN: &str = "Message Identifier";
pub const CARD_BRAND_COLUMN: &str = "Card Brand";
pub const OTHER_CARD_ID_COLUMN: &str = "Identified Card ID (Other)";
pub const SUMMARY_FILE: &str = "total_amount_and_count.csv";

/// Card ID used when a transaction has no CP01 TCR 1 or an empty one.
pub const UNKNOWN_CARD_ID: &str = "UNKNOWN";

/// Card brand buckets, in sheet order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardBrand {
    Visa,
    Mastercard,
    Amex,
    Jcb,
    DinersClub,
    Discover,
    Other,
}

impl CardBrand {
    pub const SHEET_ORDER: [CardBrand; 7] = [
        CardBrand::Visa,
        CardBrand::Mastercard,
        CardBrand::Amex,
        CardBrand::Jcb,
        CardBrand::DinersClub,
        CardBrand::Discover,
        CardBrand::Other,
    ];

    /// Classifies a normalized (trimmed, uppercase) Card ID.
    pub fn from_card_id(card_id: &str) -> Self {
        match card_id {
            "VI" => CardBrand::Visa,
            "MC" => CardBrand::Mastercard,
            "AX" => CardBrand::Amex,
            "JC" => CardBrand::Jcb,
            "DC" => CardBrand::DinersClub,
            "DI" => CardBrand::Discover,
            _ => CardBrand::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardBrand::Visa => "VISA",
            CardBrand::Mastercard => "Mastercard",
            CardBrand::Amex => "AX",
            CardBrand::Jcb => "JCB",
            CardBrand::DinersClub => "Diners Club",
            CardBrand::Discover => "Discover",
            CardBrand::Other => "Other",
        }
    }

    /// File name of this brand's sheet.
    pub fn file_name(self) -> String {
        format!(
            "{}_transactions.csv",
            self.label().to_ascii_lowercase().replace(' ', "_")
        )
    }
}

/// One transaction flattened into a single row.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    pub message_id: String,

    /// Normalized Card ID, or [`UNKNOWN_CARD_ID`].
    pub card_id: String,

    pub brand: CardBrand,

    /// Column name to rendered value, in first-seen order.
    pub columns: IndexMap<String, String>,
}

impl TransactionRow {
    /// Flattens the records of one transaction.
    ///
    /// Later records overwrite same-named columns of earlier ones.
    pub fn flatten(message_id: &str, records: &[DecodedRecord]) -> Self {
        let mut columns = IndexMap::new();
        let mut card_id = UNKNOWN_CARD_ID.to_string();

        columns.insert(MESSAGE_ID_COLUMN.to_string(), message_id.to_string());

        for record in records {
            let prefix = column_prefix(record.schema_name);
            columns.insert(format!("{}_Raw_Line", prefix), record.raw_text.clone());
            for (name, value) in &record.fields {
                columns.insert(format!("{}_{}", prefix, name), value.to_string());
            }

            if record.schema_name == layouts::CP01_TCR1.name {
                if let Some(id) = record.text(CARD_ID).filter(|id| !id.is_empty()) {
                    card_id = id.trim().to_ascii_uppercase();
                }
            }
        }

        let brand = CardBrand::from_card_id(&card_id);
        if brand == CardBrand::Other {
            columns.insert(OTHER_CARD_ID_COLUMN.to_string(), card_id.clone());
        }

        TransactionRow {
            message_id: message_id.to_string(),
            card_id,
            brand,
            columns,
        }
    }
}

/// `CP01_TCR1` becomes `CP01_TCR_1`.
fn column_prefix(schema_name: &str) -> String {
    schema_name.replace("_TCR", "_TCR_")
}

/// One line of the header/trailer summary sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    #[serde(rename = "Category")]
    pub category: &'static str,
    #[serde(rename = "Field")]
    pub field: String,
    #[serde(rename = "Value")]
    pub value: String,
}

/// Report over one parse result.
#[derive(Debug, Clone, Default)]
pub struct Report {
    pub summary: Vec<SummaryRow>,

    /// All transactions in file order.
    pub rows: Vec<TransactionRow>,
}

impl Report {
    pub fn from_parse_result(parsed: &ParseResult) -> Self {
        let mut summary = Vec::new();
        for (category, record) in [("Header", &parsed.header), ("Trailer", &parsed.trailer)] {
            let Some(record) = record else {
                continue;
            };
            summary.extend(record.fields.iter().map(|(name, value)| SummaryRow {
                category,
                field: name.clone(),
                value: value.to_string(),
            }));
        }

        let rows = parsed
            .transactions
            .iter()
            .map(|(message_id, records)| TransactionRow::flatten(message_id, records))
            .collect();

        Report { summary, rows }
    }

    pub fn rows_for(&self, brand: CardBrand) -> impl Iterator<Item = &TransactionRow> {
        self.rows.iter().filter(move |row| row.brand == brand)
    }

    /// Writes the header/trailer summary sheet.
    pub fn write_summary<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        if self.summary.is_empty() {
            csv_writer.write_record(["Message"])?;
            csv_writer.write_record(["No Header or Trailer records found."])?;
        } else {
            for row in &self.summary {
                csv_writer.serialize(row)?;
            }
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Writes the sheet of one card brand.
    pub fn write_sheet<W: Write>(&self, brand: CardBrand, writer: W) -> Result<()> {
        let rows: Vec<&TransactionRow> = self.rows_for(brand).collect();

        if rows.is_empty() {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.write_record(["Message"])?;
            csv_writer.write_record([format!("No {} transactions found.", brand.label())])?;
            csv_writer.flush()?;
            return Ok(());
        }

        write_table(writer, &[], &rows)
    }

    /// Writes every transaction as one table, with the brand as a column.
    pub fn write_transactions<W: Write>(&self, writer: W) -> Result<()> {
        let rows: Vec<&TransactionRow> = self.rows.iter().collect();
        write_table(writer, &[CARD_BRAND_COLUMN], &rows)
    }

    /// Writes the summary and every brand sheet into `dir`.
    ///
    /// Returns the paths written, summary first.
    pub fn write_to_dir(&self, dir: &Path) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(dir)?;

        let summary_path = dir.join(SUMMARY_FILE);
        self.write_summary(BufWriter::new(File::create(&summary_path)?))?;
        let mut written = vec![summary_path];

        for brand in CardBrand::SHEET_ORDER {
            let path = dir.join(brand.file_name());
            self.write_sheet(brand, BufWriter::new(File::create(&path)?))?;
            info!(
                "Wrote {} {} transactions to {}",
                self.rows_for(brand).count(),
                brand.label(),
                path.display()
            );
            written.push(path);
        }

        Ok(written)
    }
}

/// Writes rows under the union of their columns.
///
/// The Message Identifier column comes first, then `extra` (filled from the
/// row itself), then every other column in first-seen order.
fn write_table<W: Write>(writer: W, extra: &[&str], rows: &[&TransactionRow]) -> Result<()> {
    let mut header: IndexSet<&str> = IndexSet::new();
    header.insert(MESSAGE_ID_COLUMN);
    header.extend(extra.iter().copied());
    for row in rows {
        header.extend(row.columns.keys().map(String::as_str));
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(&header)?;

    for row in rows {
        let values = header.iter().map(|&column| match column {
            CARD_BRAND_COLUMN if extra.contains(&CARD_BRAND_COLUMN) => row.brand.label(),
            _ => row.columns.get(column).map(String::as_str).unwrap_or(""),
        });
        csv_writer.write_record(values)?;
    }

    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::FieldValue;

    fn record(schema_name: &'static str, fields: &[(&str, FieldValue)]) -> DecodedRecord {
        DecodedRecord {
            schema_name,
            record_type: "33".to_string(),
            qualifier: "0".to_string(),
            sequence_tag: "0".to_string(),
            application_group: "CP01",
            fields: fields
                .iter()
                .map(|(k, v)| (k.to_string(), v.clone()))
                .collect(),
            raw_text: format!("raw {}", schema_name),
        }
    }

    fn text(s: &str) -> FieldValue {
        FieldValue::Text(s.to_string())
    }

    fn visa_transaction() -> Vec<DecodedRecord> {
        vec![
            record("CP01_TCR0", &[("Authorized Amount", FieldValue::Integer(1250))]),
            record("CP01_TCR1", &[(CARD_ID, text("VI"))]),
        ]
    }

    #[test]
    fn test_card_brand_codes() {
        assert_eq!(CardBrand::from_card_id("VI"), CardBrand::Visa);
        assert_eq!(CardBrand::from_card_id("MC"), CardBrand::Mastercard);
        assert_eq!(CardBrand::from_card_id("AX"), CardBrand::Amex);
        assert_eq!(CardBrand::from_card_id("JC"), CardBrand::Jcb);
        assert_eq!(CardBrand::from_card_id("DC"), CardBrand::DinersClub);
        assert_eq!(CardBrand::from_card_id("DI"), CardBrand::Discover);
        assert_eq!(CardBrand::from_card_id("ZZ"), CardBrand::Other);
        assert_eq!(CardBrand::from_card_id(UNKNOWN_CARD_ID), CardBrand::Other);
    }

    #[test]
    fn test_file_names() {
        assert_eq!(CardBrand::Visa.file_name(), "visa_transactions.csv");
        assert_eq!(CardBrand::DinersClub.file_name(), "diners_club_transactions.csv");
    }

    #[test]
    fn test_flatten_prefixes_columns() {
        let row = TransactionRow::flatten("MSG000000000001", &visa_transaction());

        let names: Vec<&str> = row.columns.keys().map(String::as_str).collect();
        assert_eq!(
            names,
            [
                "Message Identifier",
                "CP01_TCR_0_Raw_Line",
                "CP01_TCR_0_Authorized Amount",
                "CP01_TCR_1_Raw_Line",
                "CP01_TCR_1_Card ID",
            ]
        );
        assert_eq!(row.columns["CP01_TCR_0_Authorized Amount"], "1250");
        assert_eq!(row.card_id, "VI");
        assert_eq!(row.brand, CardBrand::Visa);
    }

    #[test]
    fn test_flatten_normalizes_card_id() {
        let row = TransactionRow::flatten("MSG1", &[record("CP01_TCR1", &[(CARD_ID, text("mc "))])]);
        assert_eq!(row.card_id, "MC");
        assert_eq!(row.brand, CardBrand::Mastercard);
        assert!(!row.columns.contains_key(OTHER_CARD_ID_COLUMN));
    }

    #[test]
    fn test_flatten_without_card_id_is_other() {
        let row = TransactionRow::flatten("MSG2", &[record("CP01_TCR0", &[])]);
        assert_eq!(row.brand, CardBrand::Other);
        assert_eq!(row.columns[OTHER_CARD_ID_COLUMN], UNKNOWN_CARD_ID);
    }

    #[test]
    fn test_flatten_blank_card_id_is_unknown() {
        let row = TransactionRow::flatten("MSG3", &[record("CP01_TCR1", &[(CARD_ID, text(""))])]);
        assert_eq!(row.card_id, UNKNOWN_CARD_ID);
    }

    #[test]
    fn test_flatten_unrecognized_card_id_is_kept() {
        let row = TransactionRow::flatten("MSG4", &[record("CP01_TCR1", &[(CARD_ID, text("ZZ"))])]);
        assert_eq!(row.brand, CardBrand::Other);
        assert_eq!(row.columns[OTHER_CARD_ID_COLUMN], "ZZ");
    }

    #[test]
    fn test_flatten_later_records_overwrite() {
        let row = TransactionRow::flatten(
            "MSG5",
            &[
                record("CP01_TCR0", &[("Tip Amount", FieldValue::Integer(1))]),
                record("CP01_TCR0", &[("Tip Amount", FieldValue::Integer(2))]),
            ],
        );
        assert_eq!(row.columns["CP01_TCR_0_Tip Amount"], "2");
    }

    #[test]
    fn test_summary_from_header_and_trailer() {
        let mut parsed = ParseResult::default();
        parsed.header = Some(record("TCR_HEADER", &[("Capture File Number", FieldValue::Integer(7))]));
        parsed.trailer = Some(record(
            "TCR_TRAILER",
            &[("Total Transaction Count", FieldValue::Integer(2))],
        ));

        let report = Report::from_parse_result(&parsed);
        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();

        let csv = String::from_utf8(out).unwrap();
        assert_eq!(
            csv,
            "Category,Field,Value\nHeader,Capture File Number,7\nTrailer,Total Transaction Count,2\n"
        );
    }

    #[test]
    fn test_empty_summary_has_placeholder() {
        let report = Report::default();
        let mut out = Vec::new();
        report.write_summary(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Message\nNo Header or Trailer records found.\n"
        );
    }

    #[test]
    fn test_empty_sheet_has_placeholder() {
        let report = Report::default();
        let mut out = Vec::new();
        report.write_sheet(CardBrand::Jcb, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Message\nNo JCB transactions found.\n");
    }

    #[test]
    fn test_sheet_uses_column_union() {
        let mut parsed = ParseResult::default();
        parsed.transactions.insert("A".to_string(), visa_transaction());
        parsed.transactions.insert(
            "B".to_string(),
            vec![
                record("CP01_TCR1", &[(CARD_ID, text("VI"))]),
                record("CP01_TCR4", &[("Merchant Name", text("ACME"))]),
            ],
        );

        let report = Report::from_parse_result(&parsed);
        let mut out = Vec::new();
        report.write_sheet(CardBrand::Visa, &mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(
            lines[0],
            "Message Identifier,CP01_TCR_0_Raw_Line,CP01_TCR_0_Authorized Amount,\
             CP01_TCR_1_Raw_Line,CP01_TCR_1_Card ID,CP01_TCR_4_Raw_Line,CP01_TCR_4_Merchant Name"
        );
        assert_eq!(lines[1], "A,raw CP01_TCR0,1250,raw CP01_TCR1,VI,,");
        assert_eq!(lines[2], "B,,,raw CP01_TCR1,VI,raw CP01_TCR4,ACME");
    }

    #[test]
    fn test_transactions_table_has_brand_column() {
        let mut parsed = ParseResult::default();
        parsed.transactions.insert("A".to_string(), visa_transaction());
        parsed
            .transactions
            .insert("B".to_string(), vec![record("CP01_TCR0", &[])]);

        let report = Report::from_parse_result(&parsed);
        let mut out = Vec::new();
        report.write_transactions(&mut out).unwrap();
        let csv = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert!(lines[0].starts_with("Message Identifier,Card Brand,CP01_TCR_0_Raw_Line"));
        assert!(lines[1].starts_with("A,VISA,"));
        assert!(lines[2].starts_with("B,Other,"));
        assert!(lines[2].ends_with(",UNKNOWN"));
    }
}
