//! Single-pass transaction assembler.
//!
//! Walks a capture file line by line, resolves the schema of each line and
//! groups the decoded records by Message Identifier. Lines that cannot be
//! resolved are logged and skipped; nothing aborts the parse.
//!
//! Input is handled as bytes. Fields sit at fixed byte offsets, and only the
//! bytes of a single field are ever interpreted as text.

use crate::error::Result;
use crate::layouts::{self, MESSAGE_IDENTIFIER, SHIP_TO_COUNTRY_CODE};
use crate::record::{DecodedRecord, ParseResult};
use crate::registry::{
    IntraCountryVariant, SchemaRegistry, INTRA_COUNTRY_GROUP, INTRA_COUNTRY_SEQUENCE,
    TRANSACTION_GROUP_PREFIX,
};
use crate::schema::{normalize, LineTokens, RecordSchema};
use log::{debug, info, warn};
use std::borrow::Cow;
use std::io::Read;

/// Number of characters of a line echoed in diagnostics.
const PREVIEW_CHARS: usize = 60;

/// Decodes capture files against a schema registry.
///
/// The parser holds no per-file state, so one instance can serve any number
/// of parses.
#[derive(Debug, Clone, Copy)]
pub struct CaptureParser<'r> {
    registry: &'r SchemaRegistry,
}

/// Context carried from one line to the next within a single parse.
#[derive(Debug, Default)]
struct AssemblerState {
    active_message_id: Option<String>,
    active_group: Option<String>,

    /// First non-empty Ship to Country Code seen in a CP01 TCR 3 of the
    /// active transaction.
    ship_to_country: Option<String>,
}

impl AssemblerState {
    fn start(&mut self, message_id: String, group: &str) {
        self.active_message_id = Some(message_id);
        self.active_group = Some(group.to_string());
        self.ship_to_country = None;
    }

    fn reset(&mut self) {
        *self = AssemblerState::default();
    }

    /// Returns the active message id and group, if both are set.
    fn context(&self) -> Option<(&str, &str)> {
        Some((
            self.active_message_id.as_deref()?,
            self.active_group.as_deref()?,
        ))
    }

    /// Records whatever later lines of this transaction may depend on.
    fn remember(&mut self, schema: &RecordSchema, record: &DecodedRecord) {
        if self.ship_to_country.is_some() || !schema.is(&layouts::CP01_TCR3) {
            return;
        }

        if let Some(code) = record.text(SHIP_TO_COUNTRY_CODE).filter(|c| !c.is_empty()) {
            self.ship_to_country = Some(code.to_string());
        }
    }
}

/// One input line with the views every stage needs.
struct Line<'a> {
    number: usize,
    /// Padded to the record width; fields are sliced from here.
    padded: Cow<'a, [u8]>,
    /// Whole line as text, trimmed. Kept on the record and used in logs.
    text: String,
}

impl Line<'_> {
    fn preview(&self) -> String {
        self.text.chars().take(PREVIEW_CHARS).collect()
    }
}

impl CaptureParser<'static> {
    /// Creates a parser over the built-in TC 33 layouts.
    pub fn new() -> Self {
        CaptureParser::with_registry(SchemaRegistry::builtin())
    }
}

impl Default for CaptureParser<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> CaptureParser<'r> {
    pub fn with_registry(registry: &'r SchemaRegistry) -> Self {
        CaptureParser { registry }
    }

    /// Reads all of `reader` and parses it.
    pub fn parse_reader<R: Read>(&self, mut reader: R) -> Result<ParseResult> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        Ok(self.parse_bytes(&bytes))
    }

    /// Parses the full text of a capture file.
    pub fn parse_str(&self, text: &str) -> ParseResult {
        self.parse_bytes(text.as_bytes())
    }

    /// Parses the raw content of a capture file.
    ///
    /// Invalid UTF-8 is tolerated: it only affects the fields it falls in.
    pub fn parse_bytes(&self, bytes: &[u8]) -> ParseResult {
        let mut result = ParseResult::default();
        let mut state = AssemblerState::default();

        for (line_idx, raw_line) in split_lines(bytes).enumerate() {
            let text = String::from_utf8_lossy(raw_line).trim().to_string();
            if text.is_empty() {
                continue;
            }

            let line = Line {
                number: line_idx + 1,
                padded: normalize(raw_line),
                text,
            };
            let tokens = LineTokens::extract(&line.padded);

            let schema = match tokens.sequence_tag {
                Some('0') => self.open_group(&mut state, &tokens, &line),
                tag => self.continue_group(&state, tag, &line),
            };
            let Some(schema) = schema else {
                continue;
            };

            let record = decode_record(schema, &tokens, &line);

            if schema.is(&layouts::TCR_HEADER) {
                debug!("Line {}: Found file header", line.number);
                result.header = Some(record);
            } else if schema.is(&layouts::TCR_TRAILER) {
                debug!(
                    "Line {}: Found file trailer, total transaction count {}",
                    line.number,
                    record
                        .field("Total Transaction Count")
                        .map(ToString::to_string)
                        .unwrap_or_default()
                );
                result.trailer = Some(record);
            } else if let Some(message_id) = state.active_message_id.clone() {
                state.remember(schema, &record);
                let bucket = result.transactions.entry(message_id).or_default();
                bucket.push(record);
                debug!(
                    "Line {}: Added {} to transaction {} ({} records)",
                    line.number,
                    schema.name,
                    state.active_message_id.as_deref().unwrap_or_default(),
                    bucket.len()
                );
            } else {
                warn!(
                    "Line {}: Decoded {} but no transaction is active, dropping it. Raw: {}",
                    line.number,
                    schema.name,
                    line.preview()
                );
            }
        }

        info!(
            "Parsed {} transactions ({} records)",
            result.transactions.len(),
            result.record_count()
        );

        result
    }

    /// Decodes one line with no file context.
    ///
    /// The line's own columns 17-20 are used as its application group, which
    /// only holds for sequence 0 records; CP01 TCR 9 always decodes with the
    /// generic layout. Meant for inspecting single records.
    pub fn decode_line(&self, raw_line: &[u8]) -> Option<DecodedRecord> {
        let text = String::from_utf8_lossy(raw_line).trim().to_string();
        if text.is_empty() {
            return None;
        }

        let line = Line {
            number: 1,
            padded: normalize(raw_line),
            text,
        };
        let tokens = LineTokens::extract(&line.padded);
        let sequence = tokens.sequence_tag?;

        let schema = self
            .registry
            .lookup(&tokens.application_group, sequence)
            .or_else(|| {
                is_intra_country(&tokens.application_group, sequence)
                    .then(|| IntraCountryVariant::Generic.schema())
            })?;

        Some(decode_record(schema, &tokens, &line))
    }

    /// Handles a sequence 0 record: it may start, continue or end a
    /// transaction, or be a file header/trailer.
    fn open_group(
        &self,
        state: &mut AssemblerState,
        tokens: &LineTokens,
        line: &Line<'_>,
    ) -> Option<&'static RecordSchema> {
        let group = tokens.application_group.as_str();

        let Some(schema) = self.registry.lookup(group, '0') else {
            warn!(
                "Line {}: Unrecognized TCR 0 for application group '{}', skipping. Raw: {}",
                line.number,
                group,
                line.preview()
            );
            return None;
        };

        let Some(field) = schema.field(MESSAGE_IDENTIFIER) else {
            debug!(
                "Line {}: File-level record {}, resetting transaction context",
                line.number, group
            );
            state.reset();
            return Some(schema);
        };

        let message_id = field.decode(&line.padded).to_string();

        if message_id.is_empty() {
            warn!(
                "Line {}: {} has an empty Message Identifier, resetting transaction context. Raw: {}",
                line.number,
                schema.name,
                line.preview()
            );
            state.reset();
        } else if state.active_message_id.as_deref() != Some(message_id.as_str()) {
            debug!(
                "Line {}: New transaction {} (was {:?}), group {}",
                line.number, message_id, state.active_message_id, group
            );
            state.start(message_id, group);
        } else if group.starts_with(TRANSACTION_GROUP_PREFIX) {
            debug!(
                "Line {}: Transaction {} continues with group {}",
                line.number, message_id, group
            );
            state.active_group = Some(group.to_string());
        }

        Some(schema)
    }

    /// Resolves a non-zero sequence record against the active group.
    fn continue_group(
        &self,
        state: &AssemblerState,
        tag: Option<char>,
        line: &Line<'_>,
    ) -> Option<&'static RecordSchema> {
        let Some((message_id, group)) = state.context() else {
            warn!(
                "Line {}: No active transaction, skipping. Raw: {}",
                line.number,
                line.preview()
            );
            return None;
        };

        let schema = tag.and_then(|sequence| {
            self.registry.lookup(group, sequence).or_else(|| {
                if !is_intra_country(group, sequence) {
                    return None;
                }
                let variant = IntraCountryVariant::from_country_code(state.ship_to_country.as_deref());
                debug!(
                    "Line {}: CP01 TCR 9 of transaction {} decoded as {:?}",
                    line.number, message_id, variant
                );
                Some(variant.schema())
            })
        });

        if schema.is_none() {
            warn!(
                "Line {}: No layout for group '{}' sequence '{}', skipping. Raw: {}",
                line.number,
                group,
                tag.map(String::from).unwrap_or_default(),
                line.preview()
            );
        }

        schema
    }
}

/// Splits on `\n`, `\r\n` and a bare `\r`.
fn split_lines(bytes: &[u8]) -> impl Iterator<Item = &[u8]> + '_ {
    let mut rest = bytes;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }

        let Some(pos) = rest.iter().position(|&b| b == b'\n' || b == b'\r') else {
            let line = rest;
            rest = &[];
            return Some(line);
        };

        let line = &rest[..pos];
        let terminator = if rest[pos..].starts_with(b"\r\n") { 2 } else { 1 };
        rest = &rest[pos + terminator..];
        Some(line)
    })
}

fn is_intra_country(group: &str, sequence: char) -> bool {
    group == INTRA_COUNTRY_GROUP && sequence == INTRA_COUNTRY_SEQUENCE
}

/// Decodes every field of `schema` from a line.
fn decode_record(schema: &'static RecordSchema, tokens: &LineTokens, line: &Line<'_>) -> DecodedRecord {
    DecodedRecord {
        schema_name: schema.name,
        record_type: tokens.record_type.clone(),
        qualifier: tokens.qualifier.clone(),
        sequence_tag: tokens.sequence_tag_str(),
        application_group: schema.application_group,
        fields: schema.decode_fields(&line.padded),
        raw_text: line.text.clone(),
    }
}
