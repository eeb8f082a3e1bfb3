//! # TC 33 Capture Decoder
//!
//! Decodes fixed-width TC 33 capture files into a file header, a file
//! trailer, and records grouped per transaction by Message Identifier.
//!
//! ## Design Principles
//!
//! - **Static layouts**: every record layout is a `static` field table,
//!   validated once when the registry is built
//! - **Context-driven assembly**: continuation records carry no transaction
//!   key, so the parser keeps the active transaction between lines
//! - **Best effort**: malformed lines are logged and skipped, never fatal
//! - **Deterministic output**: transactions kept in first-seen order
//!
//! ## Example
//!
//! ```no_run
//! use tc33_capture::{CaptureParser, Report};
//! use std::fs::File;
//!
//! let file = File::open("capture.tc33").unwrap();
//! let parsed = CaptureParser::new().parse_reader(file).unwrap();
//! for (message_id, records) in &parsed.transactions {
//!     println!("{}: {} records", message_id, records.len());
//! }
//! Report::from_parse_result(&parsed)
//!     .write_transactions(std::io::stdout())
//!     .unwrap();
//! ```

pub mod assembler;
pub mod error;
pub mod field;
pub mod layouts;
pub mod record;
pub mod registry;
pub mod report;
pub mod schema;

pub use assembler::CaptureParser;
pub use error::{CaptureError, Result};
pub use field::{FieldDescriptor, FieldFormat, FieldValue, RECORD_WIDTH};
pub use record::{DecodedRecord, ParseResult};
pub use registry::{IntraCountryVariant, SchemaRegistry};
pub use report::{CardBrand, Report, TransactionRow};
pub use schema::RecordSchema;
