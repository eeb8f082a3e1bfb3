//! Schema registry: maps `(application group, sequence tag)` to a layout.
//!
//! The CP01 TCR 9 layouts are kept out of the primary index. Which one
//! applies depends on data seen earlier in the transaction, so they are
//! reached only through [`IntraCountryVariant`].

use crate::error::{CaptureError, Result};
use crate::field::RECORD_WIDTH;
use crate::layouts;
use crate::schema::RecordSchema;
use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// Application groups starting with this prefix hold transaction data.
pub const TRANSACTION_GROUP_PREFIX: &str = "CP";

/// Group and sequence tag whose layout is chosen by ship-to country.
pub const INTRA_COUNTRY_GROUP: &str = "CP01";
pub const INTRA_COUNTRY_SEQUENCE: char = '9';

static BUILTIN: Lazy<SchemaRegistry> = Lazy::new(|| {
    // Validated by test_builtin_registry_is_valid.
    SchemaRegistry::new(layouts::PRIMARY_SCHEMAS).expect("built-in layouts are valid")
});

/// Country-specific layouts of CP01 TCR 9.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntraCountryVariant {
    Generic,
    Colombia,
    Japan,
    Mexico,
}

impl IntraCountryVariant {
    pub const ALL: [IntraCountryVariant; 4] = [
        IntraCountryVariant::Generic,
        IntraCountryVariant::Colombia,
        IntraCountryVariant::Japan,
        IntraCountryVariant::Mexico,
    ];

    /// Picks the variant for a TCR 3 Ship to Country Code.
    ///
    /// Case and surrounding whitespace are ignored. Unknown or missing codes
    /// select [`IntraCountryVariant::Generic`].
    pub fn from_country_code(code: Option<&str>) -> Self {
        let normalized = code.map(|c| c.trim().to_ascii_uppercase());

        match normalized.as_deref() {
            Some("COL") => IntraCountryVariant::Colombia,
            Some("JPN") => IntraCountryVariant::Japan,
            Some("MEX") => IntraCountryVariant::Mexico,
            _ => IntraCountryVariant::Generic,
        }
    }

    pub fn schema(self) -> &'static RecordSchema {
        match self {
            IntraCountryVariant::Generic => &layouts::CP01_TCR9_GENERIC,
            IntraCountryVariant::Colombia => &layouts::CP01_TCR9_COL,
            IntraCountryVariant::Japan => &layouts::CP01_TCR9_JPN,
            IntraCountryVariant::Mexico => &layouts::CP01_TCR9_MEX,
        }
    }
}

/// Immutable lookup tables over a set of record schemas.
///
/// Built once and shared read-only by any number of parses.
#[derive(Debug)]
pub struct SchemaRegistry {
    /// Application group, then sequence tag.
    primary: HashMap<&'static str, HashMap<char, &'static RecordSchema>>,

    /// Every known schema by name, intra-country variants included.
    by_name: HashMap<&'static str, &'static RecordSchema>,
}

impl SchemaRegistry {
    /// Builds a registry, validating every layout.
    ///
    /// `primary` becomes the `(group, sequence)` index. The intra-country
    /// variants are always added to the name index.
    pub fn new(primary: &[&'static RecordSchema]) -> Result<Self> {
        let mut registry = SchemaRegistry {
            primary: HashMap::new(),
            by_name: HashMap::new(),
        };

        for &schema in primary {
            validate(schema)?;

            let slot = registry
                .primary
                .entry(schema.application_group)
                .or_default()
                .insert(schema.sequence_tag, schema);
            if slot.is_some() {
                return Err(CaptureError::DuplicateSchema {
                    group: schema.application_group,
                    sequence: schema.sequence_tag,
                });
            }
            registry.by_name.insert(schema.name, schema);
        }

        for variant in IntraCountryVariant::ALL {
            let schema = variant.schema();
            validate(schema)?;
            registry.by_name.insert(schema.name, schema);
        }

        Ok(registry)
    }

    /// The registry over the built-in TC 33 layouts.
    pub fn builtin() -> &'static SchemaRegistry {
        &BUILTIN
    }

    /// Primary-index lookup.
    pub fn lookup(&self, group: &str, sequence: char) -> Option<&'static RecordSchema> {
        self.primary.get(group)?.get(&sequence).copied()
    }

    pub fn by_name(&self, name: &str) -> Option<&'static RecordSchema> {
        self.by_name.get(name).copied()
    }

    /// Number of schemas in the primary index.
    pub fn len(&self) -> usize {
        self.primary.values().map(HashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Checks the range invariants of one layout.
fn validate(schema: &'static RecordSchema) -> Result<()> {
    let mut seen = HashSet::new();

    for field in schema.fields {
        let invalid = |message: String| CaptureError::InvalidLayout {
            schema: schema.name,
            field: field.name,
            message,
        };

        if field.start == 0 {
            return Err(invalid("columns are 1-based, start is 0".to_string()));
        }
        if field.length == 0 {
            return Err(invalid("length must be positive".to_string()));
        }
        if field.end() > RECORD_WIDTH {
            return Err(invalid(format!(
                "ends at column {}, past the {}-column record",
                field.end(),
                RECORD_WIDTH
            )));
        }
        if !seen.insert(field.name) {
            return Err(invalid("declared more than once".to_string()));
        }
    }

    Ok(())
}
