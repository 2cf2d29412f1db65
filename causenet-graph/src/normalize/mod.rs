//! Record Normalizer: turns one raw relation cell into validated descriptors.
//!
//! Parse failures and validation failures are both recovered here. The caller
//! sees a [`CellOutcome`] and treats anything but `Valid` as "no relations".

pub mod repair;
pub mod validate;

use std::borrow::Cow;

use causenet_core::errors::{CellError, ValidationError};
use causenet_core::{ImpactPolicy, RawRow, RelationCell, RelationDescriptor, RelationRole};
use serde_json::Value;

pub use repair::{RepairPipeline, RepairRule, STANDARD_RULES};
pub use validate::validate_relations;

/// Repair `raw` with the standard rules and parse it as a JSON array.
pub fn parse_cell(raw: &str) -> Result<Vec<Value>, CellError> {
    parse_repaired(&repair::repair_with(&STANDARD_RULES, raw))
}

impl RepairPipeline {
    /// Repair `raw` with this pipeline and parse it as a JSON array.
    pub fn parse(&self, raw: &str) -> Result<Vec<Value>, CellError> {
        parse_repaired(&self.repair(raw))
    }
}

fn parse_repaired(text: &str) -> Result<Vec<Value>, CellError> {
    let value: Value = serde_json::from_str(text).map_err(|e| CellError::InvalidJson {
        message: e.to_string(),
    })?;
    match value {
        Value::Array(items) => Ok(items),
        other => Err(CellError::NotAnArray {
            found: json_kind(&other).to_string(),
        }),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Absent cells and unparseable cells both yield `None`.
pub fn normalize_cell(raw: Option<&str>) -> Option<Vec<Value>> {
    let raw = raw?;
    match parse_cell(raw) {
        Ok(items) => Some(items),
        Err(e) => {
            tracing::debug!(error = %e, "discarding unparseable relation cell");
            None
        }
    }
}

/// What became of one row's relation cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    /// The cell is missing.
    Empty,
    /// The cell did not parse after repair.
    Unparseable(CellError),
    /// The cell parsed but failed validation; the whole list is dropped.
    Rejected(ValidationError),
    Valid(Vec<RelationDescriptor>),
}

impl CellOutcome {
    /// The descriptors, or an empty slice for every non-valid outcome.
    pub fn descriptors(&self) -> &[RelationDescriptor] {
        match self {
            Self::Valid(list) => list,
            _ => &[],
        }
    }
}

/// Read and validate the `role` cell of `row`. Only text cells go through
/// repair and parsing; structured arrays are validated as they are.
pub fn read_relations(row: &RawRow, role: RelationRole, policy: ImpactPolicy) -> CellOutcome {
    let items: Cow<'_, [Value]> = match row.relation_cell(role.column()) {
        None => return CellOutcome::Empty,
        Some(RelationCell::Items(items)) => Cow::Borrowed(items),
        Some(RelationCell::Text(raw)) => match parse_cell(&raw) {
            Ok(items) => Cow::Owned(items),
            Err(e) => return CellOutcome::Unparseable(e),
        },
    };
    match validate_relations(&items, role, policy) {
        Ok(list) => CellOutcome::Valid(list),
        Err(e) => CellOutcome::Rejected(e),
    }
}
