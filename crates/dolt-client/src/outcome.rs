//! Result-set projections for procedure outcomes
//!
//! Dolt procedures report through a small single-row result set: a `status`
//! column (zero on success), a `hash` column for commits, a `violations`
//! count for constraint verification, or the hash/fast_forward/conflicts
//! triple for merge-shaped procedures. The helpers here pull those shapes
//! out of [`mysql_async`] rows. Column values arrive as protocol [`Value`]s
//! and are coerced leniently, since the text protocol delivers numbers as
//! byte strings.

use mysql_async::{Row, Value};

use crate::error::{DoltError, Result};

/// Outcome of a merge-shaped procedure (`DOLT_MERGE`, `DOLT_PULL`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    /// Hash of the resulting commit, when the server produced one. Empty
    /// hashes (reported for conflicted merges) map to `None`.
    pub hash: Option<String>,
    /// Whether the merge was resolved as a fast-forward.
    pub fast_forward: bool,
    /// Number of conflicting tables left behind.
    pub conflicts: u64,
}

impl MergeOutcome {
    /// True when the merge left no conflicts behind.
    pub fn is_clean(&self) -> bool {
        self.conflicts == 0
    }

    pub(crate) fn from_columns(
        procedure: &'static str,
        columns: &[(String, Value)],
    ) -> Result<Self> {
        let fast_forward = named(columns, "fast_forward")
            .and_then(as_i64)
            .ok_or_else(|| missing_column(procedure, "fast_forward"))?
            != 0;
        let conflicts = named(columns, "conflicts")
            .and_then(as_u64)
            .ok_or_else(|| missing_column(procedure, "conflicts"))?;
        let hash = named(columns, "hash")
            .and_then(as_string)
            .filter(|hash| !hash.is_empty());
        Ok(Self {
            hash,
            fast_forward,
            conflicts,
        })
    }
}

/// Split a row into (column name, raw value) pairs.
pub(crate) fn row_columns(row: &Row) -> Vec<(String, Value)> {
    row.columns_ref()
        .iter()
        .enumerate()
        .map(|(idx, column)| {
            let value = row.get(idx).unwrap_or(Value::NULL);
            (column.name_str().to_string(), value)
        })
        .collect()
}

pub(crate) fn require_row(procedure: &'static str, row: Option<Row>) -> Result<Row> {
    row.ok_or_else(|| DoltError::UnexpectedResult {
        procedure,
        detail: "no result row".to_string(),
    })
}

/// Whether the `status` column of a procedure result reports success (zero).
pub(crate) fn status_is_ok(procedure: &'static str, row: Option<Row>) -> Result<bool> {
    let row = require_row(procedure, row)?;
    let status = status_code(&row_columns(&row))
        .ok_or_else(|| missing_column(procedure, "status"))?;
    Ok(status == 0)
}

pub(crate) fn status_code(columns: &[(String, Value)]) -> Option<i64> {
    named(columns, "status").and_then(as_i64)
}

/// The `hash` column of a commit-shaped result.
pub(crate) fn commit_hash(procedure: &'static str, row: Option<Row>) -> Result<String> {
    let row = require_row(procedure, row)?;
    hash_value(&row_columns(&row)).ok_or_else(|| missing_column(procedure, "hash"))
}

pub(crate) fn hash_value(columns: &[(String, Value)]) -> Option<String> {
    named(columns, "hash").and_then(as_string)
}

/// Whether the `violations` column reports outstanding constraint violations.
pub(crate) fn violations_found(procedure: &'static str, row: Option<Row>) -> Result<bool> {
    let row = require_row(procedure, row)?;
    let violations = violations_count(&row_columns(&row))
        .ok_or_else(|| missing_column(procedure, "violations"))?;
    Ok(violations != 0)
}

pub(crate) fn violations_count(columns: &[(String, Value)]) -> Option<i64> {
    named(columns, "violations").and_then(as_i64)
}

pub(crate) fn merge_outcome(procedure: &'static str, row: Option<Row>) -> Result<MergeOutcome> {
    let row = require_row(procedure, row)?;
    MergeOutcome::from_columns(procedure, &row_columns(&row))
}

/// Find a column by name.
pub(crate) fn named<'c>(columns: &'c [(String, Value)], name: &str) -> Option<&'c Value> {
    columns
        .iter()
        .find(|(column, _)| column == name)
        .map(|(_, value)| value)
}

pub(crate) fn as_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Int(v) => Some(*v),
        Value::UInt(v) => i64::try_from(*v).ok(),
        Value::Bytes(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn as_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Int(v) => u64::try_from(*v).ok(),
        Value::UInt(v) => Some(*v),
        Value::Bytes(bytes) => std::str::from_utf8(bytes).ok()?.trim().parse().ok(),
        _ => None,
    }
}

/// String coercion; NULL and non-text values map to `None`.
pub(crate) fn as_string(value: &Value) -> Option<String> {
    match value {
        Value::Bytes(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

fn missing_column(procedure: &'static str, column: &str) -> DoltError {
    DoltError::UnexpectedResult {
        procedure,
        detail: format!("missing or unreadable column `{column}`"),
    }
}
