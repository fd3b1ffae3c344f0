//! Reshaping tables between long and wide form.
//!
//! A *long* table holds one attribute/value pair per row:
//!
//! ```text
//! key   attribute   value
//! k1    a1          1
//! k1    a2          2
//! ```
//!
//! A *wide* table holds one column per attribute:
//!
//! ```text
//! key   a1   a2
//! k1    1    2
//! ```
//!
//! [`pivot`] turns long into wide, [`unpivot`] and [`unpivot_rest`] turn wide
//! into long. For a wide table without missing cells and with distinct
//! identifying fields per row, pivoting the unpivoted table gives back the
//! original rows.
//!
//! # Grouping
//!
//! `pivot` merges *consecutive* rows whose fields, other than the attribute
//! and value columns, are equal. Rows of the same logical group that are not
//! adjacent produce separate output rows.
//!
//! # Examples
//!
//! ```rust
//! use adjunct::table::{pivot, unpivot};
//! use adjunct::value::Row;
//! use serde_json::{Value, json};
//!
//! fn rows(value: Value) -> Vec<Row> {
//!     serde_json::from_value(value).unwrap()
//! }
//!
//! let wide = rows(json!([{"key": "k1", "a1": 1, "a2": 2}]));
//! let long = unpivot(&["a1", "a2"], "attribute", "value", &wide);
//! assert_eq!(
//!     long,
//!     rows(json!([
//!         {"attribute": "a1", "value": 1, "key": "k1"},
//!         {"attribute": "a2", "value": 2, "key": "k1"},
//!     ]))
//! );
//! assert_eq!(pivot("attribute", "value", &long), wide);
//! ```

use serde_json::{Map, Value};

use crate::value::{Row, key_text, loose_equals_rows};

// =============================================================================
// Conflict resolution
// =============================================================================

/// Keeps the value already in the cell.
pub fn keep_first(existing: &Value, _incoming: &Value) -> Value {
    existing.clone()
}

/// Replaces the cell with the incoming value.
pub fn keep_last(_existing: &Value, incoming: &Value) -> Value {
    incoming.clone()
}

/// Keeps the numerically smaller value; non-numbers keep the existing value.
///
/// # Examples
///
/// ```rust
/// use adjunct::table::numeric_min;
/// use serde_json::json;
///
/// assert_eq!(numeric_min(&json!(2), &json!(8)), json!(2));
/// assert_eq!(numeric_min(&json!(8), &json!(2.5)), json!(2.5));
/// assert_eq!(numeric_min(&json!("x"), &json!(1)), json!("x"));
/// ```
pub fn numeric_min(existing: &Value, incoming: &Value) -> Value {
    match (existing.as_f64(), incoming.as_f64()) {
        (Some(a), Some(b)) if b < a => incoming.clone(),
        _ => existing.clone(),
    }
}

/// Keeps the numerically larger value; non-numbers keep the existing value.
pub fn numeric_max(existing: &Value, incoming: &Value) -> Value {
    match (existing.as_f64(), incoming.as_f64()) {
        (Some(a), Some(b)) if b > a => incoming.clone(),
        _ => existing.clone(),
    }
}

// =============================================================================
// Pivot
// =============================================================================

/// The fields that identify a row's group.
fn identity_of(row: &Row, attribute_column: &str, value_column: &str) -> Row {
    row.iter()
        .filter(|(name, _)| name.as_str() != attribute_column && name.as_str() != value_column)
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// The `(column, value)` a long row contributes, if any.
fn pivot_cell<'a>(
    row: &'a Row,
    attribute_column: &str,
    value_column: &str,
) -> Option<(String, &'a Value)> {
    let column = key_text(row.get(attribute_column)?)?;
    let value = row.get(value_column)?;
    Some((column, value))
}

/// Pivots a long table, merging clashing cells with `resolve`.
///
/// `resolve(existing, incoming)` is called when a group yields a second value
/// for a column it already holds, including one of the group's identifying
/// fields.
///
/// # Examples
///
/// ```rust
/// use adjunct::table::{numeric_min, pivot_with};
/// use adjunct::value::Row;
/// use serde_json::{Value, json};
///
/// fn rows(value: Value) -> Vec<Row> {
///     serde_json::from_value(value).unwrap()
/// }
///
/// let long = rows(json!([
///     {"key": "key1", "attribute": "attribute1", "value": 1},
///     {"key": "key1", "attribute": "attribute3", "value": 3},
///     {"key": "key2", "attribute": "attribute1", "value": 2},
///     {"key": "key2", "attribute": "attribute1", "value": 8},
///     {"key": "key2", "attribute": "attribute2", "value": 4},
/// ]));
/// assert_eq!(
///     pivot_with(numeric_min, "attribute", "value", &long),
///     rows(json!([
///         {"key": "key1", "attribute1": 1, "attribute3": 3},
///         {"key": "key2", "attribute1": 2, "attribute2": 4},
///     ]))
/// );
/// ```
pub fn pivot_with<F>(resolve: F, attribute_column: &str, value_column: &str, rows: &[Row]) -> Vec<Row>
where
    F: Fn(&Value, &Value) -> Value,
{
    let mut pivoted: Vec<Row> = Vec::new();
    let mut group_identity: Option<Row> = None;

    for row in rows {
        let identity = identity_of(row, attribute_column, value_column);
        let same_group = group_identity
            .as_ref()
            .is_some_and(|current| loose_equals_rows(current, &identity));
        if !same_group {
            pivoted.push(identity.clone());
            group_identity = Some(identity);
        }

        let Some((column, incoming)) = pivot_cell(row, attribute_column, value_column) else {
            continue;
        };
        if let Some(target) = pivoted.last_mut() {
            match target.get_mut(&column) {
                Some(existing) => {
                    let resolved = resolve(existing, incoming);
                    *existing = resolved;
                }
                None => {
                    target.insert(column, incoming.clone());
                }
            }
        }
    }

    tracing::trace!(
        rows = rows.len(),
        groups = pivoted.len(),
        attribute_column,
        value_column,
        "pivoted table"
    );
    pivoted
}

/// Pivots a long table, keeping the first value seen for each cell.
///
/// # Examples
///
/// ```rust
/// use adjunct::table::pivot;
/// use adjunct::value::Row;
/// use serde_json::{Value, json};
///
/// fn rows(value: Value) -> Vec<Row> {
///     serde_json::from_value(value).unwrap()
/// }
///
/// let long = rows(json!([
///     {"key": "key1", "attribute": "attribute1", "value": 1},
///     {"key": "key1", "attribute": "attribute3", "value": 3},
/// ]));
/// assert_eq!(
///     pivot("attribute", "value", &long),
///     rows(json!([{"key": "key1", "attribute1": 1, "attribute3": 3}]))
/// );
/// ```
pub fn pivot(attribute_column: &str, value_column: &str, rows: &[Row]) -> Vec<Row> {
    pivot_with(keep_first, attribute_column, value_column, rows)
}

/// Curried [`pivot`]: fixes the column names and waits for the rows.
pub fn pivot_by(attribute_column: &str, value_column: &str) -> impl Fn(&[Row]) -> Vec<Row> + use<> {
    let attribute_column = attribute_column.to_string();
    let value_column = value_column.to_string();
    move |rows| pivot(&attribute_column, &value_column, rows)
}

// =============================================================================
// Unpivot
// =============================================================================

fn long_row(
    attribute_column: &str,
    attribute: &str,
    value_column: &str,
    value: &Value,
    carried: &Row,
) -> Row {
    let mut row = Map::with_capacity(carried.len() + 2);
    row.insert(attribute_column.to_string(), Value::String(attribute.to_string()));
    row.insert(value_column.to_string(), value.clone());
    row.extend(carried.iter().map(|(name, value)| (name.clone(), value.clone())));
    row
}

fn present(value: &Value) -> Option<&Value> {
    (!value.is_null()).then_some(value)
}

/// Unpivots the listed columns.
///
/// Each row yields one long row per listed column holding a non-null value,
/// in `columns` order. The remaining fields are carried along and win over
/// the attribute and value columns on name collision.
///
/// # Examples
///
/// ```rust
/// use adjunct::table::unpivot;
/// use adjunct::value::Row;
/// use serde_json::{Value, json};
///
/// fn rows(value: Value) -> Vec<Row> {
///     serde_json::from_value(value).unwrap()
/// }
///
/// let wide = rows(json!([{"key": "key1", "attribute1": 1, "attribute2": null, "attribute3": 3}]));
/// assert_eq!(
///     unpivot(&["attribute1", "attribute2", "attribute3"], "attribute", "value", &wide),
///     rows(json!([
///         {"attribute": "attribute1", "value": 1, "key": "key1"},
///         {"attribute": "attribute3", "value": 3, "key": "key1"},
///     ]))
/// );
/// ```
pub fn unpivot(columns: &[&str], attribute_column: &str, value_column: &str, rows: &[Row]) -> Vec<Row> {
    let unpivoted: Vec<Row> = rows
        .iter()
        .flat_map(|row| {
            let carried: Row = row
                .iter()
                .filter(|(name, _)| !columns.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect();
            columns
                .iter()
                .enumerate()
                .filter(|(position, column)| !columns[..*position].contains(*column))
                .filter_map(|(_, column)| {
                    let value = present(row.get(*column)?)?;
                    Some(long_row(attribute_column, column, value_column, value, &carried))
                })
                .collect::<Vec<_>>()
        })
        .collect();

    tracing::trace!(rows = rows.len(), produced = unpivoted.len(), "unpivoted table");
    unpivoted
}

/// Unpivots every column except the listed ones.
///
/// The `keep` fields are carried along in `keep` order; every other non-null
/// field becomes a long row, in row order.
///
/// # Examples
///
/// ```rust
/// use adjunct::table::unpivot_rest;
/// use adjunct::value::Row;
/// use serde_json::{Value, json};
///
/// fn rows(value: Value) -> Vec<Row> {
///     serde_json::from_value(value).unwrap()
/// }
///
/// let wide = rows(json!([{"key": "key1", "attribute1": 1, "attribute2": null, "attribute3": 3}]));
/// assert_eq!(
///     unpivot_rest(&["key"], "attribute", "value", &wide),
///     rows(json!([
///         {"attribute": "attribute1", "value": 1, "key": "key1"},
///         {"attribute": "attribute3", "value": 3, "key": "key1"},
///     ]))
/// );
/// ```
pub fn unpivot_rest(keep: &[&str], attribute_column: &str, value_column: &str, rows: &[Row]) -> Vec<Row> {
    let unpivoted: Vec<Row> = rows
        .iter()
        .flat_map(|row| {
            let carried: Row = keep
                .iter()
                .filter_map(|name| row.get(*name).map(|value| ((*name).to_string(), value.clone())))
                .collect();
            row.iter()
                .filter(|(name, _)| !keep.contains(&name.as_str()))
                .filter_map(|(name, value)| {
                    let value = present(value)?;
                    Some(long_row(attribute_column, name, value_column, value, &carried))
                })
                .collect::<Vec<_>>()
        })
        .collect();

    tracing::trace!(rows = rows.len(), produced = unpivoted.len(), "unpivoted remaining columns");
    unpivoted
}
