// Shared Table Helpers
//
// Column enumeration used by the pandas and polars extractors. Column names are
// pulled lazily and capped; each dtype lookup is guarded on its own so a single
// bad column cannot abort the batch.

use super::base::safety::{guarded, safe_str, take_items};
use super::base::{ColumnInfo, Limits};
use crate::utils::truncate_name;
use pyo3::prelude::*;

/// Dtype label used when a column's dtype cannot be read.
pub const UNKNOWN_DTYPE: &str = "?";

/// Name + dtype for the first `max_items` entries of `names`.
///
/// `schema` is the table's dtype mapping (`dtypes` for pandas, `schema` for
/// polars); it is only ever indexed by column name.
pub fn describe_columns(
    names: &Bound<'_, PyAny>,
    schema: Option<&Bound<'_, PyAny>>,
    limits: Limits,
) -> Vec<ColumnInfo> {
    take_items(names, limits.max_items)
        .iter()
        .map(|column| ColumnInfo {
            name: truncate_name(&safe_str(column), limits.max_name_length),
            dtype: schema
                .and_then(|schema| guarded(schema.py(), schema.get_item(column)))
                .map(|dtype| safe_str(&dtype))
                .unwrap_or_else(|| UNKNOWN_DTYPE.to_string()),
        })
        .collect()
}

/// True column count: the second shape dimension when there is one, else the
/// number of names actually collected.
pub fn total_columns(shape: &[i64], collected: usize) -> usize {
    match shape.get(1) {
        Some(&n) if n >= 0 => n as usize,
        _ => collected,
    }
}

/// `Some(total)` when the column list had to be cut.
pub fn truncated_total(total: usize, limits: Limits) -> Option<usize> {
    (total > limits.max_items).then_some(total)
}
