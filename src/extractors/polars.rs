//! polars DataFrame, LazyFrame and Series extractors.
//!
//! A LazyFrame is a query plan, not data. Its schema comes exclusively from
//! `collect_schema()`, which resolves the plan's output types without running
//! it; `collect()` is never called, and no other accessor is used as a fallback.

use super::base::safety::{attr_str, guarded, safe_attr, shape_of};
use super::base::{InspectionRecord, Limits, RecordBody, SeriesInfo, TableInfo};
use super::tabular::{describe_columns, total_columns, truncated_total, UNKNOWN_DTYPE};
use pyo3::prelude::*;

pub fn inspect_dataframe(name: String, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
    let shape = shape_of(obj).unwrap_or_default();
    let schema = safe_attr(obj, "schema");

    let columns = match safe_attr(obj, "columns") {
        Some(names) => describe_columns(&names, schema.as_ref(), limits),
        None => Vec::new(),
    };
    let columns_truncated = truncated_total(total_columns(&shape, columns.len()), limits);

    let estimated_size_bytes = guarded(obj.py(), obj.call_method0("estimated_size"))
        .and_then(|size| size.extract::<i64>().ok());

    InspectionRecord::new(
        name,
        "polars.DataFrame",
        RecordBody::Table(TableInfo {
            shape: Some(shape),
            columns: Some(columns),
            columns_truncated,
            estimated_size_bytes,
            ..TableInfo::default()
        }),
    )
}

pub fn inspect_lazyframe(name: String, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
    let info = lazy_schema(obj, limits).unwrap_or_else(|err| {
        tracing::debug!(error = %err, "lazy schema unavailable; reporting plan only");
        TableInfo {
            lazy: true,
            ..TableInfo::default()
        }
    });

    InspectionRecord::new(name, "polars.LazyFrame", RecordBody::Table(info))
}

fn lazy_schema(obj: &Bound<'_, PyAny>, limits: Limits) -> PyResult<TableInfo> {
    let schema = obj.call_method0("collect_schema")?;
    let names = schema.call_method0("names")?;
    let total = names.len()?;

    let columns = describe_columns(&names, Some(&schema), limits);

    Ok(TableInfo {
        columns: Some(columns),
        columns_truncated: truncated_total(total, limits),
        lazy: true,
        ..TableInfo::default()
    })
}

pub fn inspect_series(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    InspectionRecord::new(
        name,
        "polars.Series",
        RecordBody::Series(SeriesInfo {
            shape: shape_of(obj).unwrap_or_default(),
            dtype: attr_str(obj, "dtype").unwrap_or_else(|| UNKNOWN_DTYPE.to_string()),
            series_name: attr_str(obj, "name"),
            memory_bytes: None,
        }),
    )
}
