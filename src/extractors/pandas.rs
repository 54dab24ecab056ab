//! pandas DataFrame and Series extractors.
//!
//! Reads only metadata pandas keeps alongside the data: `shape`, `columns`,
//! `dtypes`, `index` and shallow `memory_usage(deep=False)`. Rows are never
//! touched.

use super::base::safety::{attr_int, attr_str, guarded, safe_attr, safe_str, shape_of, type_name};
use super::base::{InspectionRecord, Limits, RecordBody, SeriesInfo, TableInfo};
use super::tabular::{describe_columns, total_columns, truncated_total, UNKNOWN_DTYPE};
use pyo3::prelude::*;
use pyo3::types::PyDict;

pub fn inspect_dataframe(name: String, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
    let shape = shape_of(obj).unwrap_or_default();
    let dtypes = safe_attr(obj, "dtypes");

    let columns = match safe_attr(obj, "columns") {
        Some(names) => describe_columns(&names, dtypes.as_ref(), limits),
        None => Vec::new(),
    };
    let columns_truncated = truncated_total(total_columns(&shape, columns.len()), limits);

    let mut info = TableInfo {
        shape: Some(shape),
        columns: Some(columns),
        columns_truncated,
        memory_bytes: shallow_memory_usage(obj)
            .and_then(|usage| guarded(obj.py(), usage.call_method0("sum")))
            .and_then(|total| total.extract::<i64>().ok()),
        ..TableInfo::default()
    };
    describe_index(obj, &mut info);

    InspectionRecord::new(name, "DataFrame", RecordBody::Table(info))
}

fn describe_index(obj: &Bound<'_, PyAny>, info: &mut TableInfo) {
    let Some(index) = safe_attr(obj, "index") else {
        return;
    };

    info.index_dtype = Some(attr_str(&index, "dtype").unwrap_or_else(|| UNKNOWN_DTYPE.to_string()));

    if type_name(&index) == "MultiIndex" {
        info.index_type = Some("MultiIndex".to_string());
        info.index_nlevels = attr_int(&index, "nlevels");
        info.index_names = safe_attr(&index, "names").and_then(|names| {
            let py = names.py();
            let iter = guarded(py, names.try_iter())?;
            Some(
                iter.map_while(|level| guarded(py, level))
                    .map(|level| (!level.is_none()).then(|| safe_str(&level)))
                    .collect(),
            )
        });
    }
}

// `memory_usage(deep=False)`: per-column buffer sizes, no object scanning.
fn shallow_memory_usage<'py>(obj: &Bound<'py, PyAny>) -> Option<Bound<'py, PyAny>> {
    let kwargs = PyDict::new(obj.py());
    kwargs.set_item("deep", false).ok()?;
    guarded(obj.py(), obj.call_method("memory_usage", (), Some(&kwargs)))
}

pub fn inspect_series(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    let memory_bytes = shallow_memory_usage(obj).and_then(|usage| usage.extract::<i64>().ok());

    InspectionRecord::new(
        name,
        "Series",
        RecordBody::Series(SeriesInfo {
            shape: shape_of(obj).unwrap_or_default(),
            dtype: attr_str(obj, "dtype").unwrap_or_else(|| UNKNOWN_DTYPE.to_string()),
            series_name: attr_str(obj, "name"),
            memory_bytes,
        }),
    )
}
