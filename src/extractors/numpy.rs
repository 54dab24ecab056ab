//! numpy ndarray extractor.
//!
//! `shape`, `dtype`, `ndim` and `nbytes` are plain attributes on the array
//! header; element values are never read. `nbytes` is the array's own span, so
//! a view reports the view's bytes rather than its parent buffer's.

use super::base::safety::{attr_int, attr_str, shape_of};
use super::base::{ArrayInfo, InspectionRecord, RecordBody};
use super::tabular::UNKNOWN_DTYPE;
use pyo3::prelude::*;

pub fn inspect_ndarray(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    InspectionRecord::new(
        name,
        "ndarray",
        RecordBody::Array(ArrayInfo {
            shape: shape_of(obj).unwrap_or_default(),
            dtype: attr_str(obj, "dtype").unwrap_or_else(|| UNKNOWN_DTYPE.to_string()),
            ndim: attr_int(obj, "ndim"),
            nbytes: attr_int(obj, "nbytes"),
        }),
    )
}
