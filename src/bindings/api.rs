// API Functions - PyO3-exposed functions for Python
//
// Module-level entry points backed by the default inspector configuration.
// Every function returns plain JSON-compatible Python values.

use super::convert::{py_to_json, to_py};
use crate::config::Detail;
use crate::extractors::base::safety::reraise_interrupt;
use crate::extractors::base::Limits;
use crate::extractors::manager::DEFAULT_MANAGER;
use crate::namespace::ListOptions;
use crate::summary;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;
use serde_json::Value;

/// Inspect one live object without triggering expensive computation
///
/// Args:
///     name (str): Binding name to report (truncated to max_name_length)
///     obj (object): Any Python object
///     max_items (int): Cap for columns, keys, children and other lists
///     max_name_length (int | None): Cap for names; None disables truncation
///
/// Returns:
///     dict: Inspection record; always contains "name" and "type"
///
/// Never raises for anything the object itself does, except that a
/// KeyboardInterrupt or SystemExit raised inside one of its accessors is
/// re-raised once inspection has unwound.
#[pyfunction]
#[pyo3(signature = (name, obj, max_items = 20, max_name_length = Some(60)))]
pub fn inspect_one<'py>(
    py: Python<'py>,
    name: &str,
    obj: &Bound<'py, PyAny>,
    max_items: usize,
    max_name_length: Option<usize>,
) -> PyResult<Bound<'py, PyAny>> {
    let record = DEFAULT_MANAGER.inspect_one(name, obj, Limits::new(max_items, max_name_length));
    reraise_interrupt()?;
    to_py(py, &record)
}

/// One-line summary of a live object
///
/// Returns:
///     str: e.g. "df: DataFrame (3×2) [id:int64, score:float64]"
#[pyfunction]
#[pyo3(signature = (name, obj, max_items = 20, max_name_length = Some(60)))]
pub fn summarize_one(
    name: &str,
    obj: &Bound<'_, PyAny>,
    max_items: usize,
    max_name_length: Option<usize>,
) -> PyResult<String> {
    let summary = DEFAULT_MANAGER.summarize_one(name, obj, Limits::new(max_items, max_name_length));
    reraise_interrupt()?;
    Ok(summary)
}

/// One-line summary of a record previously returned by inspect_one
///
/// The record is read as data; the inspected object is not touched.
///
/// Raises:
///     TypeError: If the record holds values that are not JSON-compatible
#[pyfunction]
#[pyo3(signature = (record))]
pub fn format_summary(record: &Bound<'_, PyDict>) -> PyResult<String> {
    match py_to_json(record.as_any())? {
        Value::Object(map) => Ok(summary::format_summary(&map)),
        _ => Err(PyTypeError::new_err("record must be a dict")),
    }
}

/// List user variables in a namespace dict
///
/// Skips private names (unless include_private), interpreter bindings such as
/// In/Out/get_ipython, and modules.
///
/// Args:
///     ns (dict): Namespace, e.g. globals()
///     detail (str): "basic" ({name, type, repr}), "schema" (summary strings)
///         or "full" (inspection records)
///     max_variables (int): Cap on the number of entries
///     filter_name (str | None): Case-insensitive substring filter on names
///
/// Raises:
///     ValueError: If detail is not one of the three levels
#[pyfunction]
#[pyo3(signature = (
    ns,
    detail = "basic",
    max_variables = 50,
    max_items = 20,
    max_name_length = Some(60),
    filter_name = None,
    include_private = false
))]
#[allow(clippy::too_many_arguments)]
pub fn list_user_variables<'py>(
    py: Python<'py>,
    ns: &Bound<'py, PyDict>,
    detail: &str,
    max_variables: usize,
    max_items: usize,
    max_name_length: Option<usize>,
    filter_name: Option<String>,
    include_private: bool,
) -> PyResult<Bound<'py, PyAny>> {
    let options = ListOptions {
        detail: detail.parse::<Detail>()?,
        max_variables,
        limits: Limits::new(max_items, max_name_length),
        filter_name,
        include_private,
    };
    let listing = DEFAULT_MANAGER.list_user_variables(ns, &options);
    reraise_interrupt()?;
    to_py(py, &listing)
}

/// Full inspection record for one binding in a namespace
///
/// Returns:
///     dict | None: The record, or None when `name` is not bound in `ns`
#[pyfunction]
#[pyo3(signature = (ns, name, max_items = 20, max_name_length = Some(60)))]
pub fn inspect_variable<'py>(
    py: Python<'py>,
    ns: &Bound<'py, PyDict>,
    name: &str,
    max_items: usize,
    max_name_length: Option<usize>,
) -> PyResult<Option<Bound<'py, PyAny>>> {
    let record = DEFAULT_MANAGER.get_variable(ns, name, Limits::new(max_items, max_name_length));
    reraise_interrupt()?;
    record.map(|record| to_py(py, &record)).transpose()
}

/// Install a stderr tracing subscriber for debugging
///
/// The VARIABLE_INSPECTOR_LOG environment variable takes precedence over
/// `filter`; the default is "warn".
///
/// Returns:
///     bool: False when a subscriber was already installed
///
/// Raises:
///     ValueError: If the filter directives are invalid
#[pyfunction]
#[pyo3(signature = (filter = None))]
pub fn init_tracing(filter: Option<&str>) -> PyResult<bool> {
    crate::logging::init_tracing(filter).map_err(|e| PyValueError::new_err(format!("{e:#}")))
}
