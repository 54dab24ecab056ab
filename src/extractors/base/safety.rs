// Safety Primitives
//
// The only way extractors touch an inspected object. Every accessor swallows
// any `Exception` (third-party accessors can raise anything, so no exception
// class is singled out) and degrades to a documented fallback instead.
//
// Interrupt-class exceptions (`BaseException` subclasses outside `Exception`,
// such as KeyboardInterrupt and SystemExit) are parked instead of dropped.
// Once one is parked every accessor falls back without calling into Python,
// and the entry point re-raises it through `reraise_interrupt`.

use crate::utils::truncate_text;
use pyo3::exceptions::PyException;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet, PyList, PySet, PyTuple};
use std::cell::RefCell;

thread_local! {
    static PENDING_INTERRUPT: RefCell<Option<PyErr>> = const { RefCell::new(None) };
}

/// `Ok` value of `result`, or `None` after absorbing the error.
///
/// Ordinary exceptions are dropped. An interrupt-class exception is kept for
/// [`reraise_interrupt`]; the first one parked wins.
pub fn guarded<T>(py: Python<'_>, result: PyResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(err) => {
            if !err.is_instance_of::<PyException>(py) {
                tracing::debug!(error = %err, "interrupt raised during inspection");
                PENDING_INTERRUPT.with(|slot| {
                    let mut slot = slot.borrow_mut();
                    if slot.is_none() {
                        *slot = Some(err);
                    }
                });
            }
            None
        }
    }
}

/// Whether an interrupt is waiting to be re-raised.
pub fn interrupted() -> bool {
    PENDING_INTERRUPT.with(|slot| slot.borrow().is_some())
}

/// Clear the parked interrupt, returning it as an `Err` if there was one.
pub fn reraise_interrupt() -> PyResult<()> {
    match PENDING_INTERRUPT.with(|slot| slot.borrow_mut().take()) {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Built-in containers above this many elements never have their repr computed.
pub const BULK_REPR_THRESHOLD: usize = 20;

/// numpy's own ceiling on array dimensionality; no real shape is longer.
const MAX_SHAPE_DIMS: usize = 64;

/// Attribute value, or `None` when the lookup raises or yields Python `None`.
pub fn safe_attr<'py>(obj: &Bound<'py, PyAny>, name: &str) -> Option<Bound<'py, PyAny>> {
    if interrupted() {
        return None;
    }
    let result = obj.getattr(name);
    if let Err(err) = &result {
        tracing::trace!(attribute = name, error = %err, "attribute lookup failed");
    }
    guarded(obj.py(), result).filter(|value| !value.is_none())
}

/// `len(obj)`, or `None` when it raises.
///
/// The interpreter rejects a negative `__len__` result with `ValueError`, so
/// negative lengths also come back as `None`.
pub fn safe_len(obj: &Bound<'_, PyAny>) -> Option<usize> {
    if interrupted() {
        return None;
    }
    guarded(obj.py(), obj.len())
}

/// `type(obj).__name__`, or `"?"`.
pub fn type_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .name()
        .ok()
        .and_then(|name| name.extract::<String>().ok())
        .unwrap_or_else(|| "?".to_string())
}

/// `type(obj).__module__`, or an empty string.
pub fn module_name(obj: &Bound<'_, PyAny>) -> String {
    obj.get_type()
        .getattr("__module__")
        .ok()
        .and_then(|module| module.extract::<String>().ok())
        .unwrap_or_default()
}

/// Top-level package of a dotted module path: "pandas.core.frame" -> "pandas".
pub fn module_root(module: &str) -> &str {
    module.split('.').next().unwrap_or_default()
}

/// `str(obj)`, or `<TypeName>` when it raises.
pub fn safe_str(obj: &Bound<'_, PyAny>) -> String {
    if !interrupted() {
        if let Some(text) = guarded(obj.py(), obj.str()) {
            return text.to_string_lossy().into_owned();
        }
    }
    format!("<{}>", type_name(obj))
}

/// Capped `repr(obj)`.
///
/// Built-in bulk containers with more than [`BULK_REPR_THRESHOLD`] elements
/// get a `<TypeName with N items>` placeholder instead of a recursive repr
/// over possibly heavy elements. Anything else is repr'd; a raising repr (or
/// one returning a non-string, which the interpreter turns into `TypeError`)
/// becomes `<TypeName>`. The result never exceeds `limit` characters.
pub fn safe_repr(obj: &Bound<'_, PyAny>, limit: usize) -> String {
    if is_bulk_container(obj) {
        if let Some(n) = safe_len(obj) {
            if n > BULK_REPR_THRESHOLD {
                return format!("<{} with {} items>", type_name(obj), n);
            }
        }
    }

    if interrupted() {
        return format!("<{}>", type_name(obj));
    }
    let result = obj.repr();
    if let Err(err) = &result {
        tracing::trace!(error = %err, "repr failed");
    }
    match guarded(obj.py(), result) {
        Some(repr) => truncate_text(&repr.to_string_lossy(), limit),
        None => format!("<{}>", type_name(obj)),
    }
}

/// dict/list/tuple/set/frozenset, subclasses included.
pub fn is_bulk_container(obj: &Bound<'_, PyAny>) -> bool {
    obj.is_instance_of::<PyDict>()
        || obj.is_instance_of::<PyList>()
        || obj.is_instance_of::<PyTuple>()
        || obj.is_instance_of::<PySet>()
        || obj.is_instance_of::<PyFrozenSet>()
}

/// Read a shape-like value (tuple of ints) into integers.
///
/// `None` when the value is not iterable or holds anything but integers.
pub fn extract_shape(value: &Bound<'_, PyAny>) -> Option<Vec<i64>> {
    let py = value.py();
    let iter = guarded(py, value.try_iter())?;
    let mut dims = Vec::new();
    for item in iter.take(MAX_SHAPE_DIMS + 1) {
        dims.push(guarded(py, item)?.extract::<i64>().ok()?);
    }
    if dims.len() > MAX_SHAPE_DIMS {
        return None;
    }
    Some(dims)
}

/// The object's `shape` attribute as integers, if it has a readable one.
pub fn shape_of(obj: &Bound<'_, PyAny>) -> Option<Vec<i64>> {
    safe_attr(obj, "shape").and_then(|shape| extract_shape(&shape))
}

/// `str()` of an attribute, e.g. a dtype label.
pub fn attr_str(obj: &Bound<'_, PyAny>, name: &str) -> Option<String> {
    safe_attr(obj, name).map(|value| safe_str(&value))
}

/// An integer attribute such as `ndim` or `nbytes`.
pub fn attr_int(obj: &Bound<'_, PyAny>, name: &str) -> Option<i64> {
    safe_attr(obj, name).and_then(|value| value.extract::<i64>().ok())
}

/// Iterate at most `limit` items of `iterable`, stopping quietly at the first
/// failure. Returns the collected items; never materializes the rest.
pub fn take_items<'py>(iterable: &Bound<'py, PyAny>, limit: usize) -> Vec<Bound<'py, PyAny>> {
    let py = iterable.py();
    if interrupted() {
        return Vec::new();
    }
    let Some(iter) = guarded(py, iterable.try_iter()) else {
        return Vec::new();
    };
    iter.take(limit).map_while(|item| guarded(py, item)).collect()
}
