//! Conversion between JSON values and Python objects.
//!
//! Records cross the boundary as plain dicts/lists/strs/ints so that callers
//! can `json.dumps` them directly. The reverse direction exists for
//! `format_summary`, which accepts a record dict produced earlier.

use crate::errors::InspectorError;
use pyo3::exceptions::{PyTypeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::{PyBool, PyDict, PyFloat, PyInt, PyList, PyString, PyTuple};
use serde::Serialize;
use serde_json::{Map, Number, Value};

/// Records are shallow; anything nested deeper than this is not a record.
const MAX_DEPTH: usize = 16;

/// Serialize `value` and convert the result to Python objects.
pub fn to_py<'py, T: Serialize>(py: Python<'py>, value: &T) -> PyResult<Bound<'py, PyAny>> {
    let json = serde_json::to_value(value).map_err(InspectorError::Serialize)?;
    json_to_py(py, &json)
}

pub fn json_to_py<'py>(py: Python<'py>, value: &Value) -> PyResult<Bound<'py, PyAny>> {
    match value {
        Value::Null => Ok(py.None().into_bound(py)),
        Value::Bool(b) => Ok(PyBool::new(py, *b).to_owned().into_any()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(i.into_pyobject(py)?.into_any())
            } else if let Some(u) = n.as_u64() {
                Ok(u.into_pyobject(py)?.into_any())
            } else {
                Ok(PyFloat::new(py, n.as_f64().unwrap_or(f64::NAN)).into_any())
            }
        }
        Value::String(s) => Ok(PyString::new(py, s).into_any()),
        Value::Array(items) => {
            let list = PyList::empty(py);
            for item in items {
                list.append(json_to_py(py, item)?)?;
            }
            Ok(list.into_any())
        }
        Value::Object(fields) => {
            let dict = PyDict::new(py);
            for (key, item) in fields {
                dict.set_item(key, json_to_py(py, item)?)?;
            }
            Ok(dict.into_any())
        }
    }
}

/// Convert a record-like Python object (dict of JSON-compatible values) back
/// to JSON. Tuples are accepted wherever lists are.
pub fn py_to_json(obj: &Bound<'_, PyAny>) -> PyResult<Value> {
    py_to_json_at(obj, 0)
}

fn py_to_json_at(obj: &Bound<'_, PyAny>, depth: usize) -> PyResult<Value> {
    if depth > MAX_DEPTH {
        return Err(PyValueError::new_err("record is nested too deeply"));
    }

    if obj.is_none() {
        Ok(Value::Null)
    } else if let Ok(b) = obj.cast::<PyBool>() {
        // bool before int: bool is an int subclass
        Ok(Value::Bool(b.is_true()))
    } else if let Ok(int) = obj.cast::<PyInt>() {
        if let Ok(i) = int.extract::<i64>() {
            Ok(Value::from(i))
        } else if let Ok(u) = int.extract::<u64>() {
            Ok(Value::from(u))
        } else {
            Ok(Value::String(int.str()?.to_string_lossy().into_owned()))
        }
    } else if let Ok(float) = obj.cast::<PyFloat>() {
        Ok(Number::from_f64(float.value())
            .map(Value::Number)
            .unwrap_or(Value::Null))
    } else if let Ok(s) = obj.cast::<PyString>() {
        Ok(Value::String(s.to_string_lossy().into_owned()))
    } else if let Ok(list) = obj.cast::<PyList>() {
        let items: PyResult<Vec<Value>> = list.iter().map(|item| py_to_json_at(&item, depth + 1)).collect();
        Ok(Value::Array(items?))
    } else if let Ok(tuple) = obj.cast::<PyTuple>() {
        let items: PyResult<Vec<Value>> = tuple.iter().map(|item| py_to_json_at(&item, depth + 1)).collect();
        Ok(Value::Array(items?))
    } else if let Ok(dict) = obj.cast::<PyDict>() {
        let mut fields = Map::new();
        for key in dict.keys() {
            let Some(item) = dict.get_item(&key)? else {
                continue;
            };
            let key = match key.cast::<PyString>() {
                Ok(s) => s.to_string_lossy().into_owned(),
                Err(_) => key.str()?.to_string_lossy().into_owned(),
            };
            fields.insert(key, py_to_json_at(&item, depth + 1)?);
        }
        Ok(Value::Object(fields))
    } else {
        let name = obj
            .get_type()
            .name()
            .map(|n| n.to_string())
            .unwrap_or_else(|_| "object".to_string());
        Err(PyTypeError::new_err(format!("cannot convert {name} to a record value")))
    }
}
