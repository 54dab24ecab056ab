// Shared helpers for the unit tests: run the Python fixture module in a fresh
// namespace on an embedded interpreter.

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::ffi::CString;

const FIXTURES: &str = include_str!("../test_samples/fixtures.py");

/// Run `test` with the fixture module's globals loaded.
pub fn with_fixtures<F>(test: F)
where
    F: for<'py> FnOnce(Python<'py>, &Bound<'py, PyDict>),
{
    Python::attach(|py| {
        let globals = PyDict::new(py);
        globals.set_item("__name__", "__fixtures__").unwrap();
        let code = CString::new(FIXTURES).unwrap();
        py.run(code.as_c_str(), Some(&globals), None).unwrap();
        test(py, &globals);
    });
}

/// Look up a fixture (class, factory or value) by name.
pub fn fixture<'py>(fixtures: &Bound<'py, PyDict>, name: &str) -> Bound<'py, PyAny> {
    fixtures
        .get_item(name)
        .unwrap()
        .unwrap_or_else(|| panic!("no fixture named {name}"))
}

/// Evaluate a Python expression with the fixtures in scope.
pub fn eval<'py>(py: Python<'py>, fixtures: &Bound<'py, PyDict>, expr: &str) -> Bound<'py, PyAny> {
    let code = CString::new(expr).unwrap();
    py.eval(code.as_c_str(), Some(fixtures), None).unwrap()
}

/// Names of the "expensive" entry points that were invoked.
pub fn recorded_calls(fixtures: &Bound<'_, PyDict>) -> Vec<String> {
    fixture(fixtures, "CALLS").extract().unwrap()
}
