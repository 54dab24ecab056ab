// Variable Inspector - bounded structural summaries of live Python objects
//
// PyO3 extension module. Given any object bound in an interactive namespace it
// reports shape, schema and type metadata without iterating contents, forcing
// lazy plans, or letting a misbehaving object raise through.

use pyo3::prelude::*;

pub mod config;
pub mod errors;
pub mod extractors;
pub mod logging;
pub mod namespace;
pub mod summary;
pub mod utils;

// PyO3 bindings layer
pub mod bindings;

#[cfg(test)]
mod test_support;

pub use config::{Detail, InspectorConfig};
pub use errors::InspectorError;
pub use extractors::{InspectionRecord, InspectorManager, Limits};
pub use namespace::{ListOptions, VariableListing};

/// Variable Inspector Python module
///
/// Inspects live objects (tables, arrays, labeled arrays, containers, anything
/// else) into JSON-compatible dicts and one-line summaries.
#[pymodule]
fn variable_inspector(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    // Add Python functions
    m.add_function(wrap_pyfunction!(bindings::inspect_one, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::summarize_one, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::format_summary, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::list_user_variables, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::inspect_variable, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::init_tracing, m)?)?;

    // Add Python classes
    m.add_class::<bindings::PyInspector>()?;

    Ok(())
}
