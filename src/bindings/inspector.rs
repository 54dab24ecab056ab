// PyInspector - PyO3 wrapper around a configured InspectorManager
//
// Lets a host keep one explicitly constructed inspector with its own limits,
// library prefixes and deny-list instead of the module-level defaults.

use super::convert::to_py;
use crate::config::{Detail, InspectorConfig};
use crate::extractors::base::safety::reraise_interrupt;
use crate::extractors::manager::InspectorManager;
use crate::namespace::ListOptions;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Configured variable inspector
///
/// All settings are read-only after construction.
#[pyclass(name = "Inspector")]
pub struct PyInspector {
    inner: InspectorManager,
}

impl PyInspector {
    pub fn from_config(config: InspectorConfig) -> Self {
        PyInspector {
            inner: InspectorManager::new(config),
        }
    }
}

#[pymethods]
impl PyInspector {
    #[new]
    #[pyo3(signature = (max_items = 20, max_name_length = Some(60), known_prefixes = None, always_skip = None))]
    fn new(
        max_items: usize,
        max_name_length: Option<usize>,
        known_prefixes: Option<Vec<String>>,
        always_skip: Option<Vec<String>>,
    ) -> Self {
        let defaults = InspectorConfig::default();
        Self::from_config(InspectorConfig {
            max_items,
            max_name_length,
            known_prefixes: known_prefixes.unwrap_or(defaults.known_prefixes),
            always_skip: always_skip.unwrap_or(defaults.always_skip),
            ..defaults
        })
    }

    /// Build an inspector from a JSON configuration document
    ///
    /// Missing fields keep their defaults. Raises ValueError on invalid JSON.
    #[staticmethod]
    fn from_json(config: &str) -> PyResult<Self> {
        Ok(Self::from_config(InspectorConfig::from_json_str(config)?))
    }

    /// Inspection record (dict) for `obj` bound to `name`
    fn inspect<'py>(&self, py: Python<'py>, name: &str, obj: &Bound<'py, PyAny>) -> PyResult<Bound<'py, PyAny>> {
        let record = self.inner.inspect_one(name, obj, self.inner.limits());
        reraise_interrupt()?;
        to_py(py, &record)
    }

    /// One-line summary for `obj` bound to `name`
    fn summarize(&self, name: &str, obj: &Bound<'_, PyAny>) -> PyResult<String> {
        let summary = self.inner.summarize_one(name, obj, self.inner.limits());
        reraise_interrupt()?;
        Ok(summary)
    }

    /// List user variables in `ns`; see `list_user_variables`
    #[pyo3(signature = (ns, detail = "basic", max_variables = None, filter_name = None, include_private = false))]
    fn list_variables<'py>(
        &self,
        py: Python<'py>,
        ns: &Bound<'py, PyDict>,
        detail: &str,
        max_variables: Option<usize>,
        filter_name: Option<String>,
        include_private: bool,
    ) -> PyResult<Bound<'py, PyAny>> {
        let options = ListOptions {
            detail: detail.parse::<Detail>()?,
            max_variables: max_variables.unwrap_or(self.inner.config().max_variables),
            limits: self.inner.limits(),
            filter_name,
            include_private,
        };
        let listing = self.inner.list_user_variables(ns, &options);
        reraise_interrupt()?;
        to_py(py, &listing)
    }

    /// Record for one binding of `ns`, or None when unbound
    fn get_variable<'py>(
        &self,
        py: Python<'py>,
        ns: &Bound<'py, PyDict>,
        name: &str,
    ) -> PyResult<Option<Bound<'py, PyAny>>> {
        let record = self.inner.get_variable(ns, name, self.inner.limits());
        reraise_interrupt()?;
        record.map(|record| to_py(py, &record)).transpose()
    }

    #[getter]
    fn max_items(&self) -> usize {
        self.inner.config().max_items
    }

    #[getter]
    fn max_name_length(&self) -> Option<usize> {
        self.inner.config().max_name_length
    }

    #[getter]
    fn max_variables(&self) -> usize {
        self.inner.config().max_variables
    }

    #[getter]
    fn known_prefixes(&self) -> Vec<String> {
        self.inner.config().known_prefixes.clone()
    }

    #[getter]
    fn always_skip(&self) -> Vec<String> {
        self.inner.config().always_skip.clone()
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "Inspector(max_items={}, max_name_length={}, known_prefixes={:?})",
            config.max_items,
            config
                .max_name_length
                .map_or_else(|| "None".to_string(), |n| n.to_string()),
            config.known_prefixes
        )
    }
}
