//! InspectorManager - public API for inspecting live objects
//!
//! Routes each object to its family extractor through the routing table and
//! owns the configuration (known library prefixes, deny-list, limits) that the
//! extractors and the namespace lister consult.

use super::base::{InspectionRecord, Limits};
use super::routing::{resolve_family, Family, TypeSignature};
use super::{builtins, generic, numpy, pandas, polars, xarray};
use crate::config::{Detail, InspectorConfig, DEFAULT_CONFIG};
use crate::namespace::{user_variables, BasicEntry, ListOptions, VariableListing};
use crate::summary;
use crate::utils::truncate_name;
use once_cell::sync::Lazy;
use pyo3::prelude::*;
use pyo3::types::PyDict;

/// Manager used by the module-level functions
pub static DEFAULT_MANAGER: Lazy<InspectorManager> = Lazy::new(|| InspectorManager::new(DEFAULT_CONFIG.clone()));

/// Stateless apart from its configuration; every call is independent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectorManager {
    config: InspectorConfig,
}

impl InspectorManager {
    pub fn new(config: InspectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Limits taken from this manager's configuration
    pub fn limits(&self) -> Limits {
        self.config.limits()
    }

    /// Structural record for `obj` bound to `name`. Never fails: anything the
    /// object raises while being read degrades to a fallback field.
    pub fn inspect_one(&self, name: &str, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
        let name = truncate_name(name, limits.max_name_length);
        let signature = TypeSignature::of(obj);
        let family = resolve_family(obj, &signature);

        tracing::trace!(
            variable = %name,
            type_name = %signature.type_name,
            module = %signature.module,
            ?family,
            "dispatching inspection"
        );

        match family {
            Family::Scalar => builtins::inspect_scalar(name, obj),
            Family::PandasDataFrame => pandas::inspect_dataframe(name, obj, limits),
            Family::PandasSeries => pandas::inspect_series(name, obj),
            Family::PolarsDataFrame => polars::inspect_dataframe(name, obj, limits),
            Family::PolarsLazyFrame => polars::inspect_lazyframe(name, obj, limits),
            Family::PolarsSeries => polars::inspect_series(name, obj),
            Family::NumpyArray => numpy::inspect_ndarray(name, obj),
            Family::XarrayDataset => xarray::inspect_dataset(name, obj, limits),
            Family::XarrayDataArray => xarray::inspect_dataarray(name, obj),
            Family::XarrayDataTree => xarray::inspect_datatree(name, obj, limits),
            Family::Mapping => builtins::inspect_mapping(name, obj, limits),
            Family::Collection => builtins::inspect_collection(name, obj),
            Family::Callable => builtins::inspect_callable(name, obj),
            Family::Generic => generic::inspect_generic(name, obj, &self.config.known_prefixes),
        }
    }

    /// One-line summary derived from [`Self::inspect_one`].
    pub fn summarize_one(&self, name: &str, obj: &Bound<'_, PyAny>, limits: Limits) -> String {
        summary::summarize(&self.inspect_one(name, obj, limits))
    }

    /// Full record for one binding of `ns`, or `None` when `name` is unbound.
    pub fn get_variable(&self, ns: &Bound<'_, PyDict>, name: &str, limits: Limits) -> Option<InspectionRecord> {
        match ns.get_item(name) {
            Ok(Some(obj)) => Some(self.inspect_one(name, &obj, limits)),
            Ok(None) => None,
            Err(err) => {
                tracing::debug!(variable = %name, error = %err, "namespace lookup failed");
                None
            }
        }
    }

    /// List the user's variables in `ns` at the requested detail level.
    pub fn list_user_variables(&self, ns: &Bound<'_, PyDict>, options: &ListOptions) -> VariableListing {
        let selected = user_variables(ns, options, &self.config);
        let limits = options.limits;

        match options.detail {
            Detail::Basic => VariableListing::Basic(
                selected
                    .into_iter()
                    .map(|(name, obj)| BasicEntry::of(name, &obj))
                    .collect(),
            ),
            Detail::Schema => VariableListing::Schema(
                selected
                    .iter()
                    .map(|(name, obj)| self.summarize_one(name, obj, limits))
                    .collect(),
            ),
            Detail::Full => VariableListing::Full(
                selected
                    .iter()
                    .map(|(name, obj)| self.inspect_one(name, obj, limits))
                    .collect(),
            ),
        }
    }
}
