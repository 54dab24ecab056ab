//! Family routing - decides which extractor handles a live object
//!
//! The routing table is an ordered list of `(Family, predicate)` pairs; the
//! first predicate that accepts the object wins. Library types are matched by
//! module root plus exact type name so that nothing from those libraries has
//! to be imported, and so that subclasses fall through to the generic path.

use super::base::safety::{module_name, module_root, type_name};
use pyo3::prelude::*;
use pyo3::types::{
    PyBytes, PyCFunction, PyComplex, PyFloat, PyFrozenSet, PyFunction, PyInt, PyList, PyMapping,
    PySet, PyString, PyTuple, PyType,
};

/// Extractor family an object is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Family {
    Scalar,
    PandasDataFrame,
    PandasSeries,
    PolarsDataFrame,
    PolarsLazyFrame,
    PolarsSeries,
    NumpyArray,
    XarrayDataset,
    XarrayDataArray,
    XarrayDataTree,
    Mapping,
    Collection,
    Callable,
    Generic,
}

/// Declaring module and exact type name of an object, read once per dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeSignature {
    pub module: String,
    pub type_name: String,
}

impl TypeSignature {
    pub fn of(obj: &Bound<'_, PyAny>) -> Self {
        Self {
            module: module_name(obj),
            type_name: type_name(obj),
        }
    }

    pub fn is(&self, root: &str, type_name: &str) -> bool {
        module_root(&self.module) == root && self.type_name == type_name
    }
}

type Predicate = fn(&Bound<'_, PyAny>, &TypeSignature) -> bool;

const ROUTES: &[(Family, Predicate)] = &[
    (Family::Scalar, is_scalar),
    (Family::PandasDataFrame, is_pandas_dataframe),
    (Family::PandasSeries, is_pandas_series),
    (Family::PolarsDataFrame, is_polars_dataframe),
    (Family::PolarsLazyFrame, is_polars_lazyframe),
    (Family::PolarsSeries, is_polars_series),
    (Family::NumpyArray, is_numpy_array),
    (Family::XarrayDataset, is_xarray_dataset),
    (Family::XarrayDataArray, is_xarray_dataarray),
    (Family::XarrayDataTree, is_xarray_datatree),
    (Family::Mapping, is_mapping),
    (Family::Collection, is_collection),
    (Family::Callable, is_callable),
];

/// Resolve the family for `obj`; `Family::Generic` when no route matches.
pub fn resolve_family(obj: &Bound<'_, PyAny>, signature: &TypeSignature) -> Family {
    ROUTES
        .iter()
        .find(|(_, accepts)| accepts(obj, signature))
        .map(|(family, _)| *family)
        .unwrap_or(Family::Generic)
}

// bool and IntEnum are int subclasses
fn is_scalar(obj: &Bound<'_, PyAny>, _: &TypeSignature) -> bool {
    obj.is_none()
        || obj.is_instance_of::<PyInt>()
        || obj.is_instance_of::<PyFloat>()
        || obj.is_instance_of::<PyComplex>()
        || obj.is_instance_of::<PyString>()
        || obj.is_instance_of::<PyBytes>()
}

macro_rules! library_type {
    ($($predicate:ident => ($root:literal, $type_name:literal)),* $(,)?) => {
        $(
            fn $predicate(_: &Bound<'_, PyAny>, signature: &TypeSignature) -> bool {
                signature.is($root, $type_name)
            }
        )*
    };
}

library_type! {
    is_pandas_dataframe => ("pandas", "DataFrame"),
    is_pandas_series => ("pandas", "Series"),
    is_polars_dataframe => ("polars", "DataFrame"),
    is_polars_lazyframe => ("polars", "LazyFrame"),
    is_polars_series => ("polars", "Series"),
    is_numpy_array => ("numpy", "ndarray"),
    is_xarray_dataset => ("xarray", "Dataset"),
    is_xarray_dataarray => ("xarray", "DataArray"),
    is_xarray_datatree => ("xarray", "DataTree"),
}

fn is_mapping(obj: &Bound<'_, PyAny>, _: &TypeSignature) -> bool {
    obj.cast::<PyMapping>().is_ok()
}

fn is_collection(obj: &Bound<'_, PyAny>, _: &TypeSignature) -> bool {
    obj.is_instance_of::<PyList>()
        || obj.is_instance_of::<PyTuple>()
        || obj.is_instance_of::<PySet>()
        || obj.is_instance_of::<PyFrozenSet>()
}

fn is_callable(obj: &Bound<'_, PyAny>, _: &TypeSignature) -> bool {
    obj.is_instance_of::<PyFunction>()
        || obj.is_instance_of::<PyCFunction>()
        || obj.is_instance_of::<PyType>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{eval, with_fixtures};

    fn family_of<'py>(py: Python<'py>, fx: &Bound<'py, pyo3::types::PyDict>, expr: &str) -> Family {
        let obj = eval(py, fx, expr);
        resolve_family(&obj, &TypeSignature::of(&obj))
    }

    #[test]
    fn test_scalars() {
        with_fixtures(|py, fx| {
            for expr in ["42", "True", "3.5", "1+2j", "'text'", "b'raw'", "None", "Priority.HIGH"] {
                assert_eq!(family_of(py, fx, expr), Family::Scalar, "{expr}");
            }
        });
    }

    #[test]
    fn test_library_types_match_by_module_root() {
        with_fixtures(|py, fx| {
            assert_eq!(family_of(py, fx, "make_pandas_frame()"), Family::PandasDataFrame);
            assert_eq!(family_of(py, fx, "Series(3)"), Family::PandasSeries);
            assert_eq!(family_of(py, fx, "PolarsDataFrame({'a': 'Int64'}, 3)"), Family::PolarsDataFrame);
            assert_eq!(family_of(py, fx, "LazyFrame({'a': 'Int64'})"), Family::PolarsLazyFrame);
            assert_eq!(family_of(py, fx, "PolarsSeries('s', 3)"), Family::PolarsSeries);
            assert_eq!(family_of(py, fx, "ndarray((2, 3))"), Family::NumpyArray);
            assert_eq!(family_of(py, fx, "make_dataset()"), Family::XarrayDataset);
            assert_eq!(family_of(py, fx, "make_tree()"), Family::XarrayDataTree);
        });
    }

    #[test]
    fn test_library_subclass_falls_through() {
        with_fixtures(|py, fx| {
            assert_eq!(family_of(py, fx, "MaskedArray((4,))"), Family::Generic);
        });
    }

    #[test]
    fn test_builtin_containers_and_callables() {
        with_fixtures(|py, fx| {
            assert_eq!(family_of(py, fx, "{'a': 1}"), Family::Mapping);
            assert_eq!(family_of(py, fx, "CircularDict()"), Family::Mapping);
            assert_eq!(family_of(py, fx, "[1, 2]"), Family::Collection);
            assert_eq!(family_of(py, fx, "Point(1, 2)"), Family::Collection);
            assert_eq!(family_of(py, fx, "frozenset({1})"), Family::Collection);
            assert_eq!(family_of(py, fx, "plain_function"), Family::Callable);
            assert_eq!(family_of(py, fx, "len"), Family::Callable);
            assert_eq!(family_of(py, fx, "Config"), Family::Callable);
        });
    }

    #[test]
    fn test_everything_else_is_generic() {
        with_fixtures(|py, fx| {
            assert_eq!(family_of(py, fx, "Config()"), Family::Generic);
            assert_eq!(family_of(py, fx, "Hostile()"), Family::Generic);
            assert_eq!(family_of(py, fx, "Color.RED"), Family::Generic);
        });
    }
}
