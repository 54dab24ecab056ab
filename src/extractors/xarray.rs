//! xarray Dataset, DataArray and DataTree extractors.
//!
//! Dimension sizes, variable dtypes and child names all come from the
//! containers' metadata mappings. The single full walk in the inspector is the
//! DataTree node count, because a tree exposes no cheaper total.

use super::base::safety::{attr_str, extract_shape, guarded, safe_attr, safe_len, safe_str, take_items};
use super::base::{
    DataArrayInfo, DatasetInfo, DimSizes, InspectionRecord, Limits, RecordBody, TreeInfo,
    VariableInfo,
};
use crate::utils::truncate_name;
use pyo3::prelude::*;

pub fn inspect_dataset(name: String, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
    let mut info = DatasetInfo {
        dims: safe_attr(obj, "sizes").map(|sizes| dim_sizes(&sizes, limits.max_items)),
        ..DatasetInfo::default()
    };

    if let Some(data_vars) = safe_attr(obj, "data_vars") {
        info.data_vars = Some(describe_variables(&data_vars, limits));
        info.data_vars_truncated = safe_len(&data_vars).filter(|&n| n > limits.max_items);
    }

    if let Some(coords) = safe_attr(obj, "coords") {
        info.coords = Some(
            take_items(&coords, limits.max_items)
                .iter()
                .map(|coord| truncate_name(&safe_str(coord), limits.max_name_length))
                .collect(),
        );
        info.coords_truncated = safe_len(&coords).filter(|&n| n > limits.max_items);
    }

    InspectionRecord::new(name, "xarray.Dataset", RecordBody::Dataset(info))
}

pub fn inspect_dataarray(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    // Dimensionality is inherently small, so dims are not capped by max_items.
    let dims = match (safe_attr(obj, "dims"), safe_attr(obj, "shape")) {
        (Some(dims), Some(shape)) => extract_shape(&shape).map(|sizes| {
            take_items(&dims, sizes.len())
                .iter()
                .zip(sizes)
                .map(|(dim, size)| (safe_str(dim), size))
                .collect::<DimSizes>()
        }),
        _ => None,
    };

    InspectionRecord::new(
        name,
        "xarray.DataArray",
        RecordBody::DataArray(DataArrayInfo {
            dims,
            dtype: attr_str(obj, "dtype"),
        }),
    )
}

pub fn inspect_datatree(name: String, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
    let mut info = TreeInfo::default();

    if let Some(children) = safe_attr(obj, "children").filter(|c| c.is_truthy().unwrap_or(false)) {
        info.children = Some(
            take_items(&children, limits.max_items)
                .iter()
                .map(|child| truncate_name(&safe_str(child), limits.max_name_length))
                .collect(),
        );
        info.children_truncated = safe_len(&children).filter(|&n| n > limits.max_items);
    }

    if let Some(dataset) = safe_attr(obj, "dataset") {
        if let Some(data_vars) = safe_attr(&dataset, "data_vars") {
            info.data_vars = Some(describe_variables(&data_vars, limits));
            info.data_vars_truncated = safe_len(&data_vars).filter(|&n| n > limits.max_items);
        }
        info.dims = safe_attr(&dataset, "sizes").map(|sizes| dim_sizes(&sizes, limits.max_items));
    }

    info.total_nodes = count_subtree(obj);

    InspectionRecord::new(name, "xarray.DataTree", RecordBody::Tree(info))
}

/// `{dim: size}` for the first `limit` entries of a sizes mapping; entries whose
/// size is not an integer are skipped.
fn dim_sizes(sizes: &Bound<'_, PyAny>, limit: usize) -> DimSizes {
    let py = sizes.py();
    let Some(items) = guarded(py, sizes.call_method0("items")) else {
        return DimSizes::new();
    };
    take_items(&items, limit)
        .iter()
        .filter_map(|item| {
            let dim = guarded(py, item.get_item(0))?;
            let size = guarded(py, item.get_item(1))?.extract::<i64>().ok()?;
            Some((safe_str(&dim), size))
        })
        .collect()
}

fn describe_variables(data_vars: &Bound<'_, PyAny>, limits: Limits) -> Vec<VariableInfo> {
    take_items(data_vars, limits.max_items)
        .iter()
        .map(|var_name| VariableInfo {
            name: truncate_name(&safe_str(var_name), limits.max_name_length),
            dtype: guarded(data_vars.py(), data_vars.get_item(var_name))
                .and_then(|variable| attr_str(&variable, "dtype")),
        })
        .collect()
}

fn count_subtree(obj: &Bound<'_, PyAny>) -> Option<usize> {
    let py = obj.py();
    let subtree = guarded(py, obj.getattr("subtree"))?;
    let mut total = 0;
    for node in guarded(py, subtree.try_iter())? {
        guarded(py, node)?;
        total += 1;
    }
    Some(total)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{eval, with_fixtures};
    use serde_json::json;

    #[test]
    fn test_dataset() {
        with_fixtures(|py, fx| {
            let ds = eval(py, fx, "make_dataset()");
            let record = serde_json::to_value(inspect_dataset("ds".to_string(), &ds, Limits::default())).unwrap();
            assert_eq!(
                record,
                json!({
                    "name": "ds",
                    "type": "xarray.Dataset",
                    "dims": {"time": 365, "x": 100},
                    "data_vars": [
                        {"name": "temp", "dtype": "float64"},
                        {"name": "precip", "dtype": "float32"}
                    ],
                    "coords": ["time", "x"]
                })
            );
        });
    }

    #[test]
    fn test_dataset_caps_variables() {
        with_fixtures(|py, fx| {
            let ds = eval(py, fx, "make_dataset(40)");
            let record = serde_json::to_value(inspect_dataset("ds".to_string(), &ds, Limits::new(10, Some(60)))).unwrap();
            assert_eq!(record["data_vars"].as_array().unwrap().len(), 10);
            assert_eq!(record["data_vars_truncated"], 40);
        });
    }

    #[test]
    fn test_dataset_caps_dims_and_coords() {
        with_fixtures(|py, fx| {
            let ds = eval(
                py,
                fx,
                "Dataset({f'd{i}': i + 1 for i in range(30)}, {}, [f'c{i}' for i in range(40)])",
            );
            let record = serde_json::to_value(inspect_dataset("ds".to_string(), &ds, Limits::new(10, Some(60)))).unwrap();
            assert_eq!(record["dims"].as_object().unwrap().len(), 10);
            assert_eq!(record["dims"]["d9"], 10);
            assert_eq!(record["coords"].as_array().unwrap().len(), 10);
            assert_eq!(record["coords"][9], "c9");
            assert_eq!(record["coords_truncated"], 40);
            assert!(record.get("data_vars_truncated").is_none());
        });
    }

    #[test]
    fn test_dataset_within_limits_has_no_truncation_fields() {
        with_fixtures(|py, fx| {
            let ds = eval(py, fx, "make_dataset()");
            let record = serde_json::to_value(inspect_dataset("ds".to_string(), &ds, Limits::new(2, Some(60)))).unwrap();
            assert_eq!(record["coords"].as_array().unwrap().len(), 2);
            assert!(record.get("coords_truncated").is_none());
        });
    }

    #[test]
    fn test_dataarray_dims_in_order() {
        with_fixtures(|py, fx| {
            let da = eval(py, fx, "DataArray(('time', 'lat', 'lon'), (365, 10, 20), 'float32')");
            let record = serde_json::to_value(inspect_dataarray("da".to_string(), &da)).unwrap();
            assert_eq!(record["dtype"], "float32");
            let dims: Vec<&String> = record["dims"].as_object().unwrap().keys().collect();
            assert_eq!(dims, ["time", "lat", "lon"]);
            assert_eq!(record["dims"]["lat"], 10);
        });
    }

    #[test]
    fn test_datatree() {
        with_fixtures(|py, fx| {
            let tree = eval(py, fx, "make_tree()");
            let record = serde_json::to_value(inspect_datatree("dt".to_string(), &tree, Limits::default())).unwrap();
            assert_eq!(record["type"], "xarray.DataTree");
            assert_eq!(record["children"], json!(["fine", "coarse"]));
            assert_eq!(record["total_nodes"], 4);
            assert_eq!(record["dims"], json!({"time": 365, "x": 100}));
            assert_eq!(record["data_vars"][0]["name"], "temp");
        });
    }

    #[test]
    fn test_datatree_caps_children() {
        with_fixtures(|py, fx| {
            let tree = eval(py, fx, "DataTree(children={f'node_{i}': DataTree() for i in range(25)})");
            let record = serde_json::to_value(inspect_datatree("dt".to_string(), &tree, Limits::new(10, Some(60)))).unwrap();
            assert_eq!(record["children"].as_array().unwrap().len(), 10);
            assert_eq!(record["children"][0], "node_0");
            assert_eq!(record["children_truncated"], 25);
            assert_eq!(record["total_nodes"], 26);
        });
    }

    #[test]
    fn test_datatree_caps_node_variables() {
        with_fixtures(|py, fx| {
            let tree = eval(py, fx, "DataTree(dataset=make_dataset(40))");
            let record = serde_json::to_value(inspect_datatree("dt".to_string(), &tree, Limits::new(10, Some(60)))).unwrap();
            assert_eq!(record["data_vars"].as_array().unwrap().len(), 10);
            assert_eq!(record["data_vars_truncated"], 40);
            assert!(record.get("children_truncated").is_none());
        });
    }

    #[test]
    fn test_datatree_failed_walk_omits_total() {
        with_fixtures(|py, fx| {
            let tree = eval(py, fx, "BrokenSubtreeTree(children={'a': DataTree()})");
            let record = serde_json::to_value(inspect_datatree("dt".to_string(), &tree, Limits::default())).unwrap();
            assert_eq!(record["children"], json!(["a"]));
            assert!(record.get("total_nodes").is_none());
        });
    }

    #[test]
    fn test_leaf_datatree_has_no_children_key() {
        with_fixtures(|py, fx| {
            let tree = eval(py, fx, "DataTree()");
            let record = serde_json::to_value(inspect_datatree("dt".to_string(), &tree, Limits::default())).unwrap();
            assert!(record.get("children").is_none());
            assert_eq!(record["total_nodes"], 1);
        });
    }
}
