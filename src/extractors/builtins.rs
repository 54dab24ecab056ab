//! Built-in families: scalars, mappings, bulk sequences/sets and simple callables.
//!
//! None of these recurse into contained values. Mappings only visit their
//! top-level keys, so a mapping that contains itself needs no cycle tracking.

use super::base::safety::{
    guarded, safe_attr, safe_len, safe_repr, safe_str, shape_of, take_items, type_name,
    BULK_REPR_THRESHOLD,
};
use super::base::{CollectionInfo, InspectionRecord, Limits, MappingInfo, RecordBody};
use crate::utils::{format_tuple, truncate_name};
use indexmap::IndexMap;
use pyo3::prelude::*;
use pyo3::types::{PyList, PyTuple};

/// Budget for `value` and `repr` fields.
pub const REPR_LIMIT: usize = 200;

/// Budget for the repr part of a mapping value preview.
pub const PREVIEW_REPR_LIMIT: usize = 80;

/// At most this many mapping values are previewed.
pub const MAX_VALUE_PREVIEWS: usize = 5;

/// Large collections report the type names of this many leading elements.
pub const ELEMENT_TYPE_SAMPLE: usize = 5;

/// int/float/complex/str/bytes/bool/None: the repr is cheap and is the whole story.
pub fn inspect_scalar(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    InspectionRecord::new(
        name,
        type_name(obj),
        RecordBody::Scalar {
            value: safe_repr(obj, REPR_LIMIT),
        },
    )
}

/// Keys (capped) plus a short preview of the first few values.
pub fn inspect_mapping(name: String, obj: &Bound<'_, PyAny>, limits: Limits) -> InspectionRecord {
    let length = safe_len(obj);

    // Iterating a Mapping yields its keys; only the first `max_items` are pulled.
    let key_objects = take_items(obj, limits.max_items);
    let keys: Vec<String> = key_objects
        .iter()
        .map(|key| truncate_name(&safe_str(key), limits.max_name_length))
        .collect();

    let keys_truncated = length.filter(|&n| n > limits.max_items);

    let mut previews = IndexMap::new();
    // Previews are labelled exactly like the matching entry in `keys`.
    for (key, label) in key_objects.iter().zip(&keys).take(MAX_VALUE_PREVIEWS) {
        let Some(value) = guarded(obj.py(), obj.get_item(key)) else {
            continue;
        };
        previews.insert(label.clone(), preview_value(&value));
    }

    InspectionRecord::new(
        name,
        type_name(obj),
        RecordBody::Mapping(MappingInfo {
            length,
            keys,
            keys_truncated,
            values_preview: (!previews.is_empty()).then_some(previews),
        }),
    )
}

/// `"<Type>: (shape)"` for shaped values, otherwise `"<Type>: <short repr>"`.
fn preview_value(value: &Bound<'_, PyAny>) -> String {
    let value_type = type_name(value);
    match shape_of(value) {
        Some(shape) => format!("{}: {}", value_type, format_tuple(shape)),
        None => format!("{}: {}", value_type, safe_repr(value, PREVIEW_REPR_LIMIT)),
    }
}

/// list/tuple/set/frozenset: length, then either an element-type sample or the repr.
pub fn inspect_collection(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    let length = safe_len(obj);

    let info = match length {
        Some(n) if n > BULK_REPR_THRESHOLD => CollectionInfo {
            length,
            element_types: Some(sample_element_types(obj, n)),
            repr: None,
        },
        _ => CollectionInfo {
            length,
            element_types: None,
            repr: Some(safe_repr(obj, REPR_LIMIT)),
        },
    };

    InspectionRecord::new(name, type_name(obj), RecordBody::Collection(info))
}

// Sequences are sampled by index, sets by iteration order.
fn sample_element_types(obj: &Bound<'_, PyAny>, length: usize) -> Vec<String> {
    let count = length.min(ELEMENT_TYPE_SAMPLE);

    if obj.is_instance_of::<PyList>() || obj.is_instance_of::<PyTuple>() {
        (0..count)
            .map(|i| match guarded(obj.py(), obj.get_item(i)) {
                Some(element) => type_name(&element),
                None => "?".to_string(),
            })
            .collect()
    } else {
        take_items(obj, count)
            .iter()
            .map(|element| type_name(element))
            .collect()
    }
}

/// Functions, built-in functions and classes: just the callable's own name.
pub fn inspect_callable(name: String, obj: &Bound<'_, PyAny>) -> InspectionRecord {
    let callable_name = safe_attr(obj, "__name__")
        .map(|value| safe_str(&value))
        .unwrap_or_else(|| "?".to_string());

    InspectionRecord::new(name, type_name(obj), RecordBody::Callable { callable_name })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{eval, fixture, with_fixtures};
    use serde_json::json;

    fn as_json(record: &InspectionRecord) -> serde_json::Value {
        serde_json::to_value(record).unwrap()
    }

    #[test]
    fn test_scalar_value() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "b'hello world'");
            let record = inspect_scalar("b".to_string(), &value);
            assert_eq!(
                as_json(&record),
                json!({"name": "b", "type": "bytes", "value": "b'hello world'"})
            );
        });
    }

    #[test]
    fn test_mapping_keys_and_previews() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "{'a': 1, 'b': 'hi', 'c': [1, 2, 3]}");
            let record = as_json(&inspect_mapping("d".to_string(), &value, Limits::default()));
            assert_eq!(record["type"], "dict");
            assert_eq!(record["length"], 3);
            assert_eq!(record["keys"], json!(["a", "b", "c"]));
            assert!(record.get("keys_truncated").is_none());
            assert_eq!(record["values_preview"]["a"], "int: 1");
            assert_eq!(record["values_preview"]["b"], "str: 'hi'");
            assert_eq!(record["values_preview"]["c"], "list: [1, 2, 3]");
        });
    }

    #[test]
    fn test_mapping_truncates_keys() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "{f'key_{i}': i for i in range(500)}");
            let record = as_json(&inspect_mapping("d".to_string(), &value, Limits::new(10, Some(60))));
            assert_eq!(record["keys"].as_array().unwrap().len(), 10);
            assert_eq!(record["keys_truncated"], 500);
            assert_eq!(record["values_preview"].as_object().unwrap().len(), 5);
        });
    }

    #[test]
    fn test_mapping_preview_uses_shape() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "{'grid': ndarray((100, 50)), 'frame': make_pandas_frame()}");
            let record = as_json(&inspect_mapping("d".to_string(), &value, Limits::default()));
            assert_eq!(record["values_preview"]["grid"], "ndarray: (100, 50)");
            assert_eq!(record["values_preview"]["frame"], "DataFrame: (3, 2)");
            assert!(crate::test_support::recorded_calls(fx).is_empty());
        });
    }

    #[test]
    fn test_mapping_truncates_long_key_names() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "{'k' * 100: 1}");
            let record = as_json(&inspect_mapping("d".to_string(), &value, Limits::new(20, Some(60))));
            let key = record["keys"][0].as_str().unwrap();
            assert_eq!(key.chars().count(), 60);
            assert!(key.ends_with("..."));

            let preview_keys: Vec<&String> = record["values_preview"].as_object().unwrap().keys().collect();
            assert_eq!(preview_keys, [key]);
            assert_eq!(record["values_preview"][key], "int: 1");
        });
    }

    #[test]
    fn test_circular_mapping_lists_itself() {
        with_fixtures(|_, fx| {
            let circular = fixture(fx, "make_circular").call0().unwrap();
            let start = std::time::Instant::now();
            let record = as_json(&inspect_mapping("circ".to_string(), &circular, Limits::default()));
            assert!(start.elapsed().as_millis() < 50);
            assert_eq!(record["type"], "CircularDict");
            assert_eq!(record["keys"], json!(["self", "other"]));
        });
    }

    #[test]
    fn test_large_list_samples_element_types() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "list(range(100))");
            let record = as_json(&inspect_collection("lst".to_string(), &value));
            assert_eq!(record["type"], "list");
            assert_eq!(record["length"], 100);
            assert_eq!(record["element_types"], json!(["int", "int", "int", "int", "int"]));
            assert!(record.get("repr").is_none());
        });
    }

    #[test]
    fn test_large_set_samples_by_iteration() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "frozenset(str(i) for i in range(30))");
            let record = as_json(&inspect_collection("fs".to_string(), &value));
            assert_eq!(record["type"], "frozenset");
            assert_eq!(record["element_types"], json!(["str", "str", "str", "str", "str"]));
        });
    }

    #[test]
    fn test_small_collection_keeps_repr() {
        with_fixtures(|py, fx| {
            let value = eval(py, fx, "Point(1.0, 2.0)");
            let record = as_json(&inspect_collection("pt".to_string(), &value));
            assert_eq!(record["type"], "Point");
            assert_eq!(record["length"], 2);
            assert!(record["repr"].as_str().unwrap().contains("1.0"));
            assert!(record.get("element_types").is_none());
        });
    }

    #[test]
    fn test_callable_name() {
        with_fixtures(|_, fx| {
            let func = fixture(fx, "plain_function");
            let record = as_json(&inspect_callable("f".to_string(), &func));
            assert_eq!(
                record,
                json!({"name": "f", "type": "function", "callable_name": "plain_function"})
            );
            let class = fixture(fx, "Config");
            let record = as_json(&inspect_callable("C".to_string(), &class));
            assert_eq!(record["type"], "type");
            assert_eq!(record["callable_name"], "Config");
        });
    }
}
