//! One-line summaries derived from inspection records.
//!
//! The summarizer only reads record fields; it never goes back to the live
//! object. Dispatch is on which keys are present, so a record that arrives
//! from Python as a plain dict summarizes exactly like one built here.

use crate::extractors::base::InspectionRecord;
use crate::utils::{char_prefix, format_mem, format_tuple, truncate_text};
use serde_json::{Map, Value};

const VALUE_PREVIEW_CHARS: usize = 80;
/// Character budget for the bracketed column, key and variable lists.
const LIST_PREVIEW_CHARS: usize = 240;
const UNKNOWN: &str = "?";

/// Summarize a record built by the inspector.
pub fn summarize(record: &InspectionRecord) -> String {
    match record.to_json_map() {
        Ok(map) => format_summary(&map),
        Err(err) => {
            tracing::debug!(variable = %record.name, error = %err, "record serialization failed");
            format!("{}: {}", record.name, record.type_name)
        }
    }
}

/// Summarize a record in its flat JSON object form.
pub fn format_summary(record: &Map<String, Value>) -> String {
    let name = field_text(record.get("name"));
    let type_name = field_text(record.get("type"));

    if let Some(columns) = record.get("columns") {
        return table_summary(record, &name, &type_name, columns);
    }
    if type_name == "ndarray" {
        return array_summary(record, &name);
    }
    if let Some(children) = record.get("children") {
        let total_nodes = field_text(record.get("total_nodes"));
        return format!(
            "{}: {} ({} nodes, {} children)",
            name,
            type_name,
            total_nodes,
            array_len(children)
        );
    }

    let dims = record.get("dims");
    let data_vars = record.get("data_vars");
    if let (Some(dims), Some(data_vars)) = (dims, data_vars) {
        let var_names: Vec<String> = as_slice(data_vars).iter().map(variable_name).collect();
        return format!(
            "{}: {} dims=({}) vars=[{}]",
            name,
            type_name,
            dim_parts(dims),
            bounded_list(&var_names, false)
        );
    }
    if let (Some(dims), Some(dtype)) = (dims, record.get("dtype")) {
        return format!("{}: {} {} ({})", name, type_name, field_text(Some(dtype)), dim_parts(dims));
    }

    if type_name.contains("Series") {
        return format!(
            "{}: {} {} {}",
            name,
            type_name,
            shape_tuple(record.get("shape")),
            field_text(record.get("dtype"))
        );
    }

    if let Some(keys) = record.get("keys") {
        let keys: Vec<String> = as_slice(keys).iter().map(|k| field_text(Some(k))).collect();
        return format!(
            "{}: {} ({} keys) [{}]",
            name,
            type_name,
            field_text(record.get("length")),
            bounded_list(&keys, is_set(record.get("keys_truncated")))
        );
    }

    if let Some(value) = record.get("value") {
        let value = field_text(Some(value));
        return format!("{}: {} = {}", name, type_name, char_prefix(&value, VALUE_PREVIEW_CHARS));
    }

    generic_summary(record, &name, &type_name)
}

fn table_summary(record: &Map<String, Value>, name: &str, type_name: &str, columns: &Value) -> String {
    let columns = as_slice(columns);
    let parts: Vec<String> = columns
        .iter()
        .map(|column| {
            format!(
                "{}:{}",
                field_text(column.get("name")),
                field_text(column.get("dtype"))
            )
        })
        .collect();

    let listed = columns.len() as u64;
    let more = matches!(
        record.get("columns_truncated").and_then(Value::as_u64),
        Some(total) if total > listed
    );

    let shape = record.get("shape").map(as_slice).unwrap_or_default();
    let dims = if shape.len() >= 2 {
        format!(" ({}\u{00d7}{})", field_text(Some(&shape[0])), field_text(Some(&shape[1])))
    } else {
        String::new()
    };

    format!("{}: {}{} [{}]", name, type_name, dims, bounded_list(&parts, more))
}

/// Join `items` with `", "` while the text fits [`LIST_PREVIEW_CHARS`].
///
/// A trailing `, ...` marks entries dropped here or never listed in the
/// record. A lone entry wider than the budget is cut to it.
fn bounded_list(items: &[String], more: bool) -> String {
    let mut out = String::new();
    let mut used = 0;
    let mut dropped = false;

    for (i, item) in items.iter().enumerate() {
        let sep = if i == 0 { 0 } else { 2 };
        let width = item.chars().count();
        if used + sep + width > LIST_PREVIEW_CHARS {
            if i == 0 {
                out.push_str(&truncate_text(item, LIST_PREVIEW_CHARS));
            }
            dropped = true;
            break;
        }
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(item);
        used += sep + width;
    }

    if dropped || more {
        out.push_str(", ...");
    }
    out
}

fn array_summary(record: &Map<String, Value>, name: &str) -> String {
    let memory = record
        .get("nbytes")
        .and_then(Value::as_u64)
        .filter(|&nbytes| nbytes > 0)
        .map(format_mem)
        .unwrap_or_default();

    format!(
        "{}: ndarray {} {}{}",
        name,
        field_text(record.get("dtype")),
        shape_tuple(record.get("shape")),
        memory
    )
}

fn generic_summary(record: &Map<String, Value>, name: &str, type_name: &str) -> String {
    let shape = record.get("shape").map(as_slice).unwrap_or_default();
    if !shape.is_empty() {
        return format!("{}: {} shape={}", name, type_name, shape_tuple(record.get("shape")));
    }
    match record.get("length") {
        Some(length) if !length.is_null() => format!("{}: {} len={}", name, type_name, field_text(Some(length))),
        _ => format!("{}: {}", name, type_name),
    }
}

/// Display text for a scalar JSON field; missing and null render as `?`.
fn field_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => UNKNOWN.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn as_slice(value: &Value) -> &[Value] {
    value.as_array().map(Vec::as_slice).unwrap_or_default()
}

fn array_len(value: &Value) -> usize {
    value
        .as_array()
        .map(Vec::len)
        .or_else(|| value.as_object().map(Map::len))
        .unwrap_or(0)
}

fn is_set(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
        Some(_) => true,
    }
}

fn shape_tuple(shape: Option<&Value>) -> String {
    let dims = shape.map(as_slice).unwrap_or_default();
    format_tuple(dims.iter().map(|d| field_text(Some(d))))
}

fn dim_parts(dims: &Value) -> String {
    match dims.as_object() {
        Some(dims) => dims
            .iter()
            .map(|(dim, size)| format!("{}:{}", dim, field_text(Some(size))))
            .collect::<Vec<_>>()
            .join(", "),
        None => String::new(),
    }
}

fn variable_name(var: &Value) -> String {
    match var {
        Value::Object(fields) => field_text(fields.get("name")),
        other => field_text(Some(other)),
    }
}
