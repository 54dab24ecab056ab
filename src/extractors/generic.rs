//! Fallback extractor for objects no family claims.
//!
//! Reads the common metadata attributes opportunistically and always carries
//! a capped repr.

use super::base::safety::{attr_str, module_name, safe_len, safe_repr, shape_of, type_name};
use super::base::{GenericInfo, InspectionRecord, RecordBody};
use super::builtins::REPR_LIMIT;
use pyo3::prelude::*;

pub fn inspect_generic(
    name: String,
    obj: &Bound<'_, PyAny>,
    known_prefixes: &[String],
) -> InspectionRecord {
    let label = qualified_type_name(&type_name(obj), &module_name(obj), known_prefixes);

    InspectionRecord::new(
        name,
        label,
        RecordBody::Generic(GenericInfo {
            shape: shape_of(obj),
            dtype: attr_str(obj, "dtype"),
            length: safe_len(obj),
            repr: safe_repr(obj, REPR_LIMIT),
        }),
    )
}

/// `"<prefix>.<Type>"` when the declaring module starts with a known library
/// prefix, else the bare type name. The first matching prefix wins.
pub fn qualified_type_name(type_name: &str, module: &str, known_prefixes: &[String]) -> String {
    known_prefixes
        .iter()
        .find(|prefix| module.starts_with(prefix.as_str()))
        .map(|prefix| format!("{}.{}", prefix, type_name))
        .unwrap_or_else(|| type_name.to_string())
}
