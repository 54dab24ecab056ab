//! Namespace listing - picks the user's variables out of an execution namespace
//!
//! Filtering never calls into user objects: names are plain strings and the
//! only per-value check is a module type test. Inspection happens afterwards,
//! on the capped selection.

use crate::config::{Detail, InspectorConfig, DEFAULT_MAX_VARIABLES};
use crate::extractors::base::safety::{safe_repr, type_name};
use crate::extractors::base::{InspectionRecord, Limits};
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyModule, PyString};
use serde::Serialize;

/// Repr cap for `basic` listings
pub const BASIC_REPR_LIMIT: usize = 100;

/// Options for one listing call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOptions {
    pub detail: Detail,
    pub max_variables: usize,
    pub limits: Limits,
    /// Case-insensitive substring the variable name must contain
    pub filter_name: Option<String>,
    pub include_private: bool,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            detail: Detail::Basic,
            max_variables: DEFAULT_MAX_VARIABLES,
            limits: Limits::default(),
            filter_name: None,
            include_private: false,
        }
    }
}

/// Minimal `{name, type, repr}` entry of a `basic` listing
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BasicEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    pub repr: String,
}

impl BasicEntry {
    pub fn of(name: String, obj: &Bound<'_, PyAny>) -> Self {
        Self {
            name,
            type_name: type_name(obj),
            repr: safe_repr(obj, BASIC_REPR_LIMIT),
        }
    }
}

/// Listing result, one variant per detail level
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum VariableListing {
    Basic(Vec<BasicEntry>),
    Schema(Vec<String>),
    Full(Vec<InspectionRecord>),
}

/// Select user variables from `ns` in namespace order.
///
/// Filter order: private names, the configured deny-list, module objects,
/// the name filter; then the `max_variables` cap. Non-string keys are skipped.
pub fn user_variables<'py>(
    ns: &Bound<'py, PyDict>,
    options: &ListOptions,
    config: &InspectorConfig,
) -> Vec<(String, Bound<'py, PyAny>)> {
    let needle = options
        .filter_name
        .as_deref()
        .filter(|f| !f.is_empty())
        .map(str::to_lowercase);

    let mut selected = Vec::new();
    for (key, value) in ns.iter() {
        if selected.len() >= options.max_variables {
            break;
        }

        let Ok(key) = key.cast::<PyString>() else {
            continue;
        };
        let name = key.to_string_lossy();

        if name.starts_with('_') && !options.include_private {
            continue;
        }
        if config.is_always_skipped(&name) {
            continue;
        }
        if value.is_instance_of::<PyModule>() {
            continue;
        }
        if let Some(needle) = &needle {
            if !name.to_lowercase().contains(needle.as_str()) {
                continue;
            }
        }

        selected.push((name.into_owned(), value));
    }

    tracing::debug!(
        selected = selected.len(),
        namespace_size = ns.len(),
        "filtered namespace"
    );
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{eval, with_fixtures};

    fn names(selected: &[(String, Bound<'_, PyAny>)]) -> Vec<String> {
        selected.iter().map(|(name, _)| name.clone()).collect()
    }

    fn select(expr: &str, options: ListOptions) -> Vec<String> {
        let mut out = Vec::new();
        with_fixtures(|py, fx| {
            let ns = eval(py, fx, expr).cast_into::<PyDict>().unwrap();
            out = names(&user_variables(&ns, &options, &InspectorConfig::default()));
        });
        out
    }

    #[test]
    fn test_default_filters() {
        assert_eq!(
            select("make_namespace()", ListOptions::default()),
            vec!["df", "arr", "config", "point", "counter", "n", "pi", "label"]
        );
    }

    #[test]
    fn test_include_private() {
        let options = ListOptions {
            include_private: true,
            ..Default::default()
        };
        let selected = select("make_namespace()", options);
        assert!(selected.contains(&"_hidden".to_string()));
        assert!(!selected.contains(&"In".to_string()));
        assert!(!selected.contains(&"os".to_string()));
    }

    #[test]
    fn test_filter_name_is_case_insensitive() {
        let options = ListOptions {
            filter_name: Some("CO".to_string()),
            ..Default::default()
        };
        assert_eq!(select("make_namespace()", options), vec!["config", "counter"]);

        let empty_filter = ListOptions {
            filter_name: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(select("make_namespace()", empty_filter).len(), 8);
    }

    #[test]
    fn test_cap_applies_after_filtering() {
        let options = ListOptions {
            max_variables: 2,
            ..Default::default()
        };
        assert_eq!(select("{'_a': 1, 'In': 2, 'x': 3, 'y': 4, 'z': 5}", options), vec!["x", "y"]);
    }

    #[test]
    fn test_non_string_keys_are_skipped() {
        assert_eq!(select("{1: 'one', ('t',): 2, 'ok': 3}", ListOptions::default()), vec!["ok"]);
    }

    #[test]
    fn test_custom_deny_list() {
        with_fixtures(|py, fx| {
            let ns = eval(py, fx, "{'secret': 1, 'In': 2}").cast_into::<PyDict>().unwrap();
            let config = InspectorConfig {
                always_skip: vec!["secret".to_string()],
                ..Default::default()
            };
            assert_eq!(names(&user_variables(&ns, &ListOptions::default(), &config)), vec!["In"]);
        });
    }

    #[test]
    fn test_basic_entry_uses_capped_repr() {
        with_fixtures(|py, fx| {
            let entry = BasicEntry::of("s".to_string(), &eval(py, fx, "SlowRepr()"));
            assert_eq!(entry.type_name, "SlowRepr");
            assert_eq!(entry.repr.chars().count(), BASIC_REPR_LIMIT);

            let broken = BasicEntry::of("b".to_string(), &eval(py, fx, "BrokenReprAndLen()"));
            assert_eq!(broken.repr, "<BrokenReprAndLen>");
        });
    }
}
