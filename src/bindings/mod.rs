// PyO3 Bindings Module
//
// Python surface of the inspector: module-level functions using the default
// configuration, and the configurable `Inspector` class.

mod api;
mod convert;
mod inspector;

// Re-export for lib.rs
pub use api::{format_summary, init_tracing, inspect_one, inspect_variable, list_user_variables, summarize_one};
pub use convert::{json_to_py, py_to_json};
pub use inspector::PyInspector;
