//! Family extractors
//!
//! Each extractor turns one kind of live object into an [`InspectionRecord`]
//! using only cheap metadata accessors (shape, dtype, schema, sizes, capped
//! iteration), never contents.
//!
//! # Architecture
//!
//! - `base` - record types and the exception-swallowing accessors
//! - `routing` - ordered `(Family, predicate)` table
//! - `manager` - `InspectorManager` public API
//! - `tabular` - column helpers shared by pandas and polars
//! - Family modules (builtins, pandas, polars, numpy, xarray, generic)
//!
//! [`InspectionRecord`]: base::InspectionRecord

pub mod base;
pub mod manager;
pub mod routing;

pub mod builtins;
pub mod generic;
pub mod numpy;
pub mod pandas;
pub mod polars;
pub mod tabular;
pub mod xarray;

pub use base::{InspectionRecord, Limits};
pub use manager::InspectorManager;
