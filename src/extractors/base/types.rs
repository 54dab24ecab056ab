// Inspection Record Types
//
// Every extractor produces an `InspectionRecord`: the binding name, a short
// family-qualified type label, and a family-specific body. Bodies are untagged
// and flattened, so the serialized record is a flat JSON object whose keys
// depend on the family. Optional fields are omitted rather than emitted as null
// unless a consumer relies on the key being present.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Limits applied to a single inspection call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Limits {
    /// Maximum entries in any bounded collection field (columns, keys, children, ...)
    pub max_items: usize,
    /// Maximum characters for variable/column/key names (`None` = unlimited)
    pub max_name_length: Option<usize>,
}

impl Limits {
    pub const DEFAULT_MAX_ITEMS: usize = 20;
    pub const DEFAULT_MAX_NAME_LENGTH: usize = 60;

    pub fn new(max_items: usize, max_name_length: Option<usize>) -> Self {
        Self {
            max_items,
            max_name_length,
        }
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ITEMS, Some(Self::DEFAULT_MAX_NAME_LENGTH))
    }
}

/// Bounded structural description of one live object
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct InspectionRecord {
    /// Binding name (possibly truncated)
    pub name: String,
    /// Short type label, e.g. "DataFrame", "polars.LazyFrame", "ndarray"
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(flatten)]
    pub body: RecordBody,
}

impl InspectionRecord {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>, body: RecordBody) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            body,
        }
    }

    /// Flat JSON object form, the shape consumers and the summarizer see.
    pub fn to_json_map(&self) -> Result<Map<String, Value>, serde_json::Error> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => {
                // Records always serialize as objects; keep the minimal shape regardless.
                let mut map = Map::new();
                map.insert("name".to_string(), Value::String(self.name.clone()));
                map.insert("type".to_string(), Value::String(self.type_name.clone()));
                map.insert("repr".to_string(), Value::String(other.to_string()));
                Ok(map)
            }
        }
    }
}

/// Family-specific part of a record
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(untagged)]
pub enum RecordBody {
    Scalar { value: String },
    Table(TableInfo),
    Series(SeriesInfo),
    Array(ArrayInfo),
    Dataset(DatasetInfo),
    DataArray(DataArrayInfo),
    Tree(TreeInfo),
    Mapping(MappingInfo),
    Collection(CollectionInfo),
    Callable { callable_name: String },
    Generic(GenericInfo),
}

/// One column of a table: name plus dtype label ("?" when the lookup failed)
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
}

/// Eager and lazy tables (pandas/polars DataFrame, polars LazyFrame)
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TableInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<ColumnInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns_truncated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_dtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_nlevels: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index_names: Option<Vec<Option<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_bytes: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_size_bytes: Option<i64>,
    /// Deferred query plan; only ever true for lazy tables
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub lazy: bool,
}

/// pandas/polars Series
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeriesInfo {
    pub shape: Vec<i64>,
    pub dtype: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_bytes: Option<i64>,
}

/// numpy ndarray metadata; `ndim`/`nbytes` serialize as null when unreadable
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ArrayInfo {
    pub shape: Vec<i64>,
    pub dtype: String,
    pub ndim: Option<i64>,
    pub nbytes: Option<i64>,
}

/// A data variable of a labeled dataset
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct VariableInfo {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
}

/// Dimension name -> size, in the container's own order
pub type DimSizes = IndexMap<String, i64>;

/// xarray Dataset
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DatasetInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<DimSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vars: Option<Vec<VariableInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vars_truncated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords: Option<Vec<String>>,    #[serde(skip_serializing_if = "Option::is_none")]
    pub coords_truncated: Option<usize>,
}

/// xarray DataArray
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct DataArrayInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<DimSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
}

/// xarray DataTree (hierarchical)
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct TreeInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children_truncated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vars: Option<Vec<VariableInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_vars_truncated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dims: Option<DimSizes>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_nodes: Option<usize>,
}

/// dict and other Mapping implementations
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MappingInfo {
    pub length: Option<usize>,
    pub keys: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keys_truncated: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values_preview: Option<IndexMap<String, String>>,
}

/// list/tuple/set/frozenset: either an element-type sample or a capped repr
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CollectionInfo {
    pub length: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub element_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repr: Option<String>,
}

/// Fallback for anything no family claims
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct GenericInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Vec<i64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dtype: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
    pub repr: String,
}
