// Base Extractor Module
//
// Record types shared by every family extractor, plus the safety primitives
// that are the extractors' only way of reading an inspected object.

pub mod safety;
pub mod types;

pub use types::{
    ArrayInfo, CollectionInfo, ColumnInfo, DataArrayInfo, DatasetInfo, DimSizes, GenericInfo,
    InspectionRecord, Limits, MappingInfo, RecordBody, SeriesInfo, TableInfo, TreeInfo,
    VariableInfo,
};
