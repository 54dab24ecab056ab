// Inspector Utilities Module
//
// Pure string helpers shared by the extractors and the summarizer. Nothing in
// here touches Python objects.

/// Character-budget truncation (ellipsis capping)
pub mod truncation;

/// Tuple and byte-count rendering for summaries
pub mod formatting;

pub use formatting::{format_mem, format_tuple};
pub use truncation::{char_prefix, truncate_name, truncate_text, ELLIPSIS};
