//! sheetdiff Core - structural difference engine for row/cell snapshots
//!
//! This crate compares two nested values (scalars, objects, arrays, dates)
//! and reports path-addressed differences, treating every "nothing"
//! representation (`null`, `""`, `[]`, `{}`, and composites of those) as
//! interchangeable:
//! - Closed `Value` model with JSON conversions
//! - Difference enumeration and derived equality
//! - Configurable comparator with a nesting guard
//! - Classified reports for consumers deciding what to highlight

pub mod diff;
pub mod errors;
pub mod logging_facility;
pub mod options;
pub mod value;

pub use sheetdiff_core_types;

// Re-export commonly used types
pub use diff::{
    compare, find_differences, find_differences_at, is_equal, Comparator, DiffClassification,
    DiffReport, Difference, DifferenceKind,
};
pub use errors::{ExError, ExErrorKind, Result, SheetDiffError};
pub use options::CompareOptions;
pub use value::Value;
