//! Structural difference engine.
//!
//! Compares two arbitrary [`Value`](crate::value::Value)s and reports every
//! path at which they disagree.
//!
//! ## Entry point
//!
//! ```
//! use sheetdiff_core::diff::engine::find_differences;
//! use sheetdiff_core::Value;
//! use serde_json::json;
//!
//! let original = Value::from(json!({"x": [{"y": 1}]}));
//! let current = Value::from(json!({"x": [{"y": 2}]}));
//! let diffs = find_differences(&original, &current);
//! assert_eq!(diffs[0].path, "x[0].y");
//! ```
//!
//! ## Guarantees
//!
//! - **Emptiness**: any two empty values (`null`, `""`, `[]`, `{}`, and
//!   composites of those) are equal.
//! - **Totality**: the free functions never fail; shape mismatches are
//!   reported as records.
//! - **Determinism**: object keys are visited in sorted order, array
//!   elements by ascending index.
//! - **Symmetry**: swapping the inputs swaps each record's sides.

pub mod engine;
pub mod model;
pub mod path;
pub mod report;

pub use engine::{compare, find_differences, find_differences_at, is_equal, Comparator};
pub use model::{Difference, DifferenceKind};
pub use report::{DiffClassification, DiffReport};
