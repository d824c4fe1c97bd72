//! Difference engine output types.
//!
//! All types implement `Debug, Clone, Serialize, Deserialize, PartialEq`.

use crate::value::Value;
use serde::{Deserialize, Serialize};

/// How a single disagreement came about.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum DifferenceKind {
    /// Both sides hold a value at the path and they disagree
    Changed,
    /// The key exists only on the current side; `original` holds the absent marker
    MissingInOriginal,
    /// The key exists only on the original side; `current` holds the absent marker
    MissingInCurrent,
}

impl DifferenceKind {
    /// The kind seen when the two inputs trade places.
    pub fn swapped(self) -> Self {
        match self {
            DifferenceKind::Changed => DifferenceKind::Changed,
            DifferenceKind::MissingInOriginal => DifferenceKind::MissingInCurrent,
            DifferenceKind::MissingInCurrent => DifferenceKind::MissingInOriginal,
        }
    }
}

/// One path-addressed disagreement between two values.
///
/// `original` and `current` are the raw inputs at `path`, except that dates
/// are rendered as ISO-8601 strings and a missing property is reported as
/// the comparator's absent marker.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Difference {
    /// Dotted/bracketed address from the root, e.g. `rows[2].cells.qty`
    pub path: String,
    /// Classification of the disagreement
    pub kind: DifferenceKind,
    /// Value from the first input
    pub original: Value,
    /// Value from the second input
    pub current: Value,
}

impl Difference {
    /// A `Changed` record.
    pub fn changed(path: impl Into<String>, original: Value, current: Value) -> Self {
        Self {
            path: path.into(),
            kind: DifferenceKind::Changed,
            original,
            current,
        }
    }

    /// The same record with the two sides exchanged.
    pub fn swapped(self) -> Self {
        Self {
            path: self.path,
            kind: self.kind.swapped(),
            original: self.current,
            current: self.original,
        }
    }

    /// True when one side is a missing property.
    pub fn is_presence_change(&self) -> bool {
        self.kind != DifferenceKind::Changed
    }
}
