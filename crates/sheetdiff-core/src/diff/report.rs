//! Classified comparison result.

use crate::diff::model::Difference;
use crate::diff::path::{is_under, root_segment};
use serde::{Deserialize, Serialize};

/// High-level classification of a comparison.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DiffClassification {
    /// Both values are structurally identical
    Identical,
    /// Values differ only in representation (emptiness or number/string
    /// spelling); no difference is reported
    Equivalent,
    /// At least one difference was reported
    Changed,
}

/// Differences between two values plus their classification.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiffReport {
    pub classification: DiffClassification,
    pub differences: Vec<Difference>,
}

impl DiffReport {
    /// Build a report; `identical` says whether the inputs were structurally equal.
    pub fn new(identical: bool, differences: Vec<Difference>) -> Self {
        let classification = if !differences.is_empty() {
            DiffClassification::Changed
        } else if identical {
            DiffClassification::Identical
        } else {
            DiffClassification::Equivalent
        };
        Self {
            classification,
            differences,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.classification == DiffClassification::Changed
    }

    pub fn len(&self) -> usize {
        self.differences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.differences.is_empty()
    }

    /// Paths of all differences, in traversal order.
    pub fn changed_paths(&self) -> Vec<&str> {
        self.differences.iter().map(|d| d.path.as_str()).collect()
    }

    /// Distinct first path segments in traversal order.
    ///
    /// For a list of rows this is the set of row indices (`[0]`, `[3]`) a
    /// consumer highlights; for a single record, the top-level fields.
    pub fn touched_roots(&self) -> Vec<&str> {
        let mut roots: Vec<&str> = Vec::new();
        for d in &self.differences {
            let root = root_segment(&d.path);
            if !roots.contains(&root) {
                roots.push(root);
            }
        }
        roots
    }

    /// Differences at or beneath `prefix`.
    pub fn differences_under<'a>(
        &'a self,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Difference> {
        self.differences
            .iter()
            .filter(move |d| is_under(&d.path, prefix))
    }
}
