//! Comparator configuration.
//!
//! `CompareOptions` is plain data with a `Default`, builder methods and serde
//! support so a host application can embed it in its own configuration file.

use crate::errors::{ExError, SheetDiffError};
use serde::{Deserialize, Serialize};

/// Marker placed in a difference record when a key exists on one side only
/// ("property does not exist").
pub const DEFAULT_ABSENT_MARKER: &str = "属性不存在";

/// Nesting limit applied by [`CompareOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Options controlling a [`Comparator`](crate::diff::engine::Comparator).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareOptions {
    /// Sentinel string reported for a missing property
    pub absent_marker: String,
    /// Maximum nesting depth before the walk fails fast; `None` disables the guard
    pub max_depth: Option<usize>,
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self {
            absent_marker: DEFAULT_ABSENT_MARKER.to_string(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl CompareOptions {
    /// Options with the default marker and no depth limit.
    pub fn unbounded() -> Self {
        Self {
            max_depth: None,
            ..Self::default()
        }
    }

    /// Replace the absent-property sentinel.
    pub fn with_absent_marker(mut self, marker: impl Into<String>) -> Self {
        self.absent_marker = marker.into();
        self
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// Check the options are usable.
    ///
    /// # Errors
    ///
    /// - `InvalidOptions` — the absent marker is empty (it would itself count
    ///   as an empty value), or `max_depth` is zero
    pub fn validate(&self) -> Result<(), ExError> {
        if self.absent_marker.is_empty() {
            return Err(SheetDiffError::InvalidOptions {
                reason: "absent_marker must not be empty".to_string(),
            }
            .into());
        }
        if self.max_depth == Some(0) {
            return Err(SheetDiffError::InvalidOptions {
                reason: "max_depth must be at least 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}
