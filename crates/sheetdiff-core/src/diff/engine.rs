//! Difference computation engine.
//!
//! [`find_differences`] is the only real algorithm; [`is_equal`] is defined as
//! "no differences found". At every level the walk applies, in order:
//!
//! 1. both sides empty → nothing
//! 2. same normalized form → nothing
//! 3. either side null, either side not composite, or mixed composite kinds
//!    → one record at this path
//! 4. two dates → one record with ISO-8601 renderings if the instants differ
//! 5. two arrays → element-wise over the longer length, missing slots are null
//! 6. two objects → key-wise over the union of keys

use std::cmp::max;
use std::collections::BTreeSet;
use std::time::Instant;

use sheetdiff_core_types::schema::{OP_COMPARE, OP_FIND_DIFFERENCES};

use crate::diff::model::{Difference, DifferenceKind};
use crate::diff::path::{child_index, child_key};
use crate::diff::report::DiffReport;
use crate::errors::{ExError, SheetDiffError};
use crate::options::CompareOptions;
use crate::value::{iso_string, Value};
use crate::{log_op_end, log_op_error, log_op_start};

static NULL: Value = Value::Null;

/// Whether `a` and `b` are equal once emptiness and number/string spelling
/// are normalized away.
///
/// ```
/// use sheetdiff_core::{is_equal, Value};
/// use serde_json::json;
///
/// assert!(is_equal(&Value::from(json!(null)), &Value::from(json!([null, ""]))));
/// assert!(is_equal(&Value::from(5), &Value::from("5")));
/// assert!(!is_equal(&Value::from("5"), &Value::from("05")));
/// ```
pub fn is_equal(a: &Value, b: &Value) -> bool {
    find_differences(a, b).is_empty()
}

/// Every path at which `a` and `b` disagree, in traversal order.
pub fn find_differences(a: &Value, b: &Value) -> Vec<Difference> {
    find_differences_at(a, b, "")
}

/// Like [`find_differences`], with every reported path prefixed by `path`.
pub fn find_differences_at(a: &Value, b: &Value, path: &str) -> Vec<Difference> {
    let options = CompareOptions::unbounded();
    // An unbounded walk has no failure mode.
    walk_all(&options, a, b, path).unwrap_or_default()
}

/// Classified comparison of `a` and `b`.
pub fn compare(a: &Value, b: &Value) -> DiffReport {
    DiffReport::new(a.is_identical_to(b), find_differences(a, b))
}

/// A configured difference engine.
///
/// Unlike the free functions, a `Comparator` enforces a nesting limit and
/// logs operation boundaries through the logging facility.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    options: CompareOptions,
}

impl Comparator {
    /// Create a comparator from validated options.
    ///
    /// # Errors
    ///
    /// - `InvalidOptions` — see [`CompareOptions::validate`]
    pub fn new(options: CompareOptions) -> Result<Self, ExError> {
        options.validate()?;
        Ok(Self { options })
    }

    /// Comparator with the default marker and no nesting limit.
    pub fn unbounded() -> Self {
        Self {
            options: CompareOptions::unbounded(),
        }
    }

    pub fn options(&self) -> &CompareOptions {
        &self.options
    }

    /// # Errors
    ///
    /// - `DepthLimitExceeded` — input nests deeper than `max_depth`
    pub fn is_equal(&self, a: &Value, b: &Value) -> Result<bool, ExError> {
        Ok(self.try_find_differences(a, b)?.is_empty())
    }

    /// # Errors
    ///
    /// - `DepthLimitExceeded` — input nests deeper than `max_depth`
    pub fn try_find_differences(
        &self,
        a: &Value,
        b: &Value,
    ) -> Result<Vec<Difference>, ExError> {
        self.try_find_differences_at(a, b, "")
    }

    /// Enumerate differences below `path`.
    ///
    /// # Errors
    ///
    /// - `DepthLimitExceeded` — input nests deeper than `max_depth`; the
    ///   error carries the path at which the limit was hit
    pub fn try_find_differences_at(
        &self,
        a: &Value,
        b: &Value,
        path: &str,
    ) -> Result<Vec<Difference>, ExError> {
        log_op_start!(
            OP_FIND_DIFFERENCES,
            path = path,
            max_depth = ?self.options.max_depth
        );
        let start = Instant::now();

        let differences = walk_all(&self.options, a, b, path).map_err(|e| {
            log_op_error!(
                OP_FIND_DIFFERENCES,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            ExError::from(e).with_op(OP_FIND_DIFFERENCES)
        })?;

        log_op_end!(
            OP_FIND_DIFFERENCES,
            duration_ms = start.elapsed().as_millis() as u64,
            difference_count = differences.len()
        );
        Ok(differences)
    }

    /// Classified comparison of `a` and `b`.
    ///
    /// # Errors
    ///
    /// - `DepthLimitExceeded` — input nests deeper than `max_depth`
    pub fn compare(&self, a: &Value, b: &Value) -> Result<DiffReport, ExError> {
        log_op_start!(OP_COMPARE);
        let start = Instant::now();

        let differences = walk_all(&self.options, a, b, "").map_err(|e| {
            log_op_error!(
                OP_COMPARE,
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            ExError::from(e).with_op(OP_COMPARE)
        })?;
        let report = DiffReport::new(a.is_identical_to(b), differences);

        log_op_end!(
            OP_COMPARE,
            duration_ms = start.elapsed().as_millis() as u64,
            difference_count = report.len(),
            classification = ?report.classification
        );
        Ok(report)
    }
}

fn walk_all(
    options: &CompareOptions,
    a: &Value,
    b: &Value,
    path: &str,
) -> Result<Vec<Difference>, SheetDiffError> {
    let mut walker = Walker {
        options,
        out: Vec::new(),
    };
    walker.walk(a, b, path)?;
    Ok(walker.out)
}

/// Pending unit of work; popped in traversal order.
enum Task<'v> {
    Pair {
        a: &'v Value,
        b: &'v Value,
        path: String,
        depth: usize,
    },
    Emit(Difference),
}

struct Walker<'o> {
    options: &'o CompareOptions,
    out: Vec<Difference>,
}

impl Walker<'_> {
    /// Walks with an explicit stack so nesting depth is bounded by the heap,
    /// not the call stack. Children are pushed in reverse so records come out
    /// in traversal order.
    fn walk(&mut self, a: &Value, b: &Value, path: &str) -> Result<(), SheetDiffError> {
        let mut pending = vec![Task::Pair {
            a,
            b,
            path: path.to_string(),
            depth: 0,
        }];

        while let Some(task) = pending.pop() {
            let (a, b, path, depth) = match task {
                Task::Emit(difference) => {
                    self.out.push(difference);
                    continue;
                }
                Task::Pair { a, b, path, depth } => (a, b, path, depth),
            };

            if let Some(max_depth) = self.options.max_depth {
                if depth > max_depth {
                    return Err(SheetDiffError::DepthLimitExceeded { path, max_depth });
                }
            }

            if a.is_empty_value() && b.is_empty_value() {
                continue;
            }
            if a.normalized().same_as(&b.normalized()) {
                continue;
            }

            match (a, b) {
                (Value::Date(x), Value::Date(y)) => {
                    if x != y {
                        self.out.push(Difference::changed(
                            path,
                            Value::String(iso_string(x)),
                            Value::String(iso_string(y)),
                        ));
                    }
                }
                (Value::Array(xs), Value::Array(ys)) => {
                    for i in (0..max(xs.len(), ys.len())).rev() {
                        pending.push(Task::Pair {
                            a: xs.get(i).unwrap_or(&NULL),
                            b: ys.get(i).unwrap_or(&NULL),
                            path: child_index(&path, i),
                            depth: depth + 1,
                        });
                    }
                }
                (Value::Object(xs), Value::Object(ys)) => {
                    let keys: BTreeSet<&String> = xs.keys().chain(ys.keys()).collect();
                    for key in keys.into_iter().rev() {
                        let child = child_key(&path, key);
                        match (xs.get(key), ys.get(key)) {
                            (Some(x), Some(y)) => pending.push(Task::Pair {
                                a: x,
                                b: y,
                                path: child,
                                depth: depth + 1,
                            }),
                            (None, Some(y)) if !y.is_empty_value() => {
                                pending.push(Task::Emit(Difference {
                                    path: child,
                                    kind: DifferenceKind::MissingInOriginal,
                                    original: self.absent(),
                                    current: y.clone(),
                                }))
                            }
                            (Some(x), None) if !x.is_empty_value() => {
                                pending.push(Task::Emit(Difference {
                                    path: child,
                                    kind: DifferenceKind::MissingInCurrent,
                                    original: x.clone(),
                                    current: self.absent(),
                                }))
                            }
                            _ => {}
                        }
                    }
                }
                _ => {
                    if a.is_composite() && b.is_composite() {
                        tracing::trace!(
                            path = path.as_str(),
                            original = a.type_name(),
                            current = b.type_name(),
                            "composite kind mismatch reported as leaf"
                        );
                    }
                    self.out.push(Difference::changed(path, a.clone(), b.clone()));
                }
            }
        }
        Ok(())
    }

    fn absent(&self) -> Value {
        Value::String(self.options.absent_marker.clone())
    }
}
