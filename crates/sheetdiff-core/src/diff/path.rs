//! Path construction for difference records.
//!
//! Keys join with `.` (no leading separator at the root), indices append as
//! `[i]`: `x[0].y`.

/// Path of the property `key` under `parent`.
pub fn child_key(parent: &str, key: &str) -> String {
    if parent.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", parent, key)
    }
}

/// Path of element `index` under `parent`.
pub fn child_index(parent: &str, index: usize) -> String {
    format!("{}[{}]", parent, index)
}

/// First segment of a path: `rows` for `rows[2].qty`, `[3]` for `[3].name`.
pub fn root_segment(path: &str) -> &str {
    if path.starts_with('[') {
        return match path.find(']') {
            Some(end) => &path[..=end],
            None => path,
        };
    }
    match path.find(['.', '[']) {
        Some(end) => &path[..end],
        None => path,
    }
}

/// Whether `path` is `prefix` itself or lies beneath it.
pub fn is_under(path: &str, prefix: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}
