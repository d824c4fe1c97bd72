//! Core types shared across sheetdiff facilities
//!
//! This crate holds the canonical structured-logging schema: field keys,
//! event names and operation names used by the logging facility and by
//! tests that assert on captured events.

pub mod schema;
