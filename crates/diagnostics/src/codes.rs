//! Diagnostic ID constants.
//!
//! Generated from `catalog/diagnostics.json` at build time. Use these instead
//! of string literals so a typo is a compile error.

include!(concat!(env!("OUT_DIR"), "/generated_codes.rs"));

/// Every catalogue id, in catalogue order.
pub const ALL: &[&str] = include!(concat!(env!("OUT_DIR"), "/generated_all.rs"));
