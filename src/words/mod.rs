//! Amount-in-words rendering
//!
//! Receipts and bordereaux print totals both as digits and spelled out in
//! French; this module owns the spelled-out form.

pub mod french;

pub use french::*;
