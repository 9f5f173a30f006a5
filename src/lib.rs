//! # Billetage Core
//!
//! Core library for teller cash counts (billetage): denomination
//! reconciliation for deposit and till-count slips, with French
//! amount-in-words rendering for receipts.
//!
//! ## Features
//!
//! - **Denomination slips**: ordered note/coin lines with counts, line
//!   amounts and totals that are always derived, never stale
//! - **Amount in words**: French wording of any total, as printed on
//!   receipts and bordereaux
//! - **Count-input policies**: coerce invalid entry to zero (historical
//!   behavior) or reject it outright
//! - **Slip management**: open, count, reset and reconcile slips against a
//!   pluggable storage backend
//! - **Storage abstraction**: backend-agnostic design with a trait-based
//!   store and an in-memory implementation for tests
//!
//! ## Quick Start
//!
//! ```rust
//! use billetage_core::{amount_in_words, DenominationSlip};
//!
//! let mut slip = DenominationSlip::new("slip1".to_string(), &[500, 100, 50])?;
//! slip.set_count(0, 2)?;
//! slip.set_count(1, 5)?;
//! slip.set_count(2, 10)?;
//!
//! assert_eq!(slip.total(), 2000);
//! assert_eq!(slip.total_in_words(), "deux mille");
//! assert_eq!(amount_in_words(21), "vingt et un");
//! # Ok::<(), billetage_core::BilletageError>(())
//! ```

pub mod billetage;
pub mod traits;
pub mod types;
pub mod utils;
pub mod words;

// Re-export commonly used types
pub use billetage::*;
pub use traits::*;
pub use types::*;
pub use words::*;

// Re-export the denomination catalog for convenience
pub use billetage::slip::catalog;
