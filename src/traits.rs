//! Traits for storage abstraction and count-input policies

use async_trait::async_trait;

use crate::types::*;

/// Storage abstraction for cash-count slips
///
/// Slips ultimately live in the back office; this trait lets the core work
/// against any backend (REST gateway, SQL, in-memory, etc.) by implementing
/// these methods.
#[async_trait]
pub trait SlipStore: Send + Sync {
    /// Save a newly opened slip
    async fn save_slip(&mut self, slip: &DenominationSlip) -> BilletageResult<()>;

    /// Get a slip by ID
    async fn get_slip(&self, slip_id: &str) -> BilletageResult<Option<DenominationSlip>>;

    /// List all open slips
    async fn list_slips(&self) -> BilletageResult<Vec<DenominationSlip>>;

    /// Update an existing slip
    async fn update_slip(&mut self, slip: &DenominationSlip) -> BilletageResult<()>;

    /// Delete a slip
    async fn delete_slip(&mut self, slip_id: &str) -> BilletageResult<()>;
}

/// Policy for turning raw count input into a count
///
/// Teller counts arrive as free-form text from entry fields. The policy
/// decides what happens to input that is not a plain non-negative integer.
pub trait CountValidator: Send + Sync {
    /// Parse one raw count field
    fn parse_count(&self, raw: &str) -> BilletageResult<u64>;
}

/// Default count policy: silently coerce anything invalid to zero
///
/// Matches the historical entry-form behavior, where a cleared or garbled
/// field simply contributes nothing to the total instead of blocking entry.
pub struct CoercingCountValidator;

impl CountValidator for CoercingCountValidator {
    fn parse_count(&self, raw: &str) -> BilletageResult<u64> {
        Ok(crate::utils::validation::coerce_count(raw))
    }
}
