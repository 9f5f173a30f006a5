//! Slip orchestration over a storage backend

use uuid::Uuid;

use crate::traits::*;
use crate::types::*;

/// Manages the lifecycle of cash-count slips: opening, count entry,
/// reconciliation and reset.
///
/// Count entry goes through a [`CountValidator`] policy; the default policy
/// coerces invalid input to zero, [`crate::utils::StrictCountValidator`]
/// rejects it instead.
pub struct SlipManager<S: SlipStore> {
    store: S,
    validator: Box<dyn CountValidator>,
}

impl<S: SlipStore> SlipManager<S> {
    /// Create a new slip manager with the default (coercing) count policy
    pub fn new(store: S) -> Self {
        Self {
            store,
            validator: Box::new(CoercingCountValidator),
        }
    }

    /// Create a new slip manager with a custom count policy
    pub fn with_validator(store: S, validator: Box<dyn CountValidator>) -> Self {
        Self { store, validator }
    }

    /// Open a new slip with the given denomination lines, all counts at zero
    pub async fn open_slip(&mut self, face_values: &[u64]) -> BilletageResult<DenominationSlip> {
        let slip = DenominationSlip::new(Uuid::new_v4().to_string(), face_values)?;
        self.store.save_slip(&slip).await?;
        Ok(slip)
    }

    /// Register a slip built elsewhere (e.g. via [`crate::SlipBuilder`])
    pub async fn register_slip(
        &mut self,
        slip: DenominationSlip,
    ) -> BilletageResult<DenominationSlip> {
        if self.store.get_slip(&slip.id).await?.is_some() {
            return Err(BilletageError::Validation(format!(
                "Slip with ID '{}' already exists",
                slip.id
            )));
        }

        self.store.save_slip(&slip).await?;
        Ok(slip)
    }

    /// Get a slip by ID
    pub async fn get_slip(&self, slip_id: &str) -> BilletageResult<Option<DenominationSlip>> {
        self.store.get_slip(slip_id).await
    }

    /// Get a slip by ID, returning an error if not found
    pub async fn get_slip_required(&self, slip_id: &str) -> BilletageResult<DenominationSlip> {
        self.store
            .get_slip(slip_id)
            .await?
            .ok_or_else(|| BilletageError::SlipNotFound(slip_id.to_string()))
    }

    /// List all open slips
    pub async fn list_slips(&self) -> BilletageResult<Vec<DenominationSlip>> {
        self.store.list_slips().await
    }

    /// Record a raw count field for one line and return the new slip total
    ///
    /// The raw input goes through the manager's count policy before it
    /// touches the slip.
    pub async fn record_count(
        &mut self,
        slip_id: &str,
        index: usize,
        raw: &str,
    ) -> BilletageResult<u64> {
        let count = self.validator.parse_count(raw)?;
        self.set_count(slip_id, index, count).await
    }

    /// Set an already-parsed count for one line and return the new slip total
    pub async fn set_count(
        &mut self,
        slip_id: &str,
        index: usize,
        count: u64,
    ) -> BilletageResult<u64> {
        let mut slip = self.get_slip_required(slip_id).await?;
        slip.set_count(index, count)?;
        self.store.update_slip(&slip).await?;
        Ok(slip.total())
    }

    /// Zero every count on a slip
    pub async fn reset_slip(&mut self, slip_id: &str) -> BilletageResult<()> {
        let mut slip = self.get_slip_required(slip_id).await?;
        slip.reset();
        self.store.update_slip(&slip).await
    }

    /// Reconcile a slip into its submission payload
    pub async fn finalize_slip(&self, slip_id: &str) -> BilletageResult<SlipSummary> {
        let slip = self.get_slip_required(slip_id).await?;
        Ok(slip.summary())
    }

    /// Delete a slip
    pub async fn delete_slip(&mut self, slip_id: &str) -> BilletageResult<()> {
        self.get_slip_required(slip_id).await?;
        self.store.delete_slip(slip_id).await
    }
}
