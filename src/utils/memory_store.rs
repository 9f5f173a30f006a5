//! In-memory slip storage for testing and development

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::traits::*;
use crate::types::*;

/// In-memory [`SlipStore`] implementation for testing and development
#[derive(Debug, Clone)]
pub struct MemoryStore {
    slips: Arc<RwLock<HashMap<String, DenominationSlip>>>,
}

impl MemoryStore {
    /// Create a new memory store instance
    pub fn new() -> Self {
        Self {
            slips: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all data (useful for testing)
    pub fn clear(&self) {
        self.slips.write().unwrap().clear();
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SlipStore for MemoryStore {
    async fn save_slip(&mut self, slip: &DenominationSlip) -> BilletageResult<()> {
        self.slips
            .write()
            .unwrap()
            .insert(slip.id.clone(), slip.clone());
        Ok(())
    }

    async fn get_slip(&self, slip_id: &str) -> BilletageResult<Option<DenominationSlip>> {
        Ok(self.slips.read().unwrap().get(slip_id).cloned())
    }

    async fn list_slips(&self) -> BilletageResult<Vec<DenominationSlip>> {
        Ok(self.slips.read().unwrap().values().cloned().collect())
    }

    async fn update_slip(&mut self, slip: &DenominationSlip) -> BilletageResult<()> {
        if self.slips.read().unwrap().contains_key(&slip.id) {
            self.slips
                .write()
                .unwrap()
                .insert(slip.id.clone(), slip.clone());
            Ok(())
        } else {
            Err(BilletageError::SlipNotFound(slip.id.clone()))
        }
    }

    async fn delete_slip(&mut self, slip_id: &str) -> BilletageResult<()> {
        if self.slips.write().unwrap().remove(slip_id).is_some() {
            Ok(())
        } else {
            Err(BilletageError::SlipNotFound(slip_id.to_string()))
        }
    }
}
