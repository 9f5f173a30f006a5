//! Slip construction helpers

use std::collections::HashMap;

use crate::types::*;

/// Builder for cash-count slips
#[derive(Debug)]
pub struct SlipBuilder {
    id: String,
    face_values: Vec<u64>,
    currency: Option<String>,
    reference: Option<String>,
    metadata: HashMap<String, String>,
}

impl SlipBuilder {
    /// Create a new slip builder
    pub fn new(id: String) -> Self {
        Self {
            id,
            face_values: Vec::new(),
            currency: None,
            reference: None,
            metadata: HashMap::new(),
        }
    }

    /// Add one denomination line
    pub fn denomination(mut self, face_value: u64) -> Self {
        self.face_values.push(face_value);
        self
    }

    /// Add a run of denomination lines in display order
    pub fn denominations(mut self, face_values: &[u64]) -> Self {
        self.face_values.extend_from_slice(face_values);
        self
    }

    /// Set the currency code for the slip
    pub fn currency(mut self, currency: String) -> Self {
        self.currency = Some(currency);
        self
    }

    /// Set the slip reference (bordereau number)
    pub fn reference(mut self, reference: String) -> Self {
        self.reference = Some(reference);
        self
    }

    /// Add metadata to the slip
    pub fn metadata(mut self, key: String, value: String) -> Self {
        self.metadata.insert(key, value);
        self
    }

    /// Build the slip
    pub fn build(self) -> BilletageResult<DenominationSlip> {
        let mut slip = DenominationSlip::new(self.id, &self.face_values)?;
        if let Some(currency) = self.currency {
            slip.currency = currency;
        }
        slip.reference = self.reference;
        slip.metadata = self.metadata;
        Ok(slip)
    }
}

/// Denominations in circulation, for pre-populating count grids
pub mod catalog {
    use super::*;

    /// XAF bank notes, largest first
    pub const XAF_NOTES: [u64; 5] = [10_000, 5_000, 2_000, 1_000, 500];

    /// XAF coins, largest first
    pub const XAF_COINS: [u64; 6] = [500, 100, 50, 25, 10, 5];

    /// All XAF face values in the order tellers count them: notes, then coins
    pub fn standard_xaf_faces() -> Vec<u64> {
        XAF_NOTES.iter().chain(XAF_COINS.iter()).copied().collect()
    }

    /// Create a full XAF count slip with every note and coin line at zero
    pub fn standard_xaf_slip(id: String) -> BilletageResult<DenominationSlip> {
        SlipBuilder::new(id)
            .denominations(&standard_xaf_faces())
            .build()
    }
}
