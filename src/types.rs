//! Core types and data structures for teller cash counts

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::words;

/// Currency code used when a slip does not specify one.
///
/// CFA francs have no subunit in circulation, so all amounts are whole
/// currency units.
pub const DEFAULT_CURRENCY: &str = "XAF";

/// A single denomination row on a cash-count slip: one face value (note or
/// coin) and how many units of it the teller counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DenominationLine {
    /// Monetary value of one unit, in whole currency units (e.g. 500, 10000)
    pub face_value: u64,
    /// Number of units counted
    pub count: u64,
}

impl DenominationLine {
    /// Create a new line with a zero count
    pub fn new(face_value: u64) -> BilletageResult<Self> {
        if face_value == 0 {
            return Err(BilletageError::InvalidDenomination(
                "Face value must be positive".to_string(),
            ));
        }
        Ok(Self {
            face_value,
            count: 0,
        })
    }

    /// Line amount, always derived from its inputs
    pub fn amount(&self) -> u64 {
        self.face_value * self.count
    }
}

/// A cash-count slip (bordereau de billetage): an ordered set of
/// denomination lines for one till session.
///
/// The total is recomputed from the lines on every read, so it can never go
/// stale relative to the counts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DenominationSlip {
    /// Unique identifier for the slip
    pub id: String,
    /// Denomination lines in display order
    pub lines: Vec<DenominationLine>,
    /// Currency code for all amounts on the slip
    pub currency: String,
    /// Optional slip reference (bordereau number)
    pub reference: Option<String>,
    /// Additional metadata (teller code, till id, etc.)
    pub metadata: HashMap<String, String>,
    /// When the slip was opened
    pub created_at: NaiveDateTime,
    /// When the slip was last updated
    pub updated_at: NaiveDateTime,
}

impl DenominationSlip {
    /// Create a new slip from a list of face values, all counts at zero
    pub fn new(id: String, face_values: &[u64]) -> BilletageResult<Self> {
        if face_values.is_empty() {
            return Err(BilletageError::Validation(
                "Slip must have at least one denomination line".to_string(),
            ));
        }

        let lines = face_values
            .iter()
            .map(|&face_value| DenominationLine::new(face_value))
            .collect::<BilletageResult<Vec<_>>>()?;

        let now = chrono::Utc::now().naive_utc();
        Ok(Self {
            id,
            lines,
            currency: DEFAULT_CURRENCY.to_string(),
            reference: None,
            metadata: HashMap::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Replace the count on the line at `index`
    pub fn set_count(&mut self, index: usize, count: u64) -> BilletageResult<()> {
        let len = self.lines.len();
        let line = self
            .lines
            .get_mut(index)
            .ok_or(BilletageError::LineOutOfRange { index, len })?;
        line.count = count;
        self.updated_at = chrono::Utc::now().naive_utc();
        Ok(())
    }

    /// Get the line at `index`
    pub fn line(&self, index: usize) -> BilletageResult<&DenominationLine> {
        self.lines.get(index).ok_or(BilletageError::LineOutOfRange {
            index,
            len: self.lines.len(),
        })
    }

    /// Grand total of the slip, recomputed from the lines
    pub fn total(&self) -> u64 {
        self.lines.iter().map(DenominationLine::amount).sum()
    }

    /// French wording of the current total
    pub fn total_in_words(&self) -> String {
        words::amount_in_words(self.total())
    }

    /// Zero every count on the slip
    pub fn reset(&mut self) {
        for line in &mut self.lines {
            line.count = 0;
        }
        self.updated_at = chrono::Utc::now().naive_utc();
    }

    /// Produce the submission payload for the current state of the slip
    pub fn summary(&self) -> SlipSummary {
        SlipSummary::new(self)
    }
}

/// One reconciled line in a [`SlipSummary`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipSummaryLine {
    /// Face value of the denomination
    pub face_value: u64,
    /// Number of units counted
    pub count: u64,
    /// Line amount (`face_value * count`)
    pub amount: u64,
}

/// Reconciled slip payload, ready for receipt rendering or submission to the
/// back office.
///
/// This is a snapshot: amounts are fixed at the moment the summary is taken,
/// while the slip itself keeps recomputing on every change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlipSummary {
    /// Identifier of the slip this summary was taken from
    pub slip_id: String,
    /// Optional slip reference (bordereau number)
    pub reference: Option<String>,
    /// Currency code for all amounts
    pub currency: String,
    /// Reconciled denomination lines
    pub lines: Vec<SlipSummaryLine>,
    /// Grand total over all lines
    pub total: u64,
    /// French wording of the grand total
    pub total_in_words: String,
    /// Metadata carried over from the slip
    pub metadata: HashMap<String, String>,
}

impl SlipSummary {
    /// Build a summary from the current state of a slip
    pub fn new(slip: &DenominationSlip) -> Self {
        let lines: Vec<SlipSummaryLine> = slip
            .lines
            .iter()
            .map(|line| SlipSummaryLine {
                face_value: line.face_value,
                count: line.count,
                amount: line.amount(),
            })
            .collect();

        let total = lines.iter().map(|line| line.amount).sum();

        Self {
            slip_id: slip.id.clone(),
            reference: slip.reference.clone(),
            currency: slip.currency.clone(),
            lines,
            total,
            total_in_words: words::amount_in_words(total),
            metadata: slip.metadata.clone(),
        }
    }

    /// Human-readable amount line for the receipt,
    /// e.g. `"348 480 XAF (trois cent quarante-huit mille quatre cent quatre-vingts)"`
    pub fn receipt_line(&self) -> String {
        format!(
            "{} {} ({})",
            group_thousands(self.total),
            self.currency,
            self.total_in_words
        )
    }
}

/// Format an amount with space-separated thousands groups, French style
fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

/// Errors that can occur in the billetage system
#[derive(Debug, thiserror::Error)]
pub enum BilletageError {
    #[error("Storage error: {0}")]
    Storage(String),
    #[error("Slip not found: {0}")]
    SlipNotFound(String),
    #[error("Line index {index} out of range for slip with {len} lines")]
    LineOutOfRange { index: usize, len: usize },
    #[error("Invalid denomination: {0}")]
    InvalidDenomination(String),
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type for billetage operations
pub type BilletageResult<T> = Result<T, BilletageError>;
