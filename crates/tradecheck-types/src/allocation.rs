//! Absorption allocation results.

use serde::{Deserialize, Serialize};

use crate::{Amount, Result};

/// Split of an incoming salary list into salaries absorbed by a TPE / cap
/// space and salaries that still need matching.
///
/// Both lists keep the input order, and together they hold exactly the
/// input salaries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AllocationResult {
    /// Salaries taken into the pool (no matching needed).
    pub absorbed: Vec<Amount>,
    /// Salaries left for the matching rules.
    pub remaining: Vec<Amount>,
    /// Pool consumed: `pool_before - pool_after`.
    pub total_absorbed: Amount,
}

impl AllocationResult {
    /// Result for an empty salary list.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Result when no pool is applied: everything remains.
    #[must_use]
    pub fn unabsorbed(salaries: &[Amount]) -> Self {
        Self {
            absorbed: Vec::new(),
            remaining: salaries.to_vec(),
            total_absorbed: Amount::ZERO,
        }
    }

    /// Sum of the absorbed salaries. Can exceed `total_absorbed` when the
    /// tolerance carried a salary past the pool.
    pub fn absorbed_salary(&self) -> Result<Amount> {
        Amount::total(&self.absorbed)
    }

    /// Sum of the salaries still subject to matching.
    pub fn remaining_salary(&self) -> Result<Amount> {
        Amount::total(&self.remaining)
    }

    /// Number of salaries seen by the allocation pass.
    #[must_use]
    pub fn len(&self) -> usize {
        self.absorbed.len() + self.remaining.len()
    }

    /// Whether the allocation pass saw no salaries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every salary was absorbed.
    #[must_use]
    pub fn fully_absorbed(&self) -> bool {
        self.remaining.is_empty()
    }
}
