//! # tradecheck-types
//!
//! Shared types, errors, and rule constants for the **tradecheck**
//! salary-matching engine.
//!
//! This crate is the leaf dependency of the workspace — every other crate
//! depends on it. It defines:
//!
//! - **Money**: [`Amount`], [`SalaryPosition`]
//! - **Rules**: [`RuleConstants`], [`MatchingBand`], [`AbsorptionPolicy`]
//! - **Results**: [`LegalityVerdict`], [`AllocationResult`]
//! - **Teams**: [`TeamDirectory`], [`LeagueTeams`]
//! - **Errors**: [`TradeCheckError`] with `TC_ERR_` prefix codes
//! - **Constants**: league-year defaults

pub mod allocation;
pub mod amount;
pub mod config;
pub mod constants;
pub mod error;
pub mod team;
pub mod verdict;

// Re-export all primary types at crate root for ergonomic imports:
//   use tradecheck_types::{Amount, RuleConstants, LegalityVerdict, ...};

pub use allocation::*;
pub use amount::*;
pub use config::*;
pub use error::*;
pub use team::*;
pub use verdict::*;

// Constants are accessed via `tradecheck_types::constants::FOO`
// (not re-exported to avoid name collisions).
