//! # tradecheck-rules
//!
//! **Pure salary-matching rules.**
//!
//! Every function here is a deterministic function of its arguments:
//!
//! - **No side effects**: no I/O, no printing, no shared state
//! - **Exact arithmetic**: all money is `Decimal`, boundaries compare exactly
//! - **Season-driven**: every constant comes from the caller's
//!   [`RuleConstants`](tradecheck_types::RuleConstants)
//!
//! ```text
//! absorb(incoming, pool)            -> AllocationResult
//! evaluate_legality(out, in, rules) -> LegalityVerdict
//! ```

pub mod absorption;
pub mod contract;
pub mod evaluator;

pub use absorption::{absorb, absorb_with_policy};
pub use contract::per_season_salary;
pub use evaluator::{evaluate_legality, formula_description, matching_limit, rule_description};
