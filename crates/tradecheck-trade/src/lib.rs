//! # tradecheck-trade
//!
//! **Trade assessment**: judges a two-team trade from both sides.
//!
//! ## Flow
//!
//! ```text
//! raw text → ingress::parse_amount_list → TradeSide × 2 → TradeProposal
//!     → per side: rules::absorb (if the side has a TPE / cap space)
//!     → rules::evaluate_legality(outgoing, remaining incoming)
//!     → TradeAssessment
//! ```
//!
//! The crate also carries the process-level pieces a host needs:
//! [`EngineConfig`] (TOML) and [`init_logging`].

pub mod assessment;
pub mod checker;
pub mod config;
pub mod proposal;
pub mod telemetry;

pub use assessment::{SideOutcome, SidePerspective, TradeAssessment, assess_trade};
pub use checker::TradeChecker;
pub use config::{EngineConfig, LogFormat, LoggingConfig};
pub use proposal::{TradeProposal, TradeSide};
pub use telemetry::init_logging;
