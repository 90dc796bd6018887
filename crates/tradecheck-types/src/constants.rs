//! League-year constants for the tradecheck engine.
//!
//! These are the defaults behind [`RuleConstants::default`](crate::RuleConstants).
//! A different season is expressed by loading a different `RuleConstants`,
//! never by editing these values at runtime.

use rust_decimal::Decimal;

/// Season the default constants belong to.
pub const DEFAULT_SEASON: &str = "2024-25";

/// Upper bound (inclusive) on outgoing salary for the low matching band.
pub const LOW_BAND_CEILING: Decimal = Decimal::from_parts(750_181_773, 0, 0, false, 2);

/// Upper bound (inclusive) on outgoing salary for the middle matching band.
pub const MIDDLE_BAND_CEILING: Decimal = Decimal::from_parts(3_000_727_094, 0, 0, false, 2);

/// Low band: incoming may be up to `outgoing × 2` plus the flat allowance.
pub const LOW_BAND_MULTIPLIER: Decimal = Decimal::TWO;

/// Middle band: incoming may be up to `outgoing` plus this allowance.
pub const MIDDLE_BAND_ALLOWANCE: Decimal = Decimal::from_parts(775_181_773, 0, 0, false, 2);

/// High band: incoming may be up to `outgoing × 1.25` plus the flat allowance.
pub const HIGH_BAND_MULTIPLIER: Decimal = Decimal::from_parts(125, 0, 0, false, 2);

/// Flat add-on used by the low and high bands.
pub const FLAT_ALLOWANCE: Decimal = Decimal::from_parts(250_000, 0, 0, false, 0);

/// Per-salary cushion when absorbing into a TPE or cap space.
pub const ABSORPTION_TOLERANCE: Decimal = Decimal::from_parts(250_000, 0, 0, false, 0);

/// Multiplier applied to the `m` / `mil` / `million` shorthand.
pub const ONE_MILLION: Decimal = Decimal::from_parts(1_000_000, 0, 0, false, 0);

/// Delimiter for salary lists (`"12m, 8.5m, 2000000"`).
pub const DEFAULT_LIST_DELIMITER: char = ',';

/// Version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine name.
pub const ENGINE_NAME: &str = "tradecheck";
