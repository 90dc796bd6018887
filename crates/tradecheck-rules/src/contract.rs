//! Contract salary helpers.

use rust_decimal::{Decimal, RoundingStrategy};
use tradecheck_types::{Amount, Result, TradeCheckError};

/// Average salary per season for a contract worth `total` over `seasons`,
/// rounded to the cent.
///
/// # Errors
/// - `InvalidContractLength` if `seasons` is zero or negative
/// - `ArithmeticOverflow` if the division leaves the decimal range
pub fn per_season_salary(total: Amount, seasons: Decimal) -> Result<Amount> {
    if seasons <= Decimal::ZERO {
        return Err(TradeCheckError::InvalidContractLength { seasons });
    }
    let per_season = total
        .value()
        .checked_div(seasons)
        .ok_or(TradeCheckError::ArithmeticOverflow {
            operation: "per-season salary",
        })?
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    Amount::new(per_season)
}
