//! Trade proposals.

use serde::{Deserialize, Serialize};
use tradecheck_ingress::{parse_amount, parse_amount_list};
use tradecheck_types::{Amount, Result};

/// One team's side of a trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeSide {
    /// Team code (e.g., "CHA").
    pub team: String,
    /// Salaries this team sends out, in priority order.
    pub sends: Vec<Amount>,
    /// TPE or cap space this team can absorb incoming salary into.
    pub absorption_pool: Option<Amount>,
}

impl TradeSide {
    /// A side with no absorption pool.
    #[must_use]
    pub fn new(team: impl Into<String>, sends: Vec<Amount>) -> Self {
        Self {
            team: team.into(),
            sends,
            absorption_pool: None,
        }
    }

    /// Attach a TPE / cap-space pool.
    #[must_use]
    pub fn with_absorption_pool(mut self, pool: Amount) -> Self {
        self.absorption_pool = Some(pool);
        self
    }

    /// Build a side from raw text: a comma-separated salary list and an
    /// optional pool figure. A blank pool means no pool.
    pub fn from_text(team: impl Into<String>, sends: &str, pool: Option<&str>) -> Result<Self> {
        let absorption_pool = match pool.map(str::trim) {
            Some(text) if !text.is_empty() => Some(parse_amount(text)?),
            _ => None,
        };
        Ok(Self {
            team: team.into(),
            sends: parse_amount_list(sends)?,
            absorption_pool,
        })
    }

    /// Sum of the salaries sent out.
    pub fn outgoing_total(&self) -> Result<Amount> {
        Amount::total(&self.sends)
    }
}

/// A two-team trade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeProposal {
    pub first: TradeSide,
    pub second: TradeSide,
}

impl TradeProposal {
    #[must_use]
    pub fn new(first: TradeSide, second: TradeSide) -> Self {
        Self { first, second }
    }

    /// Each side paired with its counterparty, first side first.
    #[must_use]
    pub fn perspectives(&self) -> [(&TradeSide, &TradeSide); 2] {
        [(&self.first, &self.second), (&self.second, &self.first)]
    }
}

#[cfg(test)]
mod tests {
    use tradecheck_types::TradeCheckError;

    use super::*;

    #[test]
    fn from_text_parses_sends_and_pool() {
        let side = TradeSide::from_text("CHA", "12m, 3.5m", Some("$4,000,000")).unwrap();
        assert_eq!(side.team, "CHA");
        assert_eq!(
            side.sends,
            vec![Amount::from_dollars(12_000_000), Amount::from_dollars(3_500_000)]
        );
        assert_eq!(side.absorption_pool, Some(Amount::from_dollars(4_000_000)));
        assert_eq!(side.outgoing_total().unwrap(), Amount::from_dollars(15_500_000));
    }

    #[test]
    fn blank_pool_means_none() {
        let side = TradeSide::from_text("BOS", "8m", Some("   ")).unwrap();
        assert_eq!(side.absorption_pool, None);
        let side = TradeSide::from_text("BOS", "8m", None).unwrap();
        assert_eq!(side.absorption_pool, None);
    }

    #[test]
    fn from_text_surfaces_malformed_salary() {
        let err = TradeSide::from_text("BOS", "8m, lots", None).unwrap_err();
        assert!(matches!(err, TradeCheckError::MalformedAmount { .. }));
        let err = TradeSide::from_text("BOS", "8m", Some("some")).unwrap_err();
        assert!(matches!(err, TradeCheckError::MalformedAmount { .. }));
    }

    #[test]
    fn perspectives_pair_each_side_with_counterparty() {
        let proposal = TradeProposal::new(
            TradeSide::new("CHA", vec![Amount::from_dollars(1)]),
            TradeSide::new("BOS", vec![Amount::from_dollars(2)]),
        );
        let [(a, b), (c, d)] = proposal.perspectives();
        assert_eq!((a.team.as_str(), b.team.as_str()), ("CHA", "BOS"));
        assert_eq!((c.team.as_str(), d.team.as_str()), ("BOS", "CHA"));
    }
}
