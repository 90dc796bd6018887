//! TPE / cap-space absorption.
//!
//! Splits incoming salaries into those a team can take into a traded player
//! exception or cap space, and those that still need salary matching.
//!
//! ## Algorithm
//!
//! One left-to-right, first-fit pass with a per-salary tolerance:
//!
//! ```text
//! available = pool
//! for s in salaries:
//!     if s <= available + tolerance: absorb s; available -= s
//!     else:                          leave s for matching
//! ```
//!
//! This is not bin packing. Input order decides which salaries are absorbed
//! when the pool cannot take them all, so callers prioritize by ordering the
//! list (e.g., smallest first to absorb the most players).

use rust_decimal::Decimal;
use tradecheck_types::{AbsorptionPolicy, AllocationResult, Amount};

/// Absorb `salaries` into `pool` with the default [`AbsorptionPolicy`].
///
/// An empty salary list yields an empty result with nothing absorbed.
#[must_use]
pub fn absorb(salaries: &[Amount], pool: Amount, tolerance: Amount) -> AllocationResult {
    absorb_with_policy(salaries, pool, tolerance, AbsorptionPolicy::default())
}

/// Absorb `salaries` into `pool`, choosing what happens once the tolerance
/// has pushed the pool below zero.
///
/// - [`AbsorptionPolicy::Clamped`]: the pool is floored at zero after each
///   absorption, so `total_absorbed` never exceeds `pool`.
/// - [`AbsorptionPolicy::Unclamped`]: the deficit carries forward and
///   shrinks the tolerance left for later salaries; `total_absorbed` equals
///   the sum of absorbed salaries.
#[must_use]
pub fn absorb_with_policy(
    salaries: &[Amount],
    pool: Amount,
    tolerance: Amount,
    policy: AbsorptionPolicy,
) -> AllocationResult {
    if salaries.is_empty() {
        return AllocationResult::empty();
    }

    let mut absorbed = Vec::new();
    let mut remaining = Vec::new();
    let mut available: Decimal = pool.value();

    for &salary in salaries {
        let ceiling = available.saturating_add(tolerance.value());
        if salary.value() <= ceiling {
            available = available.saturating_sub(salary.value());
            if policy == AbsorptionPolicy::Clamped && available.is_sign_negative() {
                available = Decimal::ZERO;
            }
            tracing::debug!(salary = %salary, available = %available, "Salary absorbed");
            absorbed.push(salary);
        } else {
            tracing::debug!(salary = %salary, ceiling = %ceiling, "Salary left for matching");
            remaining.push(salary);
        }
    }

    let consumed = pool.value().saturating_sub(available);
    debug_assert!(
        !consumed.is_sign_negative(),
        "absorption pool grew from {pool} to {available}"
    );
    let total_absorbed = Amount::new(consumed).unwrap_or_else(|err| {
        tracing::error!(pool = %pool, available = %available, error = %err, "Absorption pool grew during the pass");
        Amount::ZERO
    });

    tracing::debug!(
        pool = %pool,
        policy = %policy,
        absorbed = absorbed.len(),
        remaining = remaining.len(),
        total_absorbed = %total_absorbed,
        "Absorption pass complete"
    );

    AllocationResult {
        absorbed,
        remaining,
        total_absorbed,
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn dollars(n: u64) -> Amount {
        Amount::from_dollars(n)
    }

    fn tolerance() -> Amount {
        dollars(250_000)
    }

    #[test]
    fn empty_input_yields_empty_result() {
        let result = absorb(&[], dollars(10_000_000), tolerance());
        assert_eq!(result, AllocationResult::empty());
        assert_eq!(result.total_absorbed, Amount::ZERO);
    }

    #[test]
    fn first_fit_skips_salary_that_does_not_fit() {
        // 5M > 4M + 250k stays; 3M <= 4M + 250k is absorbed; 1M of pool left.
        let result = absorb(&[dollars(5_000_000), dollars(3_000_000)], dollars(4_000_000), tolerance());
        assert_eq!(result.absorbed, vec![dollars(3_000_000)]);
        assert_eq!(result.remaining, vec![dollars(5_000_000)]);
        assert_eq!(result.total_absorbed, dollars(3_000_000));
    }

    #[test]
    fn input_order_decides_what_is_absorbed() {
        let pool = dollars(4_000_000);
        let large_first = absorb(&[dollars(4_000_000), dollars(1_000_000)], pool, tolerance());
        assert_eq!(large_first.absorbed, vec![dollars(4_000_000)]);
        assert_eq!(large_first.remaining, vec![dollars(1_000_000)]);

        let small_first = absorb(&[dollars(1_000_000), dollars(4_000_000)], pool, tolerance());
        assert_eq!(small_first.absorbed, vec![dollars(1_000_000)]);
        assert_eq!(small_first.remaining, vec![dollars(4_000_000)]);
    }

    #[test]
    fn tolerance_boundary_is_inclusive() {
        let pool = dollars(4_000_000);
        let at = absorb(&[dollars(4_250_000)], pool, tolerance());
        assert_eq!(at.absorbed, vec![dollars(4_250_000)]);

        let over = absorb(&[Amount::from_cents(425_000_001)], pool, tolerance());
        assert!(over.absorbed.is_empty());
        assert_eq!(over.remaining.len(), 1);
        assert_eq!(over.total_absorbed, Amount::ZERO);
    }

    #[test]
    fn clamped_pool_never_reports_more_than_the_pool() {
        let pool = dollars(4_000_000);
        let salaries = [dollars(4_200_000), dollars(200_000)];
        let result = absorb_with_policy(&salaries, pool, tolerance(), AbsorptionPolicy::Clamped);
        // Floored at zero, the second salary still fits inside the tolerance.
        assert_eq!(result.absorbed, salaries.to_vec());
        assert_eq!(result.total_absorbed, pool);
        assert_eq!(result.absorbed_salary().unwrap(), dollars(4_400_000));
    }

    #[test]
    fn unclamped_pool_carries_the_deficit() {
        let pool = dollars(4_000_000);
        let salaries = [dollars(4_200_000), dollars(200_000)];
        let result = absorb_with_policy(&salaries, pool, tolerance(), AbsorptionPolicy::Unclamped);
        // Pool is at -200k, so only 50k of tolerance is left.
        assert_eq!(result.absorbed, vec![dollars(4_200_000)]);
        assert_eq!(result.remaining, vec![dollars(200_000)]);
        assert_eq!(result.total_absorbed, dollars(4_200_000));
    }

    #[test]
    fn total_absorbed_is_what_left_the_pool() {
        let pool = dollars(10_000_000);
        let salaries = [dollars(3_000_000), dollars(8_000_000), dollars(6_900_000)];
        for policy in [AbsorptionPolicy::Clamped, AbsorptionPolicy::Unclamped] {
            let result = absorb_with_policy(&salaries, pool, tolerance(), policy);
            // 3M leaves 7M; 8M is over 7.25M; 6.9M fits and leaves 100k.
            assert_eq!(result.absorbed, vec![dollars(3_000_000), dollars(6_900_000)]);
            assert_eq!(result.total_absorbed, dollars(9_900_000));
        }

        let over = absorb_with_policy(
            &[dollars(10_100_000)],
            pool,
            tolerance(),
            AbsorptionPolicy::Unclamped,
        );
        assert_eq!(over.total_absorbed, dollars(10_100_000));
    }

    #[test]
    fn zero_pool_still_honors_tolerance() {
        let result = absorb(&[dollars(200_000), dollars(1_000_000)], Amount::ZERO, tolerance());
        assert_eq!(result.absorbed, vec![dollars(200_000)]);
        assert_eq!(result.remaining, vec![dollars(1_000_000)]);
        assert_eq!(result.total_absorbed, Amount::ZERO);
    }

    #[test]
    fn whole_package_fits() {
        let salaries = [dollars(2_000_000), dollars(3_000_000), dollars(1_500_000)];
        let result = absorb(&salaries, dollars(10_000_000), tolerance());
        assert!(result.fully_absorbed());
        assert_eq!(result.total_absorbed, dollars(6_500_000));
    }

    fn is_subsequence(part: &[Amount], whole: &[Amount]) -> bool {
        let mut it = whole.iter();
        part.iter().all(|p| it.any(|w| w == p))
    }

    fn salaries_strategy() -> impl Strategy<Value = Vec<Amount>> {
        prop::collection::vec(0i64..5_000_000_000, 0..12)
            .prop_map(|cents| cents.into_iter().map(Amount::from_cents).collect())
    }

    proptest! {
        /// Every input salary lands in exactly one list, in input order.
        #[test]
        fn allocation_conserves_salaries(
            salaries in salaries_strategy(),
            pool_cents in 0i64..10_000_000_000,
            clamped in any::<bool>(),
        ) {
            let policy = if clamped { AbsorptionPolicy::Clamped } else { AbsorptionPolicy::Unclamped };
            let pool = Amount::from_cents(pool_cents);
            let result = absorb_with_policy(&salaries, pool, tolerance(), policy);

            prop_assert_eq!(result.len(), salaries.len());
            prop_assert!(is_subsequence(&result.absorbed, &salaries));
            prop_assert!(is_subsequence(&result.remaining, &salaries));

            let mut merged: Vec<Amount> =
                result.absorbed.iter().chain(&result.remaining).copied().collect();
            let mut input = salaries.clone();
            merged.sort();
            input.sort();
            prop_assert_eq!(merged, input);
        }

        /// Clamped passes never consume more than the pool; unclamped passes
        /// consume exactly what they absorbed.
        #[test]
        fn total_absorbed_bounds(salaries in salaries_strategy(), pool_cents in 0i64..10_000_000_000) {
            let pool = Amount::from_cents(pool_cents);

            let clamped = absorb_with_policy(&salaries, pool, tolerance(), AbsorptionPolicy::Clamped);
            prop_assert!(clamped.total_absorbed <= pool);
            prop_assert!(clamped.total_absorbed <= clamped.absorbed_salary().unwrap());

            let unclamped = absorb_with_policy(&salaries, pool, tolerance(), AbsorptionPolicy::Unclamped);
            prop_assert_eq!(unclamped.total_absorbed, unclamped.absorbed_salary().unwrap());
        }
    }
}
