use crate::state::config::{COLLATERAL_BPS, COLLATERAL_FLOOR};

pub const TOKEN_UNIT: u64 = 1_000_000_000;

/// Marginal fee brackets: (upper bound of bracket, bps charged on the portion
/// falling inside it). Tax-bracket accumulation keeps the total fee monotonic
/// non-decreasing in the dispute amount.
const FEE_TIERS: &[(u64, u128)] = &[
    (1_000 * TOKEN_UNIT, 200),   // first 1k tokens at 2%
    (10_000 * TOKEN_UNIT, 150),  // next 9k tokens at 1.5%
    (u64::MAX, 100),             // remainder at 1%
];

/// Pure function of the dispute amount alone, so the payment check in
/// case creation is verifiable client-side without extra calls.
/// For any amount >= MIN_DISPUTE_AMOUNT the result is in (0, amount).
pub fn calculate_arbitration_fee(dispute_amount: u64) -> u64 {
    let mut fee: u128 = 0;
    let mut covered: u64 = 0;
    for &(upper, bps) in FEE_TIERS {
        let portion = dispute_amount.min(upper) - covered;
        fee += portion as u128 * bps / 10_000;
        if dispute_amount <= upper {
            break;
        }
        covered = upper;
    }
    (fee as u64).max(1)
}

/// Stake an arbitrator must keep locked while the case is open.
pub fn required_collateral(dispute_amount: u64) -> u64 {
    let proportional = (dispute_amount as u128 * COLLATERAL_BPS as u128 / 10_000) as u64;
    proportional.max(COLLATERAL_FLOOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::config::MIN_DISPUTE_AMOUNT;
    use proptest::prelude::*;

    #[test]
    fn two_percent_inside_first_bracket() {
        assert_eq!(calculate_arbitration_fee(1_000), 20);
        assert_eq!(calculate_arbitration_fee(1_000 * TOKEN_UNIT), 20 * TOKEN_UNIT);
    }

    #[test]
    fn bracket_boundaries_accumulate_marginally() {
        // 20 (first 1k at 2%) + 135 (next 9k at 1.5%)
        assert_eq!(calculate_arbitration_fee(10_000 * TOKEN_UNIT), 155 * TOKEN_UNIT);
        // + 900 (next 90k at 1%)
        assert_eq!(calculate_arbitration_fee(100_000 * TOKEN_UNIT), 1_055 * TOKEN_UNIT);
    }

    #[test]
    fn fee_never_zero() {
        assert_eq!(calculate_arbitration_fee(1), 1);
        assert_eq!(calculate_arbitration_fee(49), 1);
    }

    #[test]
    fn collateral_has_a_floor() {
        assert_eq!(required_collateral(1_000), COLLATERAL_FLOOR);
        assert_eq!(
            required_collateral(10_000 * TOKEN_UNIT),
            1_000 * TOKEN_UNIT
        );
    }

    proptest! {
        #[test]
        fn fee_strictly_between_zero_and_amount(amount in MIN_DISPUTE_AMOUNT..u64::MAX) {
            let fee = calculate_arbitration_fee(amount);
            prop_assert!(fee > 0);
            prop_assert!(fee < amount);
        }

        #[test]
        fn fee_is_monotonic_non_decreasing(a in 1u64..u64::MAX, b in 1u64..u64::MAX) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(calculate_arbitration_fee(lo) <= calculate_arbitration_fee(hi));
        }
    }
}
