use crate::state::arbitrator::SlashSeverity;
use crate::utils::fees::TOKEN_UNIT;

pub const MAX_REPUTATION: u16 = 1_000;
pub const INITIAL_REPUTATION: u16 = 500;

/// Dispute-size tiers scaling the per-resolution increment.
const TIER_MEDIUM: u64 = 1_000 * TOKEN_UNIT;
const TIER_LARGE: u64 = 10_000 * TOKEN_UNIT;

/// Flat deduction when the verdict lands after the deliberation deadline.
const LATE_PENALTY: i16 = 20;

fn complexity_base(dispute_amount: u64) -> i16 {
    if dispute_amount < TIER_MEDIUM {
        10
    } else if dispute_amount < TIER_LARGE {
        20
    } else {
        30
    }
}

/// Score change for an upheld resolution. Late verdicts can net negative for
/// small cases; the score itself is floored at zero by `apply_delta`.
pub fn resolution_delta(dispute_amount: u64, timely: bool) -> i16 {
    let base = complexity_base(dispute_amount);
    if timely {
        base
    } else {
        base - LATE_PENALTY
    }
}

pub fn apply_delta(score: u16, delta: i16) -> u16 {
    (score as i32 + delta as i32).clamp(0, MAX_REPUTATION as i32) as u16
}

/// Severity-scaled penalty: Minor -5%, Major -20%, Critical -50% of the
/// current score. Ties reputation decay to verifiable on-chain outcomes only.
pub fn slashed_score(score: u16, severity: SlashSeverity) -> u16 {
    let cut = match severity {
        SlashSeverity::Minor => score / 20,
        SlashSeverity::Major => score / 5,
        SlashSeverity::Critical => score / 2,
    };
    score - cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increment_scales_with_dispute_tier() {
        assert_eq!(resolution_delta(TIER_MEDIUM - 1, true), 10);
        assert_eq!(resolution_delta(TIER_MEDIUM, true), 20);
        assert_eq!(resolution_delta(TIER_LARGE, true), 30);
    }

    #[test]
    fn late_resolution_can_net_negative() {
        assert_eq!(resolution_delta(1_000, false), -10);
        assert_eq!(resolution_delta(TIER_LARGE, false), 10);
    }

    #[test]
    fn score_saturates_at_both_bounds() {
        assert_eq!(apply_delta(995, 30), MAX_REPUTATION);
        assert_eq!(apply_delta(5, -10), 0);
        assert_eq!(apply_delta(500, 20), 520);
    }

    #[test]
    fn severity_percentages() {
        assert_eq!(slashed_score(1_000, SlashSeverity::Minor), 950);
        assert_eq!(slashed_score(1_000, SlashSeverity::Major), 800);
        assert_eq!(slashed_score(1_000, SlashSeverity::Critical), 500);
        // never goes negative, even from zero
        assert_eq!(slashed_score(0, SlashSeverity::Critical), 0);
    }
}
