use crate::state::case::{ExpiryKind, Verdict};

/// Where the escrow (disputeAmount + arbitrationFee) goes at settlement.
/// Components always sum to exactly the escrowed total; the transfer code in
/// the instructions moves funds, this module only decides amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub claimant: u64,
    pub respondent: u64,
    pub arbitrator: u64,
    pub treasury: u64,
}

impl Distribution {
    pub fn total(&self) -> u64 {
        self.claimant + self.respondent + self.arbitrator + self.treasury
    }
}

/// Escrow split for a delivered verdict. The arbitrator earns the fee in every
/// verdict path. Returns None for `Verdict::None`, which the instruction layer
/// rejects as invalid input.
pub fn verdict_distribution(verdict: Verdict, dispute_amount: u64, fee: u64) -> Option<Distribution> {
    let dist = match verdict {
        Verdict::None => return None,
        Verdict::ClaimantWins => Distribution {
            claimant: dispute_amount,
            respondent: 0,
            arbitrator: fee,
            treasury: 0,
        },
        Verdict::RespondentWins => Distribution {
            claimant: 0,
            respondent: dispute_amount,
            arbitrator: fee,
            treasury: 0,
        },
        Verdict::Split => {
            let half = dispute_amount / 2;
            Distribution {
                claimant: dispute_amount - half, // odd base unit goes to claimant
                respondent: half,
                arbitrator: fee,
                treasury: 0,
            }
        }
    };
    Some(dist)
}

/// Escrow split when a case expires without a verdict.
/// Evidence lapse: full refund of the dispute amount, fee forfeited to the
/// treasury as a spam deterrent. Verdict lapse: protocol-default 50/50 split,
/// fee forfeited; the arbitrator's collateral slash happens in the stake ledger.
pub fn expiry_distribution(kind: ExpiryKind, dispute_amount: u64, fee: u64) -> Distribution {
    match kind {
        ExpiryKind::EvidenceLapsed => Distribution {
            claimant: dispute_amount,
            respondent: 0,
            arbitrator: 0,
            treasury: fee,
        },
        ExpiryKind::VerdictLapsed => {
            let half = dispute_amount / 2;
            Distribution {
                claimant: dispute_amount - half,
                respondent: half,
                arbitrator: 0,
                treasury: fee,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn claimant_win_pays_claimant_and_arbitrator() {
        let d = verdict_distribution(Verdict::ClaimantWins, 1_000, 20).unwrap();
        assert_eq!(d.claimant, 1_000);
        assert_eq!(d.arbitrator, 20);
        assert_eq!(d.respondent + d.treasury, 0);
    }

    #[test]
    fn split_gives_odd_unit_to_claimant() {
        let d = verdict_distribution(Verdict::Split, 1_001, 20).unwrap();
        assert_eq!(d.claimant, 501);
        assert_eq!(d.respondent, 500);
    }

    #[test]
    fn none_verdict_has_no_distribution() {
        assert_eq!(verdict_distribution(Verdict::None, 1_000, 20), None);
    }

    #[test]
    fn evidence_lapse_refunds_all_but_the_fee() {
        let d = expiry_distribution(ExpiryKind::EvidenceLapsed, 1_000, 20);
        assert_eq!(d.claimant, 1_000);
        assert_eq!(d.treasury, 20);
        assert_eq!(d.respondent + d.arbitrator, 0);
    }

    #[test]
    fn verdict_lapse_splits_evenly() {
        let d = expiry_distribution(ExpiryKind::VerdictLapsed, 1_000, 20);
        assert_eq!(d.claimant, 500);
        assert_eq!(d.respondent, 500);
        assert_eq!(d.treasury, 20);
        assert_eq!(d.arbitrator, 0);
    }

    proptest! {
        // Conservation: no settlement path creates or destroys escrowed value.
        #[test]
        fn verdict_settlement_conserves_escrow(
            amount in 1_000u64..u64::MAX / 2,
            fee in 1u64..u64::MAX / 2,
            verdict_ix in 0usize..3,
        ) {
            let verdict = [Verdict::ClaimantWins, Verdict::RespondentWins, Verdict::Split][verdict_ix];
            let d = verdict_distribution(verdict, amount, fee).unwrap();
            prop_assert_eq!(d.total(), amount + fee);
        }

        #[test]
        fn expiry_settlement_conserves_escrow(
            amount in 1_000u64..u64::MAX / 2,
            fee in 1u64..u64::MAX / 2,
            lapse_ix in 0usize..2,
        ) {
            let kind = [ExpiryKind::EvidenceLapsed, ExpiryKind::VerdictLapsed][lapse_ix];
            let d = expiry_distribution(kind, amount, fee);
            prop_assert_eq!(d.total(), amount + fee);
        }
    }
}
