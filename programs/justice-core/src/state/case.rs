use anchor_lang::prelude::*;

pub const MAX_REFERENCE_LEN: usize = 64;   // content identifiers run 46-59 chars
pub const MAX_EVIDENCE_REF_LEN: usize = 128;

#[account]
pub struct Case {
    pub case_id: u64,
    pub claimant: Pubkey,
    pub respondent: Pubkey,
    pub arbitrator: Option<Pubkey>,     // None until selection
    pub dispute_amount: u64,
    pub arbitration_fee: u64,
    pub escrow_amount: u64,             // held by the escrow vault; 0 once settled
    pub collateral_locked: u64,         // arbitrator stake reserved for this case
    pub status: CaseStatus,
    pub verdict: Verdict,
    pub public_reference: String,       // opaque content identifier, max 64 chars
    pub evidence_commitment: [u8; 32],
    pub claimant_submitted: bool,
    pub claimant_evidence_ref: String,  // max 128 chars
    pub claimant_commitment: [u8; 32],
    pub respondent_submitted: bool,
    pub respondent_evidence_ref: String,
    pub respondent_commitment: [u8; 32],
    pub verdict_reference: String,      // arbitrator reasoning, max 64 chars
    pub created_at: i64,
    pub assigned_at: i64,
    pub evidence_deadline: i64,
    pub deliberation_deadline: i64,
    pub resolution_deadline: i64,
    pub is_anonymous: bool,
    pub bump: u8,
}

impl Case {
    // 8 (discriminator)
    // 8 (case_id) + 32 (claimant) + 32 (respondent) + 1+32 (arbitrator option)
    // 8 (dispute_amount) + 8 (arbitration_fee) + 8 (escrow_amount) + 8 (collateral_locked)
    // 1 (status) + 1 (verdict)
    // 4+64 (public_reference) + 32 (evidence_commitment)
    // 2 * (1 + 4+128 + 32) (per-party evidence)
    // 4+64 (verdict_reference)
    // 8 * 5 (timestamps)
    // 1 (is_anonymous) + 1 (bump)
    pub const LEN: usize =
        8 + 8 + 32 * 2 + 33 + 8 * 4 + 1 + 1 + (4 + 64) + 32 + 2 * (1 + 4 + 128 + 32) + (4 + 64) + 8 * 5 + 1 + 1;

    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status,
            CaseStatus::Resolved | CaseStatus::Cancelled | CaseStatus::Expired
        )
    }

    pub fn party(&self, key: &Pubkey) -> Option<Party> {
        if *key == self.claimant {
            Some(Party::Claimant)
        } else if *key == self.respondent {
            Some(Party::Respondent)
        } else {
            None
        }
    }

    pub fn both_submitted(&self) -> bool {
        self.claimant_submitted && self.respondent_submitted
    }

    /// The escrow pays out exactly once; zero remaining escrow marks the case
    /// settled and blocks any further release.
    pub fn settleable(&self) -> bool {
        self.escrow_amount > 0
    }

    /// Which expiry path a (now) Expired case took. Any submitted evidence means
    /// the case reached Deliberation, so the verdict lapsed; otherwise the
    /// evidence window lapsed with nothing filed.
    pub fn expiry_kind(&self) -> ExpiryKind {
        if self.claimant_submitted || self.respondent_submitted {
            ExpiryKind::VerdictLapsed
        } else {
            ExpiryKind::EvidenceLapsed
        }
    }

    /// Lazy phase transition, run at the top of every state-mutating call that
    /// touches the case. Deadlines are stamped once at arbitrator selection and
    /// enforced here against the current clock; no background scheduler exists.
    /// Steps run to a fixpoint, so a case untouched across several lapsed
    /// deadlines lands in the phase the wall clock dictates in a single call.
    /// Idempotent: a terminal case never advances again. Returns the last
    /// transition taken.
    pub fn check_and_advance(&mut self, now: i64) -> Option<PhaseChange> {
        let mut change = None;
        while let Some(step) = self.advance_step(now) {
            change = Some(step);
        }
        change
    }

    fn advance_step(&mut self, now: i64) -> Option<PhaseChange> {
        match self.status {
            CaseStatus::EvidenceSubmission => {
                if self.both_submitted() {
                    self.status = CaseStatus::Deliberation;
                    Some(PhaseChange::EnteredDeliberation)
                } else if now >= self.evidence_deadline {
                    if self.claimant_submitted || self.respondent_submitted {
                        // Partial record: the arbitrator rules on what exists.
                        self.status = CaseStatus::Deliberation;
                        Some(PhaseChange::EnteredDeliberation)
                    } else {
                        self.status = CaseStatus::Expired;
                        Some(PhaseChange::Expired(ExpiryKind::EvidenceLapsed))
                    }
                } else {
                    None
                }
            }
            CaseStatus::Deliberation => {
                if now >= self.resolution_deadline {
                    self.status = CaseStatus::Expired;
                    Some(PhaseChange::Expired(ExpiryKind::VerdictLapsed))
                } else {
                    None
                }
            }
            _ => None,
        }
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum CaseStatus {
    Created,
    ArbitratorSelection,
    EvidenceSubmission,
    Deliberation,
    Resolved,
    Cancelled,
    Expired,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Verdict {
    None,
    ClaimantWins,
    RespondentWins,
    Split,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum Party {
    Claimant,
    Respondent,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ExpiryKind {
    EvidenceLapsed,
    VerdictLapsed,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PhaseChange {
    EnteredDeliberation,
    Expired(ExpiryKind),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case_in_evidence_phase() -> Case {
        Case {
            case_id: 1,
            claimant: Pubkey::new_unique(),
            respondent: Pubkey::new_unique(),
            arbitrator: Some(Pubkey::new_unique()),
            dispute_amount: 1_000_000,
            arbitration_fee: 20_000,
            escrow_amount: 1_020_000,
            collateral_locked: 100_000,
            status: CaseStatus::EvidenceSubmission,
            verdict: Verdict::None,
            public_reference: "QmT5NvUtoM5nWFfrQdVrFtvGfKFmG7AHE8P34isapyhCxX".to_string(),
            evidence_commitment: [7u8; 32],
            claimant_submitted: false,
            claimant_evidence_ref: String::new(),
            claimant_commitment: [0u8; 32],
            respondent_submitted: false,
            respondent_evidence_ref: String::new(),
            respondent_commitment: [0u8; 32],
            verdict_reference: String::new(),
            created_at: 1_000,
            assigned_at: 1_100,
            evidence_deadline: 2_000,
            deliberation_deadline: 3_000,
            resolution_deadline: 4_000,
            is_anonymous: false,
            bump: 255,
        }
    }

    #[test]
    fn no_advance_before_deadline_without_full_evidence() {
        let mut case = case_in_evidence_phase();
        assert_eq!(case.check_and_advance(1_500), None);
        assert_eq!(case.status, CaseStatus::EvidenceSubmission);

        case.claimant_submitted = true;
        assert_eq!(case.check_and_advance(1_500), None);
        assert_eq!(case.status, CaseStatus::EvidenceSubmission);
    }

    #[test]
    fn both_parties_submitting_enters_deliberation_immediately() {
        let mut case = case_in_evidence_phase();
        case.claimant_submitted = true;
        case.respondent_submitted = true;
        assert_eq!(
            case.check_and_advance(1_500),
            Some(PhaseChange::EnteredDeliberation)
        );
        assert_eq!(case.status, CaseStatus::Deliberation);
    }

    #[test]
    fn empty_record_at_deadline_expires_the_case() {
        let mut case = case_in_evidence_phase();
        assert_eq!(
            case.check_and_advance(2_000),
            Some(PhaseChange::Expired(ExpiryKind::EvidenceLapsed))
        );
        assert_eq!(case.status, CaseStatus::Expired);
        assert_eq!(case.expiry_kind(), ExpiryKind::EvidenceLapsed);
    }

    #[test]
    fn partial_record_at_deadline_enters_deliberation() {
        let mut case = case_in_evidence_phase();
        case.respondent_submitted = true;
        assert_eq!(
            case.check_and_advance(2_500),
            Some(PhaseChange::EnteredDeliberation)
        );
        assert_eq!(case.status, CaseStatus::Deliberation);
    }

    #[test]
    fn missed_resolution_deadline_expires_with_verdict_lapse() {
        let mut case = case_in_evidence_phase();
        case.claimant_submitted = true;
        case.respondent_submitted = true;
        case.check_and_advance(1_500);
        assert_eq!(case.check_and_advance(3_999), None);
        assert_eq!(
            case.check_and_advance(4_000),
            Some(PhaseChange::Expired(ExpiryKind::VerdictLapsed))
        );
        assert_eq!(case.expiry_kind(), ExpiryKind::VerdictLapsed);
    }

    #[test]
    fn stale_partial_record_expires_past_the_resolution_deadline() {
        // One party filed, then nobody touched the case until after every
        // deadline. A single pass must run Deliberation through to Expired so
        // the arbitrator cannot still deliver a verdict.
        let mut case = case_in_evidence_phase();
        case.claimant_submitted = true;
        assert_eq!(
            case.check_and_advance(5_000),
            Some(PhaseChange::Expired(ExpiryKind::VerdictLapsed))
        );
        assert_eq!(case.status, CaseStatus::Expired);
        assert_eq!(case.expiry_kind(), ExpiryKind::VerdictLapsed);
    }

    #[test]
    fn full_record_past_all_deadlines_expires_in_one_pass() {
        let mut case = case_in_evidence_phase();
        case.claimant_submitted = true;
        case.respondent_submitted = true;
        assert_eq!(
            case.check_and_advance(4_000),
            Some(PhaseChange::Expired(ExpiryKind::VerdictLapsed))
        );
        assert_eq!(case.status, CaseStatus::Expired);
    }

    #[test]
    fn settled_escrow_blocks_further_release() {
        let mut case = case_in_evidence_phase();
        assert!(case.settleable());
        case.escrow_amount = 0;
        assert!(!case.settleable());
    }

    #[test]
    fn terminal_states_never_advance() {
        for status in [CaseStatus::Resolved, CaseStatus::Cancelled, CaseStatus::Expired] {
            let mut case = case_in_evidence_phase();
            case.status = status;
            assert_eq!(case.check_and_advance(i64::MAX), None);
            assert_eq!(case.status, status);
        }
    }

    #[test]
    fn selection_phases_are_untouched_by_the_scheduler() {
        for status in [CaseStatus::Created, CaseStatus::ArbitratorSelection] {
            let mut case = case_in_evidence_phase();
            case.status = status;
            case.arbitrator = None;
            assert_eq!(case.check_and_advance(i64::MAX), None);
        }
    }

    #[test]
    fn party_lookup() {
        let case = case_in_evidence_phase();
        assert_eq!(case.party(&case.claimant), Some(Party::Claimant));
        assert_eq!(case.party(&case.respondent), Some(Party::Respondent));
        assert_eq!(case.party(&Pubkey::new_unique()), None);
    }
}
