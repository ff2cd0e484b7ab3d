use anchor_lang::prelude::*;
use crate::state::{Party, SlashSeverity, Verdict};

#[event]
pub struct ProtocolInitialized {
    pub admin: Pubkey,
    pub min_reputation: u16,
    pub evidence_window: i64,
    pub deliberation_window: i64,
    pub resolution_window: i64,
}

#[event]
pub struct CaseCreated {
    pub case_id: u64,
    pub claimant: Pubkey,
    pub respondent: Pubkey,
    pub dispute_amount: u64,
    pub arbitration_fee: u64,
    pub is_anonymous: bool,
}

#[event]
pub struct CaseAcknowledged {
    pub case_id: u64,
    pub respondent: Pubkey,
}

#[event]
pub struct CaseCancelled {
    pub case_id: u64,
    pub claimant: Pubkey,
    pub refunded: u64,
}

#[event]
pub struct ArbitratorAssigned {
    pub case_id: u64,
    pub arbitrator: Pubkey,
    pub collateral_locked: u64,
    pub evidence_deadline: i64,
    pub resolution_deadline: i64,
}

#[event]
pub struct EvidenceSubmitted {
    pub case_id: u64,
    pub party: Party,
    pub commitment: [u8; 32],
    pub timestamp: i64,
}

#[event]
pub struct CaseResolved {
    pub case_id: u64,
    pub verdict: Verdict,
    pub arbitrator: Pubkey,
    pub timely: bool,
}

#[event]
pub struct CaseExpired {
    pub case_id: u64,
    pub claimant_refund: u64,
    pub respondent_refund: u64,
    pub forfeited: u64,
}

#[event]
pub struct ArbitratorRegistered {
    pub arbitrator: Pubkey,
    pub stake: u64,
    pub public_key: String,
}

#[event]
pub struct ArbitratorDeactivated {
    pub arbitrator: Pubkey,
}

#[event]
pub struct ArbitratorReactivated {
    pub arbitrator: Pubkey,
}

#[event]
pub struct StakeDeposited {
    pub arbitrator: Pubkey,
    pub amount: u64,
    pub stake: u64,
}

#[event]
pub struct StakeWithdrawalRequested {
    pub arbitrator: Pubkey,
    pub request_id: u64,
    pub amount: u64,
    pub unlock_at: i64,
}

#[event]
pub struct StakeWithdrawalExecuted {
    pub arbitrator: Pubkey,
    pub request_id: u64,
    pub amount: u64,
    pub stake: u64,
}

#[event]
pub struct StakeWithdrawalCancelled {
    pub arbitrator: Pubkey,
    pub request_id: u64,
    pub amount: u64,
}

#[event]
pub struct ArbitratorSlashed {
    pub arbitrator: Pubkey,
    pub amount: u64,
    pub severity: SlashSeverity,
    pub stake: u64,
    pub reputation_score: u16,
    pub reason: String,
}

#[event]
pub struct ReputationUpdated {
    pub arbitrator: Pubkey,
    pub previous: u16,
    pub current: u16,
}
