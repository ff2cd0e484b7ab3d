use anchor_lang::prelude::*;

/// Protocol-level constants fixed in the original contract, scaled to the
/// 9-decimal collateral mint.
pub const MINIMUM_STAKE: u64 = 1_000 * 1_000_000_000;
pub const STAKE_WITHDRAWAL_DELAY: i64 = 604_800; // 7 days in seconds

/// Floor on dispute amounts so integer fee math can always satisfy
/// 0 < fee < disputeAmount.
pub const MIN_DISPUTE_AMOUNT: u64 = 1_000;

/// Portion of the dispute amount an arbitrator must lock as collateral.
pub const COLLATERAL_BPS: u64 = 1_000; // 10%
pub const COLLATERAL_FLOOR: u64 = 10 * 1_000_000_000;

#[account]
pub struct ProtocolConfig {
    pub admin: Pubkey,              // 32
    pub treasury: Pubkey,           // 32 (token account for forfeited fees / slashed stake)
    pub collateral_mint: Pubkey,    // 32
    pub stake_vault: Pubkey,        // 32
    pub next_case_id: u64,          // 8
    pub evidence_window: i64,       // 8
    pub deliberation_window: i64,   // 8
    pub resolution_window: i64,     // 8
    pub min_reputation: u16,        // 2
    pub bump: u8,                   // 1
}

impl ProtocolConfig {
    pub const LEN: usize = 8 + 32 * 4 + 8 + 8 * 3 + 2 + 1;
}
