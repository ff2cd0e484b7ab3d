use anchor_lang::prelude::*;

use crate::errors::JusticeError;
use crate::utils::reputation;

pub const MAX_PUBLIC_KEY_LEN: usize = 64;

#[account]
pub struct ArbitratorProfile {
    pub authority: Pubkey,
    pub stake: u64,
    pub locked_stake: u64,          // collateral reserved across all open cases
    pub pending_withdrawal: u64,    // amounts committed to open withdrawal requests
    pub reputation_score: u16,      // bounded [0, 1000]
    pub total_cases_handled: u32,
    pub successful_resolutions: u32,
    pub average_resolution_secs: i64,
    pub is_active: bool,
    pub is_slashed: bool,           // set by a Critical slash, blocks eligibility
    pub minimum_stake_accepted: u64,
    pub public_key: String,         // opaque, for off-chain encrypted evidence
    pub next_withdrawal_id: u64,
    pub registered_at: i64,
    pub bump: u8,
}

impl ArbitratorProfile {
    // 8 (discriminator) + 32 (authority)
    // 8 (stake) + 8 (locked_stake) + 8 (pending_withdrawal)
    // 2 (reputation) + 4 (total) + 4 (successful) + 8 (avg secs)
    // 1 (is_active) + 1 (is_slashed) + 8 (minimum_stake_accepted)
    // 4+64 (public_key) + 8 (next_withdrawal_id) + 8 (registered_at) + 1 (bump)
    pub const LEN: usize = 8 + 32 + 8 * 3 + 2 + 4 + 4 + 8 + 1 + 1 + 8 + (4 + 64) + 8 + 8 + 1;

    /// Stake not pledged to an open case or an open withdrawal request.
    pub fn free_stake(&self) -> u64 {
        self.stake
            .saturating_sub(self.locked_stake)
            .saturating_sub(self.pending_withdrawal)
    }

    pub fn is_eligible(&self, min_reputation: u16) -> bool {
        self.is_active && !self.is_slashed && self.reputation_score >= min_reputation
    }

    pub fn lock_collateral(&mut self, amount: u64) -> Result<()> {
        require!(self.free_stake() >= amount, JusticeError::InsufficientStake);
        self.locked_stake = self
            .locked_stake
            .checked_add(amount)
            .ok_or(JusticeError::MathOverflow)?;
        Ok(())
    }

    pub fn unlock_collateral(&mut self, amount: u64) {
        self.locked_stake = self.locked_stake.saturating_sub(amount);
    }

    /// Punitive stake reduction, floored at zero. Returns the amount actually
    /// removed, which the caller must move out of the stake vault.
    pub fn apply_stake_slash(&mut self, amount: u64) -> u64 {
        let slashed = amount.min(self.stake);
        self.stake -= slashed;
        self.locked_stake = self.locked_stake.min(self.stake);
        self.pending_withdrawal = self.pending_withdrawal.min(self.stake);
        slashed
    }

    pub fn apply_slash_penalty(&mut self, severity: SlashSeverity) {
        self.reputation_score = reputation::slashed_score(self.reputation_score, severity);
        if severity == SlashSeverity::Critical {
            self.is_slashed = true;
            self.is_active = false;
        }
    }

    /// Reputation and counter update on a delivered verdict. `timely` means the
    /// verdict landed at or before the deliberation deadline; late verdicts
    /// (before the resolution deadline) earn the penalized increment.
    pub fn record_resolution(&mut self, dispute_amount: u64, timely: bool, duration_secs: i64) {
        self.total_cases_handled = self.total_cases_handled.saturating_add(1);
        self.successful_resolutions = self.successful_resolutions.saturating_add(1);

        let delta = reputation::resolution_delta(dispute_amount, timely);
        self.reputation_score = reputation::apply_delta(self.reputation_score, delta);

        let n = self.successful_resolutions as i64;
        self.average_resolution_secs =
            (self.average_resolution_secs * (n - 1) + duration_secs) / n;
    }
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum SlashSeverity {
    Minor,
    Major,
    Critical,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::reputation::INITIAL_REPUTATION;

    fn profile() -> ArbitratorProfile {
        ArbitratorProfile {
            authority: Pubkey::new_unique(),
            stake: 5_000_000_000_000,
            locked_stake: 0,
            pending_withdrawal: 0,
            reputation_score: INITIAL_REPUTATION,
            total_cases_handled: 0,
            successful_resolutions: 0,
            average_resolution_secs: 0,
            is_active: true,
            is_slashed: false,
            minimum_stake_accepted: 1_000_000_000_000,
            public_key: "age1qyqszqgpqyqszqgpqyqszqgpqyqszqgp".to_string(),
            next_withdrawal_id: 0,
            registered_at: 0,
            bump: 254,
        }
    }

    #[test]
    fn free_stake_excludes_locked_and_pending() {
        let mut p = profile();
        p.locked_stake = 1_000;
        p.pending_withdrawal = 2_000;
        assert_eq!(p.free_stake(), p.stake - 3_000);
    }

    #[test]
    fn collateral_cannot_exceed_free_stake() {
        let mut p = profile();
        p.pending_withdrawal = p.stake - 100;
        assert!(p.lock_collateral(101).is_err());
        assert!(p.lock_collateral(100).is_ok());
        assert_eq!(p.locked_stake, 100);
        assert_eq!(p.free_stake(), 0);
    }

    #[test]
    fn stake_slash_floors_at_zero_and_clamps_locks() {
        let mut p = profile();
        p.locked_stake = p.stake;
        let removed = p.apply_stake_slash(u64::MAX);
        assert_eq!(removed, 5_000_000_000_000);
        assert_eq!(p.stake, 0);
        assert_eq!(p.locked_stake, 0);
    }

    #[test]
    fn critical_slash_flags_and_deactivates() {
        let mut p = profile();
        p.apply_slash_penalty(SlashSeverity::Critical);
        assert_eq!(p.reputation_score, INITIAL_REPUTATION / 2);
        assert!(p.is_slashed);
        assert!(!p.is_active);
        assert!(!p.is_eligible(0));
    }

    #[test]
    fn resolution_counters_and_running_average() {
        let mut p = profile();
        p.record_resolution(1_000_000, true, 100);
        p.record_resolution(1_000_000, true, 300);
        assert_eq!(p.total_cases_handled, 2);
        assert_eq!(p.successful_resolutions, 2);
        assert!(p.successful_resolutions <= p.total_cases_handled);
        assert_eq!(p.average_resolution_secs, 200);
    }

    #[test]
    fn eligibility_requires_active_and_reputation() {
        let mut p = profile();
        assert!(p.is_eligible(500));
        assert!(!p.is_eligible(501));
        p.is_active = false;
        assert!(!p.is_eligible(0));
    }
}
