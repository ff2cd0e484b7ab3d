use anchor_lang::prelude::*;

#[account]
pub struct StakeWithdrawalRequest {
    pub arbitrator: Pubkey,
    pub request_id: u64,
    pub amount: u64,
    pub requested_at: i64,
    pub unlock_at: i64,     // requested_at + STAKE_WITHDRAWAL_DELAY
    pub bump: u8,
}

impl StakeWithdrawalRequest {
    pub const LEN: usize = 8 + 32 + 8 + 8 + 8 + 8 + 1;

    /// The delay is inclusive of its endpoint: the request becomes executable
    /// at exactly `unlock_at`.
    pub fn unlocked(&self, now: i64) -> bool {
        now >= self.unlock_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::config::STAKE_WITHDRAWAL_DELAY;

    fn request(requested_at: i64) -> StakeWithdrawalRequest {
        StakeWithdrawalRequest {
            arbitrator: Pubkey::new_unique(),
            request_id: 0,
            amount: 500,
            requested_at,
            unlock_at: requested_at + STAKE_WITHDRAWAL_DELAY,
            bump: 255,
        }
    }

    #[test]
    fn locked_until_the_delay_elapses() {
        let req = request(1_000);
        assert!(!req.unlocked(1_000));
        assert!(!req.unlocked(req.unlock_at - 1));
    }

    #[test]
    fn unlocks_at_the_exact_boundary() {
        let req = request(1_000);
        assert!(req.unlocked(req.unlock_at));
        assert!(req.unlocked(req.unlock_at + 1));
    }
}
