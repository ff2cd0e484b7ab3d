use anchor_lang::prelude::*;
use crate::errors::JusticeError;
use crate::events::StakeWithdrawalRequested;
use crate::state::config::STAKE_WITHDRAWAL_DELAY;
use crate::state::{ArbitratorProfile, StakeWithdrawalRequest};

#[derive(Accounts)]
pub struct RequestStakeWithdrawal<'info> {
    #[account(
        mut,
        seeds = [b"arbitrator", authority.key().as_ref()],
        bump = arbitrator_profile.bump,
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    #[account(
        init,
        seeds = [
            b"withdrawal",
            authority.key().as_ref(),
            arbitrator_profile.next_withdrawal_id.to_le_bytes().as_ref()
        ],
        bump,
        payer = authority,
        space = StakeWithdrawalRequest::LEN
    )]
    pub withdrawal_request: Account<'info, StakeWithdrawalRequest>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub system_program: Program<'info, System>,
}

/// Opens a delay-gated exit for part of the stake. Funds already pledged to
/// open cases or to earlier requests cannot be requested again; the
/// `pending_withdrawal` accumulator enforces that across concurrent requests.
pub fn process_request_withdrawal(ctx: Context<RequestStakeWithdrawal>, amount: u64) -> Result<()> {
    require!(amount > 0, JusticeError::InvalidInput);

    let profile = &mut ctx.accounts.arbitrator_profile;
    require!(amount <= profile.free_stake(), JusticeError::InsufficientStake);

    profile.pending_withdrawal = profile
        .pending_withdrawal
        .checked_add(amount)
        .ok_or(JusticeError::MathOverflow)?;

    let clock = Clock::get()?;
    let request = &mut ctx.accounts.withdrawal_request;
    request.arbitrator = profile.authority;
    request.request_id = profile.next_withdrawal_id;
    request.amount = amount;
    request.requested_at = clock.unix_timestamp;
    request.unlock_at = clock.unix_timestamp + STAKE_WITHDRAWAL_DELAY;
    request.bump = ctx.bumps.withdrawal_request;

    profile.next_withdrawal_id += 1;

    emit!(StakeWithdrawalRequested {
        arbitrator: profile.authority,
        request_id: request.request_id,
        amount,
        unlock_at: request.unlock_at,
    });

    Ok(())
}
