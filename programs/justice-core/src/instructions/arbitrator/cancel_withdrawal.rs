use anchor_lang::prelude::*;
use crate::errors::JusticeError;
use crate::events::StakeWithdrawalCancelled;
use crate::state::{ArbitratorProfile, StakeWithdrawalRequest};

#[derive(Accounts)]
pub struct CancelStakeWithdrawal<'info> {
    #[account(
        mut,
        seeds = [b"arbitrator", authority.key().as_ref()],
        bump = arbitrator_profile.bump,
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    #[account(
        mut,
        seeds = [
            b"withdrawal",
            authority.key().as_ref(),
            withdrawal_request.request_id.to_le_bytes().as_ref()
        ],
        bump = withdrawal_request.bump,
        constraint = withdrawal_request.arbitrator == authority.key() @ JusticeError::Unauthorized,
        close = authority
    )]
    pub withdrawal_request: Account<'info, StakeWithdrawalRequest>,

    #[account(mut)]
    pub authority: Signer<'info>,
}

/// Releases the requested amount back into free stake.
pub fn process_cancel_withdrawal(ctx: Context<CancelStakeWithdrawal>) -> Result<()> {
    let request = &ctx.accounts.withdrawal_request;
    let profile = &mut ctx.accounts.arbitrator_profile;

    profile.pending_withdrawal = profile.pending_withdrawal.saturating_sub(request.amount);

    emit!(StakeWithdrawalCancelled {
        arbitrator: profile.authority,
        request_id: request.request_id,
        amount: request.amount,
    });

    Ok(())
}
