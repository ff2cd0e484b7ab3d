use anchor_lang::prelude::*;
use crate::errors::JusticeError;
use crate::events::{ArbitratorDeactivated, ArbitratorReactivated};
use crate::state::config::MINIMUM_STAKE;
use crate::state::ArbitratorProfile;

#[derive(Accounts)]
pub struct SetArbitratorActive<'info> {
    #[account(
        mut,
        seeds = [b"arbitrator", authority.key().as_ref()],
        bump = arbitrator_profile.bump,
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    pub authority: Signer<'info>,
}

/// Voluntary exit. Open cases keep their locked collateral and run to
/// completion; the profile just stops being selectable.
pub fn deactivate_arbitrator(ctx: Context<SetArbitratorActive>) -> Result<()> {
    let profile = &mut ctx.accounts.arbitrator_profile;
    require!(profile.is_active, JusticeError::InvalidState);
    profile.is_active = false;

    emit!(ArbitratorDeactivated { arbitrator: profile.authority });
    Ok(())
}

pub fn reactivate_arbitrator(ctx: Context<SetArbitratorActive>) -> Result<()> {
    let profile = &mut ctx.accounts.arbitrator_profile;
    require!(!profile.is_active, JusticeError::InvalidState);
    require!(!profile.is_slashed, JusticeError::ArbitratorNotEligible);
    require!(profile.stake >= MINIMUM_STAKE, JusticeError::InsufficientStake);
    profile.is_active = true;

    emit!(ArbitratorReactivated { arbitrator: profile.authority });
    Ok(())
}
