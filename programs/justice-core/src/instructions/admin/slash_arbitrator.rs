use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::ArbitratorSlashed;
use crate::state::{ArbitratorProfile, ProtocolConfig, SlashSeverity};

pub const MAX_SLASH_REASON_LEN: usize = 256;

#[derive(Accounts)]
pub struct SlashArbitrator<'info> {
    #[account(
        seeds = [b"config"],
        bump = config.bump,
        constraint = config.admin == admin.key() @ JusticeError::Unauthorized
    )]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [b"arbitrator", arbitrator.key().as_ref()],
        bump = arbitrator_profile.bump,
        constraint = arbitrator_profile.authority == arbitrator.key() @ JusticeError::ArbitratorNotFound
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    /// CHECK: Identity being slashed; existence of its profile PDA is the lookup
    pub arbitrator: AccountInfo<'info>,

    #[account(mut, address = config.stake_vault)]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury.key() == config.treasury
    )]
    pub treasury: Account<'info, TokenAccount>,

    pub admin: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Proven-misconduct path of the stake ledger. Reduces stake (floored at zero,
/// so it only fails when the profile itself is missing) and applies the
/// severity-scaled reputation penalty; a Critical slash also flags and
/// deactivates the profile.
pub fn process_slash_arbitrator(
    ctx: Context<SlashArbitrator>,
    amount: u64,
    severity: SlashSeverity,
    reason: String,
) -> Result<()> {
    require!(reason.len() <= MAX_SLASH_REASON_LEN, JusticeError::ReferenceTooLong);

    let profile = &mut ctx.accounts.arbitrator_profile;
    let slashed = profile.apply_stake_slash(amount);

    if slashed > 0 {
        let seeds = &[b"config".as_ref(), &[ctx.accounts.config.bump]];
        let signer = &[&seeds[..]];
        token::transfer(
            CpiContext::new_with_signer(
                ctx.accounts.token_program.to_account_info(),
                Transfer {
                    from: ctx.accounts.stake_vault.to_account_info(),
                    to: ctx.accounts.treasury.to_account_info(),
                    authority: ctx.accounts.config.to_account_info(),
                },
                signer,
            ),
            slashed,
        )?;
    }

    profile.apply_slash_penalty(severity);

    emit!(ArbitratorSlashed {
        arbitrator: profile.authority,
        amount: slashed,
        severity,
        stake: profile.stake,
        reputation_score: profile.reputation_score,
        reason,
    });

    Ok(())
}
