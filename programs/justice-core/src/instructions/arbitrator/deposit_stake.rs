use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::StakeDeposited;
use crate::state::{ArbitratorProfile, ProtocolConfig};

#[derive(Accounts)]
pub struct DepositStake<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [b"arbitrator", authority.key().as_ref()],
        bump = arbitrator_profile.bump,
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    #[account(mut, address = config.stake_vault)]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = config.collateral_mint,
        associated_token::authority = authority,
    )]
    pub arbitrator_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub authority: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Unconditional for any positive amount; the transfer CPI is the fund
/// confirmation.
pub fn process_deposit_stake(ctx: Context<DepositStake>, amount: u64) -> Result<()> {
    require!(amount > 0, JusticeError::InvalidInput);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.arbitrator_ata.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        amount,
    )?;

    let profile = &mut ctx.accounts.arbitrator_profile;
    profile.stake = profile
        .stake
        .checked_add(amount)
        .ok_or(JusticeError::MathOverflow)?;

    emit!(StakeDeposited {
        arbitrator: profile.authority,
        amount,
        stake: profile.stake,
    });

    Ok(())
}
