use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::StakeWithdrawalExecuted;
use crate::state::config::MINIMUM_STAKE;
use crate::state::{ArbitratorProfile, ProtocolConfig, StakeWithdrawalRequest};

#[derive(Accounts)]
pub struct ExecuteStakeWithdrawal<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

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

pub fn process_execute_withdrawal(ctx: Context<ExecuteStakeWithdrawal>) -> Result<()> {
    let clock = Clock::get()?;
    let request = &ctx.accounts.withdrawal_request;
    require!(request.unlocked(clock.unix_timestamp), JusticeError::WithdrawalLocked);

    let profile = &mut ctx.accounts.arbitrator_profile;
    let amount = request.amount;

    // A slash between request and execution can shrink the stake below the
    // requested amount; the request is then stale and must be re-issued.
    require!(
        amount <= profile.stake.saturating_sub(profile.locked_stake),
        JusticeError::InsufficientStake
    );

    let seeds = &[b"config".as_ref(), &[ctx.accounts.config.bump]];
    let signer = &[&seeds[..]];
    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.stake_vault.to_account_info(),
                to: ctx.accounts.arbitrator_ata.to_account_info(),
                authority: ctx.accounts.config.to_account_info(),
            },
            signer,
        ),
        amount,
    )?;

    profile.stake -= amount;
    profile.pending_withdrawal = profile.pending_withdrawal.saturating_sub(amount);
    if profile.stake < MINIMUM_STAKE {
        // Withdrawing below the protocol minimum is a voluntary exit; history
        // and reputation are retained on the profile.
        profile.is_active = false;
    }

    emit!(StakeWithdrawalExecuted {
        arbitrator: profile.authority,
        request_id: request.request_id,
        amount,
        stake: profile.stake,
    });

    Ok(())
}
