use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};
use crate::errors::JusticeError;
use crate::events::ProtocolInitialized;
use crate::state::ProtocolConfig;
use crate::utils::reputation::MAX_REPUTATION;

#[derive(Accounts)]
pub struct InitProtocol<'info> {
    #[account(
        init,
        seeds = [b"config"],
        bump,
        payer = admin,
        space = ProtocolConfig::LEN
    )]
    pub config: Account<'info, ProtocolConfig>,

    /// Pooled arbitrator stake, owned by the config PDA.
    #[account(
        init,
        seeds = [b"stake_vault"],
        bump,
        payer = admin,
        token::mint = collateral_mint,
        token::authority = config,
    )]
    pub stake_vault: Account<'info, TokenAccount>,

    /// Receives forfeited fees and slashed stake.
    #[account(token::mint = collateral_mint)]
    pub treasury: Account<'info, TokenAccount>,

    #[account(mut)]
    pub admin: Signer<'info>,

    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct InitProtocolParams {
    pub evidence_window: i64,
    pub deliberation_window: i64,
    pub resolution_window: i64,
    pub min_reputation: u16,
}

pub fn process_init_protocol(ctx: Context<InitProtocol>, params: InitProtocolParams) -> Result<()> {
    // Windows are fixed at deployment; there is no runtime mutator for them.
    require!(
        params.evidence_window > 0
            && params.deliberation_window > 0
            && params.resolution_window > 0,
        JusticeError::InvalidInput
    );
    require!(params.min_reputation <= MAX_REPUTATION, JusticeError::InvalidInput);

    let config = &mut ctx.accounts.config;
    config.admin = ctx.accounts.admin.key();
    config.treasury = ctx.accounts.treasury.key();
    config.collateral_mint = ctx.accounts.collateral_mint.key();
    config.stake_vault = ctx.accounts.stake_vault.key();
    config.next_case_id = 0;
    config.evidence_window = params.evidence_window;
    config.deliberation_window = params.deliberation_window;
    config.resolution_window = params.resolution_window;
    config.min_reputation = params.min_reputation;
    config.bump = ctx.bumps.config;

    emit!(ProtocolInitialized {
        admin: config.admin,
        min_reputation: config.min_reputation,
        evidence_window: config.evidence_window,
        deliberation_window: config.deliberation_window,
        resolution_window: config.resolution_window,
    });

    Ok(())
}
