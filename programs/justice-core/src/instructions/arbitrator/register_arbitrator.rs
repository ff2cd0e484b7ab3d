use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::ArbitratorRegistered;
use crate::state::arbitrator::MAX_PUBLIC_KEY_LEN;
use crate::state::config::MINIMUM_STAKE;
use crate::state::{ArbitratorProfile, ProtocolConfig};
use crate::utils::reputation::INITIAL_REPUTATION;

#[derive(Accounts)]
pub struct RegisterArbitrator<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        seeds = [b"arbitrator", authority.key().as_ref()],
        bump,
        payer = authority,
        space = ArbitratorProfile::LEN
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
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct RegisterArbitratorParams {
    pub initial_deposit: u64,
    pub minimum_stake_accepted: u64,
    /// Opaque key material for off-chain encrypted evidence exchange.
    pub public_key: String,
}

pub fn process_register_arbitrator(
    ctx: Context<RegisterArbitrator>,
    params: RegisterArbitratorParams,
) -> Result<()> {
    require!(params.initial_deposit >= MINIMUM_STAKE, JusticeError::InsufficientStake);
    require!(
        params.minimum_stake_accepted >= MINIMUM_STAKE
            && params.initial_deposit >= params.minimum_stake_accepted,
        JusticeError::InvalidInput
    );
    require!(!params.public_key.is_empty(), JusticeError::InvalidInput);
    require!(params.public_key.len() <= MAX_PUBLIC_KEY_LEN, JusticeError::ReferenceTooLong);

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.arbitrator_ata.to_account_info(),
                to: ctx.accounts.stake_vault.to_account_info(),
                authority: ctx.accounts.authority.to_account_info(),
            },
        ),
        params.initial_deposit,
    )?;

    let clock = Clock::get()?;
    let profile = &mut ctx.accounts.arbitrator_profile;
    profile.authority = ctx.accounts.authority.key();
    profile.stake = params.initial_deposit;
    profile.locked_stake = 0;
    profile.pending_withdrawal = 0;
    profile.reputation_score = INITIAL_REPUTATION;
    profile.total_cases_handled = 0;
    profile.successful_resolutions = 0;
    profile.average_resolution_secs = 0;
    profile.is_active = true;
    profile.is_slashed = false;
    profile.minimum_stake_accepted = params.minimum_stake_accepted;
    profile.public_key = params.public_key.clone();
    profile.next_withdrawal_id = 0;
    profile.registered_at = clock.unix_timestamp;
    profile.bump = ctx.bumps.arbitrator_profile;

    emit!(ArbitratorRegistered {
        arbitrator: profile.authority,
        stake: profile.stake,
        public_key: params.public_key,
    });

    Ok(())
}
