use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::CaseCreated;
use crate::state::case::MAX_REFERENCE_LEN;
use crate::state::config::MIN_DISPUTE_AMOUNT;
use crate::state::{Case, CaseStatus, ProtocolConfig, Verdict};
use crate::utils::fees::calculate_arbitration_fee;

#[derive(Accounts)]
#[instruction(case_id: u64)] // case_id passed as instruction arg to derive seeds
pub struct CreateCase<'info> {
    #[account(mut, seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        init,
        seeds = [b"case", case_id.to_le_bytes().as_ref()],
        bump,
        payer = claimant,
        space = Case::LEN
    )]
    pub case: Box<Account<'info, Case>>,

    /// Holds disputeAmount + arbitrationFee until settlement.
    #[account(
        init,
        seeds = [b"escrow", case.key().as_ref()],
        bump,
        payer = claimant,
        token::mint = collateral_mint,
        token::authority = case,
    )]
    pub escrow_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = claimant,
    )]
    pub claimant_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    /// CHECK: Dispute counterparty; only its identity is recorded
    pub respondent: AccountInfo<'info>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
    pub token_program: Program<'info, Token>,
    pub rent: Sysvar<'info, Rent>,
}

#[derive(AnchorSerialize, AnchorDeserialize)]
pub struct CreateCaseParams {
    pub dispute_amount: u64,
    /// Opaque content identifier for off-chain case metadata.
    pub public_reference: String,
    /// Commitment hash binding to off-chain evidence content.
    pub evidence_commitment: [u8; 32],
    pub is_anonymous: bool,
}

pub fn process_create_case(
    ctx: Context<CreateCase>,
    case_id: u64,
    params: CreateCaseParams,
) -> Result<()> {
    let config = &mut ctx.accounts.config;
    let clock = Clock::get()?;

    require!(case_id == config.next_case_id, JusticeError::InvalidInput);

    let claimant = ctx.accounts.claimant.key();
    let respondent = ctx.accounts.respondent.key();
    require!(respondent != Pubkey::default(), JusticeError::InvalidInput);
    require!(respondent != claimant, JusticeError::InvalidInput);
    require!(params.dispute_amount >= MIN_DISPUTE_AMOUNT, JusticeError::InvalidInput);
    require!(!params.public_reference.is_empty(), JusticeError::InvalidInput);
    require!(
        params.public_reference.len() <= MAX_REFERENCE_LEN,
        JusticeError::ReferenceTooLong
    );

    // Fee is a pure function of the dispute amount, so the required payment is
    // verifiable by the client before it signs.
    let fee = calculate_arbitration_fee(params.dispute_amount);
    let escrow = params
        .dispute_amount
        .checked_add(fee)
        .ok_or(JusticeError::MathOverflow)?;
    require!(
        ctx.accounts.claimant_ata.amount >= escrow,
        JusticeError::InsufficientPayment
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.claimant_ata.to_account_info(),
                to: ctx.accounts.escrow_vault.to_account_info(),
                authority: ctx.accounts.claimant.to_account_info(),
            },
        ),
        escrow,
    )?;

    let case = &mut ctx.accounts.case;
    case.case_id = case_id;
    case.claimant = claimant;
    case.respondent = respondent;
    case.arbitrator = None;
    case.dispute_amount = params.dispute_amount;
    case.arbitration_fee = fee;
    case.escrow_amount = escrow;
    case.collateral_locked = 0;
    case.status = CaseStatus::Created;
    case.verdict = Verdict::None;
    case.public_reference = params.public_reference;
    case.evidence_commitment = params.evidence_commitment;
    case.claimant_submitted = false;
    case.claimant_evidence_ref = String::new();
    case.claimant_commitment = [0u8; 32];
    case.respondent_submitted = false;
    case.respondent_evidence_ref = String::new();
    case.respondent_commitment = [0u8; 32];
    case.verdict_reference = String::new();
    case.created_at = clock.unix_timestamp;
    case.assigned_at = 0;
    case.evidence_deadline = 0;
    case.deliberation_deadline = 0;
    case.resolution_deadline = 0;
    case.is_anonymous = params.is_anonymous;
    case.bump = ctx.bumps.case;

    config.next_case_id = config
        .next_case_id
        .checked_add(1)
        .ok_or(JusticeError::MathOverflow)?;

    emit!(CaseCreated {
        case_id,
        claimant,
        respondent,
        dispute_amount: case.dispute_amount,
        arbitration_fee: fee,
        is_anonymous: case.is_anonymous,
    });

    Ok(())
}
