use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::CaseCancelled;
use crate::state::{Case, CaseStatus, ProtocolConfig};

#[derive(Accounts)]
pub struct CancelCase<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [b"case", case.case_id.to_le_bytes().as_ref()],
        bump = case.bump,
    )]
    pub case: Account<'info, Case>,

    #[account(
        mut,
        seeds = [b"escrow", case.key().as_ref()],
        bump,
    )]
    pub escrow_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = config.collateral_mint,
        associated_token::authority = claimant,
    )]
    pub claimant_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub claimant: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

/// Full refund, only before an arbitrator is assigned. No cancellation path
/// exists once the evidence phase begins, so an assigned arbitrator cannot be
/// griefed by abandonment.
pub fn process_cancel_case(ctx: Context<CancelCase>, _case_id: u64) -> Result<()> {
    let case = &mut ctx.accounts.case;

    require!(
        ctx.accounts.claimant.key() == case.claimant,
        JusticeError::Unauthorized
    );
    require!(
        matches!(
            case.status,
            CaseStatus::Created | CaseStatus::ArbitratorSelection
        ),
        JusticeError::InvalidState
    );
    require!(case.escrow_amount > 0, JusticeError::AlreadySettled);

    let refund = case.escrow_amount;
    let case_id_bytes = case.case_id.to_le_bytes();
    let seeds = &[b"case".as_ref(), case_id_bytes.as_ref(), &[case.bump]];
    let signer = &[&seeds[..]];

    token::transfer(
        CpiContext::new_with_signer(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.escrow_vault.to_account_info(),
                to: ctx.accounts.claimant_ata.to_account_info(),
                authority: case.to_account_info(),
            },
            signer,
        ),
        refund,
    )?;

    case.escrow_amount = 0;
    case.status = CaseStatus::Cancelled;

    emit!(CaseCancelled {
        case_id: case.case_id,
        claimant: case.claimant,
        refunded: refund,
    });

    Ok(())
}
