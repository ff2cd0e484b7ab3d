use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::{ArbitratorSlashed, CaseExpired};
use crate::state::{
    ArbitratorProfile, Case, CaseStatus, ExpiryKind, ProtocolConfig, SlashSeverity,
};
use crate::utils::settlement::expiry_distribution;

#[derive(Accounts)]
pub struct ExpireCase<'info> {
    #[account(seeds = [b"config"], bump = config.bump)]
    pub config: Account<'info, ProtocolConfig>,

    #[account(
        mut,
        seeds = [b"case", case.case_id.to_le_bytes().as_ref()],
        bump = case.bump,
    )]
    pub case: Box<Account<'info, Case>>,

    #[account(
        mut,
        seeds = [b"escrow", case.key().as_ref()],
        bump,
        token::mint = collateral_mint
    )]
    pub escrow_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        seeds = [b"arbitrator", arbitrator.key().as_ref()],
        bump = arbitrator_profile.bump,
        constraint = arbitrator_profile.authority == arbitrator.key() @ JusticeError::ArbitratorNotFound
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    /// CHECK: Assigned arbitrator, checked against the case in the handler
    pub arbitrator: AccountInfo<'info>,

    /// CHECK: Case claimant, refund recipient
    #[account(address = case.claimant)]
    pub claimant: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = claimant,
    )]
    pub claimant_ata: Account<'info, TokenAccount>,

    /// CHECK: Case respondent, refund recipient
    #[account(address = case.respondent)]
    pub respondent: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = respondent,
    )]
    pub respondent_ata: Account<'info, TokenAccount>,

    #[account(mut, address = config.stake_vault)]
    pub stake_vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = treasury.key() == config.treasury
    )]
    pub treasury: Account<'info, TokenAccount>,

    /// Anyone may crank an expiry; lazy deadline enforcement needs no
    /// privileged trigger.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

/// Completes a lapsed deadline: flips the case to Expired (if a previous call
/// has not already done so) and releases the escrow. Evidence lapse refunds
/// the claimant minus the forfeited fee; verdict lapse splits the dispute
/// amount 50/50 and slashes the arbitrator's collateral at Major severity.
pub fn process_expire_case(ctx: Context<ExpireCase>, _case_id: u64) -> Result<()> {
    let case = &mut ctx.accounts.case;
    let profile = &mut ctx.accounts.arbitrator_profile;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let assigned = case.arbitrator.ok_or(JusticeError::ArbitratorNotFound)?;
    require!(
        ctx.accounts.arbitrator.key() == assigned,
        JusticeError::ArbitratorNotFound
    );

    match case.status {
        CaseStatus::Expired => {
            require!(case.settleable(), JusticeError::AlreadySettled);
        }
        CaseStatus::EvidenceSubmission | CaseStatus::Deliberation => {
            case.check_and_advance(now);
            require!(case.status == CaseStatus::Expired, JusticeError::InvalidState);
        }
        _ => return err!(JusticeError::InvalidState),
    }

    let kind = case.expiry_kind();
    let dist = expiry_distribution(kind, case.dispute_amount, case.arbitration_fee);
    require!(
        ctx.accounts.escrow_vault.amount >= dist.total(),
        JusticeError::InsufficientVault
    );

    let case_id_bytes = case.case_id.to_le_bytes();
    let seeds = &[b"case".as_ref(), case_id_bytes.as_ref(), &[case.bump]];
    let signer = &[&seeds[..]];

    let payouts = [
        (dist.claimant, ctx.accounts.claimant_ata.to_account_info()),
        (dist.respondent, ctx.accounts.respondent_ata.to_account_info()),
        (dist.treasury, ctx.accounts.treasury.to_account_info()),
    ];
    for (amount, recipient) in payouts {
        if amount > 0 {
            token::transfer(
                CpiContext::new_with_signer(
                    ctx.accounts.token_program.to_account_info(),
                    Transfer {
                        from: ctx.accounts.escrow_vault.to_account_info(),
                        to: recipient,
                        authority: case.to_account_info(),
                    },
                    signer,
                ),
                amount,
            )?;
        }
    }

    case.escrow_amount = case
        .escrow_amount
        .checked_sub(dist.total())
        .ok_or(JusticeError::MathOverflow)?;

    match kind {
        ExpiryKind::EvidenceLapsed => {
            // The arbitrator never got to act; collateral returns untouched.
            profile.unlock_collateral(case.collateral_locked);
        }
        ExpiryKind::VerdictLapsed => {
            // Release this case's lock first so the slash clamp cannot eat
            // into collateral pledged to other open cases.
            profile.unlock_collateral(case.collateral_locked);
            let slash_amount = case.collateral_locked / 2;
            let removed = profile.apply_stake_slash(slash_amount);
            if removed > 0 {
                let config_seeds = &[b"config".as_ref(), &[ctx.accounts.config.bump]];
                let config_signer = &[&config_seeds[..]];
                token::transfer(
                    CpiContext::new_with_signer(
                        ctx.accounts.token_program.to_account_info(),
                        Transfer {
                            from: ctx.accounts.stake_vault.to_account_info(),
                            to: ctx.accounts.treasury.to_account_info(),
                            authority: ctx.accounts.config.to_account_info(),
                        },
                        config_signer,
                    ),
                    removed,
                )?;
            }
            profile.apply_slash_penalty(SlashSeverity::Major);

            emit!(ArbitratorSlashed {
                arbitrator: assigned,
                amount: removed,
                severity: SlashSeverity::Major,
                stake: profile.stake,
                reputation_score: profile.reputation_score,
                reason: "resolution deadline missed".to_string(),
            });
        }
    }

    emit!(CaseExpired {
        case_id: case.case_id,
        claimant_refund: dist.claimant,
        respondent_refund: dist.respondent,
        forfeited: dist.treasury,
    });

    Ok(())
}
