use anchor_lang::prelude::*;
use anchor_spl::token::{self, Mint, Token, TokenAccount, Transfer};
use crate::errors::JusticeError;
use crate::events::{CaseResolved, ReputationUpdated};
use crate::state::case::MAX_REFERENCE_LEN;
use crate::state::{ArbitratorProfile, Case, CaseStatus, ProtocolConfig, Verdict};
use crate::utils::settlement::verdict_distribution;

#[derive(Accounts)]
pub struct ResolveCase<'info> {
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

    /// CHECK: Case claimant, payout recipient
    #[account(address = case.claimant)]
    pub claimant: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = claimant,
    )]
    pub claimant_ata: Account<'info, TokenAccount>,

    /// CHECK: Case respondent, payout recipient
    #[account(address = case.respondent)]
    pub respondent: AccountInfo<'info>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = respondent,
    )]
    pub respondent_ata: Account<'info, TokenAccount>,

    #[account(
        mut,
        associated_token::mint = collateral_mint,
        associated_token::authority = arbitrator,
    )]
    pub arbitrator_ata: Account<'info, TokenAccount>,

    #[account(mut)]
    pub arbitrator: Signer<'info>,

    #[account(address = config.collateral_mint)]
    pub collateral_mint: Account<'info, Mint>,

    pub token_program: Program<'info, Token>,
}

pub fn process_resolve_case(
    ctx: Context<ResolveCase>,
    _case_id: u64,
    verdict: Verdict,
    verdict_reference: String,
) -> Result<()> {
    let case = &mut ctx.accounts.case;
    let profile = &mut ctx.accounts.arbitrator_profile;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    let assigned = case.arbitrator.ok_or(JusticeError::ArbitratorNotFound)?;
    require!(
        ctx.accounts.arbitrator.key() == assigned,
        JusticeError::Unauthorized
    );

    // Lazy scheduler guard: a partial evidence record past its deadline moves
    // the case into Deliberation right here; a stale deadline surfaces as
    // DeadlineExpired and the expiry itself settles through expire_case.
    case.check_and_advance(now);
    match case.status {
        CaseStatus::Deliberation => {}
        CaseStatus::Expired => return err!(JusticeError::DeadlineExpired),
        _ => return err!(JusticeError::InvalidState),
    }
    // Redundant with the advance above, but a verdict past the resolution
    // deadline must never land regardless of how the case got here.
    require!(now < case.resolution_deadline, JusticeError::DeadlineExpired);

    require!(verdict != Verdict::None, JusticeError::InvalidInput);
    require!(
        verdict_reference.len() <= MAX_REFERENCE_LEN,
        JusticeError::ReferenceTooLong
    );
    require!(case.settleable(), JusticeError::AlreadySettled);

    let dist = verdict_distribution(verdict, case.dispute_amount, case.arbitration_fee)
        .ok_or(JusticeError::InvalidInput)?;
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
        (dist.arbitrator, ctx.accounts.arbitrator_ata.to_account_info()),
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

    // Timeliness is judged against the deliberation deadline; a verdict in the
    // grace window before the resolution deadline counts but earns less.
    let timely = now <= case.deliberation_deadline;
    let previous_score = profile.reputation_score;
    profile.unlock_collateral(case.collateral_locked);
    profile.record_resolution(case.dispute_amount, timely, now - case.assigned_at);

    case.verdict = verdict;
    case.verdict_reference = verdict_reference;
    case.status = CaseStatus::Resolved;

    emit!(CaseResolved {
        case_id: case.case_id,
        verdict,
        arbitrator: assigned,
        timely,
    });
    emit!(ReputationUpdated {
        arbitrator: assigned,
        previous: previous_score,
        current: profile.reputation_score,
    });

    Ok(())
}
