use anchor_lang::prelude::*;
use crate::errors::JusticeError;
use crate::events::ArbitratorAssigned;
use crate::state::config::MINIMUM_STAKE;
use crate::state::{ArbitratorProfile, Case, CaseStatus, ProtocolConfig};
use crate::utils::fees::required_collateral;

#[derive(Accounts)]
pub struct SelectArbitrator<'info> {
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
        seeds = [b"arbitrator", arbitrator.key().as_ref()],
        bump = arbitrator_profile.bump,
        constraint = arbitrator_profile.authority == arbitrator.key() @ JusticeError::ArbitratorNotFound
    )]
    pub arbitrator_profile: Account<'info, ArbitratorProfile>,

    /// CHECK: Selected arbitrator identity; its profile PDA is the real lookup
    pub arbitrator: AccountInfo<'info>,

    /// Claimant or respondent.
    pub party: Signer<'info>,
}

pub fn process_select_arbitrator(ctx: Context<SelectArbitrator>, _case_id: u64) -> Result<()> {
    let config = &ctx.accounts.config;
    let case = &mut ctx.accounts.case;
    let profile = &mut ctx.accounts.arbitrator_profile;
    let clock = Clock::get()?;

    require!(
        matches!(
            case.status,
            CaseStatus::Created | CaseStatus::ArbitratorSelection
        ),
        JusticeError::InvalidState
    );
    require!(
        case.party(&ctx.accounts.party.key()).is_some(),
        JusticeError::Unauthorized
    );

    let arbitrator = ctx.accounts.arbitrator.key();
    // An arbitrator cannot sit on their own dispute.
    require!(
        arbitrator != case.claimant && arbitrator != case.respondent,
        JusticeError::InvalidInput
    );

    // Eligibility: active, unslashed, reputation over the protocol threshold,
    // stake at the protocol minimum, and enough unlocked stake for this case's
    // collateral. `free_stake` sums locks across all open cases, so the same
    // stake can never be pledged twice.
    let collateral = required_collateral(case.dispute_amount);
    require!(
        profile.is_eligible(config.min_reputation) && profile.stake >= MINIMUM_STAKE,
        JusticeError::ArbitratorNotEligible
    );
    require!(
        profile.free_stake() >= collateral,
        JusticeError::ArbitratorNotEligible
    );
    profile.lock_collateral(collateral)?;

    let now = clock.unix_timestamp;
    case.arbitrator = Some(arbitrator);
    case.assigned_at = now;
    case.collateral_locked = collateral;
    // Strictly increasing phase deadlines, computed once here and enforced
    // lazily on every later call.
    case.evidence_deadline = now + config.evidence_window;
    case.deliberation_deadline = case.evidence_deadline + config.deliberation_window;
    case.resolution_deadline = case.deliberation_deadline + config.resolution_window;
    case.status = CaseStatus::EvidenceSubmission;

    emit!(ArbitratorAssigned {
        case_id: case.case_id,
        arbitrator,
        collateral_locked: collateral,
        evidence_deadline: case.evidence_deadline,
        resolution_deadline: case.resolution_deadline,
    });

    Ok(())
}
