use anchor_lang::prelude::*;
use crate::errors::JusticeError;
use crate::events::EvidenceSubmitted;
use crate::state::case::MAX_EVIDENCE_REF_LEN;
use crate::state::{Case, CaseStatus, Party, PhaseChange};

#[derive(Accounts)]
pub struct SubmitEvidence<'info> {
    #[account(
        mut,
        seeds = [b"case", case.case_id.to_le_bytes().as_ref()],
        bump = case.bump,
    )]
    pub case: Account<'info, Case>,

    /// Claimant or respondent.
    pub party: Signer<'info>,
}

/// Records a party's evidence commitment. Content stays off-chain; the core
/// stores only the encrypted reference and the commitment hash. Each party
/// submits at most once; the case enters Deliberation as soon as both have.
pub fn process_submit_evidence(
    ctx: Context<SubmitEvidence>,
    _case_id: u64,
    encrypted_reference: String,
    commitment: [u8; 32],
) -> Result<()> {
    let case = &mut ctx.accounts.case;
    let clock = Clock::get()?;
    let now = clock.unix_timestamp;

    require!(
        case.status == CaseStatus::EvidenceSubmission,
        JusticeError::InvalidState
    );
    require!(now < case.evidence_deadline, JusticeError::DeadlineExpired);

    let party = case
        .party(&ctx.accounts.party.key())
        .ok_or(JusticeError::Unauthorized)?;

    require!(!encrypted_reference.is_empty(), JusticeError::InvalidInput);
    require!(
        encrypted_reference.len() <= MAX_EVIDENCE_REF_LEN,
        JusticeError::ReferenceTooLong
    );

    match party {
        Party::Claimant => {
            require!(!case.claimant_submitted, JusticeError::EvidenceAlreadySubmitted);
            case.claimant_submitted = true;
            case.claimant_evidence_ref = encrypted_reference;
            case.claimant_commitment = commitment;
        }
        Party::Respondent => {
            require!(!case.respondent_submitted, JusticeError::EvidenceAlreadySubmitted);
            case.respondent_submitted = true;
            case.respondent_evidence_ref = encrypted_reference;
            case.respondent_commitment = commitment;
        }
    }

    if case.check_and_advance(now) == Some(PhaseChange::EnteredDeliberation) {
        msg!("case {} entered deliberation", case.case_id);
    }

    emit!(EvidenceSubmitted {
        case_id: case.case_id,
        party,
        commitment,
        timestamp: now,
    });

    Ok(())
}
