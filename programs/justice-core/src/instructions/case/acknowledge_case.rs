use anchor_lang::prelude::*;
use crate::errors::JusticeError;
use crate::events::CaseAcknowledged;
use crate::state::{Case, CaseStatus};

#[derive(Accounts)]
pub struct AcknowledgeCase<'info> {
    #[account(
        mut,
        seeds = [b"case", case.case_id.to_le_bytes().as_ref()],
        bump = case.bump,
    )]
    pub case: Account<'info, Case>,

    pub respondent: Signer<'info>,
}

/// Respondent accepts the dispute process, opening arbitrator selection.
/// Selection and cancellation remain valid from Created as well, so a silent
/// respondent cannot stall a case.
pub fn process_acknowledge_case(ctx: Context<AcknowledgeCase>, _case_id: u64) -> Result<()> {
    let case = &mut ctx.accounts.case;

    require!(case.status == CaseStatus::Created, JusticeError::InvalidState);
    require!(
        ctx.accounts.respondent.key() == case.respondent,
        JusticeError::Unauthorized
    );

    case.status = CaseStatus::ArbitratorSelection;

    emit!(CaseAcknowledged {
        case_id: case.case_id,
        respondent: case.respondent,
    });

    Ok(())
}
