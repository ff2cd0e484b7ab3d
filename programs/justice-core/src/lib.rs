use anchor_lang::prelude::*;

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use instructions::*;
use state::{SlashSeverity, Verdict};

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod justice_core {
    use super::*;

    pub fn init_protocol(ctx: Context<InitProtocol>, params: InitProtocolParams) -> Result<()> {
        instructions::admin::init_protocol::process_init_protocol(ctx, params)
    }

    pub fn slash_arbitrator(
        ctx: Context<SlashArbitrator>,
        amount: u64,
        severity: SlashSeverity,
        reason: String,
    ) -> Result<()> {
        instructions::admin::slash_arbitrator::process_slash_arbitrator(ctx, amount, severity, reason)
    }

    pub fn register_arbitrator(
        ctx: Context<RegisterArbitrator>,
        params: RegisterArbitratorParams,
    ) -> Result<()> {
        instructions::arbitrator::register_arbitrator::process_register_arbitrator(ctx, params)
    }

    pub fn deposit_stake(ctx: Context<DepositStake>, amount: u64) -> Result<()> {
        instructions::arbitrator::deposit_stake::process_deposit_stake(ctx, amount)
    }

    pub fn request_stake_withdrawal(ctx: Context<RequestStakeWithdrawal>, amount: u64) -> Result<()> {
        instructions::arbitrator::request_withdrawal::process_request_withdrawal(ctx, amount)
    }

    pub fn execute_stake_withdrawal(ctx: Context<ExecuteStakeWithdrawal>) -> Result<()> {
        instructions::arbitrator::execute_withdrawal::process_execute_withdrawal(ctx)
    }

    pub fn cancel_stake_withdrawal(ctx: Context<CancelStakeWithdrawal>) -> Result<()> {
        instructions::arbitrator::cancel_withdrawal::process_cancel_withdrawal(ctx)
    }

    pub fn deactivate_arbitrator(ctx: Context<SetArbitratorActive>) -> Result<()> {
        instructions::arbitrator::set_active::deactivate_arbitrator(ctx)
    }

    pub fn reactivate_arbitrator(ctx: Context<SetArbitratorActive>) -> Result<()> {
        instructions::arbitrator::set_active::reactivate_arbitrator(ctx)
    }

    pub fn create_case(ctx: Context<CreateCase>, case_id: u64, params: CreateCaseParams) -> Result<()> {
        instructions::case::create_case::process_create_case(ctx, case_id, params)
    }

    pub fn acknowledge_case(ctx: Context<AcknowledgeCase>, case_id: u64) -> Result<()> {
        instructions::case::acknowledge_case::process_acknowledge_case(ctx, case_id)
    }

    pub fn cancel_case(ctx: Context<CancelCase>, case_id: u64) -> Result<()> {
        instructions::case::cancel_case::process_cancel_case(ctx, case_id)
    }

    pub fn select_arbitrator(ctx: Context<SelectArbitrator>, case_id: u64) -> Result<()> {
        instructions::case::select_arbitrator::process_select_arbitrator(ctx, case_id)
    }

    pub fn submit_evidence(
        ctx: Context<SubmitEvidence>,
        case_id: u64,
        encrypted_reference: String,
        commitment: [u8; 32],
    ) -> Result<()> {
        instructions::case::submit_evidence::process_submit_evidence(ctx, case_id, encrypted_reference, commitment)
    }

    pub fn resolve_case(
        ctx: Context<ResolveCase>,
        case_id: u64,
        verdict: Verdict,
        verdict_reference: String,
    ) -> Result<()> {
        instructions::case::resolve_case::process_resolve_case(ctx, case_id, verdict, verdict_reference)
    }

    pub fn expire_case(ctx: Context<ExpireCase>, case_id: u64) -> Result<()> {
        instructions::case::expire_case::process_expire_case(ctx, case_id)
    }
}
