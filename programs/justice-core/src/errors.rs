use anchor_lang::prelude::*;

#[error_code]
pub enum JusticeError {
    #[msg("Payment does not cover dispute amount plus arbitration fee")]
    InsufficientPayment,
    #[msg("Amount exceeds unlocked stake")]
    InsufficientStake,
    #[msg("Withdrawal delay has not elapsed")]
    WithdrawalLocked,
    #[msg("Arbitrator does not meet reputation or stake requirements")]
    ArbitratorNotEligible,
    #[msg("No arbitrator profile for this identity")]
    ArbitratorNotFound,
    #[msg("Caller is not authorized for this action")]
    Unauthorized,
    #[msg("Phase deadline has passed")]
    DeadlineExpired,
    #[msg("Case escrow already released")]
    AlreadySettled,
    #[msg("Case status does not permit this transition")]
    InvalidState,
    #[msg("Invalid input (zero amount, identical parties, or empty identifier)")]
    InvalidInput,
    #[msg("Party has already submitted evidence for this case")]
    EvidenceAlreadySubmitted,
    #[msg("Reference string too long")]
    ReferenceTooLong,
    #[msg("Arithmetic overflow")]
    MathOverflow,
    #[msg("Escrow vault balance insufficient")]
    InsufficientVault,
}
