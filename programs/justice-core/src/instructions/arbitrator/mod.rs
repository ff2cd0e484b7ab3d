pub mod cancel_withdrawal;
pub mod deposit_stake;
pub mod execute_withdrawal;
pub mod register_arbitrator;
pub mod request_withdrawal;
pub mod set_active;

pub use cancel_withdrawal::*;
pub use deposit_stake::*;
pub use execute_withdrawal::*;
pub use register_arbitrator::*;
pub use request_withdrawal::*;
pub use set_active::*;
