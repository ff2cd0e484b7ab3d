pub mod arbitrator;
pub mod case;
pub mod config;
pub mod withdrawal;

pub use arbitrator::*;
pub use case::*;
pub use config::*;
pub use withdrawal::*;
