pub mod admin;
pub mod arbitrator;
pub mod case;

pub use admin::*;
pub use arbitrator::*;
pub use case::*;
