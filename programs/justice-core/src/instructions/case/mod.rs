pub mod acknowledge_case;
pub mod cancel_case;
pub mod create_case;
pub mod expire_case;
pub mod resolve_case;
pub mod select_arbitrator;
pub mod submit_evidence;

pub use acknowledge_case::*;
pub use cancel_case::*;
pub use create_case::*;
pub use expire_case::*;
pub use resolve_case::*;
pub use select_arbitrator::*;
pub use submit_evidence::*;
