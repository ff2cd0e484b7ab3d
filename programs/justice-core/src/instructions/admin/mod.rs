pub mod init_protocol;
pub mod slash_arbitrator;

pub use init_protocol::*;
pub use slash_arbitrator::*;
