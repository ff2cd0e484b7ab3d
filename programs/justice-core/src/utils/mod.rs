pub mod fees;
pub mod reputation;
pub mod settlement;
