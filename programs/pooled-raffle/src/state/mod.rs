pub use config::*;
pub use raffle::*;
pub use treasury::*;

pub mod config;
pub mod raffle;
pub mod treasury;
