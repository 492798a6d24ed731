pub mod config;
pub mod errors;
pub mod games;
pub mod identifiers;
pub mod logger;

pub use errors::GameError;
pub use identifiers::PlayerName;
