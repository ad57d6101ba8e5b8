pub mod config;
pub mod dice;
pub mod error;

pub use config::GameConfig;
pub use dice::Dice;
pub use error::{DuelError, Result};
