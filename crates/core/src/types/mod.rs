mod config;
mod error;
mod game;
mod proof;

pub use config::*;
pub use error::*;
pub use game::*;
pub use proof::*;
