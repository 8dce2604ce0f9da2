pub mod commands;
pub mod context;
pub mod display;
pub mod prompt;
pub mod revert;
pub mod shell;
