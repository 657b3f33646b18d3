pub mod cli;
pub mod cmd;
pub mod tui;

pub use anyhow::Result;
