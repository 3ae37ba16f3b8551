pub mod cli;
pub mod config;
pub mod factorial;
pub mod logging;
pub mod runner;

pub mod error;
