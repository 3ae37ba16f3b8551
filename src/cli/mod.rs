//! CLI module: argument parsing and environment flags.
//!
//! - `clap_parser`: clap-based parsing of `N`, `--method`, `--time` and
//!   `--recursion-limit` into a validated `RunConfig`
//! - `flags`: boolean environment switches read before logging starts

mod clap_parser;
pub mod flags;

pub use clap_parser::{Cli, MethodOpt};
