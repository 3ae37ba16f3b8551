use crate::config::{Method, RunConfig};
use crate::error::ConfigError;
use crate::factorial::DEFAULT_RECURSION_LIMIT;
use clap::{Parser, ValueEnum};

#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, ValueEnum, Debug)]
pub enum MethodOpt {
    Iterative,
    Recursive,
    Both,
}

impl From<MethodOpt> for Method {
    fn from(opt: MethodOpt) -> Self {
        match opt {
            MethodOpt::Iterative => Method::Iterative,
            MethodOpt::Recursive => Method::Recursive,
            MethodOpt::Both => Method::Both,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "factorial_cli",
    version,
    about = "Compute factorial (recursive or iterative).",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Non-negative integer
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub n: i64,
    /// Which implementation to run
    #[arg(short = 'm', long = "method", value_enum, default_value_t = MethodOpt::Both)]
    pub method: MethodOpt,
    /// Display execution time for each method
    #[arg(short = 't', long = "time")]
    pub time: bool,
    /// Recursion depth budget for the recursive method (env: FACTORIAL_RECURSION_LIMIT)
    #[arg(
        long = "recursion-limit",
        value_name = "DEPTH",
        env = "FACTORIAL_RECURSION_LIMIT",
        default_value_t = DEFAULT_RECURSION_LIMIT
    )]
    pub recursion_limit: usize,
}

impl Cli {
    pub fn to_run_config(&self) -> Result<RunConfig, ConfigError> {
        let cfg = RunConfig {
            n: self.n,
            method: self.method.into(),
            time: self.time,
            recursion_limit: self.recursion_limit,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["factorial_cli", "5"]).unwrap();
        assert_eq!(cli.n, 5);
        assert_eq!(cli.method, MethodOpt::Both);
        assert!(!cli.time);
        let cfg = cli.to_run_config().unwrap();
        assert_eq!(cfg.method, Method::Both);
    }

    #[test]
    fn help_lists_methods_from_value_enum() {
        use clap::CommandFactory;
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("[default: both]"), "help: {}", help);
        assert!(
            help.contains("[possible values: iterative, recursive, both]"),
            "help: {}",
            help
        );
    }

    #[test]
    fn short_and_long_flags() {
        let cli = Cli::try_parse_from(["factorial_cli", "-m", "recursive", "-t", "12"]).unwrap();
        assert_eq!(cli.method, MethodOpt::Recursive);
        assert!(cli.time);
        assert_eq!(cli.n, 12);

        let cli = Cli::try_parse_from([
            "factorial_cli",
            "7",
            "--method",
            "iterative",
            "--time",
            "--recursion-limit",
            "42",
        ])
        .unwrap();
        let cfg = cli.to_run_config().unwrap();
        assert_eq!(cfg.method, Method::Iterative);
        assert_eq!(cfg.recursion_limit, 42);
    }

    #[test]
    fn negative_n_parses_but_fails_validation() {
        let cli = Cli::try_parse_from(["factorial_cli", "-3"]).unwrap();
        assert_eq!(cli.n, -3);
        let err = cli.to_run_config().unwrap_err();
        assert_eq!(err.to_string(), "n must be non-negative");
    }

    #[test]
    fn rejects_unknown_method_and_garbage_n() {
        assert!(Cli::try_parse_from(["factorial_cli", "-m", "memo", "3"]).is_err());
        assert!(Cli::try_parse_from(["factorial_cli", "three"]).is_err());
        assert!(Cli::try_parse_from(["factorial_cli"]).is_err());
    }

    #[test]
    fn zero_recursion_limit_rejected() {
        let cli = Cli::try_parse_from(["factorial_cli", "3", "--recursion-limit", "0"]).unwrap();
        assert!(matches!(
            cli.to_run_config(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }
}
