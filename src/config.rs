use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::factorial::{DEFAULT_RECURSION_LIMIT, Strategy};

/// Largest accepted depth budget; the worker stack is sized from it.
pub const MAX_RECURSION_LIMIT: usize = 200_000;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Iterative,
    Recursive,
    #[default]
    Both,
}

impl Method {
    /// Strategies to run, in output order. `Both` is always Iterative first.
    pub fn strategies(&self) -> &'static [Strategy] {
        match self {
            Self::Iterative => &[Strategy::Iterative],
            Self::Recursive => &[Strategy::Recursive],
            Self::Both => &[Strategy::Iterative, Strategy::Recursive],
        }
    }
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct RunConfig {
    pub n: i64,
    #[serde(default)]
    pub method: Method,
    #[serde(default)]
    pub time: bool,
    #[serde(default = "default_recursion_limit")]
    pub recursion_limit: usize,
}

fn default_recursion_limit() -> usize {
    DEFAULT_RECURSION_LIMIT
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n: 0,
            method: Method::Both,
            time: false,
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl RunConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n < 0 {
            return Err(ConfigError::Negative { field: "n" });
        }
        if self.recursion_limit == 0 || self.recursion_limit > MAX_RECURSION_LIMIT {
            return Err(ConfigError::InvalidValue {
                field: "recursion_limit",
                reason: format!(
                    "{} not in 1..={}",
                    self.recursion_limit, MAX_RECURSION_LIMIT
                ),
            });
        }
        Ok(())
    }
}
