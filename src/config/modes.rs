//! Resolution policy definitions.

use std::fmt;
use std::str::FromStr;

/// Automatic variant selection policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResolutionPolicy {
    /// Pick the variant with the smallest width.
    Min,
    /// Pick the variant with the largest width (default).
    #[default]
    Max,
}

impl fmt::Display for ResolutionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionPolicy::Min => write!(f, "min"),
            ResolutionPolicy::Max => write!(f, "max"),
        }
    }
}

impl FromStr for ResolutionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "min" => Ok(ResolutionPolicy::Min),
            "max" => Ok(ResolutionPolicy::Max),
            _ => Err(format!("Unknown resolution policy: {}", s)),
        }
    }
}
