use std::fmt;

/// Errors from parsing user-facing names into engine types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownScenario(String),
    UnknownPolicy(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnknownScenario(name) => {
                write!(f, "unknown scenario {name:?} (expected \"current\" or \"plan\")")
            }
            ParseError::UnknownPolicy(name) => {
                write!(
                    f,
                    "unknown payoff policy {name:?} (expected \"independent\" or \"cascade\")"
                )
            }
        }
    }
}

impl std::error::Error for ParseError {}
