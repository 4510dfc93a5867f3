use core::fmt;

use crate::Action;

#[derive(Clone, Debug, PartialEq)]
pub enum GameError {
    InvalidConfig { field: &'static str, reason: String },
    DuplicateBinding { code: String, first: Action, second: Action },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig { field, reason } => {
                write!(f, "invalid config value for {field}: {reason}")
            }
            Self::DuplicateBinding {
                code,
                first,
                second,
            } => write!(
                f,
                "key code {code:?} is bound to both {first:?} and {second:?}"
            ),
        }
    }
}

impl std::error::Error for GameError {}
