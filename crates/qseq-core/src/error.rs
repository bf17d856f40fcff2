use thiserror::Error;

/// Canonical result for forcing operators.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised when a value is forced out of a sequence.
///
/// Operators never catch these; they surface at the call that forced
/// enumeration. The `*_or_none` / `*_or_default` / seeded forms exist so
/// callers can avoid them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{op}: sequence contains no elements")]
    Empty { op: &'static str },

    #[error("{op}: sequence contains no matching element")]
    NoMatch { op: &'static str },

    #[error("{op}: sequence contains more than one matching element")]
    MoreThanOne { op: &'static str },

    #[error("element_at: index {index} is out of range")]
    IndexOutOfRange { index: usize },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// True for the emptiness family (nothing to return).
    pub fn is_emptiness(&self) -> bool {
        matches!(
            self,
            Error::Empty { .. } | Error::NoMatch { .. } | Error::IndexOutOfRange { .. }
        )
    }

    /// True when more than one element qualified.
    pub fn is_multiplicity(&self) -> bool {
        matches!(self, Error::MoreThanOne { .. })
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(e.to_string())
    }
}
