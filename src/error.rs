use std::{
    error::Error,
    fmt::{self, Display},
    io,
};

use rand_distr::{NormalError, uniform::Error as UniformError};

/// The result type used across the crate.
pub type Result<T> = std::result::Result<T, InitErr>;

/// The error type of the initialization crate.
#[derive(Debug)]
pub enum InitErr {
    /// The parameters given to a distribution are not valid for it (e.g. a negative standard
    /// deviation or an empty range).
    InvalidDistribution(String),
    /// The tensor does not have enough dimensions for the requested computation.
    UnsupportedShape { what: &'static str, dims: usize },
    /// The name doesn't match any of the known initialization methods.
    UnknownMethod(String),
    /// A session specification could not be parsed.
    Spec(String),
    /// An underlying I/O error.
    Io(io::Error),
}

impl From<NormalError> for InitErr {
    fn from(value: NormalError) -> Self {
        Self::InvalidDistribution(value.to_string())
    }
}

impl From<UniformError> for InitErr {
    fn from(value: UniformError) -> Self {
        Self::InvalidDistribution(value.to_string())
    }
}

impl From<serde_json::Error> for InitErr {
    fn from(value: serde_json::Error) -> Self {
        Self::Spec(value.to_string())
    }
}

impl From<io::Error> for InitErr {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl Display for InitErr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDistribution(msg) => write!(f, "invalid distribution: {msg}"),
            Self::UnsupportedShape { what, dims } => write!(
                f,
                "{what} needs a tensor with at least 2 dimensions, got {dims}"
            ),
            Self::UnknownMethod(name) => write!(f, "unknown initialization method: {name}"),
            Self::Spec(msg) => write!(f, "invalid spec: {msg}"),
            Self::Io(e) => write!(f, "io error: {e}"),
        }
    }
}

impl Error for InitErr {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}
