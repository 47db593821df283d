//! Errors and results.
use std::fmt;
use std::result::Result as StdResult;

// *************
// *** Error ***
// *************

#[derive(Debug)]
pub enum Error {
    /// A deferred resource could not be fetched.
    Load(String),

    /// A fetched resource could not be deserialized.
    Serde(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Load(msg) => write!(f, "could not load resource: {msg}"),
            Self::Serde(msg) => write!(f, "invalid resource: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serde(err.to_string())
    }
}

// **************
// *** Result ***
// **************

pub type Result<T = ()> = StdResult<T, Error>;

#[cfg(test)]
#[path = "./error_test.rs"]
mod error_test;
