//! Common error type.

use crate::parse::Error as ParseError;
use core::fmt::{self, Display};

/// Common error type.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    Parse(ParseError),
}

impl From<ParseError> for Error {
    fn from(err: ParseError) -> Self {
        Self::Parse(err)
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "parse error: {}", e),
        }
    }
}
