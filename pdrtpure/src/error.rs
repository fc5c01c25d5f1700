use std::io;

/// Central error type.
#[derive(Debug)]
pub enum Error {
    Io(io::Error),
    Pdrt(pdrt::Error),
    Jobs(rayon::ThreadPoolBuildError),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<pdrt::Error> for Error {
    fn from(err: pdrt::Error) -> Self {
        Self::Pdrt(err)
    }
}

impl From<pdrt::parse::Error> for Error {
    fn from(err: pdrt::parse::Error) -> Self {
        Self::Pdrt(err.into())
    }
}

impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(err: rayon::ThreadPoolBuildError) -> Self {
        Self::Jobs(err)
    }
}
