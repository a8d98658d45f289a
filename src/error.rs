use std::fmt;

/// Errors reported by brush operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Argument violates operation precondition
    InvalidArgument(&'static str),
    /// Canvas failed to allocate a pattern
    OutOfMemory,
    /// Operation is part of the API surface but is not supported
    NotImplemented(&'static str),
}

impl Error {
    /// Status code reported for this error
    pub fn status(&self) -> Status {
        match self {
            Error::InvalidArgument(_) => Status::InvalidParameter,
            Error::OutOfMemory => Status::OutOfMemory,
            Error::NotImplemented(_) => Status::NotImplemented,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(reason) => write!(f, "invalid argument: {}", reason),
            Error::OutOfMemory => write!(f, "out of memory"),
            Error::NotImplemented(what) => write!(f, "not implemented: {}", what),
        }
    }
}

impl std::error::Error for Error {}

impl From<CanvasError> for Error {
    fn from(_: CanvasError) -> Self {
        Error::OutOfMemory
    }
}

/// Numeric status codes of the imaging API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    Ok = 0,
    InvalidParameter = 2,
    OutOfMemory = 3,
    NotImplemented = 6,
}

impl<T> From<&Result<T, Error>> for Status {
    fn from(result: &Result<T, Error>) -> Self {
        match result {
            Ok(_) => Status::Ok,
            Err(error) => error.status(),
        }
    }
}

/// Failure reported by a canvas while creating a paint source or a pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CanvasError {
    /// Pattern (or its backing surface) could not be allocated
    PatternAlloc,
    /// Surface has no pixels to fill
    EmptySurface,
}

impl fmt::Display for CanvasError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CanvasError::PatternAlloc => write!(f, "failed to allocate pattern"),
            CanvasError::EmptySurface => write!(f, "surface is empty"),
        }
    }
}

impl std::error::Error for CanvasError {}
