use std::error::Error;
use std::fmt;
use std::io;

/// Common result type for mdtoc operations
pub type BoxResult<T> = Result<T, Box<dyn Error>>;

/// Error types for mdtoc operations
#[derive(Debug)]
pub enum MdtocError {
    /// IO error wrapper
    Io(io::Error),
    /// Anchor dialect requested for a platform we know nothing about
    UnsupportedPlatform(String),
    /// Generic error message
    Generic(String),
}

impl fmt::Display for MdtocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MdtocError::Io(err) => write!(f, "IO error: {}", err),
            MdtocError::UnsupportedPlatform(id) => write!(f, "Unsupported platform: {}", id),
            MdtocError::Generic(msg) => write!(f, "{}", msg),
        }
    }
}

impl Error for MdtocError {}

impl From<io::Error> for MdtocError {
    fn from(err: io::Error) -> Self {
        MdtocError::Io(err)
    }
}

impl From<String> for MdtocError {
    fn from(msg: String) -> Self {
        MdtocError::Generic(msg)
    }
}

impl From<&str> for MdtocError {
    fn from(msg: &str) -> Self {
        MdtocError::Generic(msg.to_string())
    }
}
