use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    /// The deck description could not be parsed into the model.
    InvalidDeck(String),
    /// The population job (bands, rows, headline facts) could not be parsed.
    InvalidJob(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::InvalidDeck(msg) => write!(f, "invalid deck: {msg}"),
            Error::InvalidJob(msg) => write!(f, "invalid job: {msg}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
