use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    Syntax(String),
    DuplicateKey,
    OutOfBounds(String),
    CorruptFile(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error. {}", e),
            Error::Syntax(msg) => write!(f, "{}", msg),
            Error::DuplicateKey => write!(f, "Error: Duplicate key."),
            Error::OutOfBounds(msg) => write!(f, "{}", msg),
            Error::CorruptFile(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Error {
        Error::Io(err)
    }
}
