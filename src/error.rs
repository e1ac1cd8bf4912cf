use std::fmt;

#[derive(Debug)]
pub enum Error {
    Smbios(smbios::Error),
    Io(std::io::Error),
    Usage(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Smbios(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Usage(reason) => write!(f, "{}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Smbios(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Usage(_) => None,
        }
    }
}

impl From<smbios::Error> for Error {
    fn from(error: smbios::Error) -> Self {
        Error::Smbios(error)
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}
