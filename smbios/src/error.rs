use std::fmt;

#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    #[cfg(target_family = "windows")]
    Win32(windows::core::Error),
    InvalidEntryPoint(&'static str),
    /// The structure table ends inside the record starting at `offset`.
    Truncated {
        offset: usize,
    },
    /// The record at `offset` declares a length shorter than its own header.
    InvalidLength {
        offset: usize,
        length: u8,
    },
}

impl Error {
    /// Whether the table could not be obtained at all, as opposed to
    /// being obtained and then failing to walk.
    pub fn is_acquisition(&self) -> bool {
        !matches!(
            self,
            Error::Truncated { .. } | Error::InvalidLength { .. }
        )
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            #[cfg(target_family = "windows")]
            Error::Win32(err) => write!(f, "Win32 error: {}", err),
            Error::InvalidEntryPoint(reason) => write!(f, "invalid entry point: {}", reason),
            Error::Truncated { offset } => {
                write!(f, "structure table truncated at offset 0x{:08X}", offset)
            }
            Error::InvalidLength { offset, length } => write!(
                f,
                "structure at offset 0x{:08X} has invalid length 0x{:02X}",
                offset, length
            ),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            #[cfg(target_family = "windows")]
            Error::Win32(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::Io(error)
    }
}

#[cfg(target_family = "windows")]
impl From<windows::core::Error> for Error {
    fn from(error: windows::core::Error) -> Self {
        Error::Win32(error)
    }
}
