use std::fmt;
use std::io;

#[derive(Debug)]
pub enum FsError {
    Io(io::Error),
    NotMounted,
    InvalidPath,
    NotFound,
    AlreadyExists,
    NotDirectory,
    NotFile,
    NotEmpty,
    NameTooLong,
    NoFreeClusters,
    FileTooLarge,
    Corrupted(&'static str),
}

pub type Result<T> = std::result::Result<T, FsError>;

impl fmt::Display for FsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FsError::Io(e) => write!(f, "i/o error: {}", e),
            FsError::NotMounted => write!(f, "no filesystem is mounted"),
            FsError::InvalidPath => write!(f, "invalid path"),
            FsError::NotFound => write!(f, "no such entry"),
            FsError::AlreadyExists => write!(f, "entry already exists"),
            FsError::NotDirectory => write!(f, "not a directory"),
            FsError::NotFile => write!(f, "not a file"),
            FsError::NotEmpty => write!(f, "directory is not empty"),
            FsError::NameTooLong => write!(f, "name is too long"),
            FsError::NoFreeClusters => write!(f, "not enough free clusters"),
            FsError::FileTooLarge => write!(f, "file is too large"),
            FsError::Corrupted(what) => write!(f, "corrupted image: {}", what),
        }
    }
}

impl std::error::Error for FsError {}

impl From<io::Error> for FsError {
    fn from(e: io::Error) -> Self {
        FsError::Io(e)
    }
}
