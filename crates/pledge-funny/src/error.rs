use std::io;
use std::path::PathBuf;

use pledge_core::Abandoned;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    Abandoned(#[from] Abandoned),
}

impl Error {
    /// Kind of the underlying I/O failure, if there was one.
    pub fn kind(&self) -> Option<io::ErrorKind> {
        match self {
            Error::Read { source, .. } => Some(source.kind()),
            Error::Abandoned(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
