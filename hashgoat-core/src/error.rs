use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Failed to open wordlist '{path}': {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read wordlist '{path}': {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Line source failed: {0}")]
    Source(#[from] io::Error),

    #[error("Unknown hash algorithm '{0}'. Supported algorithms: md5, sha1, sha256, sha512")]
    UnknownAlgorithm(String),

    #[cfg(feature = "tokio")]
    #[error("Recovery task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;
