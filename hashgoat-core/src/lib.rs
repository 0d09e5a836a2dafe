//! Wordlist recovery of hash digest preimages.
//!
//! Given a target digest, a wordlist and an algorithm (MD5, SHA-1, SHA-256 or
//! SHA-512), this library hashes every candidate line concurrently and stops
//! at the first one whose lowercase hex digest equals the target.
//!
//! Two engines share the same matching contract:
//!
//! - **Bulk** ([`recover_bulk`]): the wordlist is loaded up front and split
//!   into contiguous chunks, one per worker thread. Highest throughput, but the
//!   whole wordlist lives in memory.
//! - **Streaming** ([`recover_streaming`]): lines are pulled lazily through a
//!   two-stage hash/match pipeline. One line and one candidate in memory at a
//!   time, whatever the wordlist size.
//!
//! Either way exactly one [`Outcome`] is produced. Not finding the preimage is
//! an outcome; an unreadable wordlist is an [`Error`].
//!
//! Lines are raw bytes and are hashed exactly as read, so wordlists in legacy
//! encodings such as Latin-1 work as well as UTF-8 ones.
//!
//! # Example
//!
//! ```
//! use std::num::NonZeroUsize;
//!
//! use hashgoat_core::{Algorithm, Outcome, recover_bulk};
//!
//! let lines = vec![b"alpha".to_vec(), b"hashgoat".to_vec(), b"omega".to_vec()];
//! let digester = Algorithm::Md5.digester();
//! let workers = NonZeroUsize::new(2).unwrap();
//!
//! let outcome = recover_bulk(&lines, workers, digester, "dac0d8a5cf48040d1bb724ea18a4f103");
//! assert_eq!(outcome, Outcome::Found(b"hashgoat".to_vec()));
//! ```

use std::num::NonZeroUsize;

mod bulk;
mod candidate;
pub mod digest;
pub mod error;
mod recovery;
mod signal;
pub mod source;
mod streaming;

#[cfg(feature = "tokio")]
mod async_api;

#[cfg(feature = "tokio")]
pub use async_api::recover_file_async;
pub use candidate::{Candidate, Outcome};
pub use digest::{Algorithm, Digester};
pub use error::{Error, Result};
pub use recovery::{Mode, Recovery};
pub use source::{LineStream, read_lines};

/// Searches a loaded wordlist with `workers` hashing threads.
pub fn recover_bulk(
    lines: &[Vec<u8>],
    workers: NonZeroUsize,
    digester: &dyn Digester,
    target: &str,
) -> Outcome {
    Recovery::new(digester, target).bulk(lines, workers)
}

/// Searches a lazy line source, e.g. a [`LineStream`], with bounded memory.
pub fn recover_streaming<I, E>(source: I, digester: &dyn Digester, target: &str) -> Result<Outcome>
where
    I: IntoIterator<Item = std::result::Result<Vec<u8>, E>>,
    I::IntoIter: Send,
    E: Into<Error>,
{
    Recovery::new(digester, target).streaming(source)
}
