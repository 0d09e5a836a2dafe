use std::borrow::Cow;
use std::num::NonZeroUsize;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::candidate::{Candidate, Outcome};
use crate::digest::Digester;
use crate::error::{Error, Result};
use crate::source::{LineStream, read_lines};
use crate::{bulk, streaming};

/// How a wordlist file is fed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Load the whole wordlist, then split it across `workers` threads.
    Bulk { workers: NonZeroUsize },
    /// Read, hash and compare one line at a time with bounded memory.
    Streaming,
}

/// One recovery: what to hash with, what to look for, and where to count.
///
/// The digester and target are shared read-only by every worker.
#[derive(Clone, Copy)]
pub struct Recovery<'a> {
    digester: &'a dyn Digester,
    target: &'a str,
    progress: Option<&'a AtomicU64>,
}

impl<'a> Recovery<'a> {
    pub fn new(digester: &'a dyn Digester, target: &'a str) -> Self {
        Self { digester, target, progress: None }
    }

    /// Counts every hashed candidate into `counter` (relaxed ordering).
    pub fn with_progress(mut self, counter: &'a AtomicU64) -> Self {
        self.progress = Some(counter);
        self
    }

    pub fn target(&self) -> &str {
        self.target
    }

    /// Partitioned search over a fully loaded wordlist.
    pub fn bulk(&self, lines: &[Vec<u8>], workers: NonZeroUsize) -> Outcome {
        bulk::run(self, lines, workers)
    }

    /// Pipelined search over a lazy line source.
    ///
    /// The first `Err` the source yields aborts the recovery, unless a match
    /// was already reported.
    pub fn streaming<I, E>(&self, source: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = std::result::Result<Vec<u8>, E>>,
        I::IntoIter: Send,
        E: Into<Error>,
    {
        streaming::run(self, source.into_iter())
    }

    /// Opens `path` and runs the engine selected by `mode`.
    pub fn run_file(&self, path: impl AsRef<Path>, mode: Mode) -> Result<Outcome> {
        match mode {
            Mode::Bulk { workers } => {
                let lines = read_lines(path)?;
                Ok(self.bulk(&lines, workers))
            }
            Mode::Streaming => self.streaming(LineStream::open(path)?),
        }
    }

    /// Hashes one plaintext into a candidate.
    #[inline]
    pub(crate) fn hash<'p>(&self, plaintext: impl Into<Cow<'p, [u8]>>) -> Candidate<'p> {
        let plaintext = plaintext.into();
        let digest = self.digester.digest(&plaintext);
        if let Some(counter) = self.progress {
            counter.fetch_add(1, Ordering::Relaxed);
        }
        Candidate::new(plaintext, digest)
    }

    #[inline]
    pub(crate) fn is_match(&self, candidate: &Candidate<'_>) -> bool {
        candidate.matches(self.target)
    }
}
