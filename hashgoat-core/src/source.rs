//! Wordlist readers for both engines.
//!
//! [`read_lines`] materializes the whole wordlist for bulk mode, while
//! [`LineStream`] yields one line at a time for streaming mode. Both strip
//! `\n` and `\r\n` terminators and keep every other byte of the line. Lines
//! are raw bytes, not text: a Latin-1 or otherwise non-UTF-8 line is a
//! candidate like any other.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Reads the entire wordlist into memory, preserving line order.
pub fn read_lines(path: impl AsRef<Path>) -> Result<Vec<Vec<u8>>> {
    LineStream::open(path)?.collect()
}

/// Lazy line reader with bounded memory: one line in flight at a time.
///
/// Iterator exhaustion is the completion signal. A read failure is yielded
/// once as an `Err` item; callers are expected to stop there.
pub struct LineStream<R = BufReader<File>> {
    reader: R,
    path: Option<PathBuf>,
}

impl LineStream<BufReader<File>> {
    /// Opens a wordlist file. Failure here happens before any hashing starts.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file =
            File::open(path).map_err(|source| Error::Open { path: path.to_path_buf(), source })?;

        Ok(Self { reader: BufReader::new(file), path: Some(path.to_path_buf()) })
    }
}

impl<R: BufRead> LineStream<R> {
    /// Wraps an already open reader, e.g. stdin or an in-memory buffer.
    pub fn new(reader: R) -> Self {
        Self { reader, path: None }
    }

    fn read_error(&self, source: std::io::Error) -> Error {
        match &self.path {
            Some(path) => Error::Read { path: path.clone(), source },
            None => Error::Source(source),
        }
    }
}

impl<R: BufRead> Iterator for LineStream<R> {
    type Item = Result<Vec<u8>>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut line = Vec::new();
        match self.reader.read_until(b'\n', &mut line) {
            Ok(0) => None,
            Ok(_) => {
                trim_line_terminator(&mut line);
                Some(Ok(line))
            }
            Err(e) => Some(Err(self.read_error(e))),
        }
    }
}

#[inline]
fn trim_line_terminator(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}
