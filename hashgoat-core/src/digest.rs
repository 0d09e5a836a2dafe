//! Digest functions the recovery engines are parametric over.
//!
//! Every algorithm is a zero-sized [`Digester`] that renders its output as
//! lowercase hex, the form targets are compared in. The engines never look at
//! which algorithm they were handed.

use std::fmt;
use std::str::FromStr;

use sha1::Digest;

use crate::error::Error;

/// Hex lookup table for digest rendering.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Maps a plaintext to its lowercase hex digest.
///
/// Implementations must be pure: the same input always yields the same
/// output, and every byte sequence is valid input. Wordlist lines are hashed
/// exactly as read, whatever their encoding.
pub trait Digester: Send + Sync {
    fn digest(&self, plaintext: &[u8]) -> String;
}

/// MD5, 32 hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Md5;

/// SHA-1, 40 hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha1;

/// SHA-256, 64 hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256;

/// SHA-512, 128 hex characters.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha512;

impl Digester for Md5 {
    fn digest(&self, plaintext: &[u8]) -> String {
        hex_digest::<md5::Md5>(plaintext)
    }
}

impl Digester for Sha1 {
    fn digest(&self, plaintext: &[u8]) -> String {
        hex_digest::<sha1::Sha1>(plaintext)
    }
}

impl Digester for Sha256 {
    fn digest(&self, plaintext: &[u8]) -> String {
        hex_digest::<sha2::Sha256>(plaintext)
    }
}

impl Digester for Sha512 {
    fn digest(&self, plaintext: &[u8]) -> String {
        hex_digest::<sha2::Sha512>(plaintext)
    }
}

#[inline]
fn hex_digest<H: Digest>(plaintext: &[u8]) -> String {
    to_lower_hex(&H::digest(plaintext))
}

/// Renders bytes as lowercase hex, two characters per byte.
#[inline]
pub fn to_lower_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_CHARS[(byte >> 4) as usize] as char);
        out.push(HEX_CHARS[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Algorithm selector resolved once, before a recovery starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Md5,
    Sha1,
    Sha256,
    Sha512,
}

impl Algorithm {
    pub const ALL: [Algorithm; 4] =
        [Algorithm::Md5, Algorithm::Sha1, Algorithm::Sha256, Algorithm::Sha512];

    /// Canonical lowercase name, as accepted on the command line.
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Md5 => "md5",
            Algorithm::Sha1 => "sha1",
            Algorithm::Sha256 => "sha256",
            Algorithm::Sha512 => "sha512",
        }
    }

    /// Length of a digest in hex characters.
    pub const fn digest_len(self) -> usize {
        match self {
            Algorithm::Md5 => 32,
            Algorithm::Sha1 => 40,
            Algorithm::Sha256 => 64,
            Algorithm::Sha512 => 128,
        }
    }

    pub fn digester(self) -> &'static dyn Digester {
        match self {
            Algorithm::Md5 => &Md5,
            Algorithm::Sha1 => &Sha1,
            Algorithm::Sha256 => &Sha256,
            Algorithm::Sha512 => &Sha512,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "md5" => Ok(Algorithm::Md5),
            "sha1" | "sha-1" => Ok(Algorithm::Sha1),
            "sha256" | "sha-256" => Ok(Algorithm::Sha256),
            "sha512" | "sha-512" => Ok(Algorithm::Sha512),
            _ => Err(Error::UnknownAlgorithm(s.to_string())),
        }
    }
}
