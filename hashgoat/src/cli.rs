use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use hashgoat_core::{Algorithm, Mode};

const EXAMPLES: &str = "\
Examples:
  hashgoat -w wordlist.txt -a md5 --sync dac0d8a5cf48040d1bb724ea18a4f103
  hashgoat -w wordlist.txt -t 1 -a sha256 4e6dc79b64c40a1d2867c7e26e7856404db2a97c1d5854c3b3ae5c6098a61c62";

#[derive(Parser, Debug)]
#[command(name = "hashgoat", version)]
#[command(about = "Recover the plaintext of a hash digest from a wordlist")]
#[command(after_help = EXAMPLES)]
pub struct Args {
    /// Path to wordlist
    #[arg(short, long)]
    pub wordlist: PathBuf,

    /// Hashing algorithm (md5/sha1/sha256/sha512)
    #[arg(short, long)]
    pub algorithm: Algorithm,

    /// Number of hashing threads. Streaming mode doesn't use them
    #[arg(short, long, default_value = "10")]
    pub threads: NonZeroUsize,

    /// Read the whole wordlist first, then hash it across threads (uses more memory for big files)
    #[arg(long)]
    pub sync: bool,

    /// Disable progress spinner
    #[arg(long)]
    pub no_progress: bool,

    /// Log more (-v for debug, -vv for trace). RUST_LOG takes precedence
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Digest to recover, in lowercase hex
    pub hash: String,
}

impl Args {
    pub fn mode(&self) -> Mode {
        if self.sync { Mode::Bulk { workers: self.threads } } else { Mode::Streaming }
    }
}
