use std::fmt;
use std::time::Duration;

use hashgoat_core::{Algorithm, Outcome};
use indicatif::{ProgressBar, ProgressStyle};

pub const NOT_FOUND_MESSAGE: &str =
    "Hash not found! Try another wordlist (-w) or hash algorithm (-a)";

/// Something about the target that means it can never match.
///
/// The search still runs: comparison is exact and the engine does not
/// validate, these only explain an otherwise puzzling miss.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetIssue {
    Length { algorithm: Algorithm, expected: usize, actual: usize },
    Uppercase,
    NotHex,
}

impl fmt::Display for TargetIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetIssue::Length { algorithm, expected, actual } => write!(
                f,
                "{algorithm} digests are {expected} hex characters, target has {actual}"
            ),
            TargetIssue::Uppercase => f.write_str("target contains uppercase hex; digests are lowercase"),
            TargetIssue::NotHex => f.write_str("target contains non-hex characters"),
        }
    }
}

pub fn inspect_target(algorithm: Algorithm, target: &str) -> Vec<TargetIssue> {
    let mut issues = Vec::new();
    if target.len() != algorithm.digest_len() {
        issues.push(TargetIssue::Length {
            algorithm,
            expected: algorithm.digest_len(),
            actual: target.len(),
        });
    }
    if target.bytes().any(|b| b.is_ascii_uppercase()) {
        issues.push(TargetIssue::Uppercase);
    }
    if !target.bytes().all(|b| b.is_ascii_hexdigit()) {
        issues.push(TargetIssue::NotHex);
    }
    issues
}

pub fn banner(target: &str) -> String {
    format!("hashgoat - trying to recover {target}")
}

/// Invalid UTF-8 in a found plaintext is shown as U+FFFD.
pub fn render_outcome(outcome: &Outcome) -> String {
    match outcome.plaintext_lossy() {
        Some(plaintext) => format!("Result: {plaintext}"),
        None => NOT_FOUND_MESSAGE.to_string(),
    }
}

/// Spinner showing how many candidates have been hashed so far.
pub fn progress_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {human_pos} candidates ({per_sec}) {msg}")
            .expect("Invalid progress bar template"),
    );
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}
