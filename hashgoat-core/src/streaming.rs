//! Pipelined search over a lazy line source.
//!
//! One hashing stage pulls lines and forwards candidates, one matching stage
//! compares them in arrival order. Both hand off through a rendezvous
//! channel, so at most one line and one candidate are alive at a time no
//! matter how long the source is.

use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded, select};
use tracing::{debug, info, warn};

use crate::candidate::{Candidate, Outcome};
use crate::error::{Error, Result};
use crate::recovery::Recovery;
use crate::signal::{CancelToken, Canceller, Verdict, cancellation, verdict};

pub(crate) fn run<I, E>(recovery: &Recovery<'_>, lines: I) -> Result<Outcome>
where
    I: Iterator<Item = std::result::Result<Vec<u8>, E>> + Send,
    E: Into<Error>,
{
    debug!("starting streaming recovery");

    let (candidate_tx, candidate_rx) = bounded::<Candidate<'static>>(0);
    let (canceller, cancel) = cancellation();
    let (verdict, outcome_rx) = verdict::<Result<Outcome>>();

    thread::scope(|s| {
        let hashing_verdict = verdict.clone();
        s.spawn(move || hash_lines(recovery, lines, candidate_tx, cancel, &hashing_verdict));
        s.spawn(move || match_stream(recovery, candidate_rx, canceller, &verdict));

        // Only disconnects without a value if a stage panicked, and the scope
        // re-raises that panic on exit.
        outcome_rx.recv().unwrap_or(Ok(Outcome::NotFound))
    })
}

/// Hashing stage. Dropping `candidates` on return is its completion signal,
/// and it only happens after every line taken from the source was forwarded.
fn hash_lines<I, E>(
    recovery: &Recovery<'_>,
    mut lines: I,
    candidates: Sender<Candidate<'static>>,
    cancel: CancelToken,
    verdict: &Verdict<Result<Outcome>>,
) where
    I: Iterator<Item = std::result::Result<Vec<u8>, E>>,
    E: Into<Error>,
{
    let mut forwarded = 0u64;
    while !cancel.is_cancelled() {
        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(e)) => {
                let err: Error = e.into();
                warn!(error = %err, forwarded, "line source failed, aborting recovery");
                // Settled before `candidates` drops, so the matcher can never
                // conclude NotFound first.
                verdict.settle(Err(err));
                return;
            }
            None => {
                debug!(forwarded, "line source exhausted");
                return;
            }
        };

        let candidate = recovery.hash(line);
        select! {
            send(candidates, candidate) -> sent => {
                if sent.is_err() {
                    return;
                }
            }
            recv(cancel.receiver()) -> _ => return,
        }
        forwarded += 1;
    }
}

/// Matching stage.
fn match_stream(
    recovery: &Recovery<'_>,
    candidates: Receiver<Candidate<'static>>,
    canceller: Canceller,
    verdict: &Verdict<Result<Outcome>>,
) {
    for candidate in candidates {
        if recovery.is_match(&candidate) {
            info!(plaintext = %candidate.plaintext_lossy(), "digest matched");
            verdict.settle(Ok(Outcome::Found(candidate.into_plaintext())));
            canceller.cancel();
            return;
        }
    }
    verdict.settle(Ok(Outcome::NotFound));
}
