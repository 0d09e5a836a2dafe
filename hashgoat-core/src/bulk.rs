//! Partitioned search over a fully loaded wordlist.
//!
//! The wordlist is split into contiguous chunks, one per hashing worker. Each
//! worker offers its candidates to a single matcher over a rendezvous
//! channel. A completion tracker joins the workers, closes the candidate
//! stream, and reports `NotFound` only after the matcher has drained it, so a
//! match always wins a race against exhaustion.

use std::num::NonZeroUsize;
use std::ops::Range;
use std::panic;
use std::thread;

use crossbeam_channel::{Receiver, Sender, bounded, select};
use tracing::{debug, info, trace};

use crate::candidate::{Candidate, Outcome};
use crate::recovery::Recovery;
use crate::signal::{CancelToken, Canceller, Verdict, cancellation, verdict};

pub(crate) fn run(recovery: &Recovery<'_>, lines: &[Vec<u8>], workers: NonZeroUsize) -> Outcome {
    match lines {
        [] => {
            debug!("empty wordlist, nothing to hash");
            return Outcome::NotFound;
        }
        [line] => {
            let candidate = recovery.hash(line.as_slice());
            return if recovery.is_match(&candidate) {
                Outcome::Found(candidate.into_plaintext())
            } else {
                Outcome::NotFound
            };
        }
        _ => {}
    }

    // Partitions past the end of the wordlist would be empty.
    let workers = workers.get().min(lines.len());
    debug!(lines = lines.len(), workers, "starting bulk recovery");

    let (candidate_tx, candidate_rx) = bounded::<Candidate<'_>>(0);
    let (canceller, cancel) = cancellation();
    let (verdict, outcome_rx) = verdict::<Outcome>();

    thread::scope(|s| {
        let handles: Vec<_> = partition(lines.len(), workers)
            .enumerate()
            .map(|(id, range)| {
                let chunk = &lines[range];
                let tx = candidate_tx.clone();
                let cancel = cancel.clone();
                s.spawn(move || hash_chunk(recovery, id, chunk, tx, cancel))
            })
            .collect();

        let matcher = {
            let verdict = verdict.clone();
            s.spawn(move || match_candidates(recovery, candidate_rx, canceller, &verdict))
        };

        s.spawn(move || {
            for handle in handles {
                if let Err(payload) = handle.join() {
                    panic::resume_unwind(payload);
                }
            }
            // Last sender: the matcher sees the end of the stream once it has
            // taken every candidate the workers offered.
            drop(candidate_tx);

            let matched = match matcher.join() {
                Ok(matched) => matched,
                Err(payload) => panic::resume_unwind(payload),
            };
            if !matched {
                debug!("all workers exhausted their chunks without a match");
                verdict.settle(Outcome::NotFound);
            }
        });

        // Only disconnects without a value if a stage panicked, and the scope
        // re-raises that panic on exit.
        outcome_rx.recv().unwrap_or(Outcome::NotFound)
    })
}

/// Splits `len` items into `workers` contiguous ranges of `max(1, len / workers)`
/// items; the last range absorbs the remainder. Ranges starting past the end
/// are empty.
pub(crate) fn partition(len: usize, workers: usize) -> impl Iterator<Item = Range<usize>> {
    let chunk = (len / workers.max(1)).max(1);
    (0..workers).map(move |i| {
        let start = (i * chunk).min(len);
        let end = if i + 1 == workers { len } else { ((i + 1) * chunk).min(len) };
        start..end
    })
}

fn hash_chunk<'a>(
    recovery: &Recovery<'_>,
    id: usize,
    chunk: &'a [Vec<u8>],
    candidates: Sender<Candidate<'a>>,
    cancel: CancelToken,
) {
    for line in chunk {
        if cancel.is_cancelled() {
            trace!(worker = id, "cancelled");
            return;
        }

        let candidate = recovery.hash(line.as_slice());
        select! {
            send(candidates, candidate) -> sent => {
                if sent.is_err() {
                    return;
                }
            }
            recv(cancel.receiver()) -> _ => {
                trace!(worker = id, "cancelled while offering a candidate");
                return;
            }
        }
    }
    trace!(worker = id, lines = chunk.len(), "chunk exhausted");
}

/// Returns whether a match was found and reported.
fn match_candidates(
    recovery: &Recovery<'_>,
    candidates: Receiver<Candidate<'_>>,
    canceller: Canceller,
    verdict: &Verdict<Outcome>,
) -> bool {
    for candidate in candidates {
        if recovery.is_match(&candidate) {
            info!(plaintext = %candidate.plaintext_lossy(), "digest matched");
            verdict.settle(Outcome::Found(candidate.into_plaintext()));
            canceller.cancel();
            return true;
        }
    }
    false
}
