use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use crate::candidate::Outcome;
use crate::digest::Algorithm;
use crate::error::{Error, Result};
use crate::recovery::{Mode, Recovery};

/// Runs a whole file recovery on tokio's blocking pool.
///
/// The engines are thread based, so a single `spawn_blocking` for the entire
/// run keeps hashing off the async workers. `progress`, when given, is bumped
/// once per hashed candidate and can be polled from async code meanwhile.
pub async fn recover_file_async(
    path: impl Into<PathBuf>,
    algorithm: Algorithm,
    target: impl Into<String>,
    mode: Mode,
    progress: Option<Arc<AtomicU64>>,
) -> Result<Outcome> {
    let path = path.into();
    let target = target.into();

    tokio::task::spawn_blocking(move || {
        let recovery = Recovery::new(algorithm.digester(), &target);
        let recovery = match progress.as_deref() {
            Some(counter) => recovery.with_progress(counter),
            None => recovery,
        };
        recovery.run_file(&path, mode)
    })
    .await
    .map_err(|e| Error::Task(e.to_string()))?
}
