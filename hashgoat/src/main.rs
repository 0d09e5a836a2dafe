use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use clap::Parser;
use hashgoat::report::{banner, inspect_target, progress_spinner, render_outcome};
use hashgoat::{Args, Error, logging};
use hashgoat_core::recover_file_async;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    let args = Args::parse();
    logging::init(args.verbose)?;

    for issue in inspect_target(args.algorithm, &args.hash) {
        warn!("{issue}");
    }

    println!("{}", banner(&args.hash));

    let mode = args.mode();
    info!(wordlist = ?args.wordlist, algorithm = %args.algorithm, ?mode, "starting recovery");

    // Create shared state
    let progress_counter = Arc::new(AtomicU64::new(0));
    let progress_bar = if !args.no_progress { Some(progress_spinner()) } else { None };

    // Spawn progress updater task
    let progress_task = progress_bar.clone().map(|pb| {
        let counter = Arc::clone(&progress_counter);
        tokio::spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(100)).await;
                pb.set_position(counter.load(Ordering::Relaxed));
            }
        })
    });

    let result = recover_file_async(
        args.wordlist.clone(),
        args.algorithm,
        args.hash.clone(),
        mode,
        Some(Arc::clone(&progress_counter)),
    )
    .await;

    // Clean up progress
    if let Some(task) = progress_task {
        task.abort();
    }
    if let Some(pb) = progress_bar {
        pb.finish_and_clear();
    }

    let outcome = result?;
    info!(
        candidates = progress_counter.load(Ordering::Relaxed),
        found = outcome.is_found(),
        "recovery finished"
    );
    println!("{}", render_outcome(&outcome));
    Ok(())
}
