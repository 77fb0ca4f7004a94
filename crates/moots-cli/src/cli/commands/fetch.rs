//! The one pipeline: extract mutuals from each export file, then fetch.

use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::thread;

use anyhow::Result;
use moots_core::export;
use moots_core::fetcher::{self, FetchOutcome};
use moots_core::record::MutualRecord;

/// Extracts every file sequentially (bad files are logged and skipped, with
/// no partial results), then fans out one fetch per record and prints each
/// outcome as it lands.
pub fn run_fetch(folder: &Path, files: &[PathBuf]) -> Result<()> {
    let mut all_mutuals: Vec<MutualRecord> = Vec::new();
    for path in files {
        match export::mutuals_from_path(path) {
            Ok(mutuals) => {
                println!("Found {} mutuals in {}", mutuals.len(), path.display());
                all_mutuals.extend(mutuals);
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), "export not processed: {err}");
                println!("Error processing {}: {}", path.display(), err);
            }
        }
    }

    let (outcome_tx, outcome_rx) = mpsc::channel::<FetchOutcome>();
    let printer = thread::spawn(move || {
        for outcome in outcome_rx {
            match outcome.result {
                Ok(_) => println!("Downloaded profile picture for @{}", outcome.handle),
                Err(err) => println!(
                    "Failed to download profile picture for @{}: {}",
                    outcome.handle, err
                ),
            }
        }
    });

    let summary = fetcher::fetch_all(all_mutuals, folder, Some(outcome_tx));
    if printer.join().is_err() {
        tracing::warn!("outcome printer thread panicked");
    }

    println!(
        "Finished downloading {} profile pictures to {}",
        summary.downloaded,
        folder.display()
    );
    Ok(())
}
