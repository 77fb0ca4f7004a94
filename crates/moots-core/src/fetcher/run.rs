//! Unbounded fan-out: one thread per record, join-all at the end.

use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::thread;

use crate::record::MutualRecord;

use super::{fetch_one, FetchError};

/// What happened to one record, sent over the outcome channel as soon as its
/// thread finishes.
#[derive(Debug)]
pub struct FetchOutcome {
    pub handle: String,
    pub result: Result<PathBuf, FetchError>,
}

/// Totals for a whole run. `downloaded` counts fetches that wrote a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FetchSummary {
    pub attempted: usize,
    pub downloaded: usize,
}

/// Fetches every record concurrently, one thread per record, no concurrency
/// cap (the fan-out factor is the total mutual count).
///
/// Outcomes are sent over `outcome_tx` as they happen; the channel closes when
/// the last fetch finishes. The call itself returns only after every thread
/// has been joined, so by the time the summary is back all files are on disk.
/// A worker that panics counts as a failed fetch.
pub fn fetch_all(
    records: Vec<MutualRecord>,
    folder: &Path,
    outcome_tx: Option<Sender<FetchOutcome>>,
) -> FetchSummary {
    let attempted = records.len();
    let mut handles = Vec::with_capacity(attempted);
    for record in records {
        let folder = folder.to_path_buf();
        let tx = outcome_tx.clone();
        handles.push(thread::spawn(move || {
            let result = fetch_one(&record, &folder);
            match &result {
                Ok(path) => {
                    tracing::debug!(handle = %record.handle, path = %path.display(), "fetched")
                }
                Err(err) => tracing::warn!(handle = %record.handle, "fetch failed: {err}"),
            }
            let ok = result.is_ok();
            if let Some(tx) = tx {
                let _ = tx.send(FetchOutcome {
                    handle: record.handle,
                    result,
                });
            }
            ok
        }));
    }
    drop(outcome_tx);

    let mut downloaded = 0;
    for handle in handles {
        if handle.join().unwrap_or(false) {
            downloaded += 1;
        }
    }
    FetchSummary {
        attempted,
        downloaded,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn empty_run_closes_the_channel_and_reports_zero() {
        let dir = tempfile::tempdir().unwrap();
        let (tx, rx) = mpsc::channel();
        let summary = fetch_all(Vec::new(), dir.path(), Some(tx));
        assert_eq!(summary, FetchSummary::default());
        // All senders are gone, so the receiver sees a clean end of stream.
        assert!(rx.recv().is_err());
    }

    #[test]
    fn unreachable_hosts_fail_without_poisoning_the_summary() {
        let dir = tempfile::tempdir().unwrap();
        let records = vec![
            MutualRecord {
                handle: "ghost".to_string(),
                // Nothing listens on port 1; connection is refused immediately.
                image_url: "http://127.0.0.1:1/g.jpg".to_string(),
            },
            MutualRecord {
                handle: "phantom".to_string(),
                image_url: "http://127.0.0.1:1/p.jpg".to_string(),
            },
        ];
        let (tx, rx) = mpsc::channel();
        let summary = fetch_all(records, dir.path(), Some(tx));
        assert_eq!(summary.attempted, 2);
        assert_eq!(summary.downloaded, 0);

        let outcomes: Vec<FetchOutcome> = rx.iter().collect();
        assert_eq!(outcomes.len(), 2);
        for outcome in outcomes {
            assert!(matches!(outcome.result, Err(FetchError::Network(_))));
        }
        // Nothing was written for failed fetches.
        let leftovers = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(leftovers, 0);
    }
}
