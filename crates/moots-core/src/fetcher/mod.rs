//! Profile picture fetch engine.
//!
//! One blocking GET per record, one OS thread per record, no shared state
//! between fetches beyond the outcome channel. A failed fetch never touches
//! its siblings; the run ends at the join-all barrier in [`fetch_all`].

mod run;
mod single;

pub use run::{fetch_all, FetchOutcome, FetchSummary};
pub use single::fetch_one;

use std::io;

use thiserror::Error;

/// Why a single fetch failed. Each variant aborts that record only and is
/// reported as diagnostics, never propagated past the fetch's own thread.
#[derive(Debug, Error)]
pub enum FetchError {
    /// curl reported a transport problem (DNS, connect, TLS, read).
    #[error("network: {0}")]
    Network(#[from] curl::Error),
    /// The server answered with something other than 200.
    #[error("HTTP status {0}")]
    HttpStatus(u32),
    /// Creating the folder or writing the image failed.
    #[error("filesystem: {0}")]
    Filesystem(#[from] io::Error),
}
