// src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong in one run. Both variants are caught at the
/// runner boundary and reported; neither escapes to the process level.
#[derive(Debug, Error)]
pub enum ScrapeError {
    /// Transport failure or a 4xx/5xx status while fetching the page.
    #[error("fetching {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Failed to open, write or flush the output file.
    #[error("writing {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
