use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum SweepError {
    /// The header directory is missing or unreadable. Fatal for the run.
    #[error("cannot read header directory {path}")]
    DirectoryAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A search attempt failed for a reason other than "no match".
    /// Recovered locally: the caller treats the outcome as not found.
    #[error("search failed under {path}")]
    Search {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
