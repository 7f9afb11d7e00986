use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DownloadError {
    #[error("creating output directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("writing {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
}
