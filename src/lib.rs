pub mod config;
pub mod downloader;
pub mod error;
pub mod logging;

pub use config::FetchConfig;
pub use downloader::{DownloadTask, Downloader, FileDownloader, Outcome, Response, UReqFetcher};
pub use error::DownloadError;
