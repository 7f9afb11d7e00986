mod fetcher;

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::FetchConfig;
use crate::error::DownloadError;

pub use fetcher::UReqFetcher;

/// What a single GET produced. Only status 200 carries a body.
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    Ok(Vec<u8>),
    Status(u16),
    Transport(String),
}

impl Response {
    pub fn ok(body: Vec<u8>) -> Self {
        Self::Ok(body)
    }

    pub fn status(code: u16) -> Self {
        Self::Status(code)
    }

    pub fn transport(description: impl Into<String>) -> Self {
        Self::Transport(description.into())
    }
}

pub trait FileDownloader {
    fn fetch(&self, url: &str) -> Response;
}

/// A URL and the file name it will be saved under.
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadTask {
    url: String,
    file_name: String,
}

impl DownloadTask {
    /// The file name is everything after the last `/`, query string included.
    pub fn new(url: impl Into<String>) -> Self {
        let url = url.into();

        let file_name = url.rsplit('/').next().unwrap_or_default().to_string();

        Self { url, file_name }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

#[derive(Debug, PartialEq)]
pub enum Outcome {
    Downloaded { url: String, path: PathBuf },
    Failed { url: String, status: u16 },
    Error { url: String, description: String },
}

impl Outcome {
    pub fn url(&self) -> &str {
        match self {
            Outcome::Downloaded { url, .. }
            | Outcome::Failed { url, .. }
            | Outcome::Error { url, .. } => url,
        }
    }

    pub fn is_downloaded(&self) -> bool {
        matches!(self, Outcome::Downloaded { .. })
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Downloaded { path, .. } => write!(f, "Downloaded: {}", path.display()),
            Outcome::Failed { url, status } => write!(f, "Failed {}: {}", status, url),
            Outcome::Error { url, description } => {
                write!(f, "Error downloading {}: {}", url, description)
            }
        }
    }
}

pub struct Downloader<T: FileDownloader> {
    fetcher: T,
    path: PathBuf,
}

impl<T> Downloader<T>
where
    T: FileDownloader,
{
    /// Creates the output directory if needed. An existing directory is reused as is.
    pub fn with_fetcher(path: impl AsRef<Path>, fetcher: T) -> Result<Self, DownloadError> {
        let path = Self::create_output_dir(path.as_ref())?;

        Ok(Downloader { fetcher, path })
    }

    pub fn output_dir(&self) -> &Path {
        &self.path
    }

    /// Fetches one task and saves the body on a 200. Never fails; every miss is an outcome.
    pub fn download(&self, task: &DownloadTask) -> Outcome {
        let url = task.url().to_string();

        match self.fetcher.fetch(task.url()) {
            Response::Ok(body) => {
                let file_path = self.path.join(task.file_name());

                match Self::save(&file_path, &body) {
                    Ok(()) => Outcome::Downloaded {
                        url,
                        path: file_path,
                    },
                    Err(err) => {
                        tracing::warn!(url = %url, error = %err, "save failed");
                        Outcome::Error {
                            url,
                            description: err.to_string(),
                        }
                    }
                }
            }

            Response::Status(status) => {
                tracing::debug!(url = %url, status, "unexpected status");
                Outcome::Failed { url, status }
            }

            Response::Transport(description) => {
                tracing::debug!(url = %url, error = %description, "request failed");
                Outcome::Error { url, description }
            }
        }
    }

    /// Walks `urls` in order, writing one notice line to `out` as each finishes.
    ///
    /// Only a failure to write to `out` is returned as an error.
    pub fn run<I, W>(&self, urls: I, out: &mut W) -> io::Result<Vec<Outcome>>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        W: Write,
    {
        let mut outcomes = Vec::new();

        for url in urls {
            let task = DownloadTask::new(url.as_ref());

            let outcome = self.download(&task);

            writeln!(out, "{}", outcome)?;

            outcomes.push(outcome);
        }

        let downloaded = outcomes.iter().filter(|o| o.is_downloaded()).count();
        tracing::info!(total = outcomes.len(), downloaded, "run finished");

        Ok(outcomes)
    }

    fn save(file_path: &Path, body: &[u8]) -> Result<(), DownloadError> {
        fs::write(file_path, body).map_err(|source| DownloadError::Write {
            path: file_path.to_path_buf(),
            source,
        })?;

        tracing::debug!(
            path = %file_path.display(),
            bytes = body.len(),
            format = ?image::guess_format(body).ok(),
            "saved"
        );

        Ok(())
    }

    fn create_output_dir(path: &Path) -> Result<PathBuf, DownloadError> {
        fs::create_dir_all(path).map_err(|source| DownloadError::CreateDir {
            path: path.to_path_buf(),
            source,
        })?;

        Ok(path.to_path_buf())
    }
}

impl Downloader<UReqFetcher> {
    pub fn new(path: impl AsRef<Path>) -> Result<Self, DownloadError> {
        Downloader::with_fetcher(path, UReqFetcher::new())
    }

    pub fn from_config(config: &FetchConfig) -> Result<Self, DownloadError> {
        let fetcher = UReqFetcher::with_headers(config.headers.clone());
        Downloader::with_fetcher(&config.output_dir, fetcher)
    }
}

#[cfg(test)]
use fetcher::MockFetcher;
