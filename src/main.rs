use std::io;
use std::process::ExitCode;

use image_fetcher::{logging, Downloader, FetchConfig};

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        eprintln!("image-fetcher: logging disabled: {}", err);
    }

    let config = FetchConfig::default();

    let downloader = match Downloader::from_config(&config) {
        Ok(downloader) => downloader,
        Err(err) => {
            tracing::error!(error = %err, "cannot prepare output directory");
            eprintln!("image-fetcher error: {}", err);
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();

    if let Err(err) = downloader.run(&config.urls, &mut stdout.lock()) {
        tracing::warn!(error = %err, "writing notices to stdout failed");
    }

    ExitCode::SUCCESS
}
