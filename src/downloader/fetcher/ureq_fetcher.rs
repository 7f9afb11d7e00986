use ureq::Error::Status;
use ureq::{Agent, AgentBuilder};
use url::Url;

use super::{FileDownloader, Response};

use std::io::Read;

/// Blocking HTTP fetcher. No timeout is set, so a silent server stalls the caller.
pub struct UReqFetcher {
    agent: Agent,
    headers: Vec<(String, String)>,
}

impl FileDownloader for UReqFetcher {
    fn fetch(&self, url: &str) -> Response {
        let url = match Url::parse(url) {
            Ok(url) => url,
            Err(err) => return Response::transport(format!("invalid URL {url}: {err}")),
        };

        let request = self
            .headers
            .iter()
            .fold(self.agent.request_url("GET", &url), |request, (key, value)| {
                request.set(key, value)
            });

        tracing::debug!(%url, "GET");

        match request.call() {
            Ok(response) if response.status() == 200 => {
                let mut body = Vec::new();

                if let Err(err) = response.into_reader().read_to_end(&mut body) {
                    return Response::transport(format!("reading body: {err}"));
                }

                Response::ok(body)
            }

            // Redirects are already followed here; anything else that is not 200 is a miss.
            Ok(response) => Response::status(response.status()),

            Err(Status(code, _)) => Response::status(code),

            Err(err) => Response::transport(err.to_string()),
        }
    }
}

impl UReqFetcher {
    pub fn new() -> Self {
        Self::with_headers(Vec::new())
    }

    pub fn with_headers(headers: Vec<(String, String)>) -> Self {
        UReqFetcher {
            agent: AgentBuilder::new().build(),
            headers,
        }
    }
}

impl Default for UReqFetcher {
    fn default() -> Self {
        Self::new()
    }
}
