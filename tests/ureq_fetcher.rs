use std::fs;
use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread::{self, JoinHandle};

use image_fetcher::{DownloadTask, Downloader, FileDownloader, Outcome, Response, UReqFetcher};
use tempfile::tempdir;

const AGENT: &str = "image-fetcher-test/1.0";

/// Answers exactly one request with `status_line` and `body`, returning the raw request head.
fn serve_once(status_line: &'static str, body: &'static [u8]) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();

    let handle = thread::spawn(move || {
        let (mut stream, _) = listener.accept().unwrap();

        let mut request = Vec::new();
        let mut buf = [0u8; 1024];

        while !request.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            request.extend_from_slice(&buf[..n]);
        }

        let head = format!(
            "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
            status_line,
            body.len()
        );

        stream.write_all(head.as_bytes()).unwrap();
        stream.write_all(body).unwrap();
        stream.flush().unwrap();

        String::from_utf8_lossy(&request).into_owned()
    });

    (format!("http://{}", addr), handle)
}

fn fetcher() -> UReqFetcher {
    UReqFetcher::with_headers(vec![(String::from("User-Agent"), String::from(AGENT))])
}

#[test]
fn test_fetch_ok_sends_user_agent() {
    let (base, server) = serve_once("200 OK", b"\x89PNG fake image");

    let response = fetcher().fetch(&format!("{}/a/b/pic.png", base));

    assert_eq!(response, Response::ok(b"\x89PNG fake image".to_vec()));

    let request = server.join().unwrap().to_lowercase();
    assert!(request.starts_with("get /a/b/pic.png http/1.1"));
    assert!(request.contains(&format!("user-agent: {}", AGENT)));
}

#[test]
fn test_fetch_not_found() {
    let (base, server) = serve_once("404 Not Found", b"missing");

    let response = fetcher().fetch(&format!("{}/missing.png", base));

    assert_eq!(response, Response::status(404));
    server.join().unwrap();
}

#[test]
fn test_fetch_other_success_status_is_not_ok() {
    let (base, server) = serve_once("201 Created", b"created");

    let response = fetcher().fetch(&format!("{}/created.png", base));

    assert_eq!(response, Response::status(201));
    server.join().unwrap();
}

#[test]
fn test_fetch_connection_refused() {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let response = fetcher().fetch(&format!("http://{}/pic.png", addr));

    assert!(matches!(response, Response::Transport(_)));
}

#[test]
fn test_fetch_invalid_url() {
    let response = fetcher().fetch("pic.png");

    match response {
        Response::Transport(description) => assert!(description.contains("pic.png")),
        other => panic!("expected a transport failure, got {:?}", other),
    }
}

#[test]
fn test_downloader_saves_served_body() {
    let dir = tempdir().unwrap();
    let (base, server) = serve_once("200 OK", b"served bytes");
    let url = format!("{}/images/photo.jpg", base);

    let downloader = Downloader::with_fetcher(dir.path(), fetcher()).unwrap();

    let outcome = downloader.download(&DownloadTask::new(url.as_str()));
    server.join().unwrap();

    assert_eq!(
        outcome,
        Outcome::Downloaded {
            url,
            path: dir.path().join("photo.jpg"),
        }
    );
    assert_eq!(fs::read(dir.path().join("photo.jpg")).unwrap(), b"served bytes");
}
