//! Minimal HTTP/1.1 server standing in for the relay in integration tests.
//!
//! Answers every request with a fixed status and body and records the request
//! line and `Accept` header so tests can check what was dispatched.

use std::io::{Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::{Arc, Mutex};
use std::thread;
use std::time::Duration;

/// Picks the response body from the request target.
pub type BodyFn = Arc<dyn Fn(&str) -> String + Send + Sync>;

#[derive(Clone)]
pub struct RelayServerOptions {
    pub status: u16,
    pub body: String,
    /// Overrides `body` per request when set.
    pub body_for_target: Option<BodyFn>,
    /// Pause before answering (lets tests overlap submissions).
    pub delay: Duration,
}

impl Default for RelayServerOptions {
    fn default() -> Self {
        Self {
            status: 200,
            body: String::new(),
            body_for_target: None,
            delay: Duration::ZERO,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Request target as sent, e.g. `/?https%3A%2F%2F...`.
    pub target: String,
    pub accept: Option<String>,
}

pub struct RelayServer {
    /// Base URL including the query marker, e.g. `http://127.0.0.1:12345/?`.
    pub relay_base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl RelayServer {
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

/// Starts a server answering `status` with `body`.
pub fn start(status: u16, body: &str) -> RelayServer {
    start_with_options(RelayServerOptions {
        status,
        body: body.to_string(),
        ..RelayServerOptions::default()
    })
}

/// Starts a server in a background thread. It runs until the process exits.
pub fn start_with_options(opts: RelayServerOptions) -> RelayServer {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = Arc::clone(&requests);
    thread::spawn(move || {
        for stream in listener.incoming().flatten() {
            let opts = opts.clone();
            let recorded = Arc::clone(&recorded);
            thread::spawn(move || handle(stream, &opts, &recorded));
        }
    });
    RelayServer {
        relay_base: format!("http://127.0.0.1:{}/?", port),
        requests,
    }
}

/// Address nothing listens on (connection refused).
pub fn dead_address() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let port = listener.local_addr().unwrap().port();
    drop(listener);
    format!("http://127.0.0.1:{}/?", port)
}

fn handle(mut stream: TcpStream, opts: &RelayServerOptions, recorded: &Mutex<Vec<RecordedRequest>>) {
    let _ = stream.set_read_timeout(Some(Duration::from_secs(2)));
    let _ = stream.set_write_timeout(Some(Duration::from_secs(2)));
    let mut data = Vec::new();
    let mut buf = [0u8; 4096];
    while !data.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut buf) {
            Ok(0) | Err(_) => break,
            Ok(n) => data.extend_from_slice(&buf[..n]),
        }
    }
    let request = String::from_utf8_lossy(&data).into_owned();
    let parsed = parse_request(&request);
    let body = match (&opts.body_for_target, &parsed) {
        (Some(f), Some(req)) => f(&req.target),
        _ => opts.body.clone(),
    };
    if let Some(req) = parsed {
        recorded.lock().unwrap().push(req);
    }
    if !opts.delay.is_zero() {
        thread::sleep(opts.delay);
    }
    let response = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        opts.status,
        reason(opts.status),
        body.len()
    );
    let _ = stream.write_all(response.as_bytes());
    let _ = stream.write_all(body.as_bytes());
    let _ = stream.flush();
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        204 => "No Content",
        400 => "Bad Request",
        401 => "Unauthorized",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        _ => "Status",
    }
}

fn parse_request(request: &str) -> Option<RecordedRequest> {
    let mut lines = request.lines();
    let mut first = lines.next()?.split_whitespace();
    let method = first.next()?.to_string();
    let target = first.next()?.to_string();
    let mut accept = None;
    for line in lines {
        let line = line.trim();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.trim().eq_ignore_ascii_case("accept") {
                accept = Some(value.trim().to_string());
            }
        }
    }
    Some(RecordedRequest {
        method,
        target,
        accept,
    })
}
