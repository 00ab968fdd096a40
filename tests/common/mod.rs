//! Shared fixtures for the integration tests.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use embassy_futures::block_on;
use embedded_io_async::{ErrorType, Read, Write};
use ledtoggle::{
    app::{BlinkService, PeerRegistry, ToggleService},
    controllers::LedHttpController,
    domain::{entity::LedState, ports::LedOutput},
    http::{HttpResult, HttpServer},
};

/// In-memory duplex stream: reads come from a fixed request, writes are
/// collected.
pub struct MockStream {
    input: Vec<u8>,
    position: usize,
    read_chunk: usize,
    pub output: Vec<u8>,
}

impl MockStream {
    pub fn new(input: &[u8]) -> Self {
        Self::chunked(input, usize::MAX)
    }

    /// Deliver at most `read_chunk` bytes per read call.
    pub fn chunked(input: &[u8], read_chunk: usize) -> Self {
        Self {
            input: input.to_vec(),
            position: 0,
            read_chunk,
            output: Vec::new(),
        }
    }
}

impl ErrorType for MockStream {
    type Error = core::convert::Infallible;
}

impl Read for MockStream {
    async fn read(&mut self, buf: &mut [u8]) -> Result<usize, Self::Error> {
        let remaining = &self.input[self.position..];
        let n = remaining.len().min(buf.len()).min(self.read_chunk);
        buf[..n].copy_from_slice(&remaining[..n]);
        self.position += n;
        Ok(n)
    }
}

impl Write for MockStream {
    async fn write(&mut self, buf: &[u8]) -> Result<usize, Self::Error> {
        self.output.extend_from_slice(buf);
        Ok(buf.len())
    }

    async fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// LED output that records every state it was driven with.
#[derive(Clone, Default)]
pub struct RecordingOutput {
    pub applied: Arc<Mutex<Vec<LedState>>>,
}

impl RecordingOutput {
    pub fn history(&self) -> Vec<LedState> {
        self.applied.lock().unwrap().clone()
    }
}

impl LedOutput for RecordingOutput {
    fn apply(&mut self, state: LedState) {
        self.applied.lock().unwrap().push(state);
    }
}

/// A parsed HTTP response.
pub struct Response {
    pub status: u16,
    pub headers: String,
    pub body: String,
}

impl Response {
    pub fn parse(raw: &[u8]) -> Self {
        let text =
            String::from_utf8(raw.to_vec()).expect("response is not UTF-8");
        let (head, body) = text
            .split_once("\r\n\r\n")
            .expect("response has no header terminator");
        let status = head
            .split_whitespace()
            .nth(1)
            .and_then(|code| code.parse().ok())
            .expect("response has no status code");

        Self {
            status,
            headers: head.to_string(),
            body: body.to_string(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }
}

pub struct Device {
    pub led: ToggleService<RecordingOutput>,
    pub blink: BlinkService,
    pub peers: PeerRegistry,
    pub output: RecordingOutput,
}

impl Device {
    pub fn new() -> Self {
        let output = RecordingOutput::default();
        Self {
            led: ToggleService::new(output.clone()),
            blink: BlinkService::new(),
            peers: PeerRegistry::new(),
            output,
        }
    }

    /// Send a raw request through the HTTP server and return the raw reply.
    pub fn exchange(&self, request: &[u8]) -> (HttpResult, Vec<u8>) {
        let controller =
            LedHttpController::new(&self.led, &self.blink, &self.peers);
        let server = HttpServer::new(&controller);
        let mut stream = MockStream::new(request);
        let result = block_on(server.serve(&mut stream));
        (result, stream.output)
    }

    pub fn request(&self, request: &[u8]) -> Response {
        let (_, output) = self.exchange(request);
        Response::parse(&output)
    }
}

pub fn post(path: &str, content_type: &str, body: &str) -> Vec<u8> {
    format!(
        "POST {path} HTTP/1.1\r\n\
         Host: 192.168.4.1\r\n\
         Content-Type: {content_type}\r\n\
         Content-Length: {}\r\n\r\n{body}",
        body.len()
    )
    .into_bytes()
}

pub fn post_json(path: &str, body: &str) -> Vec<u8> {
    post(path, "application/json", body)
}

pub fn get(path: &str) -> Vec<u8> {
    format!("GET {path} HTTP/1.1\r\nHost: 192.168.4.1\r\n\r\n").into_bytes()
}
