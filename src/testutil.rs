//! Canned-response HTTP endpoint for exercising the request bridges against
//! a local socket instead of the real API.

use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::thread::JoinHandle;

use crate::config::AppConfig;

pub struct CannedResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

impl CannedResponse {
    pub fn json(status: u16, body: &str) -> Self {
        Self {
            status,
            content_type: "application/json",
            body: body.as_bytes().to_vec(),
        }
    }

    pub fn bytes(status: u16, content_type: &'static str, body: Vec<u8>) -> Self {
        Self {
            status,
            content_type,
            body,
        }
    }
}

#[derive(Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

pub struct MockEndpoint {
    pub base_url: String,
    handle: JoinHandle<Vec<RecordedRequest>>,
}

impl MockEndpoint {
    /// Join the server thread and return the requests it saw.
    pub fn finish(self) -> Vec<RecordedRequest> {
        self.handle.join().expect("mock endpoint thread panicked")
    }
}

/// Bind a local listener and answer one connection per canned response,
/// in order.
pub fn serve(responses: Vec<CannedResponse>) -> MockEndpoint {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind mock endpoint");
    let base_url = format!("http://{}", listener.local_addr().expect("local addr"));

    let handle = std::thread::spawn(move || {
        let mut recorded = Vec::new();
        for response in &responses {
            let (stream, _) = listener.accept().expect("accept connection");
            recorded.push(handle_connection(stream, response));
        }
        recorded
    });

    MockEndpoint { base_url, handle }
}

/// Config pointed at a mock endpoint, with a key so the bridges get past the
/// configuration check.
pub fn test_config(base_url: &str) -> AppConfig {
    AppConfig {
        openai_api_key: "sk-test".to_string(),
        api_base: base_url.trim_end_matches('/').to_string(),
        ..AppConfig::default()
    }
}

fn handle_connection(stream: TcpStream, response: &CannedResponse) -> RecordedRequest {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).expect("request line");
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).expect("header line");
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            if name.eq_ignore_ascii_case("content-length") {
                content_length = value.trim().parse().unwrap_or(0);
            }
        }
    }

    let mut body = vec![0u8; content_length];
    if content_length > 0 {
        reader.read_exact(&mut body).expect("request body");
    }

    let reason = match response.status {
        200 => "OK",
        400 => "Bad Request",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Error",
    };
    let head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
        response.status,
        reason,
        response.content_type,
        response.body.len()
    );

    let mut stream = reader.into_inner();
    stream.write_all(head.as_bytes()).expect("write response head");
    stream.write_all(&response.body).expect("write response body");
    stream.flush().expect("flush response");

    RecordedRequest { method, path, body }
}
