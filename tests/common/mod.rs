//! Shared helpers for integration tests.

use apiconsole::api::{ApiClient, Session, User};
use apiconsole::screens::ScreenContext;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use tokio::runtime::Runtime;

/// A session as the login endpoint would have produced it.
pub fn session() -> Session {
    Session {
        token: "token-abc".to_string(),
        refresh_token: "refresh-xyz".to_string(),
        user: User {
            id: "7".to_string(),
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            ..User::default()
        },
    }
}

/// A key press event with no modifiers.
pub fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

/// A key press event with the given modifiers.
pub fn key_with(code: KeyCode, modifiers: KeyModifiers) -> Event {
    Event::Key(KeyEvent::new(code, modifiers))
}

/// Run `f` with a screen context whose API client points at a closed port.
///
/// Any request made through it fails fast with a transport error, which is
/// exactly what the buffer-formatting tests want to observe.
pub fn with_ctx<T>(f: impl FnOnce(&ScreenContext) -> T) -> T {
    let api = ApiClient::new("http://127.0.0.1:1");
    let runtime = Runtime::new().expect("tokio runtime");
    let ctx = ScreenContext::new(&api, &runtime);
    f(&ctx)
}

/// Type a string into the focused input, one key event at a time.
pub fn type_str(s: &str) -> Vec<Event> {
    s.chars().map(|c| key(KeyCode::Char(c))).collect()
}

/// Serve exactly one HTTP request with a canned 200 JSON response.
///
/// Returns the base URL to point the client at and a channel carrying the
/// raw request the server saw, so tests can assert on what was sent.
pub fn serve_one(body: &str) -> (String, Receiver<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let body = body.to_string();
    let (tx, rx) = mpsc::channel();

    thread::spawn(move || {
        let (mut stream, _) = listener.accept().expect("accept");
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];

        // Read the headers, then as many body bytes as they announce.
        let header_end = loop {
            let n = stream.read(&mut chunk).expect("read");
            buf.extend_from_slice(&chunk[..n]);
            if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
                break pos + 4;
            }
        };
        let headers = String::from_utf8_lossy(&buf[..header_end]).to_lowercase();
        let content_length = headers
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        while buf.len() < header_end + content_length {
            let n = stream.read(&mut chunk).expect("read body");
            buf.extend_from_slice(&chunk[..n]);
        }

        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );
        stream.write_all(response.as_bytes()).expect("write");
        let _ = stream.flush();
        let _ = tx.send(String::from_utf8_lossy(&buf).into_owned());
    });

    (format!("http://{addr}"), rx)
}
