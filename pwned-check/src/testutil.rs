//! Minimal local stand-in for the range endpoint, used by offline tests.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::thread;

/// Answers every request on a loopback socket with one canned status and
/// body, mimicking the `text/plain` range response format.
pub struct MockRangeServer {
    base_url: String,
}

impl MockRangeServer {
    pub fn serve(status: u16, body: String) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}/range", listener.local_addr().unwrap());

        thread::spawn(move || {
            for stream in listener.incoming() {
                let Ok(mut stream) = stream else { break };

                // Drain the request head; the response does not depend on it.
                let mut buf = [0u8; 4096];
                let mut request = Vec::new();
                loop {
                    match stream.read(&mut buf) {
                        Ok(0) => break,
                        Ok(n) => {
                            request.extend_from_slice(&buf[..n]);
                            if request.windows(4).any(|w| w == b"\r\n\r\n") {
                                break;
                            }
                        }
                        Err(_) => break,
                    }
                }

                let reason = if status == 200 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {status} {reason}\r\n\
                     content-type: text/plain\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\
                     \r\n\
                     {body}",
                    body.len(),
                );
                let _ = stream.write_all(response.as_bytes());
            }
        });

        Self { base_url }
    }

    /// Base URL to hand to `BreachClient::with_config`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
