// src/checker/test_support.rs
// =============================================================================
// A tiny HTTP server for tests, listening on a random local port.
//
// Each accepted connection reads the request, then behaves as told:
// answers (optionally after a delay), hangs up without answering, or
// promises a longer body than it sends. It counts connections, which is how
// the tests count request attempts.
// =============================================================================

use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use super::UrlChecker;
use crate::config::CheckerConfig;

#[derive(Debug, Clone)]
pub enum Behavior {
    Respond {
        status: u16,
        body: &'static str,
        delay: Duration,
    },
    /// Close the connection without sending anything
    Hangup,
    /// Send a Content-Length larger than the body, then close
    Truncated { declared: usize, body: &'static str },
}

impl Behavior {
    pub fn ok(body: &'static str) -> Self {
        Self::status(200, body)
    }

    pub fn status(status: u16, body: &'static str) -> Self {
        Self::Respond {
            status,
            body,
            delay: Duration::ZERO,
        }
    }

    pub fn delayed(delay: Duration, body: &'static str) -> Self {
        Self::Respond {
            status: 200,
            body,
            delay,
        }
    }
}

pub struct MockServer {
    addr: SocketAddr,
    connections: Arc<AtomicUsize>,
}

impl MockServer {
    pub async fn start(behavior: Behavior) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let connections = Arc::new(AtomicUsize::new(0));
        let counter = connections.clone();

        tokio::spawn(async move {
            while let Ok((mut socket, _)) = listener.accept().await {
                counter.fetch_add(1, Ordering::SeqCst);
                let behavior = behavior.clone();

                tokio::spawn(async move {
                    let mut buf = [0u8; 4096];
                    let _ = socket.read(&mut buf).await;

                    match behavior {
                        Behavior::Respond { status, body, delay } => {
                            tokio::time::sleep(delay).await;
                            let response = format!(
                                "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                status,
                                reason(status),
                                body.len(),
                                body
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                        Behavior::Hangup => drop(socket),
                        Behavior::Truncated { declared, body } => {
                            let response = format!(
                                "HTTP/1.1 200 OK\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                                declared, body
                            );
                            let _ = socket.write_all(response.as_bytes()).await;
                            let _ = socket.shutdown().await;
                        }
                    }
                });
            }
        });

        Self { addr, connections }
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    pub fn connections(&self) -> usize {
        self.connections.load(Ordering::SeqCst)
    }
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        500 => "Internal Server Error",
        _ => "Unknown",
    }
}

// A checker whose client ignores proxy settings from the environment
pub fn test_checker(config: CheckerConfig) -> UrlChecker {
    let client = Client::builder()
        .timeout(config.timeout)
        .no_proxy()
        .build()
        .unwrap();
    UrlChecker::with_client(client, config)
}
