//! Shared utilities for integration testing.

use std::net::SocketAddr;
use std::time::Duration;

use employee_relay::config::ServiceConfig;
use employee_relay::http::HttpServer;
use employee_relay::lifecycle::Shutdown;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// A relay instance bound to an ephemeral port.
pub struct TestService {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestService {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Start the relay on an ephemeral port.
///
/// The default config points the upstream at the instance's own `/server`
/// group; `configure` runs last and can override anything.
pub async fn spawn_service<F>(configure: F) -> TestService
where
    F: FnOnce(&mut ServiceConfig),
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let mut config = ServiceConfig::default();
    config.listener.bind_address = addr.to_string();
    config.upstream.base_url = format!("http://{}/server", addr);
    configure(&mut config);

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, shutdown.clone()).unwrap();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestService { addr, shutdown }
}

/// Start a mock feed that answers every connection with the given NDJSON
/// lines as one streaming response, written out line by line.
#[allow(dead_code)]
pub async fn start_scripted_feed(lines: Vec<String>) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    // Drain the request first so closing the socket sends a
                    // clean FIN instead of resetting the connection.
                    let mut request = [0u8; 1024];
                    let _ = socket.read(&mut request).await;

                    let body_len: usize = lines.iter().map(|l| l.len() + 1).sum();
                    let header = format!(
                        "HTTP/1.1 200 OK\r\nContent-Type: application/stream+json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                        body_len
                    );
                    let _ = socket.write_all(header.as_bytes()).await;

                    // One write per line, paced, so the reading side sees a
                    // live stream rather than one buffered body.
                    for line in &lines {
                        let _ = socket.write_all(format!("{}\n", line).as_bytes()).await;
                        tokio::time::sleep(Duration::from_millis(5)).await;
                    }

                    let _ = socket.shutdown().await;
                    tokio::time::sleep(Duration::from_millis(10)).await;
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Allocate an address nothing listens on.
#[allow(dead_code)]
pub async fn unused_addr() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Read `count` JSON documents off a streaming response, then stop reading.
#[allow(dead_code)]
pub async fn read_json_lines(response: reqwest::Response, count: usize) -> Vec<serde_json::Value> {
    use futures_util::StreamExt;

    let mut stream = response.bytes_stream();
    let mut buf: Vec<u8> = Vec::new();
    let mut lines = Vec::new();

    while lines.len() < count {
        let chunk = stream
            .next()
            .await
            .expect("stream ended before enough lines arrived")
            .expect("stream failed");
        buf.extend_from_slice(&chunk);

        while let Some(pos) = buf.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = buf.drain(..=pos).collect();
            let line = &line[..line.len() - 1];
            if !line.is_empty() {
                lines.push(serde_json::from_slice(line).expect("line is not valid JSON"));
            }
        }
    }

    lines.truncate(count);
    lines
}
