//! Development HTTP listener (`--dev`)
//!
//! A manual-testing aid: every connection receives the same fixed `200 OK` response with body `Hello`. It never
//! looks at the request or at the compiled program.

use std::future::Future;
use std::io;
use std::net::SocketAddr;

use thiserror::Error;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::runtime::Runtime;

/// Body sent on every connection.
pub const RESPONSE_BODY: &str = "Hello";

/// Errors that stop the listener from starting.
#[derive(Debug, Error)]
pub enum DevServerError {
    #[error("invalid bind address `{addr}`: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    #[error("failed to create tokio runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to bind {addr}: {source}")]
    Bind { addr: SocketAddr, source: io::Error },
}

/// The fixed HTTP response, headers included.
pub fn response() -> String {
    format!(
        "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        RESPONSE_BODY.len(),
        RESPONSE_BODY
    )
}

/// Blocking entry point for the CLI: bind `host:port` and serve until Ctrl-C.
pub fn run(host: &str, port: u16) -> Result<(), DevServerError> {
    let addr_text = format!("{host}:{port}");
    let addr: SocketAddr = addr_text.parse().map_err(|source| DevServerError::Address {
        addr: addr_text.clone(),
        source,
    })?;

    let rt = Runtime::new().map_err(DevServerError::Runtime)?;
    rt.block_on(async move {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| DevServerError::Bind { addr, source })?;
        tracing::info!(%addr, "dev listener started (Ctrl-C to stop)");
        serve(listener, async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::warn!(error = %e, "cannot listen for Ctrl-C");
                // Without a signal handler the listener runs until the process is killed.
                std::future::pending::<()>().await;
            }
        })
        .await;
        Ok(())
    })
}

/// Accept connections on `listener` until `shutdown` resolves.
///
/// Failures on a single connection are logged and do not stop the listener.
pub async fn serve(listener: TcpListener, shutdown: impl Future<Output = ()>) {
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("dev listener shutting down");
                return;
            }
            accepted = listener.accept() => match accepted {
                Ok((stream, peer)) => {
                    tokio::spawn(async move {
                        if let Err(e) = respond(stream).await {
                            tracing::warn!(%peer, error = %e, "dev connection failed");
                        }
                    });
                }
                Err(e) => tracing::warn!(error = %e, "accept failed"),
            },
        }
    }
}

async fn respond(mut stream: TcpStream) -> io::Result<()> {
    // The request is read once and discarded.
    let mut buf = [0u8; 1024];
    let _ = stream.read(&mut buf).await?;
    stream.write_all(response().as_bytes()).await?;
    stream.shutdown().await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_response_is_fixed_hello() {
        let text = response();
        assert!(text.starts_with("HTTP/1.1 200 OK\r\n"));
        assert!(text.contains("Content-Length: 5\r\n"));
        assert!(text.ends_with("\r\n\r\nHello"));
    }

    #[test]
    fn test_invalid_address_is_an_error() {
        let err = run("not a host", 3000).unwrap_err();
        assert!(matches!(err, DevServerError::Address { .. }));
    }

    #[tokio::test]
    async fn test_serves_hello_until_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (stop, stopped) = tokio::sync::oneshot::channel::<()>();
        let server = tokio::spawn(serve(listener, async move {
            let _ = stopped.await;
        }));

        let mut client = TcpStream::connect(addr).await.unwrap();
        client.write_all(b"GET / HTTP/1.1\r\nHost: localhost\r\n\r\n").await.unwrap();
        let mut reply = String::new();
        client.read_to_string(&mut reply).await.unwrap();
        assert!(reply.starts_with("HTTP/1.1 200 OK"));
        assert!(reply.ends_with("Hello"));

        stop.send(()).unwrap();
        server.await.unwrap();
    }
}
