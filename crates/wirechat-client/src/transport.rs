//! TCP transport.
//!
//! Provides [`ConnectedClient`], a channel handle over the raw socket. A
//! single connection task owns both halves of the stream: it forwards
//! outgoing lines from the `to_server` channel and decodes incoming reads
//! into [`ServerEvent`]s. Any socket failure produces exactly one
//! [`ServerEvent::Closed`] and terminates the task; there are no retries
//! and no reconnects.
//!
//! The wire protocol is unframed (see `wirechat_core::wire`), so one read is
//! treated as one message. That is an explicit compatibility assumption, not
//! a guarantee the transport can enforce.

use std::io;

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::{
        TcpStream,
        tcp::{OwnedReadHalf, OwnedWriteHalf},
    },
    sync::mpsc,
};
use wirechat_core::{ChatConfig, ChatError, wire};

/// Channel depth for both directions; senders briefly backpressure past this.
const CHANNEL_CAPACITY: usize = 32;

/// Decoded events from the server connection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerEvent {
    /// One received message, displayed verbatim.
    Line(String),

    /// A read produced bytes that are not valid UTF-8. Not fatal; the
    /// connection stays up.
    Garbled,

    /// The connection ended. Sent exactly once, then the event channel
    /// closes.
    Closed(ChatError),
}

/// Handle to a live server connection.
///
/// Outgoing lines go through [`ConnectedClient::send`]; decoded events
/// arrive on `from_server`. Dropping the handle (or calling
/// [`ConnectedClient::stop`]) ends the connection task, which shuts the
/// socket down on its way out, so the blocked read is always unblocked and
/// the socket is closed exactly once.
#[derive(Debug)]
pub struct ConnectedClient {
    /// Outgoing line channel. Taken on stop so repeat stops are no-ops.
    to_server: Option<mpsc::Sender<String>>,
    /// Decoded events from the server.
    pub from_server: mpsc::Receiver<ServerEvent>,
}

impl ConnectedClient {
    /// Queue one already-formatted frame for sending.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::SessionClosed`] if the connection task has
    /// stopped; no bytes are written in that case.
    pub async fn send(&self, line: String) -> Result<(), ChatError> {
        let Some(sender) = &self.to_server else {
            return Err(ChatError::SessionClosed);
        };
        sender.send(line).await.map_err(|_| ChatError::SessionClosed)
    }

    /// Stop the connection.
    ///
    /// Closing the outgoing channel wakes the connection task, which shuts
    /// the socket down and exits. Idempotent.
    pub fn stop(&mut self) {
        drop(self.to_server.take());
    }
}

impl Drop for ConnectedClient {
    fn drop(&mut self) {
        self.stop();
    }
}

/// Connect to the chat server and perform the handshake.
///
/// Establishes the stream socket (honoring `config.connect_timeout` if set),
/// writes the raw nickname bytes, and spawns the connection task. The
/// handshake is unframed and unacknowledged, so delivery cannot be
/// confirmed.
///
/// # Errors
///
/// Returns a tagged [`ChatError`] (`Refused`, `Timeout`, `Reset`, `Io`) if
/// the socket cannot be established or the handshake write fails.
pub async fn connect(config: &ChatConfig, nickname: &str) -> Result<ConnectedClient, ChatError> {
    let addr = config.addr();

    let mut stream = match config.connect_timeout {
        Some(deadline) => tokio::time::timeout(deadline, TcpStream::connect(&addr))
            .await
            .map_err(|_| ChatError::Timeout { elapsed: deadline })?
            .map_err(|e| connect_error(e, &addr))?,
        None => TcpStream::connect(&addr).await.map_err(|e| connect_error(e, &addr))?,
    };

    stream.write_all(wire::handshake(nickname)).await.map_err(ChatError::from)?;
    tracing::debug!(%addr, "connected and sent handshake");

    let (read_half, write_half) = stream.into_split();
    let (to_server_tx, to_server_rx) = mpsc::channel(CHANNEL_CAPACITY);
    let (from_server_tx, from_server_rx) = mpsc::channel(CHANNEL_CAPACITY);

    tokio::spawn(run_connection(
        read_half,
        write_half,
        to_server_rx,
        from_server_tx,
        config.recv_buffer,
    ));

    Ok(ConnectedClient { to_server: Some(to_server_tx), from_server: from_server_rx })
}

/// Map a connect-time `io::Error`, attaching the address to refusals.
fn connect_error(err: io::Error, addr: &str) -> ChatError {
    if err.kind() == io::ErrorKind::ConnectionRefused {
        ChatError::Refused { addr: addr.to_string() }
    } else {
        err.into()
    }
}

/// Own the socket: forward outgoing lines, decode incoming reads.
///
/// Exits when the socket fails, the peer closes, the `ConnectedClient` is
/// stopped, or the event receiver is dropped. The write half is shut down on
/// every exit path.
async fn run_connection(
    mut read_half: OwnedReadHalf,
    mut write_half: OwnedWriteHalf,
    mut to_server: mpsc::Receiver<String>,
    from_server: mpsc::Sender<ServerEvent>,
    recv_buffer: usize,
) {
    let mut buf = vec![0u8; recv_buffer.max(1)];

    loop {
        tokio::select! {
            read_result = read_half.read(&mut buf) => {
                match read_result {
                    Ok(0) => {
                        let reason = ChatError::Reset("connection closed by server".to_string());
                        let _ = from_server.send(ServerEvent::Closed(reason)).await;
                        break;
                    },
                    Ok(n) => {
                        let event = match std::str::from_utf8(&buf[..n]) {
                            Ok(text) => ServerEvent::Line(text.to_string()),
                            Err(_) => ServerEvent::Garbled,
                        };
                        if from_server.send(event).await.is_err() {
                            break;
                        }
                    },
                    Err(e) => {
                        tracing::warn!("receive failed: {e}");
                        let _ = from_server.send(ServerEvent::Closed(e.into())).await;
                        break;
                    },
                }
            }

            maybe_line = to_server.recv() => {
                match maybe_line {
                    Some(line) => {
                        if let Err(e) = write_half.write_all(line.as_bytes()).await {
                            tracing::warn!("send failed: {e}");
                            let _ = from_server.send(ServerEvent::Closed(e.into())).await;
                            break;
                        }
                    },
                    // Client handle stopped: user left the chat.
                    None => break,
                }
            }
        }
    }

    if let Err(e) = write_half.shutdown().await {
        tracing::debug!("socket shutdown: {e}");
    }
}
