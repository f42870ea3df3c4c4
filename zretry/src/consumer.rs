//! Streaming message consumer.
//!
//! Pulls one message at a time through the retry policy and writes it to an
//! output sink, in a receive mode fixed at construction time.

use std::fmt;
use std::io::{self, Write};

use thiserror::Error;
use tracing::{debug, error};
use zretry_core::{retry, Flags, MessageSocket};

/// How each message is received and rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReceiveMode {
    /// One frame, written raw with no separator.
    #[default]
    Binary,
    /// One frame as text, followed by a newline.
    Text,
    /// Every frame of a multipart message, written raw back to back.
    MultipartBinary,
    /// Every frame of a multipart message as text, each followed by a newline.
    MultipartText,
}

impl ReceiveMode {
    /// Pick the mode for a `(multipart, text)` pair of switches.
    #[must_use]
    pub const fn new(multipart: bool, text: bool) -> Self {
        match (multipart, text) {
            (false, false) => Self::Binary,
            (false, true) => Self::Text,
            (true, false) => Self::MultipartBinary,
            (true, true) => Self::MultipartText,
        }
    }
}

impl fmt::Display for ReceiveMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Binary => "binary",
            Self::Text => "text",
            Self::MultipartBinary => "multipart-binary",
            Self::MultipartText => "multipart-text",
        })
    }
}

/// Immutable consumer settings, chosen once before the loop starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ConsumerConfig {
    /// Receive and render mode.
    pub mode: ReceiveMode,
    /// Selector passed to every receive.
    pub flags: Flags,
}

impl ConsumerConfig {
    /// Build a config from the three command-line switches.
    #[must_use]
    pub const fn new(block: bool, text: bool, multipart: bool) -> Self {
        Self {
            mode: ReceiveMode::new(multipart, text),
            flags: Flags::from_blocking(block),
        }
    }
}

/// Fatal error that ends a [`Consumer`].
#[derive(Error, Debug)]
pub enum ConsumeError<E> {
    /// The socket reported a terminal error.
    #[error("Could not receive bytes: {0}")]
    Recv(#[source] E),

    /// The output sink failed.
    #[error("Could not write message: {0}")]
    Write(#[from] io::Error),
}

/// Receives messages from `S` and streams them to `W`.
///
/// The consumer has a single state: each call to
/// [`next_message`](Consumer::next_message) receives and writes exactly one
/// message, in receipt order. Any error ends it; interruptions never reach
/// it because the retry policy absorbs them.
///
/// # Example
///
/// ```
/// use zretry::consumer::{Consumer, ConsumerConfig};
/// use zretry_core::mock::{Reply, ScriptedSocket};
///
/// let sock = ScriptedSocket::new().then_ok(Reply::Text("hi".into()));
/// let mut consumer = Consumer::new(sock, Vec::new(), ConsumerConfig::new(true, true, false));
///
/// consumer.next_message().unwrap();
/// let (_, out) = consumer.into_parts();
/// assert_eq!(out, b"hi\n");
/// ```
pub struct Consumer<S, W> {
    socket: S,
    sink: W,
    config: ConsumerConfig,
}

impl<S, W> Consumer<S, W>
where
    S: MessageSocket,
    W: Write,
{
    /// Create a consumer over an already-connected socket.
    pub fn new(socket: S, sink: W, config: ConsumerConfig) -> Self {
        debug!(mode = %config.mode, flags = %config.flags, "consumer configured");
        Self {
            socket,
            sink,
            config,
        }
    }

    /// Settings this consumer was built with.
    #[must_use]
    pub fn config(&self) -> ConsumerConfig {
        self.config
    }

    /// Receive one message and write it to the sink, then flush.
    pub fn next_message(&mut self) -> Result<(), ConsumeError<S::Error>> {
        let flags = self.config.flags;

        match self.config.mode {
            ReceiveMode::Binary => {
                let msg = retry::recv_bytes(&mut self.socket, flags).map_err(ConsumeError::Recv)?;
                self.sink.write_all(&msg)?;
            }
            ReceiveMode::Text => {
                let msg = retry::recv_string(&mut self.socket, flags).map_err(ConsumeError::Recv)?;
                writeln!(self.sink, "{msg}")?;
            }
            ReceiveMode::MultipartBinary => {
                let parts =
                    retry::recv_multipart(&mut self.socket, flags).map_err(ConsumeError::Recv)?;
                for part in &parts {
                    self.sink.write_all(part)?;
                }
            }
            ReceiveMode::MultipartText => {
                let parts = retry::recv_multipart_strings(&mut self.socket, flags)
                    .map_err(ConsumeError::Recv)?;
                for part in &parts {
                    writeln!(self.sink, "{part}")?;
                }
            }
        }

        self.sink.flush()?;
        Ok(())
    }

    /// Consume messages until a fatal error, and return that error.
    pub fn run(&mut self) -> ConsumeError<S::Error>
    where
        S::Error: fmt::Display,
    {
        loop {
            if let Err(err) = self.next_message() {
                error!(%err, "consumer stopped");
                return err;
            }
        }
    }

    /// Take back the socket and the sink.
    pub fn into_parts(self) -> (S, W) {
        (self.socket, self.sink)
    }
}
