//! Scripted in-memory socket for tests and benchmarks.
//!
//! [`ScriptedSocket`] replays a queue of outcomes, one per underlying call,
//! and records every call it receives together with its arguments. Once the
//! script runs out every call fails with [`MockError::Exhausted`], which is
//! terminal, so a receive loop driven by it always ends.

use std::collections::VecDeque;

use bytes::Bytes;
use thiserror::Error;

use crate::error::{Classify, ErrorClass};
use crate::flags::Flags;
use crate::socket::MessageSocket;

/// Errors a [`ScriptedSocket`] can be told to report.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MockError {
    /// Resource temporarily unavailable (EAGAIN).
    #[error("Resource temporarily unavailable")]
    WouldBlock,

    /// Interrupted system call (EINTR).
    #[error("Interrupted system call")]
    Interrupted,

    /// Socket closed underneath the caller.
    #[error("Socket closed")]
    Closed,

    /// Protocol violation reported by the transport.
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// The script has no outcome left for this call.
    #[error("Script exhausted")]
    Exhausted,
}

impl Classify for MockError {
    fn classify(&self) -> ErrorClass {
        match self {
            Self::WouldBlock | Self::Interrupted => ErrorClass::Retryable,
            _ => ErrorClass::Terminal,
        }
    }
}

/// Successful outcome of one scripted call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Result of `recv_bytes`.
    Bytes(Bytes),
    /// Result of `recv_string`.
    Text(String),
    /// Result of `recv_multipart`.
    Multipart(Vec<Bytes>),
    /// Result of `recv_multipart_strings`.
    MultipartText(Vec<String>),
    /// Result of either send operation.
    Sent,
}

/// One call received by a [`ScriptedSocket`], with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `recv_bytes(flags)`
    RecvBytes(Flags),
    /// `recv_string(flags)`
    RecvString(Flags),
    /// `recv_multipart(flags)`
    RecvMultipart(Flags),
    /// `recv_multipart_strings(flags)`
    RecvMultipartStrings(Flags),
    /// `send_frame(frame, flags)`
    SendFrame {
        /// Frame as passed in.
        frame: Bytes,
        /// Selector as passed in.
        flags: Flags,
    },
    /// `send_multipart(frames, flags)`
    SendMultipart {
        /// Frames as passed in.
        frames: Vec<Bytes>,
        /// Selector as passed in.
        flags: Flags,
    },
}

/// A [`MessageSocket`] that replays a fixed script.
///
/// Only compiled for this crate's own tests or with the `mock` feature.
///
/// # Panics
///
/// An operation panics if the next scripted reply has the wrong shape for it,
/// e.g. [`Reply::Sent`] handed to a receive.
///
/// # Example
///
/// ```
/// use zretry_core::mock::{MockError, Reply, ScriptedSocket};
/// use zretry_core::{retry, Flags};
///
/// let mut sock = ScriptedSocket::new()
///     .then_err(MockError::Interrupted)
///     .then_ok(Reply::Text("hello".into()));
///
/// assert_eq!(retry::recv_string(&mut sock, Flags::Block).unwrap(), "hello");
/// assert_eq!(sock.call_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct ScriptedSocket {
    script: VecDeque<Result<Reply, MockError>>,
    calls: Vec<Call>,
}

impl ScriptedSocket {
    /// Create a socket with an empty script.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a successful outcome.
    #[must_use]
    pub fn then_ok(mut self, reply: Reply) -> Self {
        self.script.push_back(Ok(reply));
        self
    }

    /// Queue a failed outcome.
    #[must_use]
    pub fn then_err(mut self, err: MockError) -> Self {
        self.script.push_back(Err(err));
        self
    }

    /// Queue `n` copies of the same failure.
    #[must_use]
    pub fn then_err_n(mut self, err: MockError, n: usize) -> Self {
        self.script.extend(std::iter::repeat(Err(err)).take(n));
        self
    }

    /// Every call received so far, oldest first.
    #[must_use]
    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Number of calls received so far.
    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.len()
    }

    /// Number of scripted outcomes not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }

    fn next(&mut self, call: Call) -> Result<Reply, MockError> {
        self.calls.push(call);
        self.script.pop_front().unwrap_or(Err(MockError::Exhausted))
    }
}

/// Scripts are written by hand; a shape mismatch is a bug in the test.
fn mismatch(op: &str, reply: &Reply) -> ! {
    panic!("scripted reply {reply:?} does not fit {op}")
}

impl MessageSocket for ScriptedSocket {
    type Error = MockError;

    fn recv_bytes(&mut self, flags: Flags) -> Result<Bytes, MockError> {
        match self.next(Call::RecvBytes(flags))? {
            Reply::Bytes(b) => Ok(b),
            other => mismatch("recv_bytes", &other),
        }
    }

    fn recv_string(&mut self, flags: Flags) -> Result<String, MockError> {
        match self.next(Call::RecvString(flags))? {
            Reply::Text(s) => Ok(s),
            other => mismatch("recv_string", &other),
        }
    }

    fn recv_multipart(&mut self, flags: Flags) -> Result<Vec<Bytes>, MockError> {
        match self.next(Call::RecvMultipart(flags))? {
            Reply::Multipart(frames) => Ok(frames),
            other => mismatch("recv_multipart", &other),
        }
    }

    fn recv_multipart_strings(&mut self, flags: Flags) -> Result<Vec<String>, MockError> {
        match self.next(Call::RecvMultipartStrings(flags))? {
            Reply::MultipartText(parts) => Ok(parts),
            other => mismatch("recv_multipart_strings", &other),
        }
    }

    fn send_frame(&mut self, frame: &[u8], flags: Flags) -> Result<(), MockError> {
        let call = Call::SendFrame {
            frame: Bytes::copy_from_slice(frame),
            flags,
        };
        match self.next(call)? {
            Reply::Sent => Ok(()),
            other => mismatch("send_frame", &other),
        }
    }

    fn send_multipart(&mut self, frames: &[&[u8]], flags: Flags) -> Result<(), MockError> {
        let call = Call::SendMultipart {
            frames: frames.iter().map(|f| Bytes::copy_from_slice(f)).collect(),
            flags,
        };
        match self.next(call)? {
            Reply::Sent => Ok(()),
            other => mismatch("send_multipart", &other),
        }
    }
}
