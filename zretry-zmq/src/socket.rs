//! `MessageSocket` over a libzmq socket.

use bytes::Bytes;
use tracing::debug;
use zretry_core::{Flags, MessageSocket};

use crate::error::SetupError;

/// Map the operation-mode selector onto libzmq send/recv flags.
#[inline]
#[must_use]
pub const fn raw_flags(flags: Flags) -> i32 {
    if flags.is_blocking() {
        0
    } else {
        zmq::DONTWAIT
    }
}

/// A libzmq socket driven through [`MessageSocket`].
///
/// Every call maps onto exactly one `zmq_recv`/`zmq_send` sequence and returns
/// `zmq::Error` untouched, so `EAGAIN` and `EINTR` reach the retry policy.
///
/// Text operations decode frames lossily: invalid UTF-8 sequences are
/// replaced with U+FFFD instead of failing the receive, so text output is
/// not byte-exact for such frames. Use the binary operations for that.
///
/// ## Example
///
/// ```rust,no_run
/// use zretry_core::{retry, Flags};
/// use zretry_zmq::ZmqSocket;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let mut sock = ZmqSocket::subscriber("tcp://127.0.0.1:5555")?;
///
/// loop {
///     let line = retry::recv_string(&mut sock, Flags::Block)?;
///     println!("{line}");
/// }
/// # }
/// ```
pub struct ZmqSocket {
    inner: zmq::Socket,
}

impl ZmqSocket {
    /// Create a SUB socket in a fresh context, connect it to `endpoint` and
    /// subscribe to every topic.
    pub fn subscriber(endpoint: &str) -> Result<Self, SetupError> {
        // The socket keeps its own handle on the context.
        Self::subscriber_in(&zmq::Context::new(), endpoint)
    }

    /// Like [`ZmqSocket::subscriber`], but inside an existing context.
    ///
    /// Required for `inproc://` endpoints, which only resolve within the
    /// context that bound them.
    pub fn subscriber_in(ctx: &zmq::Context, endpoint: &str) -> Result<Self, SetupError> {
        let sock = ctx.socket(zmq::SUB).map_err(SetupError::CreateSocket)?;

        sock.connect(endpoint).map_err(|source| SetupError::Connect {
            endpoint: endpoint.to_owned(),
            source,
        })?;
        debug!(endpoint, "SUB socket connected");

        sock.set_subscribe(b"").map_err(SetupError::Subscribe)?;
        debug!("subscribed to all topics");

        Ok(Self::from_socket(sock))
    }

    /// Wrap a socket that is already connected and configured.
    #[must_use]
    pub fn from_socket(inner: zmq::Socket) -> Self {
        Self { inner }
    }
}

impl From<zmq::Socket> for ZmqSocket {
    fn from(inner: zmq::Socket) -> Self {
        Self::from_socket(inner)
    }
}

fn lossy(frame: Vec<u8>) -> String {
    String::from_utf8(frame).unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
}

impl MessageSocket for ZmqSocket {
    type Error = zmq::Error;

    fn recv_bytes(&mut self, flags: Flags) -> Result<Bytes, zmq::Error> {
        self.inner.recv_bytes(raw_flags(flags)).map(Bytes::from)
    }

    fn recv_string(&mut self, flags: Flags) -> Result<String, zmq::Error> {
        self.inner.recv_bytes(raw_flags(flags)).map(lossy)
    }

    fn recv_multipart(&mut self, flags: Flags) -> Result<Vec<Bytes>, zmq::Error> {
        let frames = self.inner.recv_multipart(raw_flags(flags))?;
        Ok(frames.into_iter().map(Bytes::from).collect())
    }

    fn recv_multipart_strings(&mut self, flags: Flags) -> Result<Vec<String>, zmq::Error> {
        let frames = self.inner.recv_multipart(raw_flags(flags))?;
        Ok(frames.into_iter().map(lossy).collect())
    }

    fn send_frame(&mut self, frame: &[u8], flags: Flags) -> Result<(), zmq::Error> {
        self.inner.send(frame, raw_flags(flags))
    }

    fn send_multipart(&mut self, frames: &[&[u8]], flags: Flags) -> Result<(), zmq::Error> {
        self.inner.send_multipart(frames.iter().copied(), raw_flags(flags))
    }
}
