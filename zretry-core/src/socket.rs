//! Trait-based socket API consumed by the retry policy.
//!
//! The retry layer never creates or configures a socket; it only issues
//! single operations on a handle that is already connected. Anything that
//! can perform the six operations below can be driven by it, which keeps the
//! policy transport-agnostic and lets tests substitute a scripted mock.

use bytes::Bytes;

use crate::error::Classify;
use crate::flags::Flags;

/// A connected, configured message socket.
///
/// Each method performs exactly one underlying call and reports its outcome
/// verbatim, including interruption conditions. Use the functions in
/// [`crate::retry`] to get calls that only ever return a terminal outcome.
///
/// # Examples
///
/// ```
/// use bytes::Bytes;
/// use std::io;
/// use zretry_core::{retry, Flags, MessageSocket};
///
/// /// Socket that always has the same message ready.
/// struct Echo(Bytes);
///
/// impl MessageSocket for Echo {
///     type Error = io::Error;
///
///     fn recv_bytes(&mut self, _: Flags) -> io::Result<Bytes> {
///         Ok(self.0.clone())
///     }
///     fn recv_string(&mut self, _: Flags) -> io::Result<String> {
///         Ok(String::from_utf8_lossy(&self.0).into_owned())
///     }
///     fn recv_multipart(&mut self, _: Flags) -> io::Result<Vec<Bytes>> {
///         Ok(vec![self.0.clone()])
///     }
///     fn recv_multipart_strings(&mut self, _: Flags) -> io::Result<Vec<String>> {
///         Ok(vec![String::from_utf8_lossy(&self.0).into_owned()])
///     }
///     fn send_frame(&mut self, _: &[u8], _: Flags) -> io::Result<()> {
///         Ok(())
///     }
///     fn send_multipart(&mut self, _: &[&[u8]], _: Flags) -> io::Result<()> {
///         Ok(())
///     }
/// }
///
/// let mut sock = Echo(Bytes::from_static(b"ping"));
/// assert_eq!(retry::recv_bytes(&mut sock, Flags::Block).unwrap(), "ping");
/// ```
pub trait MessageSocket {
    /// Error reported by the underlying transport.
    type Error: Classify;

    /// Receive one frame as raw bytes.
    fn recv_bytes(&mut self, flags: Flags) -> Result<Bytes, Self::Error>;

    /// Receive one frame as text.
    fn recv_string(&mut self, flags: Flags) -> Result<String, Self::Error>;

    /// Receive every frame of one multipart message as raw bytes.
    fn recv_multipart(&mut self, flags: Flags) -> Result<Vec<Bytes>, Self::Error>;

    /// Receive every frame of one multipart message as text.
    fn recv_multipart_strings(&mut self, flags: Flags) -> Result<Vec<String>, Self::Error>;

    /// Send one frame.
    fn send_frame(&mut self, frame: &[u8], flags: Flags) -> Result<(), Self::Error>;

    /// Send `frames` as a single multipart message.
    fn send_multipart(&mut self, frames: &[&[u8]], flags: Flags) -> Result<(), Self::Error>;
}

impl<S: MessageSocket + ?Sized> MessageSocket for &mut S {
    type Error = S::Error;

    fn recv_bytes(&mut self, flags: Flags) -> Result<Bytes, Self::Error> {
        (**self).recv_bytes(flags)
    }

    fn recv_string(&mut self, flags: Flags) -> Result<String, Self::Error> {
        (**self).recv_string(flags)
    }

    fn recv_multipart(&mut self, flags: Flags) -> Result<Vec<Bytes>, Self::Error> {
        (**self).recv_multipart(flags)
    }

    fn recv_multipart_strings(&mut self, flags: Flags) -> Result<Vec<String>, Self::Error> {
        (**self).recv_multipart_strings(flags)
    }

    fn send_frame(&mut self, frame: &[u8], flags: Flags) -> Result<(), Self::Error> {
        (**self).send_frame(frame, flags)
    }

    fn send_multipart(&mut self, frames: &[&[u8]], flags: Flags) -> Result<(), Self::Error> {
        (**self).send_multipart(frames, flags)
    }
}
