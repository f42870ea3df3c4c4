//! Interruption-absorbing wrappers around every socket operation.
//!
//! Each function issues one underlying call, and if that call reports an
//! interruption (would block, or interrupted by a signal) issues it again
//! with the same arguments. It returns as soon as the call succeeds or fails
//! with any other error, which is handed back unchanged.
//!
//! There is no backoff, no delay and no attempt limit: both interruption
//! conditions clear in bounded real time (a readiness change or the end of a
//! signal handler), and sleeping would only add latency. With
//! [`Flags::DontWait`] this turns into a busy loop while the socket is idle.
//! A blocking call is allowed to block forever; timeouts belong on the socket
//! itself.

use bytes::Bytes;
use tracing::trace;

use crate::error::Classify;
use crate::flags::Flags;
use crate::payload::Payload;
use crate::socket::MessageSocket;

/// Run `op` until it produces a terminal outcome.
///
/// This is the single loop behind every wrapper in this module. `op` must
/// issue the same underlying call each time it is invoked.
pub fn until_terminal<T, E, F>(mut op: F) -> Result<T, E>
where
    E: Classify,
    F: FnMut() -> Result<T, E>,
{
    loop {
        match op() {
            Err(e) if e.classify().is_retryable() => {
                trace!("socket operation interrupted, retrying");
            }
            outcome => return outcome,
        }
    }
}

/// Receive one frame as raw bytes.
pub fn recv_bytes<S>(sock: &mut S, flags: Flags) -> Result<Bytes, S::Error>
where
    S: MessageSocket + ?Sized,
{
    until_terminal(|| sock.recv_bytes(flags))
}

/// Receive one frame as text.
pub fn recv_string<S>(sock: &mut S, flags: Flags) -> Result<String, S::Error>
where
    S: MessageSocket + ?Sized,
{
    until_terminal(|| sock.recv_string(flags))
}

/// Receive one multipart message as raw frames.
pub fn recv_multipart<S>(sock: &mut S, flags: Flags) -> Result<Vec<Bytes>, S::Error>
where
    S: MessageSocket + ?Sized,
{
    until_terminal(|| sock.recv_multipart(flags))
}

/// Receive one multipart message as text frames.
pub fn recv_multipart_strings<S>(sock: &mut S, flags: Flags) -> Result<Vec<String>, S::Error>
where
    S: MessageSocket + ?Sized,
{
    until_terminal(|| sock.recv_multipart_strings(flags))
}

/// Send one binary frame.
pub fn send_bytes<S>(sock: &mut S, data: &[u8], flags: Flags) -> Result<(), S::Error>
where
    S: MessageSocket + ?Sized,
{
    until_terminal(|| sock.send_frame(data, flags))
}

/// Send one text frame.
pub fn send_string<S>(sock: &mut S, text: &str, flags: Flags) -> Result<(), S::Error>
where
    S: MessageSocket + ?Sized,
{
    send_bytes(sock, text.as_bytes(), flags)
}

/// Send binary frames as one multipart message.
pub fn send_multipart<S>(sock: &mut S, frames: &[Bytes], flags: Flags) -> Result<(), S::Error>
where
    S: MessageSocket + ?Sized,
{
    let frames: Vec<&[u8]> = frames.iter().map(Bytes::as_ref).collect();
    until_terminal(|| sock.send_multipart(&frames, flags))
}

/// Send text frames as one multipart message.
pub fn send_multipart_strings<S, T>(sock: &mut S, parts: &[T], flags: Flags) -> Result<(), S::Error>
where
    S: MessageSocket + ?Sized,
    T: AsRef<str>,
{
    let frames: Vec<&[u8]> = parts.iter().map(|p| p.as_ref().as_bytes()).collect();
    until_terminal(|| sock.send_multipart(&frames, flags))
}

/// Send any [`Payload`] shape.
///
/// Single-frame payloads go through [`MessageSocket::send_frame`], multipart
/// ones through [`MessageSocket::send_multipart`].
pub fn send<S>(sock: &mut S, payload: &Payload, flags: Flags) -> Result<(), S::Error>
where
    S: MessageSocket + ?Sized,
{
    trace!(frames = payload.frame_count(), "sending payload");
    match payload {
        Payload::Bytes(b) => send_bytes(sock, b, flags),
        Payload::Text(s) => send_string(sock, s, flags),
        Payload::Multipart(_) | Payload::MultipartText(_) => {
            let frames = payload.frames();
            until_terminal(|| sock.send_multipart(&frames, flags))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn until_terminal_absorbs_interruptions() {
        let mut outcomes = vec![
            Ok(7),
            Err(io::Error::from(io::ErrorKind::Interrupted)),
            Err(io::Error::from(io::ErrorKind::WouldBlock)),
        ];
        let mut calls = 0;

        let result = until_terminal(|| {
            calls += 1;
            outcomes.pop().expect("script exhausted")
        });

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls, 3);
    }

    #[test]
    fn until_terminal_stops_on_first_failure() {
        let mut calls = 0;

        let result: Result<(), io::Error> = until_terminal(|| {
            calls += 1;
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        });

        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::BrokenPipe);
        assert_eq!(calls, 1);
    }
}
