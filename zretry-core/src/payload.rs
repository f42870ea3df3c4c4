//! Outbound payload shapes.
//!
//! A send is either a single frame or a multipart message, and either raw
//! bytes or text. [`Payload`] keeps these four shapes apart at compile time
//! instead of funnelling them through one loosely typed argument list.

use bytes::Bytes;

/// A message to send, in one of the four supported shapes.
///
/// # Examples
///
/// ```
/// use zretry_core::Payload;
/// use bytes::Bytes;
///
/// let single = Payload::from("hello");
/// assert_eq!(single.frames(), vec![&b"hello"[..]]);
///
/// let multi = Payload::from(vec![Bytes::from_static(b"topic"), Bytes::from_static(b"body")]);
/// assert_eq!(multi.frame_count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    /// One binary frame.
    Bytes(Bytes),
    /// One text frame.
    Text(String),
    /// Several binary frames sent as one message.
    Multipart(Vec<Bytes>),
    /// Several text frames sent as one message.
    MultipartText(Vec<String>),
}

impl Payload {
    /// Number of frames this payload puts on the wire.
    #[must_use]
    pub fn frame_count(&self) -> usize {
        match self {
            Self::Bytes(_) | Self::Text(_) => 1,
            Self::Multipart(frames) => frames.len(),
            Self::MultipartText(parts) => parts.len(),
        }
    }

    /// Borrow every frame as a byte slice, in order.
    #[must_use]
    pub fn frames(&self) -> Vec<&[u8]> {
        match self {
            Self::Bytes(b) => vec![b.as_ref()],
            Self::Text(s) => vec![s.as_bytes()],
            Self::Multipart(frames) => frames.iter().map(Bytes::as_ref).collect(),
            Self::MultipartText(parts) => parts.iter().map(String::as_bytes).collect(),
        }
    }
}

impl From<Bytes> for Payload {
    fn from(b: Bytes) -> Self {
        Self::Bytes(b)
    }
}

impl From<Vec<u8>> for Payload {
    fn from(v: Vec<u8>) -> Self {
        Self::Bytes(Bytes::from(v))
    }
}

impl From<&'static [u8]> for Payload {
    fn from(b: &'static [u8]) -> Self {
        Self::Bytes(Bytes::from_static(b))
    }
}

impl From<String> for Payload {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Payload {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Vec<Bytes>> for Payload {
    fn from(frames: Vec<Bytes>) -> Self {
        Self::Multipart(frames)
    }
}

impl From<Vec<String>> for Payload {
    fn from(parts: Vec<String>) -> Self {
        Self::MultipartText(parts)
    }
}
