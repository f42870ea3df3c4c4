//! Operation-mode selector for socket calls.

use std::fmt;

/// Blocking vs non-blocking selector passed to every socket operation.
///
/// Corresponds to the `flags` argument of `zmq_send` / `zmq_recv`: `Block` is
/// `0`, `DontWait` is `ZMQ_DONTWAIT`. The retry policy forwards the same value
/// on every attempt of a logical call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Flags {
    /// Park the calling thread until the operation can complete.
    #[default]
    Block,

    /// Return immediately with "would block" if the socket is not ready.
    DontWait,
}

impl Flags {
    /// Selector for a blocking (`true`) or non-blocking (`false`) call.
    #[must_use]
    #[inline]
    pub const fn from_blocking(block: bool) -> Self {
        if block {
            Self::Block
        } else {
            Self::DontWait
        }
    }

    /// Check if this selector asks for a blocking call.
    #[must_use]
    #[inline]
    pub const fn is_blocking(self) -> bool {
        matches!(self, Self::Block)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Block => f.write_str("BLOCK"),
            Self::DontWait => f.write_str("DONTWAIT"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_blocking() {
        assert_eq!(Flags::default(), Flags::Block);
        assert!(Flags::default().is_blocking());
    }

    #[test]
    fn from_blocking_maps_both_ways() {
        assert_eq!(Flags::from_blocking(true), Flags::Block);
        assert_eq!(Flags::from_blocking(false), Flags::DontWait);
        assert!(!Flags::DontWait.is_blocking());
    }
}
