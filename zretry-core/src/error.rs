//! Error classification for socket operations.
//!
//! Every error surfaced by a socket call is either an interruption (the call
//! did not complete and should simply be issued again) or a real failure.

use std::io;

/// Outcome class of a failed socket operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorClass {
    /// The operation would block, or was interrupted by a signal.
    Retryable,
    /// Anything else: closed socket, protocol error, invalid state, ...
    Terminal,
}

impl ErrorClass {
    /// Check if this class asks for the operation to be issued again.
    #[must_use]
    #[inline]
    pub const fn is_retryable(self) -> bool {
        matches!(self, Self::Retryable)
    }
}

/// Errors that can be sorted into [`ErrorClass`].
///
/// Implementations must be pure: the same error value always yields the
/// same class. Only "would block" and "interrupted" may be `Retryable`.
pub trait Classify {
    /// Classify this error.
    fn classify(&self) -> ErrorClass;
}

impl Classify for io::Error {
    fn classify(&self) -> ErrorClass {
        match self.kind() {
            io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => ErrorClass::Retryable,
            _ => ErrorClass::Terminal,
        }
    }
}

impl Classify for io::ErrorKind {
    fn classify(&self) -> ErrorClass {
        match self {
            io::ErrorKind::WouldBlock | io::ErrorKind::Interrupted => ErrorClass::Retryable,
            _ => ErrorClass::Terminal,
        }
    }
}

/// libzmq reports interruptions as `EAGAIN` and `EINTR` errnos.
#[cfg(feature = "zmq")]
impl Classify for zmq::Error {
    fn classify(&self) -> ErrorClass {
        match self {
            zmq::Error::EAGAIN | zmq::Error::EINTR => ErrorClass::Retryable,
            _ => ErrorClass::Terminal,
        }
    }
}

/// Returns `true` if `err` is an interruption rather than a failure.
#[must_use]
pub fn is_retryable<E: Classify + ?Sized>(err: &E) -> bool {
    err.classify().is_retryable()
}
