//! zretry core
//!
//! This crate contains the transport-agnostic building blocks:
//! - Interruption vs failure classification (`error`)
//! - Blocking / non-blocking operation selector (`flags`)
//! - Outbound payload shapes (`payload`)
//! - The socket trait the retry layer drives (`socket`)
//! - The retry policy itself (`retry`)
//! - A scripted socket for tests and benches (`mock`, behind the `mock` feature)

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod flags;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod payload;
pub mod retry;
pub mod socket;

pub use error::{is_retryable, Classify, ErrorClass};
pub use flags::Flags;
pub use payload::Payload;
pub use socket::MessageSocket;

/// Convenient imports for code that drives sockets through the retry policy.
// Keep it minimal to avoid API lock-in.
pub mod prelude {
    pub use crate::error::{Classify, ErrorClass};
    pub use crate::flags::Flags;
    pub use crate::payload::Payload;
    pub use crate::retry;
    pub use crate::socket::MessageSocket;
}
