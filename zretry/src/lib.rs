//! # zretry
//!
//! Interruption-safe send/receive over message sockets, plus a streaming
//! SUB consumer.
//!
//! ## Architecture
//!
//! - **`zretry-core`**: error classification, the `MessageSocket` trait and
//!   the retry policy (transport-agnostic)
//! - **`zretry-zmq`**: libzmq-backed `MessageSocket` and SUB setup
//! - **`zretry`**: consumer, CLI and public API surface (this crate)
//!
//! ## Transports (opt-in via features)
//!
//! - **`zmq`** (default) - libzmq sockets and the `zmq-subscribe` binary
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! # #[cfg(feature = "zmq")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use zretry::prelude::*;
//! use zretry::zmq::ZmqSocket;
//!
//! let mut sock = ZmqSocket::subscriber("tcp://127.0.0.1:5556")?;
//!
//! // EAGAIN and EINTR never come back out of these calls.
//! let frames = retry::recv_multipart(&mut sock, Flags::DontWait)?;
//! println!("{} frames", frames.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Streaming to stdout
//!
//! ```rust,no_run
//! # #[cfg(feature = "zmq")]
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! use zretry::consumer::{Consumer, ConsumerConfig};
//! use zretry::zmq::ZmqSocket;
//!
//! let sock = ZmqSocket::subscriber("tcp://127.0.0.1:5556")?;
//! let config = ConsumerConfig::new(true, true, false);
//! let mut consumer = Consumer::new(sock, std::io::stdout().lock(), config);
//!
//! // Only returns on a fatal error.
//! let err = consumer.run();
//! eprintln!("Fatal: {err}");
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cli;
pub mod consumer;
/// Tracing setup for the binary, tests and benches.
pub mod dev_tracing;

pub use bytes::Bytes;
pub use zretry_core::{retry, Classify, ErrorClass, Flags, MessageSocket, Payload};

/// libzmq transport.
#[cfg(feature = "zmq")]
pub mod zmq {
    pub use zretry_zmq::{raw_flags, SetupError, ZmqSocket};
}

/// Convenient imports.
///
/// ```rust
/// use zretry::prelude::*;
///
/// // Now you have:
/// // - retry, Flags, Payload, MessageSocket, Classify, ErrorClass
/// // - Consumer, ConsumerConfig, ReceiveMode
/// ```
pub mod prelude {
    pub use crate::consumer::{ConsumeError, Consumer, ConsumerConfig, ReceiveMode};
    pub use bytes::Bytes;
    pub use zretry_core::prelude::*;
}
