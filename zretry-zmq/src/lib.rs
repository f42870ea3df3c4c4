//! libzmq transport for zretry.
//!
//! Internal crate: use `zretry` with the `zmq` feature for the public API.
//!
//! Provides [`ZmqSocket`], a [`zretry_core::MessageSocket`] over a
//! `zmq::Socket`, and SUB socket setup for the subscriber tool.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod socket;

pub use error::SetupError;
pub use socket::{raw_flags, ZmqSocket};

// libzmq itself, for callers that build their own sockets.
pub use zmq;
