//! Errors raised while bringing a libzmq socket up.

use thiserror::Error;

/// Failure while creating, connecting or subscribing a socket.
///
/// These happen before any message is received and are always fatal.
#[derive(Error, Debug)]
pub enum SetupError {
    /// `zmq_socket` failed
    #[error("Could not create ZMQ socket: {0}")]
    CreateSocket(#[source] zmq::Error),

    /// `zmq_connect` failed
    #[error("Could not connect to endpoint {endpoint}: {source}")]
    Connect {
        /// Endpoint as given by the caller.
        endpoint: String,
        /// Underlying libzmq error.
        #[source]
        source: zmq::Error,
    },

    /// Setting `ZMQ_SUBSCRIBE` failed
    #[error("Could not subscribe: {0}")]
    Subscribe(#[source] zmq::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn setup_messages_name_the_step() {
        let err = SetupError::Connect {
            endpoint: "tcp://nowhere".into(),
            source: zmq::Error::EINVAL,
        };
        assert!(err
            .to_string()
            .starts_with("Could not connect to endpoint tcp://nowhere: "));

        let err = SetupError::Subscribe(zmq::Error::ETERM);
        assert!(err.to_string().starts_with("Could not subscribe: "));

        let err = SetupError::CreateSocket(zmq::Error::EINVAL);
        assert!(err.to_string().starts_with("Could not create ZMQ socket: "));
    }
}
