//! Integration tests against real libzmq sockets.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use bytes::Bytes;
use zretry_core::{retry, Classify, ErrorClass, Flags, MessageSocket, Payload};
use zretry_zmq::{SetupError, ZmqSocket};

/// Keeps publishing the same message until dropped.
///
/// SUB sockets only see messages published after their subscription reached
/// the publisher, so a single send would race the subscriber.
struct Publisher {
    stop: Arc<AtomicBool>,
    handle: Option<thread::JoinHandle<()>>,
}

impl Publisher {
    fn spawn(sock: zmq::Socket, frames: Vec<&'static [u8]>) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();
        let handle = thread::spawn(move || {
            while !flag.load(Ordering::Relaxed) {
                sock.send_multipart(frames.iter().copied(), 0).unwrap();
                thread::sleep(Duration::from_millis(5));
            }
        });
        Self {
            stop,
            handle: Some(handle),
        }
    }
}

impl Drop for Publisher {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

fn bound_pub(ctx: &zmq::Context, endpoint: &str) -> zmq::Socket {
    let sock = ctx.socket(zmq::PUB).unwrap();
    sock.set_linger(0).unwrap();
    sock.bind(endpoint).unwrap();
    sock
}

#[test]
fn test_recv_string_over_inproc() {
    let ctx = zmq::Context::new();
    let endpoint = "inproc://zretry-recv-string";
    let _publisher = Publisher::spawn(bound_pub(&ctx, endpoint), vec![&b"hello"[..]]);

    let mut sub = ZmqSocket::subscriber_in(&ctx, endpoint).unwrap();
    let msg = retry::recv_string(&mut sub, Flags::Block).unwrap();

    assert_eq!(msg, "hello");
}

#[test]
fn test_nonblocking_multipart_spins_until_ready() {
    let ctx = zmq::Context::new();
    let endpoint = "inproc://zretry-dontwait-multipart";
    let _publisher = Publisher::spawn(
        bound_pub(&ctx, endpoint),
        vec![&b"topic"[..], &b"body"[..]],
    );

    let mut sub = ZmqSocket::subscriber_in(&ctx, endpoint).unwrap();
    let frames = retry::recv_multipart(&mut sub, Flags::DontWait).unwrap();

    assert_eq!(
        frames,
        vec![Bytes::from_static(b"topic"), Bytes::from_static(b"body")]
    );
}

#[test]
fn test_idle_dontwait_reports_retryable_eagain() {
    let ctx = zmq::Context::new();
    let endpoint = "inproc://zretry-idle";
    let _pub_sock = bound_pub(&ctx, endpoint);

    let mut sub = ZmqSocket::subscriber_in(&ctx, endpoint).unwrap();
    // A single raw call, not through the policy.
    let err = sub.recv_bytes(Flags::DontWait).unwrap_err();

    assert_eq!(err, zmq::Error::EAGAIN);
    assert_eq!(err.classify(), ErrorClass::Retryable);
}

#[test]
fn test_unsupported_operation_is_terminal() {
    let ctx = zmq::Context::new();
    let mut pub_sock = ZmqSocket::from_socket(bound_pub(&ctx, "inproc://zretry-recv-on-pub"));

    // PUB sockets cannot receive; libzmq reports ENOTSUP.
    let err = retry::recv_bytes(&mut pub_sock, Flags::DontWait).unwrap_err();

    assert_eq!(err, zmq::Error::ENOTSUP);
    assert_eq!(err.classify(), ErrorClass::Terminal);
}

#[test]
fn test_bad_endpoint_is_setup_error() {
    let err = ZmqSocket::subscriber("not-an-endpoint").err().unwrap();

    match err {
        SetupError::Connect { endpoint, source } => {
            assert_eq!(endpoint, "not-an-endpoint");
            assert_eq!(source.classify(), ErrorClass::Terminal);
        }
        other => panic!("expected connect error, got {other}"),
    }
}

#[test]
fn test_subscriber_over_tcp() {
    let port = portpicker::pick_unused_port().expect("no free port");
    let pub_ctx = zmq::Context::new();
    let _publisher = Publisher::spawn(
        bound_pub(&pub_ctx, &format!("tcp://127.0.0.1:{port}")),
        vec![&b"over tcp"[..]],
    );

    let mut sub = ZmqSocket::subscriber(&format!("tcp://127.0.0.1:{port}")).unwrap();
    let msg = retry::recv_bytes(&mut sub, Flags::Block).unwrap();

    assert_eq!(msg, Bytes::from_static(b"over tcp"));
}

#[test]
fn test_send_payload_push_pull() {
    let ctx = zmq::Context::new();
    let endpoint = "inproc://zretry-push-pull";
    let pull = ctx.socket(zmq::PULL).unwrap();
    pull.bind(endpoint).unwrap();
    let push = ctx.socket(zmq::PUSH).unwrap();
    push.connect(endpoint).unwrap();

    let mut push = ZmqSocket::from(push);
    let mut pull = ZmqSocket::from(pull);

    let payload = Payload::from(vec!["first".to_string(), "second".to_string()]);
    retry::send(&mut push, &payload, Flags::DontWait).unwrap();
    retry::send_string(&mut push, "single", Flags::Block).unwrap();

    let parts = retry::recv_multipart_strings(&mut pull, Flags::Block).unwrap();
    assert_eq!(parts, vec!["first", "second"]);

    let single = retry::recv_string(&mut pull, Flags::DontWait).unwrap();
    assert_eq!(single, "single");
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let ctx = zmq::Context::new();
    let endpoint = "inproc://zretry-lossy";
    let pull = ctx.socket(zmq::PULL).unwrap();
    pull.bind(endpoint).unwrap();
    let push = ctx.socket(zmq::PUSH).unwrap();
    push.connect(endpoint).unwrap();

    let mut push = ZmqSocket::from(push);
    let mut pull = ZmqSocket::from(pull);
    retry::send_bytes(&mut push, &[b'o', b'k', 0xFF], Flags::Block).unwrap();

    assert_eq!(retry::recv_string(&mut pull, Flags::Block).unwrap(), "ok\u{FFFD}");
}
