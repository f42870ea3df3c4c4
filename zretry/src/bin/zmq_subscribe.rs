//! Subscribe to a ZeroMQ endpoint and stream every message to stdout.
//!
//! ```text
//! zmq-subscribe tcp://127.0.0.1:5556 --text --multipart
//! ```

use std::fmt::Display;
use std::io;

use clap::Parser;
use tracing::info;
use zretry::cli::{Args, EXIT_FATAL};
use zretry::consumer::Consumer;
use zretry::zmq::ZmqSocket;

fn fatal(err: impl Display) -> ! {
    eprintln!("Fatal: {err}");
    std::process::exit(EXIT_FATAL)
}

fn main() {
    zretry::dev_tracing::init_tracing();

    // Usage errors exit with status 2 from inside clap.
    let args = Args::parse();
    let config = args.consumer_config();

    let socket = ZmqSocket::subscriber(&args.endpoint).unwrap_or_else(|err| fatal(err));
    info!(endpoint = %args.endpoint, mode = %config.mode, flags = %config.flags, "subscribed");

    let stdout = io::stdout();
    let mut consumer = Consumer::new(socket, stdout.lock(), config);

    fatal(consumer.run())
}
