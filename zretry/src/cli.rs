//! Command-line surface of the `zmq-subscribe` tool.

use clap::{ArgAction, Parser};

use crate::consumer::ConsumerConfig;

/// Exit status for setup failures and terminal receive errors.
pub const EXIT_FATAL: i32 = 2;

/// Subscribe to a ZeroMQ endpoint and write every message to stdout.
#[derive(Debug, Parser)]
#[command(name = "zmq-subscribe")]
#[command(about = "Subscribe to a ZeroMQ PUB endpoint and print every message", long_about = None)]
pub struct Args {
    /// Endpoint to connect to, e.g. tcp://127.0.0.1:5556
    pub endpoint: String,

    /// Use a blocking zmq_recv. `--block` alone means true; use `--block=false`
    /// to poll with ZMQ_DONTWAIT.
    #[arg(
        long,
        value_name = "BOOL",
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        action = ArgAction::Set
    )]
    pub block: bool,

    /// Read messages as strings.
    #[arg(long)]
    pub text: bool,

    /// Read multipart messages and print the parts individually.
    #[arg(long)]
    pub multipart: bool,
}

impl Args {
    /// Freeze the switches into a consumer configuration.
    #[must_use]
    pub fn consumer_config(&self) -> ConsumerConfig {
        ConsumerConfig::new(self.block, self.text, self.multipart)
    }
}
