//! ### `shardpipe-kinesis`: Kinesis Backend
//!
//! This is the Amazon Kinesis Data Streams backend implementation for shardpipe.
//!
//! `KinesisStreamer` resolves credentials (optionally assuming a role) and builds the client.
//! Point it to a different endpoint, e.g. localstack, with `KinesisConnectOptions::set_endpoint`.
//!
//! `KinesisProducer` lists the shards of its stream once on creation, then spreads records over them
//! by round-robin, using the shard id as the partition key. Each send is one `PutRecord` call that
//! is attempted exactly once; a failed send is returned to the caller and never retried.
//!
//! Both remote calls go through the `KinesisBackend` trait, so the producer can be driven
//! by something other than the AWS client.
//!
//! This crate is built on top of [`aws-sdk-kinesis`](https://docs.rs/aws-sdk-kinesis).

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

/// The STS session name used when assuming a role, if unspecified
pub const DEFAULT_SESSION_NAME: &str = "shardpipe";

mod backend;
mod error;
mod producer;
mod shard;
mod streamer;

pub use backend::*;
pub use error::*;
pub use producer::*;
pub use shard::*;
pub use streamer::*;

/// Re-export types from `aws-config`, `aws-sdk-kinesis` and `url`
pub mod export {
    pub use aws_config;
    pub use aws_sdk_kinesis;
    pub use url;
}
