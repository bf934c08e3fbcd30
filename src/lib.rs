//! # shardpipe
//!
//! Pipe newline-delimited records from standard input into an Amazon Kinesis stream,
//! spreading them over the stream's shards by round-robin.
//!
//! ```sh
//! tail -F app.log | shardpipe --stream-name app-logs --aws-region us-east-1
//! ```
//!
//! ## Architecture
//!
//! `shardpipe` is the facade crate re-exporting implementation from a number of sub-crates:
//!
//! + `shardpipe-types`: the `Streamer` / `Producer` traits and common types
//! + `shardpipe-kinesis`: the Kinesis backend, re-exported as [`kinesis`]
//! + `shardpipe-stdio`: the stdin ingestion loop, re-exported as [`stdio`]
//!
//! Every line is one record and is sent before the next line is read. A record that
//! fails to publish is logged and dropped; only failing to reach the stream at startup
//! is fatal.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub use shardpipe_types::*;

#[cfg(feature = "shardpipe-kinesis")]
#[cfg_attr(docsrs, doc(cfg(feature = "kinesis")))]
pub use shardpipe_kinesis as kinesis;

#[cfg(feature = "shardpipe-stdio")]
#[cfg_attr(docsrs, doc(cfg(feature = "stdio")))]
pub use shardpipe_stdio as stdio;
