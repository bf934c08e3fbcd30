//! ### `shardpipe-stdio`: Standard I/O ingestion
//!
//! Reads newline-delimited records from standard input (or any `AsyncBufRead`)
//! and drives a [`Producer`](shardpipe_types::Producer) with them, one at a time.
//!
//! By default a record that fails to publish is logged and dropped, and the loop goes on:
//! this is a continuous forwarder, not a transactional pipeline.
//! Use [`FailurePolicy::Abort`] to stop at the first failure instead.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod error;
mod forward;
mod reader;

pub use error::*;
pub use forward::*;
pub use reader::*;
