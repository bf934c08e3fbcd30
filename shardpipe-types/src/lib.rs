//! # shardpipe Types
//!
//! This crate defines the traits and types shared by the shardpipe backends, but does not provide any implementation.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(missing_debug_implementations)]

mod error;
mod message;
mod options;
mod producer;
mod stream;
mod streamer;

pub use error::*;
pub use message::*;
pub use options::*;
pub use producer::*;
pub use stream::*;
pub use streamer::*;

/// Re-export types from related libraries
pub mod export {
    pub use async_trait::async_trait;
}
