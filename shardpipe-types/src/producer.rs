use async_trait::async_trait;

use crate::{Buffer, MessageHeader, StreamKey, StreamResult};

/// What the streaming server acknowledged for a sent message.
pub type Receipt = MessageHeader;

#[async_trait]
/// Common interface of producers. A producer is bound to one stream for its whole lifetime.
///
/// Methods take `&mut self`: a producer has exactly one caller at a time, so any
/// routing state it keeps is never contended.
pub trait Producer: Send {
    type Error: std::error::Error + Send;

    /// Send a message to the anchored stream and wait for the [`Receipt`].
    /// Each call is attempted exactly once; there is no retry.
    async fn send<S: Buffer + Send>(&mut self, payload: S) -> StreamResult<Receipt, Self::Error>;

    /// The stream this producer is bound to.
    fn anchored(&self) -> &StreamKey;
}
