use crate::{ConnectOptions, Producer, ProducerOptions, StreamKey, StreamResult};
use async_trait::async_trait;

#[async_trait]
/// Common interface of streamer clients.
pub trait Streamer: Sized {
    type Error: std::error::Error;
    type Producer: Producer<Error = Self::Error>;
    type ConnectOptions: ConnectOptions;
    type ProducerOptions: ProducerOptions;

    /// Establish a client of the streaming server.
    async fn connect(options: Self::ConnectOptions) -> StreamResult<Self, Self::Error>;

    /// Flush and disconnect from the streaming server.
    async fn disconnect(self) -> StreamResult<(), Self::Error>;

    /// Create a producer that streams to the specified stream.
    async fn create_producer(
        &self,
        stream: StreamKey,
        options: Self::ProducerOptions,
    ) -> StreamResult<Self::Producer, Self::Error>;
}
