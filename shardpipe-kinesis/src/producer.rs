use aws_sdk_kinesis::Client;
use shardpipe_types::{
    export::async_trait, Buffer, Producer, ProducerOptions, Receipt, ShardId, StreamErr,
    StreamKey,
};

use crate::{KinesisBackend, KinesisErr, KinesisResult, ShardRotator};

#[derive(Debug)]
/// The Kinesis Producer.
///
/// Records are spread over the stream's shards by round-robin: each send uses the
/// next shard id as the partition key. The shard set is listed once, on creation.
pub struct KinesisProducer<B: KinesisBackend = Client> {
    backend: B,
    stream: StreamKey,
    shards: ShardRotator,
}

#[derive(Debug, Default, Clone)]
/// Options for Producers. There are none yet.
pub struct KinesisProducerOptions {}

impl ProducerOptions for KinesisProducerOptions {}

#[async_trait]
impl<B: KinesisBackend> Producer for KinesisProducer<B> {
    type Error = KinesisErr;

    async fn send<S: Buffer + Send>(&mut self, payload: S) -> KinesisResult<Receipt> {
        let shard = self.shards.next_shard();
        log::debug!("put_record shard={shard}");
        self.backend
            .put_record(&self.stream, shard, payload.into_bytes())
            .await
    }

    fn anchored(&self) -> &StreamKey {
        &self.stream
    }
}

impl<B: KinesisBackend> KinesisProducer<B> {
    /// List the shards of `stream` and create a producer over them.
    ///
    /// Fails if the listing fails or comes back empty.
    pub async fn create(
        backend: B,
        stream: StreamKey,
        _: KinesisProducerOptions,
    ) -> KinesisResult<Self> {
        let shards = backend.list_shards(&stream).await?;
        if shards.is_empty() {
            return Err(StreamErr::Backend(KinesisErr::NoShards(
                stream.name().to_owned(),
            )));
        }
        log::debug!(
            "stream={stream} shards={count} {ids:?}",
            count = shards.len(),
            ids = shards.iter().map(ShardId::id).collect::<Vec<_>>()
        );
        Ok(Self {
            backend,
            stream,
            shards: ShardRotator::new(shards),
        })
    }

    /// The shards this producer rotates over.
    pub fn shards(&self) -> &ShardRotator {
        &self.shards
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
