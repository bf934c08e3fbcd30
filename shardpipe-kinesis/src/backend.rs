use aws_sdk_kinesis::{primitives::Blob, Client};
use shardpipe_types::{export::async_trait, Receipt, ShardId, StreamKey, Timestamp};
use std::fmt::Debug;

use crate::{list_shards_err, put_record_err, KinesisResult};

#[async_trait]
/// The two Kinesis operations a producer needs. Implemented for [`aws_sdk_kinesis::Client`].
pub trait KinesisBackend: Debug + Send + Sync {
    /// All shard ids of the stream, in the order the server returned them.
    async fn list_shards(&self, stream: &StreamKey) -> KinesisResult<Vec<ShardId>>;

    /// Put one record, using `partition_key` to route it.
    async fn put_record(
        &self,
        stream: &StreamKey,
        partition_key: &ShardId,
        data: Vec<u8>,
    ) -> KinesisResult<Receipt>;
}

#[async_trait]
impl KinesisBackend for Client {
    async fn list_shards(&self, stream: &StreamKey) -> KinesisResult<Vec<ShardId>> {
        let mut shards = Vec::new();
        let mut next_token: Option<String> = None;
        loop {
            // StreamName and NextToken cannot be specified together
            let request = match next_token.take() {
                Some(token) => Client::list_shards(self).next_token(token),
                None => Client::list_shards(self).stream_name(stream.name()),
            };
            let output = request.send().await.map_err(list_shards_err)?;
            shards.extend(
                output
                    .shards
                    .unwrap_or_default()
                    .into_iter()
                    .map(|shard| ShardId::new(shard.shard_id)),
            );
            match output.next_token {
                Some(token) => next_token = Some(token),
                None => break,
            }
        }
        Ok(shards)
    }

    async fn put_record(
        &self,
        stream: &StreamKey,
        partition_key: &ShardId,
        data: Vec<u8>,
    ) -> KinesisResult<Receipt> {
        let output = Client::put_record(self)
            .stream_name(stream.name())
            .partition_key(partition_key.id())
            .data(Blob::new(data))
            .send()
            .await
            .map_err(put_record_err)?;
        Ok(Receipt::new(
            stream.clone(),
            ShardId::new(output.shard_id()),
            output.sequence_number().to_owned(),
            Timestamp::now_utc(),
        ))
    }
}
