use std::{fmt::Display, str::FromStr, sync::Arc};
pub use time::OffsetDateTime as Timestamp;

use crate::StreamKeyErr;

/// Maximum string length of a stream key.
pub const MAX_STREAM_KEY_LEN: usize = 128;

/// Canonical display format for Timestamp.
pub const TIMESTAMP_FORMAT: &[time::format_description::FormatItem<'static>] =
    time::macros::format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifies a stream. Aka. topic.
pub struct StreamKey {
    name: Arc<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifies a shard. Aka. partition.
///
/// Shard ids are assigned by the streaming server and are opaque to us,
/// e.g. `shardId-000000000000`.
pub struct ShardId {
    id: Arc<String>,
}

/// The tuple (StreamKey, ShardId, SeqNo) uniquely identifies a message. Aka. offset.
///
/// Server-assigned sequence numbers can be wider than 128 bits, so they are kept as decimal strings.
pub type SeqNo = String;

impl StreamKey {
    pub fn new<S: Into<String>>(key: S) -> Result<Self, StreamKeyErr> {
        let key = key.into();
        if is_valid_stream_key(key.as_str()) {
            Ok(Self {
                name: Arc::new(key),
            })
        } else {
            Err(StreamKeyErr::InvalidStreamKey)
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl ShardId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        Self {
            id: Arc::new(id.into()),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl Display for StreamKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Display for ShardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

impl FromStr for StreamKey {
    type Err = StreamKeyErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StreamKey::new(s)
    }
}

pub fn is_valid_stream_key(s: &str) -> bool {
    !s.is_empty() && s.len() <= MAX_STREAM_KEY_LEN && s.chars().all(is_valid_stream_key_char)
}

/// Returns true if this character can be used in a stream key.
pub fn is_valid_stream_key_char(c: char) -> bool {
    // https://docs.aws.amazon.com/kinesis/latest/APIReference/API_CreateStream.html
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-')
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_stream_key() {
        assert_eq!(StreamKey::new("clicks").unwrap().name(), "clicks");
        assert_eq!(
            "prod.clicks_v2-a".parse::<StreamKey>().unwrap().name(),
            "prod.clicks_v2-a"
        );
        assert!(StreamKey::new("a".repeat(MAX_STREAM_KEY_LEN)).is_ok());
    }

    #[test]
    fn test_stream_key_err() {
        assert_eq!(StreamKey::new(""), Err(StreamKeyErr::InvalidStreamKey));
        assert_eq!(
            StreamKey::new("a".repeat(MAX_STREAM_KEY_LEN + 1)),
            Err(StreamKeyErr::InvalidStreamKey)
        );
        assert!(matches!(
            "stream?".parse::<StreamKey>(),
            Err(StreamKeyErr::InvalidStreamKey)
        ));
        assert!("my stream".parse::<StreamKey>().is_err());
    }

    #[test]
    fn test_shard_id() {
        let shard = ShardId::new("shardId-000000000001");
        assert_eq!(shard.id(), "shardId-000000000001");
        assert_eq!(shard.to_string(), "shardId-000000000001");
        assert_eq!(shard.clone(), shard);
    }
}
