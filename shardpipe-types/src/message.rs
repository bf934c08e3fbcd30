use std::{fmt::Display, str::Utf8Error};

use crate::{SeqNo, ShardId, StreamKey, Timestamp, TIMESTAMP_FORMAT};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Metadata associated with a message.
pub struct MessageHeader {
    stream_key: StreamKey,
    shard_id: ShardId,
    sequence: SeqNo,
    timestamp: Timestamp,
}

/// Common interface of byte containers.
pub trait Buffer {
    fn size(&self) -> usize;

    fn into_bytes(self) -> Vec<u8>;

    fn as_bytes(&self) -> &[u8];

    fn as_str(&self) -> Result<&str, Utf8Error>;
}

impl MessageHeader {
    pub fn new(
        stream_key: StreamKey,
        shard_id: ShardId,
        sequence: SeqNo,
        timestamp: Timestamp,
    ) -> Self {
        Self {
            stream_key,
            shard_id,
            sequence,
            timestamp,
        }
    }

    pub fn stream_key(&self) -> &StreamKey {
        &self.stream_key
    }

    pub fn shard_id(&self) -> &ShardId {
        &self.shard_id
    }

    pub fn sequence(&self) -> &SeqNo {
        &self.sequence
    }

    pub fn timestamp(&self) -> &Timestamp {
        &self.timestamp
    }
}

impl Display for MessageHeader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{timestamp} | {stream} | {shard} | {seq}]",
            timestamp = self
                .timestamp
                .format(TIMESTAMP_FORMAT)
                .map_err(|_| std::fmt::Error)?,
            stream = self.stream_key,
            shard = self.shard_id,
            seq = self.sequence,
        )
    }
}

impl Buffer for &'_ [u8] {
    fn size(&self) -> usize {
        self.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        self.to_owned()
    }

    fn as_bytes(&self) -> &[u8] {
        self
    }

    fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self)
    }
}

impl Buffer for Vec<u8> {
    fn size(&self) -> usize {
        self.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        self
    }

    fn as_bytes(&self) -> &[u8] {
        self.as_slice()
    }

    fn as_str(&self) -> Result<&str, Utf8Error> {
        std::str::from_utf8(self)
    }
}

impl Buffer for &'_ str {
    fn size(&self) -> usize {
        self.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        self.as_bytes().to_owned()
    }

    fn as_bytes(&self) -> &[u8] {
        str::as_bytes(self)
    }

    fn as_str(&self) -> Result<&str, Utf8Error> {
        Ok(self)
    }
}

impl Buffer for String {
    fn size(&self) -> usize {
        self.len()
    }

    fn into_bytes(self) -> Vec<u8> {
        String::into_bytes(self)
    }

    fn as_bytes(&self) -> &[u8] {
        String::as_bytes(self)
    }

    fn as_str(&self) -> Result<&str, Utf8Error> {
        Ok(self.as_str())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_buffer() {
        let bytes: &[u8] = b"hello";
        assert_eq!(bytes.size(), 5);
        assert_eq!(bytes.as_str(), Ok("hello"));
        assert!(vec![0xff_u8, 0x00].as_str().is_err());
        assert_eq!("hi".to_owned().into_bytes(), b"hi".to_vec());
        assert_eq!(Buffer::into_bytes("hi"), b"hi".to_vec());
    }

    #[test]
    fn test_header_display() {
        let header = MessageHeader::new(
            StreamKey::new("clicks").unwrap(),
            ShardId::new("shardId-000000000002"),
            "4959033827149025660855969253836".to_owned(),
            time::macros::datetime!(2024-01-02 03:04:05.6 UTC),
        );
        assert_eq!(
            header.to_string(),
            "[2024-01-02T03:04:05.6 | clicks | shardId-000000000002 | 4959033827149025660855969253836]"
        );
    }
}
