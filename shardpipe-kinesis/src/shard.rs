use shardpipe_types::ShardId;

#[derive(Debug, Clone)]
/// Hands out shard ids by round-robin, in the order they were given.
///
/// Constructing from an empty set is a caller error: the first [`ShardRotator::next_shard`] will panic.
pub struct ShardRotator {
    shards: Vec<ShardId>,
    cursor: usize,
}

impl ShardRotator {
    pub fn new(shards: Vec<ShardId>) -> Self {
        Self { shards, cursor: 0 }
    }

    /// Return the shard at the cursor and advance. Yields index 0, 1, .., len - 1, 0, 1, ..
    pub fn next_shard(&mut self) -> &ShardId {
        // also recovers if the cursor ever points past the end
        if self.cursor >= self.shards.len() {
            self.cursor = 0;
        }
        let shard = &self.shards[self.cursor];
        self.cursor += 1;
        shard
    }

    pub fn shards(&self) -> &[ShardId] {
        &self.shards
    }

    pub fn len(&self) -> usize {
        self.shards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }
}
