use shardpipe_types::Producer;
use tokio::io::AsyncBufRead;

use crate::{LineReader, StdioErr};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// What to do when a record fails to publish.
pub enum FailurePolicy {
    /// Log the error, drop the record and carry on with the next line.
    Continue,
    /// Stop reading.
    Abort,
}

/// A failed record never stops the forwarder.
pub const DEFAULT_FAILURE_POLICY: FailurePolicy = FailurePolicy::Continue;

impl Default for FailurePolicy {
    fn default() -> Self {
        DEFAULT_FAILURE_POLICY
    }
}

#[derive(Debug, Default)]
/// Summary of a [`forward`] run.
pub struct ForwardStats {
    /// Records read from the input.
    pub records: u64,
    pub published: u64,
    pub failed: u64,
    /// Why the loop ended early, if it did. `None` means the input was exhausted.
    pub error: Option<StdioErr>,
}

impl ForwardStats {
    /// True if a publish failure stopped the loop under [`FailurePolicy::Abort`].
    pub fn is_aborted(&self) -> bool {
        matches!(self.error, Some(StdioErr::Aborted(_)))
    }
}

/// Read records one by one and send each to `producer`, until the input ends.
///
/// Strictly sequential: a record is sent and its receipt awaited before the next line is read.
/// A read error ends the loop like end of input does; it is logged and kept in [`ForwardStats::error`].
pub async fn forward<R, P>(
    reader: &mut LineReader<R>,
    producer: &mut P,
    policy: FailurePolicy,
) -> ForwardStats
where
    R: AsyncBufRead + Unpin,
    P: Producer,
{
    let mut stats = ForwardStats::default();
    loop {
        let record = match reader.next_record().await {
            Ok(Some(record)) => record,
            Ok(None) => break,
            Err(err) => {
                log::error!("failed to read from stdin: {err}");
                stats.error = Some(StdioErr::IoError(err));
                break;
            }
        };
        stats.records += 1;

        log::debug!("writing to {}...", producer.anchored());
        match producer.send(record).await {
            Ok(receipt) => {
                stats.published += 1;
                log::debug!("successfully wrote {receipt}");
            }
            Err(err) => {
                stats.failed += 1;
                log::error!("failed to publish to {}: {err}", producer.anchored());
                if policy == FailurePolicy::Abort {
                    stats.error = Some(StdioErr::Aborted(err.to_string()));
                    break;
                }
            }
        }
    }
    stats
}
