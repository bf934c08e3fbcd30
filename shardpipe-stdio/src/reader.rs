use std::io::{Error as IoError, ErrorKind};
use tokio::io::{stdin, AsyncBufRead, AsyncBufReadExt, AsyncReadExt, BufReader, Stdin};

/// Kinesis rejects records with more than 1 MiB of data.
pub const MAX_RECORD_SIZE: usize = 1024 * 1024;

#[derive(Debug)]
/// Reads newline-delimited records. Each line, without its line ending, is one record.
/// A last line without a trailing newline is still a record.
///
/// A line longer than the maximum record size is an `InvalidData` error; the rest of the input is
/// not read.
pub struct LineReader<R> {
    reader: R,
    max_len: usize,
}

/// A [`LineReader`] over the process's standard input.
pub fn stdin_reader() -> LineReader<BufReader<Stdin>> {
    LineReader::new(BufReader::new(stdin()))
}

impl<R: AsyncBufRead + Unpin> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self::with_max_len(reader, MAX_RECORD_SIZE)
    }

    pub fn with_max_len(reader: R, max_len: usize) -> Self {
        Self { reader, max_len }
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Returns `None` once the input is exhausted.
    pub async fn next_record(&mut self) -> std::io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        // room for a `\r\n` after a record of `max_len` bytes
        let limit = self.max_len.saturating_add(2) as u64;
        if (&mut self.reader)
            .take(limit)
            .read_until(b'\n', &mut line)
            .await?
            == 0
        {
            return Ok(None);
        }
        trim_line_end(&mut line);
        if line.len() > self.max_len {
            return Err(IoError::new(
                ErrorKind::InvalidData,
                format!("line exceeds {} bytes", self.max_len),
            ));
        }
        Ok(Some(line))
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

/// Strip one `\n` and then one `\r`, if present.
pub(crate) fn trim_line_end(line: &mut Vec<u8>) {
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    if line.last() == Some(&b'\r') {
        line.pop();
    }
}
