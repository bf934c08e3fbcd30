use thiserror::Error;

#[derive(Error, Debug)]
pub enum StdioErr {
    #[error("IO Error: {0}")]
    IoError(std::io::Error),
    #[error("Aborted after failing to publish: {0}")]
    Aborted(String),
}
