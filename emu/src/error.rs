use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Image is {0} bytes, memory holds 16")]
    ImageSize(usize),

    #[error("Cannot parse `{0}` as a hex byte")]
    HexByte(String),

    #[error("Failed to open file: {0}")]
    FileOpen(String, #[source] std::io::Error),

    #[error("Failed to read input")]
    FileRead(#[source] std::io::Error),

    #[error("Invalid config: {0}")]
    Config(String, #[source] serde_yaml::Error),

    #[error("Instruction limit must be at least 1")]
    ZeroLimit,

    #[error("Failed to write trace")]
    TraceWrite(#[source] serde_yaml::Error),
}
