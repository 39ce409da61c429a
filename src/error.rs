//! Error type shared by every stage of the huffzip pipeline.

use thiserror::Error;

/// Failures reported while counting, coding or transforming data.
#[derive(Error, Debug)]
pub enum HuffError {
    /// Byte 255 is reserved and cannot be counted or coded.
    #[error("symbol {0} is outside the supported range 0-254")]
    InvalidSymbol(u8),
    /// Tree building needs at least one symbol with a non-zero count.
    #[error("no symbols with non-zero counts")]
    EmptyAlphabet,
    /// The frequency header line could not be parsed.
    #[error("malformed frequency header: {0}")]
    MalformedHeader(String),
    /// Encode found an input byte with no assigned code.
    #[error("symbol {0} has no code assigned")]
    UnknownSymbol(u8),
    /// The bit stream ran out in the middle of a code.
    #[error("bit stream ended mid-code")]
    TruncatedStream,
    /// File-level read/write failures.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
