use crate::chunk::ChunkTag;
use thiserror::Error;

/// Error type for WAVE container parsing failures
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    /// No riff chunk found
    #[error("no RIFF chunk found")]
    NoRiffChunkFound,
    /// No WAVE tag found
    #[error("no WAVE tag found")]
    NoWaveTagFound,
    /// No fmt/header chunk found
    #[error("no fmt chunk found")]
    NoFmtChunkFound,
    /// No data chunk found
    #[error("no data chunk found")]
    NoDataChunkFound,
    /// Failed parsing slice into specific bytes
    #[error("malformed field, wrong number of bytes")]
    CantParseSliceInto,
    /// Failed parsing chunk with given tag
    #[error("can't parse {0:?} chunk")]
    CantParseChunk(ChunkTag),
    /// Unsupported bit depth
    #[error("unsupported bit depth {0}, expected a multiple of 8 up to 64")]
    UnsupportedBitDepth(u16),
    /// The fmt chunk declares zero channels
    #[error("fmt chunk declares zero channels")]
    NoChannels,
}

/// Error type for the conversion pipeline and batch driver
#[derive(Debug, Error)]
pub enum Error {
    /// Input is not a parsable WAVE file
    #[error("invalid wave file: {0}")]
    Format(#[from] FormatError),
    /// Input is not stereo
    #[error("expected 2 channels, found {0}")]
    ChannelCount(u16),
    /// File could not be read or written
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// Transform selector does not name a known transform
    #[error("unknown transform '{0}', expected one of left, right, swap, mix")]
    UnknownTransform(String),
}
