use crate::error::FormatError;
use tracing::warn;

/// Identifier of a RIFF sub-chunk
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ChunkTag {
    /// `fmt ` chunk holding the format fields
    Fmt,
    /// `data` chunk holding the sample frames
    Data,
    /// `fact` chunk, present in some non-PCM files
    Fact,
    /// `LIST` chunk holding metadata
    List,
    /// Any other four character code
    Unknown([u8; 4]),
}

impl ChunkTag {
    /// Map a four character code to its tag
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        match &bytes {
            b"fmt " => ChunkTag::Fmt,
            b"data" => ChunkTag::Data,
            b"fact" => ChunkTag::Fact,
            b"LIST" => ChunkTag::List,
            _ => ChunkTag::Unknown(bytes),
        }
    }

    /// The four character code for this tag
    pub fn to_bytes(self) -> [u8; 4] {
        match self {
            ChunkTag::Fmt => *b"fmt ",
            ChunkTag::Data => *b"data",
            ChunkTag::Fact => *b"fact",
            ChunkTag::List => *b"LIST",
            ChunkTag::Unknown(bytes) => bytes,
        }
    }
}

/// A single RIFF sub-chunk, tag plus raw payload
#[derive(Debug, PartialEq, Eq)]
pub struct Chunk {
    /// Chunk identifier
    pub id: ChunkTag,
    /// Payload bytes, without the trailing pad byte
    pub bytes: Vec<u8>,
}

impl Chunk {
    /// Serialise as tag, little endian size and payload, padded to an even
    /// byte count
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.bytes.len() + self.bytes.len() % 2);
        out.extend_from_slice(&self.id.to_bytes());
        out.extend_from_slice(&(self.bytes.len() as u32).to_le_bytes());
        out.extend_from_slice(&self.bytes);
        if self.bytes.len() % 2 == 1 {
            out.push(0x00);
        }
        out
    }
}

fn read_tag(bytes: &[u8], offset: usize) -> Result<[u8; 4], FormatError> {
    bytes
        .get(offset..offset + 4)
        .and_then(|b| b.try_into().ok())
        .ok_or(FormatError::CantParseSliceInto)
}

fn read_u32(bytes: &[u8], offset: usize) -> Result<u32, FormatError> {
    read_tag(bytes, offset).map(u32::from_le_bytes)
}

/// Walk a RIFF/WAVE image and collect every sub-chunk.
///
/// Chunks with unrecognised tags are collected, not rejected. Odd-sized
/// chunks consume their pad byte. A declared size running past the end of
/// the image is clamped to the bytes present.
pub(crate) fn parse_chunks(bytes: &[u8]) -> Result<Vec<Chunk>, FormatError> {
    if read_tag(bytes, 0).map_err(|_| FormatError::NoRiffChunkFound)? != *b"RIFF" {
        return Err(FormatError::NoRiffChunkFound);
    }

    if read_tag(bytes, 8).map_err(|_| FormatError::NoWaveTagFound)? != *b"WAVE" {
        return Err(FormatError::NoWaveTagFound);
    }

    let mut chunks = Vec::new();
    let mut pos = 12;

    while pos + 8 <= bytes.len() {
        let id = ChunkTag::from_bytes(read_tag(bytes, pos)?);
        let size = read_u32(bytes, pos + 4)? as usize;
        let start = pos + 8;

        let end = if start + size > bytes.len() {
            warn!(
                ?id,
                declared = size,
                present = bytes.len() - start,
                "chunk size overruns the file, clamping"
            );
            bytes.len()
        } else {
            start + size
        };

        chunks.push(Chunk {
            id,
            bytes: bytes[start..end].to_vec(),
        });

        // Chunks are word aligned, odd sizes carry one pad byte
        pos = start + size + size % 2;
    }

    Ok(chunks)
}
