use crate::chunk::{Chunk, ChunkTag};
use crate::error::FormatError;

/// Format parameters of a WAVE file.
///
/// Field layout follows the `fmt ` section of the container, for more
/// information see [`here`]
///
/// [`here`]: http://soundfile.sapp.org/doc/WaveFormat/
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct WaveFormat {
    /// compression type code, `1` for integer PCM, carried through verbatim
    pub format_tag: u16,
    /// number of interleaved channels in each frame
    pub channels: u16,
    /// bytes per sample per channel, e.g. `2` for 16 bit audio
    pub sample_width: u16,
    /// frames per second, typical values are `44_100` or `48_000`
    pub frame_rate: u32,
    /// number of whole frames in the data chunk
    pub frame_count: u32,
}

impl WaveFormat {
    /// Build the format from a `fmt ` chunk and the data chunk length
    pub(crate) fn from_chunks(fmt: &Chunk, data_len: usize) -> Result<Self, FormatError> {
        if fmt.bytes.len() < 16 {
            return Err(FormatError::CantParseChunk(ChunkTag::Fmt));
        }

        let format_tag = fmt.bytes[0..2]
            .try_into()
            .map_err(|_| FormatError::CantParseSliceInto)
            .map(u16::from_le_bytes)?;

        let channels = fmt.bytes[2..4]
            .try_into()
            .map_err(|_| FormatError::CantParseSliceInto)
            .map(u16::from_le_bytes)?;

        let frame_rate = fmt.bytes[4..8]
            .try_into()
            .map_err(|_| FormatError::CantParseSliceInto)
            .map(u32::from_le_bytes)?;

        let bits_per_sample = fmt.bytes[14..16]
            .try_into()
            .map_err(|_| FormatError::CantParseSliceInto)
            .map(u16::from_le_bytes)?;

        if channels == 0 {
            return Err(FormatError::NoChannels);
        }

        if bits_per_sample == 0 || bits_per_sample % 8 != 0 || bits_per_sample > 64 {
            return Err(FormatError::UnsupportedBitDepth(bits_per_sample));
        }

        let sample_width = bits_per_sample / 8;
        let frame_width = sample_width as usize * channels as usize;

        Ok(WaveFormat {
            format_tag,
            channels,
            sample_width,
            frame_rate,
            frame_count: (data_len / frame_width) as u32,
        })
    }

    /// Bytes in one frame, all channels included
    pub fn frame_width(&self) -> usize {
        self.sample_width as usize * self.channels as usize
    }

    /// Bits per sample as stored in the `fmt ` chunk
    pub fn bits_per_sample(&self) -> u16 {
        self.sample_width * 8
    }

    /// Bytes per frame, the `fmt ` chunk's block align field
    pub fn block_align(&self) -> u16 {
        self.sample_width * self.channels
    }

    /// Bytes per second of audio, the `fmt ` chunk's byte rate field
    pub fn byte_rate(&self) -> u32 {
        self.frame_rate * u32::from(self.block_align())
    }

    /// Length of the PCM payload in bytes, whole frames only
    pub fn data_len(&self) -> u32 {
        self.frame_count * self.frame_width() as u32
    }

    /// Human readable name of the compression type, for diagnostics only.
    /// The container stores the numeric tag, never the name.
    pub fn compression_name(&self) -> &'static str {
        match self.format_tag {
            1 => "not compressed",
            3 => "IEEE float",
            _ => "unknown",
        }
    }

    pub(crate) fn to_chunk(&self) -> Chunk {
        let ft = self.format_tag.to_le_bytes();
        let nc = self.channels.to_le_bytes();
        let fr = self.frame_rate.to_le_bytes();
        let br = self.byte_rate().to_le_bytes();
        let ba = self.block_align().to_le_bytes();
        let bp = self.bits_per_sample().to_le_bytes();

        let bytes = vec![
            ft[0], ft[1], // format tag
            nc[0], nc[1], // num channels
            fr[0], fr[1], fr[2], fr[3], // frame rate
            br[0], br[1], br[2], br[3], // byte rate
            ba[0], ba[1], // block align
            bp[0], bp[1], // bits per sample
        ];

        Chunk {
            id: ChunkTag::Fmt,
            bytes,
        }
    }
}
