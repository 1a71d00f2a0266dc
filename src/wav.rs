use crate::chunk::{ChunkTag, parse_chunks};
use crate::error::{Error, FormatError};
use crate::fmt::WaveFormat;
use std::fs;
use std::path::Path;
use std::slice::ChunksExact;
use tracing::warn;

/// A WAVE file held in memory, format parameters plus raw PCM frames
#[derive(Debug)]
pub struct Wave {
    /// Format parameters from the fmt chunk
    pub format: WaveFormat,
    /// Interleaved little endian sample frames from the data chunk
    pub data: Vec<u8>,
}

impl Wave {
    /// Create a [`Wave`] instance from a slice of bytes
    ///
    /// ```
    /// use wavchan::Wave;
    ///
    /// let bytes: [u8; 52] = [
    ///     0x52, 0x49, 0x46, 0x46, // RIFF
    ///     0x2c, 0x00, 0x00, 0x00, // chunk size
    ///     0x57, 0x41, 0x56, 0x45, // WAVE
    ///     0x66, 0x6d, 0x74, 0x20, // fmt_
    ///     0x10, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, // format tag
    ///     0x02, 0x00, // num channels
    ///     0x80, 0xbb, 0x00, 0x00, // frame rate
    ///     0x00, 0xee, 0x02, 0x00, // byte rate
    ///     0x04, 0x00, // block align
    ///     0x10, 0x00, // bits per sample
    ///     0x64, 0x61, 0x74, 0x61, // data
    ///     0x08, 0x00, 0x00, 0x00, // chunk size
    ///     0x01, 0x00, 0x02, 0x00, // frame 1 L+R
    ///     0x03, 0x00, 0x04, 0x00, // frame 2 L+R
    /// ];
    ///
    /// let wave = Wave::from_bytes(&bytes).unwrap();
    ///
    /// assert_eq!(wave.format.channels, 2);
    /// assert_eq!(wave.format.sample_width, 2);
    /// assert_eq!(wave.format.frame_rate, 48_000);
    /// assert_eq!(wave.format.frame_count, 2);
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FormatError> {
        let mut chunks = parse_chunks(bytes)?;

        let fmt_idx = chunks
            .iter()
            .position(|c| c.id == ChunkTag::Fmt)
            .ok_or(FormatError::NoFmtChunkFound)?;

        let data_idx = chunks
            .iter()
            .position(|c| c.id == ChunkTag::Data)
            .ok_or(FormatError::NoDataChunkFound)?;

        let format = WaveFormat::from_chunks(&chunks[fmt_idx], chunks[data_idx].bytes.len())?;

        let data = chunks.swap_remove(data_idx).bytes;

        let tail = data.len() % format.frame_width();
        if tail != 0 {
            warn!(bytes = tail, "data chunk ends with a partial frame, ignoring it");
        }

        Ok(Wave { format, data })
    }

    /// Read and parse a WAVE file from disk
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let bytes = fs::read(path)?;
        Ok(Self::from_bytes(&bytes)?)
    }

    /// Iterate the left and right sample of every whole frame.
    ///
    /// Yields exactly `format.frame_count` items; trailing bytes short of a
    /// full frame are never yielded. Callers check `format.channels == 2`
    /// before iterating.
    pub fn frames(&self) -> Frames<'_> {
        debug_assert_eq!(self.format.channels, 2, "frames() expects stereo data");

        Frames {
            inner: self.data.chunks_exact(self.format.frame_width()),
            sample_width: self.format.sample_width as usize,
        }
    }
}

/// Iterator over the `(left, right)` sample pairs of a stereo [`Wave`]
pub struct Frames<'a> {
    inner: ChunksExact<'a, u8>,
    sample_width: usize,
}

impl<'a> Iterator for Frames<'a> {
    type Item = (&'a [u8], &'a [u8]);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|frame| frame.split_at(self.sample_width))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Frames<'_> {}
