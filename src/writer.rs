use crate::error::Error;
use crate::fmt::WaveFormat;
use std::fs::File;
use std::io::{BufWriter, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

const HEADER_LEN: u32 = 44;
const RIFF_SIZE_OFFSET: u64 = 4;
const DATA_SIZE_OFFSET: u64 = 40;

/// Incremental WAVE file writer.
///
/// [`WaveWriter::create`] writes a complete header up front, sized from the
/// format's declared frame count. Frames are appended one at a time and
/// [`WaveWriter::finalize`] closes the file, patching the header sizes if
/// the frames actually written differ from the declaration. Dropping the
/// writer without finalizing leaves the file incomplete.
pub struct WaveWriter {
    out: BufWriter<File>,
    format: WaveFormat,
    data_bytes: u32,
}

impl WaveWriter {
    /// Create the destination file and write its header
    pub fn create<P: AsRef<Path>>(path: P, format: WaveFormat) -> Result<Self, Error> {
        let file = File::create(path)?;
        let mut out = BufWriter::new(file);

        let data_size = format.data_len();

        out.write_all(b"RIFF")?;
        out.write_all(&riff_size(data_size).to_le_bytes())?;
        out.write_all(b"WAVE")?;
        out.write_all(&format.to_chunk().to_bytes())?;
        out.write_all(b"data")?;
        out.write_all(&data_size.to_le_bytes())?;

        Ok(WaveWriter {
            out,
            format,
            data_bytes: 0,
        })
    }

    /// Append one frame of raw little endian samples.
    ///
    /// The bytes are written verbatim; sizing the frame to the format's
    /// frame width is the caller's responsibility.
    pub fn write_frame(&mut self, frame: &[u8]) -> Result<(), Error> {
        self.out.write_all(frame)?;
        self.data_bytes += frame.len() as u32;
        Ok(())
    }

    /// Pad and flush the file, patching the header sizes if needed.
    ///
    /// Consumes the writer, so a file is finalized at most once.
    pub fn finalize(mut self) -> Result<(), Error> {
        if self.data_bytes % 2 == 1 {
            // Pad byte, counted by the riff size but not the data size
            self.out.write_all(&[0x00])?;
        }

        if self.data_bytes != self.format.data_len() {
            debug!(
                declared = self.format.data_len(),
                actual = self.data_bytes,
                "patching header sizes"
            );
            self.out.seek(SeekFrom::Start(RIFF_SIZE_OFFSET))?;
            self.out.write_all(&riff_size(self.data_bytes).to_le_bytes())?;
            self.out.seek(SeekFrom::Start(DATA_SIZE_OFFSET))?;
            self.out.write_all(&self.data_bytes.to_le_bytes())?;
        }

        self.out.flush()?;
        Ok(())
    }
}

fn riff_size(data_size: u32) -> u32 {
    HEADER_LEN - 8 + data_size + data_size % 2
}
