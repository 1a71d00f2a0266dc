//! Batch channel transforms for stereo WAVE files.
//!
//! Reads a two channel PCM WAVE file, applies one of four per-frame
//! transforms and writes the result as a new WAVE file with the same
//! sample width, frame rate, frame count and compression tag:
//!
//! * [`Transform::Left`] copies the left sample to both channels
//! * [`Transform::Right`] copies the right sample to both channels
//! * [`Transform::Swap`] exchanges the two samples
//! * [`Transform::Mix`] averages the two samples into both channels
//!
//! Converting a file:
//! ```no_run
//! use std::path::Path;
//! use wavchan::{convert, Transform};
//!
//! fn main() -> Result<(), wavchan::Error> {
//!     convert(Path::new("in.wav"), Path::new("out.wav"), Transform::Swap)
//! }
//! ```
//!
//! Working with the pieces directly:
//! ```
//! use wavchan::{Transform, Wave};
//!
//! let bytes: [u8; 52] = [
//!     0x52, 0x49, 0x46, 0x46, // RIFF
//!     0x2c, 0x00, 0x00, 0x00, // chunk size
//!     0x57, 0x41, 0x56, 0x45, // WAVE
//!     0x66, 0x6d, 0x74, 0x20, // fmt_
//!     0x10, 0x00, 0x00, 0x00, // chunk size
//!     0x01, 0x00, // format tag
//!     0x02, 0x00, // num channels
//!     0x80, 0xbb, 0x00, 0x00, // frame rate
//!     0x00, 0xee, 0x02, 0x00, // byte rate
//!     0x04, 0x00, // block align
//!     0x10, 0x00, // bits per sample
//!     0x64, 0x61, 0x74, 0x61, // data
//!     0x08, 0x00, 0x00, 0x00, // chunk size
//!     0x01, 0x00, 0x02, 0x00, // frame 1 L+R
//!     0x03, 0x00, 0x04, 0x00, // frame 2 L+R
//! ];
//!
//! let wave = Wave::from_bytes(&bytes).unwrap();
//! assert_eq!(wave.format.channels, 2);
//!
//! let mut out = Vec::new();
//! for (left, right) in wave.frames() {
//!     Transform::Swap.apply(left, right, &mut out);
//! }
//!
//! assert_eq!(out, vec![0x02, 0x00, 0x01, 0x00, 0x04, 0x00, 0x03, 0x00]);
//! ```

#![warn(missing_docs)]

mod chunk;
mod convert;
mod error;
mod fmt;
mod transform;
mod wav;
mod writer;

pub use chunk::{Chunk, ChunkTag};
pub use convert::convert;
pub use error::{Error, FormatError};
pub use fmt::WaveFormat;
pub use transform::Transform;
pub use wav::{Frames, Wave};
pub use writer::WaveWriter;
