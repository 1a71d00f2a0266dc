use crate::error::Error;
use crate::transform::Transform;
use crate::wav::Wave;
use crate::writer::WaveWriter;
use std::path::Path;
use tracing::{debug, info};

/// Read `input`, apply `transform` to every frame and write the result to
/// `output`.
///
/// The input must be a two channel WAVE file; its sample width, frame rate,
/// frame count and compression tag carry over to the output unchanged. A
/// non-stereo input is rejected before the output file is created. All file
/// handles are released when this returns, on success and on error alike.
pub fn convert(input: &Path, output: &Path, transform: Transform) -> Result<(), Error> {
    let wave = Wave::open(input)?;

    debug!(
        channels = wave.format.channels,
        sample_width = wave.format.sample_width,
        frame_rate = wave.format.frame_rate,
        frame_count = wave.format.frame_count,
        compression = wave.format.compression_name(),
        "read {}",
        input.display(),
    );

    if wave.format.channels != 2 {
        return Err(Error::ChannelCount(wave.format.channels));
    }

    let mut writer = WaveWriter::create(output, wave.format)?;
    let mut frame = Vec::with_capacity(wave.format.frame_width());

    for (left, right) in wave.frames() {
        frame.clear();
        transform.apply(left, right, &mut frame);
        writer.write_frame(&frame)?;
    }

    writer.finalize()?;

    info!(
        frames = wave.format.frame_count,
        transform = %transform,
        "wrote {}",
        output.display(),
    );

    Ok(())
}
