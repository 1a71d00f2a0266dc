use crate::error::Error;
use std::fmt;
use std::str::FromStr;

/// Per-frame channel transform applied by the conversion pipeline
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Transform {
    /// Copy the left sample to both output channels
    Left,
    /// Copy the right sample to both output channels
    Right,
    /// Exchange the left and right samples
    Swap,
    /// Average both samples, as unsigned little endian integers, into both
    /// output channels
    #[default]
    Mix,
}

impl Transform {
    /// Append one transformed frame to `frame`.
    ///
    /// `left` and `right` are the two samples of one input frame and must
    /// have the same width. The output frame is always two samples of that
    /// same width, so `frame` grows by `2 * left.len()` bytes.
    pub fn apply(self, left: &[u8], right: &[u8], frame: &mut Vec<u8>) {
        debug_assert_eq!(left.len(), right.len(), "samples must have the same width");

        match self {
            Transform::Left => {
                frame.extend_from_slice(left);
                frame.extend_from_slice(left);
            }
            Transform::Right => {
                frame.extend_from_slice(right);
                frame.extend_from_slice(right);
            }
            Transform::Swap => {
                frame.extend_from_slice(right);
                frame.extend_from_slice(left);
            }
            Transform::Mix => {
                // Floor of the unsigned average, safe from overflow for
                // every sample width the reader admits
                let mixed = (decode(left) + decode(right)) / 2;
                encode(mixed, left.len(), frame);
                encode(mixed, left.len(), frame);
            }
        }
    }
}

/// Value of a little endian unsigned sample
fn decode(sample: &[u8]) -> u128 {
    sample
        .iter()
        .rev()
        .fold(0, |value, &byte| (value << 8) | u128::from(byte))
}

/// Append `value` as a little endian sample of `width` bytes
fn encode(mut value: u128, width: usize, out: &mut Vec<u8>) {
    for _ in 0..width {
        out.push((value & 0xff) as u8);
        value >>= 8;
    }
}

impl FromStr for Transform {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "left" => Ok(Transform::Left),
            "right" => Ok(Transform::Right),
            "swap" => Ok(Transform::Swap),
            "mix" => Ok(Transform::Mix),
            _ => Err(Error::UnknownTransform(s.to_string())),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Transform::Left => "left",
            Transform::Right => "right",
            Transform::Swap => "swap",
            Transform::Mix => "mix",
        };
        f.write_str(name)
    }
}
