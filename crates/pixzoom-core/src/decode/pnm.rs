//! Plain-text PGM (`P2`) and PPM (`P3`) parsing.

use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::buffer::{BufferError, Channels, PixelBuffer};
use crate::{MAX_HEIGHT, MAX_WIDTH};

/// Error types for loading a plain-text pixel map.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    /// The magic token is not `P2` or `P3`.
    #[error("Unknown image format. Only plain PGM (P2) and PPM (P3) are supported, found {0:?}")]
    UnsupportedFormat(String),

    /// The header ended before the named field.
    #[error("Missing {0} in image header")]
    MissingHeader(&'static str),

    /// A header field or sample is not a non-negative integer.
    #[error("Invalid {field}: {token:?}")]
    InvalidNumber { field: &'static str, token: String },

    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    EmptyDimensions { width: u32, height: u32 },

    /// Image exceeds the supported size.
    #[error(
        "Maximum allowed image size is [{max_width}, {max_height}] pixels, but the image is of size [{width}, {height}]"
    )]
    TooLarge {
        width: u32,
        height: u32,
        max_width: u32,
        max_height: u32,
    },

    /// Max sample value is zero or doesn't fit 16 bits.
    #[error("Invalid maximum sample value {0}, expected 1 to 65535")]
    InvalidMaxValue(u32),

    /// Number of samples doesn't match the header.
    #[error("Image size ({expected}) does not match data read ({actual})")]
    SampleCount { expected: usize, actual: usize },

    /// A sample is larger than the declared maximum.
    #[error("Sample {index} has value {value}, above the maximum {max_value}")]
    SampleOutOfRange {
        index: usize,
        value: u32,
        max_value: u16,
    },

    /// The samples don't form a valid buffer.
    #[error(transparent)]
    Buffer(#[from] BufferError),

    /// I/O error during file reading.
    #[error("I/O error: {0}")]
    IoError(String),
}

/// Parse a plain-text PGM or PPM image.
///
/// Header fields and samples may be separated by any whitespace, and `#`
/// starts a comment running to the end of the line.
pub fn decode_pnm(text: &str) -> Result<PixelBuffer, DecodeError> {
    let mut tokens = text
        .lines()
        .map(|line| line.split_once('#').map_or(line, |(data, _)| data))
        .flat_map(str::split_whitespace);

    let magic = tokens.next().ok_or(DecodeError::MissingHeader("format"))?;
    let channels = Channels::from_magic(magic)
        .ok_or_else(|| DecodeError::UnsupportedFormat(magic.to_string()))?;

    let width = parse_header(tokens.next(), "width")?;
    let height = parse_header(tokens.next(), "height")?;
    let max_value = parse_header(tokens.next(), "max value")?;

    if width == 0 || height == 0 {
        return Err(DecodeError::EmptyDimensions { width, height });
    }
    if width > MAX_WIDTH || height > MAX_HEIGHT {
        return Err(DecodeError::TooLarge {
            width,
            height,
            max_width: MAX_WIDTH,
            max_height: MAX_HEIGHT,
        });
    }
    let max_value = match u16::try_from(max_value) {
        Ok(v) if v > 0 => v,
        _ => return Err(DecodeError::InvalidMaxValue(max_value)),
    };

    let expected = width as usize * height as usize * channels.count();
    let mut samples = Vec::with_capacity(expected);
    let mut tokens = tokens.enumerate();
    while let Some((index, token)) = tokens.next() {
        if index == expected {
            // Surplus data; count it without storing it
            return Err(DecodeError::SampleCount {
                expected,
                actual: expected + 1 + tokens.by_ref().count(),
            });
        }
        let value: u32 = token.parse().map_err(|_| DecodeError::InvalidNumber {
            field: "sample",
            token: token.to_string(),
        })?;
        if value > u32::from(max_value) {
            return Err(DecodeError::SampleOutOfRange {
                index,
                value,
                max_value,
            });
        }
        samples.push(value as u16);
    }

    if samples.len() != expected {
        return Err(DecodeError::SampleCount {
            expected,
            actual: samples.len(),
        });
    }

    debug!(
        width,
        height,
        channels = channels.count(),
        max_value,
        "Decoded plain PNM image"
    );

    Ok(PixelBuffer::new(width, height, channels, max_value, samples)?)
}

/// Read and parse a plain-text PGM or PPM file.
pub fn load_pnm(path: impl AsRef<Path>) -> Result<PixelBuffer, DecodeError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)
        .map_err(|e| DecodeError::IoError(format!("{}: {}", path.display(), e)))?;
    decode_pnm(&text)
}

fn parse_header(token: Option<&str>, field: &'static str) -> Result<u32, DecodeError> {
    let token = token.ok_or(DecodeError::MissingHeader(field))?;
    token.parse().map_err(|_| DecodeError::InvalidNumber {
        field,
        token: token.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_grayscale() {
        let img = decode_pnm("P2\n2\n2\n255\n0\n1\n2\n3\n").unwrap();

        assert_eq!(img.dimensions(), (2, 2));
        assert_eq!(img.channels(), Channels::Grayscale);
        assert_eq!(img.max_value(), 255);
        assert_eq!(img.samples(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_decode_color_single_line() {
        let img = decode_pnm("P3 2 1 15 1 2 3 4 5 6").unwrap();

        assert_eq!(img.channels(), Channels::Color);
        assert_eq!(img.samples(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_skips_comments() {
        let text = "P2\n# created by hand\n3 1 # width height\n9\n1 2 3 # row 0\n";
        let img = decode_pnm(text).unwrap();
        assert_eq!(img.samples(), &[1, 2, 3]);
    }

    #[test]
    fn test_decode_unknown_magic() {
        let err = decode_pnm("P6\n1 1\n255\n0 0 0").unwrap_err();
        assert_eq!(err, DecodeError::UnsupportedFormat("P6".to_string()));
    }

    #[test]
    fn test_decode_empty_input() {
        assert_eq!(
            decode_pnm("").unwrap_err(),
            DecodeError::MissingHeader("format")
        );
    }

    #[test]
    fn test_decode_truncated_header() {
        assert_eq!(
            decode_pnm("P2 4 4").unwrap_err(),
            DecodeError::MissingHeader("max value")
        );
    }

    #[test]
    fn test_decode_too_large() {
        let err = decode_pnm("P2 501 10 255").unwrap_err();
        assert!(matches!(err, DecodeError::TooLarge { width: 501, .. }));
    }

    #[test]
    fn test_decode_zero_dimension() {
        let err = decode_pnm("P2 0 10 255").unwrap_err();
        assert!(matches!(err, DecodeError::EmptyDimensions { .. }));
    }

    #[test]
    fn test_decode_sample_count_short() {
        let err = decode_pnm("P2 2 2 255 1 2 3").unwrap_err();
        assert_eq!(
            err,
            DecodeError::SampleCount {
                expected: 4,
                actual: 3
            }
        );
    }

    #[test]
    fn test_decode_sample_count_long() {
        let err = decode_pnm("P2 1 1 255 1 2").unwrap_err();
        assert!(matches!(err, DecodeError::SampleCount { actual: 2, .. }));
    }

    #[test]
    fn test_decode_surplus_stops_before_parsing() {
        // The trailing tokens are never parsed as samples
        let err = decode_pnm("P2 1 1 255 1 junk 99999").unwrap_err();
        assert_eq!(
            err,
            DecodeError::SampleCount {
                expected: 1,
                actual: 3
            }
        );
    }

    #[test]
    fn test_decode_sample_above_max() {
        let err = decode_pnm("P2 2 1 10 3 11").unwrap_err();
        assert_eq!(
            err,
            DecodeError::SampleOutOfRange {
                index: 1,
                value: 11,
                max_value: 10
            }
        );
    }

    #[test]
    fn test_decode_invalid_sample() {
        let err = decode_pnm("P2 2 1 10 3 x").unwrap_err();
        assert!(matches!(err, DecodeError::InvalidNumber { field: "sample", .. }));
    }

    #[test]
    fn test_decode_invalid_max_value() {
        assert_eq!(
            decode_pnm("P2 1 1 70000 0").unwrap_err(),
            DecodeError::InvalidMaxValue(70000)
        );
        assert_eq!(
            decode_pnm("P2 1 1 0 0").unwrap_err(),
            DecodeError::InvalidMaxValue(0)
        );
    }

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::SampleCount {
            expected: 16,
            actual: 15,
        };
        assert_eq!(err.to_string(), "Image size (16) does not match data read (15)");
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_pnm("/nonexistent/image.pgm").unwrap_err();
        assert!(matches!(err, DecodeError::IoError(_)));
    }
}
