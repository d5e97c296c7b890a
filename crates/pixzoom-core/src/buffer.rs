//! The in-memory pixel model.

use image::{DynamicImage, ImageBuffer, Luma, Rgb};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::index::offset;

/// Errors raised when assembling a [`PixelBuffer`] from raw parts.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    EmptyDimensions { width: u32, height: u32 },

    /// Sample count doesn't match `width * height * channels`.
    #[error("Sample buffer size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// Number of interleaved samples per pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channels {
    /// One sample per pixel (PGM, `P2`).
    Grayscale,
    /// Red, green, blue per pixel (PPM, `P3`).
    Color,
}

impl Channels {
    /// Samples per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Grayscale => 1,
            Channels::Color => 3,
        }
    }

    /// Plain-text PNM magic token for this layout.
    pub fn magic(self) -> &'static str {
        match self {
            Channels::Grayscale => "P2",
            Channels::Color => "P3",
        }
    }

    /// Parse a magic token. Binary variants (`P5`, `P6`) are not recognised.
    pub fn from_magic(magic: &str) -> Option<Self> {
        match magic {
            "P2" => Some(Channels::Grayscale),
            "P3" => Some(Channels::Color),
            _ => None,
        }
    }

    /// Human readable kind, used in log and console messages.
    pub fn describe(self) -> &'static str {
        match self {
            Channels::Grayscale => "Grayscale",
            Channels::Color => "Color",
        }
    }
}

/// An image held as a flat, channel-interleaved sample array.
///
/// The sample vector always holds exactly `width * height * channels.count()`
/// values, laid out as described in [`crate::index`]. Transforms take the
/// buffer by value and hand back its replacement, so the previous storage is
/// dropped exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    max_value: u16,
    samples: Vec<u16>,
}

impl PixelBuffer {
    /// Create a buffer, checking that the sample count matches the dimensions.
    pub fn new(
        width: u32,
        height: u32,
        channels: Channels,
        max_value: u16,
        samples: Vec<u16>,
    ) -> Result<Self, BufferError> {
        if width == 0 || height == 0 {
            return Err(BufferError::EmptyDimensions { width, height });
        }

        let expected = sample_len(width, height, channels);
        if samples.len() != expected {
            return Err(BufferError::SizeMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            max_value,
            samples,
        })
    }

    /// Assemble a buffer produced by a transform.
    ///
    /// A length mismatch here is a bug in the transform, not bad input.
    pub(crate) fn from_parts(
        width: u32,
        height: u32,
        channels: Channels,
        max_value: u16,
        samples: Vec<u16>,
    ) -> Self {
        assert_eq!(
            samples.len(),
            sample_len(width, height, channels),
            "sample buffer size mismatch for {}x{} {:?}",
            width,
            height,
            channels
        );
        Self {
            width,
            height,
            channels,
            max_value,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `(width, height)` in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Declared upper bound of every sample.
    pub fn max_value(&self) -> u16 {
        self.max_value
    }

    pub fn samples(&self) -> &[u16] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u16] {
        &mut self.samples
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Read one sample. Panics if the coordinate is outside the buffer.
    #[inline]
    pub fn sample(&self, row: u32, col: u32, channel: usize) -> u16 {
        assert!(
            row < self.height && col < self.width && channel < self.channels.count(),
            "sample ({}, {}, {}) outside {}x{}x{}",
            row,
            col,
            channel,
            self.width,
            self.height,
            self.channels.count()
        );
        self.samples[offset(
            row as usize,
            col as usize,
            channel,
            self.width as usize,
            self.channels.count(),
        )]
    }

    /// Convert to an `image::DynamicImage` for preview export.
    ///
    /// Samples are rescaled from `0..=max_value` to the full range of the
    /// target depth: 8 bits when `max_value <= 255`, 16 bits otherwise.
    /// Returns `None` for a zero `max_value`.
    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        if self.max_value == 0 {
            return None;
        }
        let max = u32::from(self.max_value);

        if self.max_value <= u16::from(u8::MAX) {
            let data: Vec<u8> = self
                .samples
                .iter()
                .map(|&s| (u32::from(s.min(self.max_value)) * 255 / max) as u8)
                .collect();
            match self.channels {
                Channels::Grayscale => {
                    ImageBuffer::<Luma<u8>, _>::from_raw(self.width, self.height, data)
                        .map(DynamicImage::ImageLuma8)
                }
                Channels::Color => {
                    ImageBuffer::<Rgb<u8>, _>::from_raw(self.width, self.height, data)
                        .map(DynamicImage::ImageRgb8)
                }
            }
        } else {
            let data: Vec<u16> = self
                .samples
                .iter()
                .map(|&s| (u32::from(s.min(self.max_value)) * 65535 / max) as u16)
                .collect();
            match self.channels {
                Channels::Grayscale => {
                    ImageBuffer::<Luma<u16>, _>::from_raw(self.width, self.height, data)
                        .map(DynamicImage::ImageLuma16)
                }
                Channels::Color => {
                    ImageBuffer::<Rgb<u16>, _>::from_raw(self.width, self.height, data)
                        .map(DynamicImage::ImageRgb16)
                }
            }
        }
    }
}

fn sample_len(width: u32, height: u32, channels: Channels) -> usize {
    width as usize * height as usize * channels.count()
}
