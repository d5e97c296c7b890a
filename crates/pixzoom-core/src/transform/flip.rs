//! In-place mirror flips.
//!
//! Only half of the image is walked and each mirrored pair of samples is
//! swapped once. Walking the full range would swap every pair back.

use tracing::debug;

use crate::buffer::PixelBuffer;
use crate::index::offset;

/// Mirror the image left-right.
pub fn flip_horizontal(image: &mut PixelBuffer) {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let channel_count = image.channels().count();
    debug!(width, height, "Flipping horizontally");

    let samples = image.samples_mut();
    for row in 0..height {
        for col in 0..width / 2 {
            for channel in 0..channel_count {
                let src = offset(row, col, channel, width, channel_count);
                let dst = offset(row, width - col - 1, channel, width, channel_count);
                swap_distinct(samples, src, dst);
            }
        }
    }
}

/// Mirror the image top-bottom.
pub fn flip_vertical(image: &mut PixelBuffer) {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let channel_count = image.channels().count();
    debug!(width, height, "Flipping vertically");

    let samples = image.samples_mut();
    for row in 0..height / 2 {
        for col in 0..width {
            for channel in 0..channel_count {
                let src = offset(row, col, channel, width, channel_count);
                let dst = offset(height - row - 1, col, channel, width, channel_count);
                swap_distinct(samples, src, dst);
            }
        }
    }
}

#[inline]
fn swap_distinct(samples: &mut [u16], a: usize, b: usize) {
    if a != b {
        samples.swap(a, b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Channels;

    fn ramp_4x4() -> PixelBuffer {
        PixelBuffer::new(4, 4, Channels::Grayscale, 255, (0..16).collect()).unwrap()
    }

    #[test]
    fn test_flip_horizontal_rows_reversed() {
        let mut img = ramp_4x4();
        flip_horizontal(&mut img);

        assert_eq!(
            img.samples(),
            &[3, 2, 1, 0, 7, 6, 5, 4, 11, 10, 9, 8, 15, 14, 13, 12]
        );
    }

    #[test]
    fn test_flip_vertical_rows_swapped() {
        let mut img = ramp_4x4();
        flip_vertical(&mut img);

        assert_eq!(
            img.samples(),
            &[12, 13, 14, 15, 8, 9, 10, 11, 4, 5, 6, 7, 0, 1, 2, 3]
        );
    }

    #[test]
    fn test_flip_horizontal_odd_width_keeps_center() {
        let mut img = PixelBuffer::new(3, 1, Channels::Grayscale, 255, vec![1, 2, 3]).unwrap();
        flip_horizontal(&mut img);
        assert_eq!(img.samples(), &[3, 2, 1]);
    }

    #[test]
    fn test_flip_vertical_odd_height_keeps_center() {
        let mut img = PixelBuffer::new(1, 3, Channels::Grayscale, 255, vec![1, 2, 3]).unwrap();
        flip_vertical(&mut img);
        assert_eq!(img.samples(), &[3, 2, 1]);
    }

    #[test]
    fn test_flip_horizontal_moves_whole_pixels() {
        // Two RGB pixels: red then green
        let mut img =
            PixelBuffer::new(2, 1, Channels::Color, 255, vec![255, 0, 0, 0, 255, 0]).unwrap();
        flip_horizontal(&mut img);
        assert_eq!(img.samples(), &[0, 255, 0, 255, 0, 0]);
    }

    #[test]
    fn test_flip_vertical_moves_whole_pixels() {
        let mut img =
            PixelBuffer::new(1, 2, Channels::Color, 255, vec![1, 2, 3, 4, 5, 6]).unwrap();
        flip_vertical(&mut img);
        assert_eq!(img.samples(), &[4, 5, 6, 1, 2, 3]);
    }

    #[test]
    fn test_flip_single_pixel_unchanged() {
        let mut img = PixelBuffer::new(1, 1, Channels::Color, 255, vec![7, 8, 9]).unwrap();
        flip_horizontal(&mut img);
        flip_vertical(&mut img);
        assert_eq!(img.samples(), &[7, 8, 9]);
    }

    #[test]
    fn test_flips_keep_dimensions() {
        let mut img = PixelBuffer::new(5, 2, Channels::Color, 9, vec![0; 30]).unwrap();
        flip_horizontal(&mut img);
        flip_vertical(&mut img);
        assert_eq!(img.dimensions(), (5, 2));
        assert_eq!(img.max_value(), 9);
    }
}
