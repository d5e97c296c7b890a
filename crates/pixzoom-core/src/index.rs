//! Sample layout of a [`PixelBuffer`](crate::PixelBuffer).
//!
//! Samples are stored row-major with channels interleaved per pixel:
//!
//! ```text
//! row 0: [p(0,0).c0, p(0,0).c1, p(0,0).c2, p(0,1).c0, ...]
//! row 1: [p(1,0).c0, ...]
//! ```
//!
//! [`offset`] is the only place this layout is spelled out. Transforms that
//! build a new buffer compute destination offsets with the *new* width.

/// Linear offset of sample `(row, col, channel)` in a buffer of the given
/// width and channel count.
#[inline]
pub fn offset(row: usize, col: usize, channel: usize, width: usize, channel_count: usize) -> usize {
    row * width * channel_count + col * channel_count + channel
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: offset visits every slot of the buffer exactly once.
        #[test]
        fn prop_offset_is_bijective(
            width in 1usize..=24,
            height in 1usize..=24,
            channel_count in prop::sample::select(vec![1usize, 3]),
        ) {
            let len = width * height * channel_count;
            let mut seen = vec![false; len];

            for row in 0..height {
                for col in 0..width {
                    for channel in 0..channel_count {
                        let idx = offset(row, col, channel, width, channel_count);
                        prop_assert!(idx < len, "offset {} out of range {}", idx, len);
                        prop_assert!(!seen[idx], "offset {} produced twice", idx);
                        seen[idx] = true;
                    }
                }
            }

            prop_assert!(seen.iter().all(|&s| s));
        }
    }
}
