//! PNG preview export.
//!
//! Plain PNM is rarely viewable directly, so the result can also be written
//! as PNG. Samples are rescaled to 8 or 16 bits by
//! [`PixelBuffer::to_dynamic_image`].

use std::io::Cursor;
use std::path::Path;

use image::ImageFormat;

use super::EncodeError;
use crate::buffer::PixelBuffer;

/// Encode a buffer as PNG bytes.
pub fn encode_png(image: &PixelBuffer) -> Result<Vec<u8>, EncodeError> {
    let dynamic = image.to_dynamic_image().ok_or_else(|| {
        EncodeError::Unsupported(format!("maximum sample value {}", image.max_value()))
    })?;

    let mut buffer = Cursor::new(Vec::new());
    dynamic
        .write_to(&mut buffer, ImageFormat::Png)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}

/// Write a PNG preview of the buffer to `path`.
pub fn save_png(image: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), EncodeError> {
    let path = path.as_ref();
    let bytes = encode_png(image)?;
    std::fs::write(path, bytes)
        .map_err(|e| EncodeError::IoError(format!("{}: {}", path.display(), e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Channels;

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    #[test]
    fn test_encode_png_grayscale() {
        let img = PixelBuffer::new(4, 4, Channels::Grayscale, 255, (0..16).collect()).unwrap();
        let png = encode_png(&img).unwrap();

        assert_eq!(&png[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_decodes_back() {
        let img = PixelBuffer::new(2, 1, Channels::Color, 255, vec![255, 0, 0, 0, 0, 255]).unwrap();
        let png = encode_png(&img).unwrap();

        let decoded = image::load_from_memory_with_format(&png, ImageFormat::Png)
            .unwrap()
            .into_rgb8();
        assert_eq!(decoded.dimensions(), (2, 1));
        assert_eq!(decoded.get_pixel(0, 0).0, [255, 0, 0]);
        assert_eq!(decoded.get_pixel(1, 0).0, [0, 0, 255]);
    }

    #[test]
    fn test_encode_png_16bit() {
        let img = PixelBuffer::new(1, 1, Channels::Grayscale, 1023, vec![1023]).unwrap();
        assert!(encode_png(&img).is_ok());
    }

    #[test]
    fn test_encode_png_zero_max_value() {
        let img = PixelBuffer::new(1, 1, Channels::Grayscale, 0, vec![0]).unwrap();
        assert!(matches!(encode_png(&img), Err(EncodeError::Unsupported(_))));
    }

    #[test]
    fn test_save_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preview.png");
        let img = PixelBuffer::new(3, 3, Channels::Grayscale, 8, vec![4; 9]).unwrap();

        save_png(&img, &path).unwrap();
        assert_eq!(&std::fs::read(&path).unwrap()[0..8], &PNG_SIGNATURE);
    }
}
