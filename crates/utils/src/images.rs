use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use std::io::Cursor;
use thiserror::Error;

/// Longest allowed edge of a posted image, in pixels.
const MAX_EDGE: u32 = 1280;
const JPEG_QUALITY: u8 = 75;

#[derive(Debug, Error)]
pub enum PrepareImageError {
    #[error("uploaded bytes are not a decodable image: {0}")]
    Decode(#[source] image::ImageError),
    #[error("failed to re-encode image: {0}")]
    Encode(#[source] image::ImageError),
}

/// Turn raw uploaded bytes into the opaque blob a reminder embeds.
///
/// Validates that the bytes decode as an image, downsamples so the longer
/// edge is at most 1280 px (preserving aspect ratio), re-encodes as JPEG at
/// fixed quality and returns the base64 of the result.
pub fn prepare_image(raw: &[u8]) -> Result<String, PrepareImageError> {
    let decoded = image::load_from_memory(raw).map_err(PrepareImageError::Decode)?;

    let (width, height) = (decoded.width(), decoded.height());
    let resized = if width.max(height) > MAX_EDGE {
        decoded.thumbnail(MAX_EDGE, MAX_EDGE)
    } else {
        decoded
    };

    // JPEG has no alpha channel
    let rgb = resized.to_rgb8();
    let mut buffer = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut buffer, JPEG_QUALITY);
    rgb.write_with_encoder(encoder)
        .map_err(PrepareImageError::Encode)?;

    Ok(STANDARD.encode(buffer.into_inner()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, ImageFormat, RgbaImage};

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            image::Rgba([10, 20, 30, 255]),
        ));
        let mut buffer = Cursor::new(Vec::new());
        img.write_to(&mut buffer, ImageFormat::Png).unwrap();
        buffer.into_inner()
    }

    fn decode(blob: &str) -> DynamicImage {
        let bytes = STANDARD.decode(blob).unwrap();
        image::load_from_memory(&bytes).unwrap()
    }

    #[test]
    fn downsamples_oversized_images_preserving_aspect_ratio() {
        let blob = prepare_image(&png_bytes(2000, 1000)).unwrap();
        let img = decode(&blob);
        assert_eq!(img.width(), 1280);
        assert_eq!(img.height(), 640);
    }

    #[test]
    fn small_images_keep_their_dimensions() {
        let blob = prepare_image(&png_bytes(640, 480)).unwrap();
        let img = decode(&blob);
        assert_eq!((img.width(), img.height()), (640, 480));
    }

    #[test]
    fn output_is_jpeg() {
        let blob = prepare_image(&png_bytes(64, 64)).unwrap();
        let bytes = STANDARD.decode(blob).unwrap();
        assert_eq!(
            image::guess_format(&bytes).unwrap(),
            image::ImageFormat::Jpeg
        );
    }

    #[test]
    fn rejects_bytes_that_are_not_an_image() {
        let err = prepare_image(b"definitely not an image").unwrap_err();
        assert!(matches!(err, PrepareImageError::Decode(_)));
    }
}
