use base64::{Engine, engine::general_purpose::STANDARD};

use super::errors::ReceiptError;
use super::value_objects::{ChannelLayout, ImageFormatHint};

/// Raw upload as received from the form.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub bytes: Vec<u8>,
    pub format_hint: ImageFormatHint,
    pub filename: String,
}

impl UploadedImage {
    pub fn new(bytes: Vec<u8>, mime_type: Option<&str>, filename: impl Into<String>) -> Self {
        let filename = filename.into();
        let format_hint = ImageFormatHint::detect(mime_type, &filename);
        Self {
            bytes,
            format_hint,
            filename,
        }
    }
}

/// Interleaved 8-bit pixels straight out of a decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    width: u32,
    height: u32,
    layout: ChannelLayout,
    pixels: Vec<u8>,
}

impl DecodedImage {
    pub fn new(
        width: u32,
        height: u32,
        layout: ChannelLayout,
        pixels: Vec<u8>,
    ) -> Result<Self, ReceiptError> {
        let expected = width as usize * height as usize * layout.channels();
        if pixels.len() != expected {
            return Err(ReceiptError::CorruptImage(format!(
                "pixel buffer holds {} bytes, {}x{} {} needs {}",
                pixels.len(),
                width,
                height,
                layout,
                expected
            )));
        }

        Ok(Self {
            width,
            height,
            layout,
            pixels,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ChannelLayout {
        self.layout
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    pub(crate) fn into_parts(self) -> (u32, u32, ChannelLayout, Vec<u8>) {
        (self.width, self.height, self.layout, self.pixels)
    }
}

/// Opaque RGB image ready for JPEG encoding. Always three channels.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalImage {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl CanonicalImage {
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, ReceiptError> {
        let expected = width as usize * height as usize * 3;
        if pixels.len() != expected {
            return Err(ReceiptError::CorruptImage(format!(
                "RGB buffer holds {} bytes, {}x{} needs {}",
                pixels.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub(crate) fn from_validated(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize * 3);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> usize {
        3
    }

    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * 3;
        Some([
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ])
    }
}

/// JPEG bytes of a canonical image, ready for transport.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedPayload {
    pub jpeg: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

impl EncodedPayload {
    /// Standard alphabet, padded, no line wraps.
    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.jpeg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_detect_format_hint_on_upload() {
        let upload = UploadedImage::new(vec![1, 2, 3], Some("image/heic"), "IMG_1.HEIC");
        assert!(upload.format_hint.is_heic());
        assert_eq!(upload.filename, "IMG_1.HEIC");
    }

    #[test]
    fn should_reject_decoded_buffer_with_wrong_length() {
        let result = DecodedImage::new(2, 2, ChannelLayout::Rgba, vec![0; 12]);
        assert!(matches!(result, Err(ReceiptError::CorruptImage(_))));
    }

    #[test]
    fn should_accept_decoded_buffer_with_matching_length() {
        let image =
            DecodedImage::new(2, 1, ChannelLayout::LumaAlpha, vec![0, 255, 10, 128]).unwrap();
        assert_eq!(image.width(), 2);
        assert_eq!(image.height(), 1);
        assert_eq!(image.layout(), ChannelLayout::LumaAlpha);
    }

    #[test]
    fn should_read_canonical_pixel() {
        let image = CanonicalImage::from_rgb(2, 1, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(image.pixel(1, 0), Some([4, 5, 6]));
        assert_eq!(image.pixel(2, 0), None);
        assert_eq!(image.channels(), 3);
    }

    #[test]
    fn should_encode_payload_as_standard_base64() {
        let payload = EncodedPayload {
            jpeg: vec![0xFF, 0xD8, 0xFF, 0xE0],
            width: 1,
            height: 1,
        };
        assert_eq!(payload.to_base64(), "/9j/4A==");
    }
}
