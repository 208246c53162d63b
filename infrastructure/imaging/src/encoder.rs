use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::{CanonicalImage, EncodedPayload};
use business::domain::receipt::services::ImageEncoderService;
use image::ExtendedColorType;
use image::codecs::jpeg::JpegEncoder;

/// Baseline JPEG encoder for canonical RGB images.
pub struct JpegImageEncoder {
    quality: u8,
}

impl JpegImageEncoder {
    pub fn new(quality: u8) -> Self {
        Self {
            quality: quality.clamp(1, 100),
        }
    }
}

impl ImageEncoderService for JpegImageEncoder {
    fn encode(&self, image: &CanonicalImage) -> Result<EncodedPayload, ReceiptError> {
        let mut jpeg = Vec::new();
        JpegEncoder::new_with_quality(&mut jpeg, self.quality)
            .encode(
                image.pixels(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| ReceiptError::Encode(e.to_string()))?;

        Ok(EncodedPayload {
            jpeg,
            width: image.width(),
            height: image.height(),
        })
    }
}
