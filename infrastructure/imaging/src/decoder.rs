//! Upload decoding.
//!
//! | Input | Path |
//! |---|---|
//! | PNG, JPEG, WebP, TIFF, GIF, BMP | `image` crate, in memory, format guessed from content |
//! | HEIC/HEIF | bytes staged to a temp file, external converter to JPEG, JPEG read back |
//!
//! Whatever the source, the result is narrowed to 8-bit samples in one of
//! the luma, luma+alpha, RGB or RGBA layouts.

use std::io::Cursor;
use std::sync::Arc;

use business::domain::logger::Logger;
use business::domain::receipt::errors::ReceiptError;
use business::domain::receipt::model::{DecodedImage, UploadedImage};
use business::domain::receipt::services::ImageDecoderService;
use business::domain::receipt::value_objects::ChannelLayout;
use image::{ColorType, DynamicImage, ImageError, ImageReader};

use crate::config::ImagingConfig;
use crate::heic::HeicConverter;
use crate::temp_files::{TempFileScope, unique_path};

pub struct RustImageDecoder {
    config: ImagingConfig,
    converter: HeicConverter,
    logger: Arc<dyn Logger>,
}

impl RustImageDecoder {
    pub fn new(config: ImagingConfig, logger: Arc<dyn Logger>) -> Self {
        let converter = HeicConverter::new(config.heic_converter.clone());
        Self {
            config,
            converter,
            logger,
        }
    }

    fn decode_heic(&self, upload: &UploadedImage) -> Result<DecodedImage, ReceiptError> {
        let mut scope = TempFileScope::new(self.logger.clone());
        let temp_dir = &self.config.temp_dir;
        let heic_path = scope.register(unique_path(temp_dir, &upload.filename, "heic"));
        let jpeg_path = scope.register(unique_path(temp_dir, &upload.filename, "jpg"));

        let result = std::fs::write(&heic_path, &upload.bytes)
            .map_err(|e| {
                ReceiptError::UnsupportedFormat(format!(
                    "cannot stage HEIC upload at {}: {}",
                    heic_path.display(),
                    e
                ))
            })
            .and_then(|()| self.converter.convert(&heic_path, &jpeg_path))
            .and_then(|()| {
                std::fs::read(&jpeg_path).map_err(|e| {
                    ReceiptError::CorruptImage(format!(
                        "HEIC converter produced no output at {}: {}",
                        jpeg_path.display(),
                        e
                    ))
                })
            })
            .and_then(|jpeg| decode_bytes(&jpeg));

        // Warnings are logged by the scope; they never replace the outcome.
        scope.cleanup();
        result
    }
}

impl ImageDecoderService for RustImageDecoder {
    fn decode(&self, upload: &UploadedImage) -> Result<DecodedImage, ReceiptError> {
        let decoded = if upload.format_hint.is_heic() {
            self.logger
                .debug(&format!("Converting HEIC upload {}", upload.filename));
            self.decode_heic(upload)?
        } else {
            decode_bytes(&upload.bytes)?
        };

        self.logger.debug(&format!(
            "Decoded {} as {}x{} {}",
            upload.filename,
            decoded.width(),
            decoded.height(),
            decoded.layout()
        ));
        Ok(decoded)
    }
}

/// Decodes an in-memory image, guessing the format from its content.
pub fn decode_bytes(bytes: &[u8]) -> Result<DecodedImage, ReceiptError> {
    if bytes.is_empty() {
        return Err(ReceiptError::CorruptImage("empty image data".to_string()));
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ReceiptError::CorruptImage(format!("format detection failed: {}", e)))?;

    if reader.format().is_none() {
        return Err(ReceiptError::CorruptImage(
            "unrecognized image data".to_string(),
        ));
    }

    let image = reader.decode().map_err(map_image_error)?;
    into_decoded(image)
}

fn map_image_error(error: ImageError) -> ReceiptError {
    match error {
        ImageError::Unsupported(e) => ReceiptError::UnsupportedFormat(e.to_string()),
        other => ReceiptError::CorruptImage(other.to_string()),
    }
}

fn into_decoded(image: DynamicImage) -> Result<DecodedImage, ReceiptError> {
    let (width, height) = (image.width(), image.height());
    let color = image.color();

    let (layout, pixels) = match color {
        ColorType::L8 | ColorType::L16 => (ChannelLayout::Luma, image.into_luma8().into_raw()),
        ColorType::La8 | ColorType::La16 => {
            (ChannelLayout::LumaAlpha, image.into_luma_alpha8().into_raw())
        }
        c if c.has_alpha() => (ChannelLayout::Rgba, image.into_rgba8().into_raw()),
        _ => (ChannelLayout::Rgb, image.into_rgb8().into_raw()),
    };

    DecodedImage::new(width, height, layout, pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeicConverterConfig;
    use crate::test_helpers::{RecordingLogger, encode, jpeg_fixture, rgba_fixture};
    use image::{GrayAlphaImage, GrayImage, ImageFormat, LumaA, Rgb, RgbImage};

    fn decoder_in(dir: &std::path::Path, converter: HeicConverterConfig) -> RustImageDecoder {
        let config = ImagingConfig {
            temp_dir: dir.to_path_buf(),
            heic_converter: converter,
            ..ImagingConfig::default()
        };
        RustImageDecoder::new(config, RecordingLogger::shared())
    }

    fn dir_is_empty(dir: &std::path::Path) -> bool {
        std::fs::read_dir(dir).unwrap().next().is_none()
    }

    #[test]
    fn should_decode_png_with_alpha_as_rgba() {
        let bytes = encode(&rgba_fixture(), ImageFormat::Png);

        let decoded = decode_bytes(&bytes).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (4, 3));
        assert_eq!(decoded.layout(), ChannelLayout::Rgba);
        assert_eq!(&decoded.pixels()[..4], &[0, 0, 0, 0]);
    }

    #[test]
    fn should_decode_grayscale_png_as_luma() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, image::Luma([90])));

        let decoded = decode_bytes(&encode(&gray, ImageFormat::Png)).unwrap();

        assert_eq!(decoded.layout(), ChannelLayout::Luma);
        assert_eq!(decoded.pixels(), &[90, 90, 90, 90]);
    }

    #[test]
    fn should_decode_gray_alpha_png_as_luma_alpha() {
        let image = DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(1, 1, LumaA([10, 0])));

        let decoded = decode_bytes(&encode(&image, ImageFormat::Png)).unwrap();

        assert_eq!(decoded.layout(), ChannelLayout::LumaAlpha);
    }

    #[test]
    fn should_narrow_sixteen_bit_rgb_to_eight_bit() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(3, 2, Rgb([1, 2, 3])));
        let wide = DynamicImage::ImageRgb16(image.to_rgb16());

        let decoded = decode_bytes(&encode(&wide, ImageFormat::Png)).unwrap();

        assert_eq!(decoded.layout(), ChannelLayout::Rgb);
        assert_eq!(decoded.pixels().len(), 3 * 2 * 3);
        assert_eq!(&decoded.pixels()[..3], &[1, 2, 3]);
    }

    #[test]
    fn should_decode_jpeg_as_rgb() {
        let decoded = decode_bytes(&jpeg_fixture(8, 5)).unwrap();

        assert_eq!(decoded.layout(), ChannelLayout::Rgb);
        assert_eq!((decoded.width(), decoded.height()), (8, 5));
    }

    #[test]
    fn should_reject_empty_input_as_corrupt() {
        assert!(matches!(
            decode_bytes(&[]),
            Err(ReceiptError::CorruptImage(_))
        ));
    }

    #[test]
    fn should_reject_unknown_bytes_as_corrupt() {
        assert!(matches!(
            decode_bytes(b"definitely not an image"),
            Err(ReceiptError::CorruptImage(_))
        ));
    }

    #[test]
    fn should_reject_truncated_png_as_corrupt() {
        let bytes = encode(&rgba_fixture(), ImageFormat::Png);

        let result = decode_bytes(&bytes[..bytes.len() / 2]);

        assert!(matches!(result, Err(ReceiptError::CorruptImage(_))));
    }

    #[test]
    fn should_decode_non_heic_uploads_without_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let decoder = decoder_in(dir.path(), HeicConverterConfig::default());
        let upload = UploadedImage::new(jpeg_fixture(4, 4), Some("image/jpeg"), "r.jpg");

        let decoded = decoder.decode(&upload).unwrap();

        assert_eq!(decoded.width(), 4);
        assert!(dir_is_empty(dir.path()));
    }

    #[test]
    fn should_clean_up_temp_files_when_heic_converter_is_missing() {
        let dir = tempfile::tempdir().unwrap();
        let decoder = decoder_in(
            dir.path(),
            HeicConverterConfig {
                program: "definitely-not-an-installed-heic-converter".to_string(),
                args: vec!["{input}".to_string(), "{output}".to_string()],
            },
        );
        let upload = UploadedImage::new(vec![0, 0, 0, 24], Some("image/heic"), "IMG_1.HEIC");

        let result = decoder.decode(&upload);

        assert!(matches!(result, Err(ReceiptError::UnsupportedFormat(_))));
        assert!(dir_is_empty(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn should_clean_up_temp_files_when_heic_conversion_fails() {
        let dir = tempfile::tempdir().unwrap();
        let decoder = decoder_in(
            dir.path(),
            HeicConverterConfig {
                program: "false".to_string(),
                args: vec![],
            },
        );
        let upload = UploadedImage::new(vec![0, 0, 0, 24], Some("image/heic"), "IMG_2.HEIC");

        let result = decoder.decode(&upload);

        assert!(matches!(result, Err(ReceiptError::CorruptImage(_))));
        assert!(dir_is_empty(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn should_decode_converter_output_and_clean_up() {
        // `cp` stands in for a real converter: the "HEIC" bytes are a JPEG.
        let dir = tempfile::tempdir().unwrap();
        let decoder = decoder_in(
            dir.path(),
            HeicConverterConfig {
                program: "cp".to_string(),
                args: vec!["{input}".to_string(), "{output}".to_string()],
            },
        );
        let upload = UploadedImage::new(jpeg_fixture(6, 2), Some("image/heic"), "IMG_3.HEIC");

        let decoded = decoder.decode(&upload).unwrap();

        assert_eq!((decoded.width(), decoded.height()), (6, 2));
        assert!(dir_is_empty(dir.path()));
    }

    #[cfg(unix)]
    #[test]
    fn should_report_undecodable_converter_output_as_corrupt_and_clean_up() {
        let dir = tempfile::tempdir().unwrap();
        let decoder = decoder_in(
            dir.path(),
            HeicConverterConfig {
                program: "cp".to_string(),
                args: vec!["{input}".to_string(), "{output}".to_string()],
            },
        );
        let upload = UploadedImage::new(
            b"not an image at all".to_vec(),
            Some("image/heic"),
            "IMG_4.HEIC",
        );

        let result = decoder.decode(&upload);

        assert!(matches!(result, Err(ReceiptError::CorruptImage(_))));
        assert!(dir_is_empty(dir.path()));
    }
}
