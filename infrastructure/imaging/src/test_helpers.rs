//! Shared helpers for the imaging tests: a logger that records what it is
//! told and small in-memory image fixtures.

use std::io::Cursor;
use std::sync::{Arc, Mutex};

use business::domain::logger::Logger;
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};

#[derive(Default)]
pub struct RecordingLogger {
    pub warnings: Mutex<Vec<String>>,
}

impl RecordingLogger {
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warnings.lock().unwrap().clone()
    }
}

impl Logger for RecordingLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, message: &str) {
        self.warnings.lock().unwrap().push(message.to_string());
    }
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// Encodes `image` in `format` and returns the file bytes.
pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

/// 4x3 RGBA image whose left column is fully transparent.
pub fn rgba_fixture() -> DynamicImage {
    let mut image = RgbaImage::from_pixel(4, 3, Rgba([200, 10, 10, 255]));
    for y in 0..3 {
        image.put_pixel(0, y, Rgba([0, 0, 0, 0]));
    }
    DynamicImage::ImageRgba8(image)
}

pub fn jpeg_fixture(width: u32, height: u32) -> Vec<u8> {
    encode(&DynamicImage::new_rgb8(width, height), ImageFormat::Jpeg)
}
