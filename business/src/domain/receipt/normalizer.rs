//! Color normalization into the canonical RGB representation.
//!
//! Transparent sources are composited over an opaque white background using
//! `out = src * alpha + 255 * (1 - alpha)`, per pixel and per channel.

use super::model::{CanonicalImage, DecodedImage};
use super::value_objects::ChannelLayout;

const WHITE: u8 = 255;

/// Converts any decoded layout into a three channel opaque image.
/// RGB input is passed through untouched.
pub fn normalize(image: DecodedImage) -> CanonicalImage {
    let (width, height, layout, pixels) = image.into_parts();

    let rgb = match layout {
        ChannelLayout::Rgb => pixels,
        ChannelLayout::Rgba => pixels
            .chunks_exact(4)
            .flat_map(|px| {
                let alpha = px[3];
                [
                    over_white(px[0], alpha),
                    over_white(px[1], alpha),
                    over_white(px[2], alpha),
                ]
            })
            .collect(),
        ChannelLayout::LumaAlpha => pixels
            .chunks_exact(2)
            .flat_map(|px| {
                let value = over_white(px[0], px[1]);
                [value, value, value]
            })
            .collect(),
        ChannelLayout::Luma => pixels.iter().flat_map(|&v| [v, v, v]).collect(),
        ChannelLayout::Cmyk => pixels
            .chunks_exact(4)
            .flat_map(|px| {
                let key = px[3];
                [
                    cmyk_channel(px[0], key),
                    cmyk_channel(px[1], key),
                    cmyk_channel(px[2], key),
                ]
            })
            .collect(),
    };

    // Input length was validated by DecodedImage, so the RGB length holds too.
    CanonicalImage::from_validated(width, height, rgb)
}

fn over_white(source: u8, alpha: u8) -> u8 {
    let source = source as u32;
    let alpha = alpha as u32;
    let blended = source * alpha + WHITE as u32 * (255 - alpha);
    ((blended + 127) / 255) as u8
}

fn cmyk_channel(ink: u8, key: u8) -> u8 {
    let value = (255 - ink as u32) * (255 - key as u32);
    ((value + 127) / 255) as u8
}
