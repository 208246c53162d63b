/// Format declared by the uploader, used to pick the decode path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageFormatHint {
    Heic,
    Png,
    Jpeg,
    Other(String),
}

impl ImageFormatHint {
    /// Resolves the hint from the declared MIME type, falling back to the
    /// filename extension when the MIME type is missing or generic.
    pub fn detect(mime_type: Option<&str>, filename: &str) -> Self {
        let from_mime = mime_type
            .map(|m| m.trim().to_ascii_lowercase())
            .and_then(|m| match m.as_str() {
                "image/heic" | "image/heif" => Some(ImageFormatHint::Heic),
                "image/png" => Some(ImageFormatHint::Png),
                "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageFormatHint::Jpeg),
                "" | "application/octet-stream" => None,
                other => Some(ImageFormatHint::Other(other.to_string())),
            });

        if let Some(hint) = from_mime {
            return hint;
        }

        let extension = std::path::Path::new(filename)
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match extension.as_str() {
            "heic" | "heif" => ImageFormatHint::Heic,
            "png" => ImageFormatHint::Png,
            "jpg" | "jpeg" => ImageFormatHint::Jpeg,
            other => ImageFormatHint::Other(other.to_string()),
        }
    }

    pub fn is_heic(&self) -> bool {
        matches!(self, ImageFormatHint::Heic)
    }
}

impl std::fmt::Display for ImageFormatHint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormatHint::Heic => write!(f, "heic"),
            ImageFormatHint::Png => write!(f, "png"),
            ImageFormatHint::Jpeg => write!(f, "jpeg"),
            ImageFormatHint::Other(other) if other.is_empty() => write!(f, "unknown"),
            ImageFormatHint::Other(other) => write!(f, "{}", other),
        }
    }
}

/// Channel layout of a decoded 8-bit pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelLayout {
    Luma,
    LumaAlpha,
    Rgb,
    Rgba,
    /// Four-channel ink data. The `image` crate already converts CMYK JPEGs to
    /// RGB, so only other decoders behind the port produce this layout.
    Cmyk,
}

impl ChannelLayout {
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Luma => 1,
            ChannelLayout::LumaAlpha => 2,
            ChannelLayout::Rgb => 3,
            ChannelLayout::Rgba => 4,
            ChannelLayout::Cmyk => 4,
        }
    }
}

impl std::fmt::Display for ChannelLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelLayout::Luma => write!(f, "L"),
            ChannelLayout::LumaAlpha => write!(f, "LA"),
            ChannelLayout::Rgb => write!(f, "RGB"),
            ChannelLayout::Rgba => write!(f, "RGBA"),
            ChannelLayout::Cmyk => write!(f, "CMYK"),
        }
    }
}

const PROCESS_RECEIPT_PATH: &str = "/agent/process-receipt/";

/// Base URL of the receipt classification service.
///
/// Trailing slashes are stripped on construction so that the endpoint path
/// can be appended verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEndpoint(String);

impl ServiceEndpoint {
    pub fn parse(raw: &str) -> Result<Self, String> {
        let trimmed = raw.trim().trim_end_matches('/');
        let parsed =
            url::Url::parse(trimmed).map_err(|e| format!("Invalid service URL {}: {}", raw, e))?;

        match parsed.scheme() {
            "http" | "https" => Ok(Self(trimmed.to_string())),
            scheme => Err(format!("Unsupported service URL scheme: {}", scheme)),
        }
    }


    /// Full URL of the receipt processing endpoint (trailing slash included).
    pub fn process_receipt_url(&self) -> String {
        format!("{}{}", self.0, PROCESS_RECEIPT_PATH)
    }
}

impl std::fmt::Display for ServiceEndpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
