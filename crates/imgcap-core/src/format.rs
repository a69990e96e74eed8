//! Supported image formats and their MIME identifiers.

use serde::{Deserialize, Serialize};

use crate::compress::ValidationError;

/// The four formats the compressor accepts as input and produces as output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ImageFormat {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
    #[serde(rename = "image/webp")]
    Webp,
    #[serde(rename = "image/avif")]
    Avif,
}

impl ImageFormat {
    /// Every supported format, in the order they are listed to callers.
    pub const ALL: [ImageFormat; 4] = [
        ImageFormat::Png,
        ImageFormat::Jpeg,
        ImageFormat::Webp,
        ImageFormat::Avif,
    ];

    /// Parse a MIME type such as `image/png`.
    ///
    /// Matching ignores ASCII case and surrounding whitespace. Anything other
    /// than the four supported types is a validation error.
    pub fn from_mime(mime: &str) -> Result<Self, ValidationError> {
        let mime = mime.trim();
        Self::ALL
            .into_iter()
            .find(|format| format.mime_type().eq_ignore_ascii_case(mime))
            .ok_or_else(|| ValidationError::UnsupportedFormat(mime.to_string()))
    }

    /// The MIME type string for this format.
    pub const fn mime_type(self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
            ImageFormat::Avif => "image/avif",
        }
    }

    /// Convert to the image crate's format tag.
    pub fn to_image_format(self) -> image::ImageFormat {
        match self {
            ImageFormat::Jpeg => image::ImageFormat::Jpeg,
            ImageFormat::Png => image::ImageFormat::Png,
            ImageFormat::Webp => image::ImageFormat::WebP,
            ImageFormat::Avif => image::ImageFormat::Avif,
        }
    }
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mime_type())
    }
}

impl std::str::FromStr for ImageFormat {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_mime(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime_supported() {
        assert_eq!(ImageFormat::from_mime("image/jpeg").unwrap(), ImageFormat::Jpeg);
        assert_eq!(ImageFormat::from_mime("image/png").unwrap(), ImageFormat::Png);
        assert_eq!(ImageFormat::from_mime("image/webp").unwrap(), ImageFormat::Webp);
        assert_eq!(ImageFormat::from_mime("image/avif").unwrap(), ImageFormat::Avif);
    }

    #[test]
    fn test_from_mime_case_and_whitespace() {
        assert_eq!(ImageFormat::from_mime(" IMAGE/PNG ").unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_from_mime_unsupported() {
        let err = ImageFormat::from_mime("text/plain").unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedFormat(ref m) if m == "text/plain"));
        assert_eq!(
            err.to_string(),
            "Only PNG, JPEG, WebP and AVIF images are supported."
        );

        assert!(ImageFormat::from_mime("image/gif").is_err());
        assert!(ImageFormat::from_mime("").is_err());
    }

    #[test]
    fn test_mime_round_trip_through_display() {
        for format in ImageFormat::ALL {
            assert_eq!(format.to_string().parse::<ImageFormat>().unwrap(), format);
        }
    }

    #[test]
    fn test_serde_uses_mime_names() {
        let format: ImageFormat = serde::de::Deserialize::deserialize(
            serde::de::value::StrDeserializer::<serde::de::value::Error>::new("image/webp"),
        )
        .unwrap();
        assert_eq!(format, ImageFormat::Webp);
    }
}
