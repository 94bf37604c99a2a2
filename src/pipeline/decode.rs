//! Image payload decoding: data URL → media subtype + base64 data.
//!
//! The browser-side presentation layer produces `FileReader`-style data URLs
//! (`data:image/png;base64,iVBOR...`). This stage splits that string into
//! the `(subtype, data)` pair the Messages API wants, and nothing more: no
//! re-encoding, no subtype allow-list, no size check. Validation of the
//! actual image bytes is delegated to the model API, which rejects invalid
//! media itself — duplicating that here would only drift out of sync with
//! whatever the API accepts.

use crate::error::GenerateError;
use once_cell::sync::Lazy;
use regex::Regex;

/// An image payload decoded from a data URL. Lives for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    /// Media subtype, e.g. `png` or `jpeg` (whatever the data URL claimed).
    pub subtype: String,
    /// The base64 payload, passed through unchanged.
    pub data: String,
}

impl DecodedImage {
    /// The full media type, e.g. `image/png`.
    pub fn media_type(&self) -> String {
        format!("image/{}", self.subtype)
    }
}

// `(?s)` lets `.` span newlines: the encoded data is defined as the entire
// remainder of the string, whatever it contains.
static RE_DATA_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^data:image/([A-Za-z]+);base64,(.*)$").unwrap());

/// Decode a `data:image/<subtype>;base64,<data>` string.
///
/// The subtype must be one or more alphabetic characters; anything that does
/// not match the grammar fails with [`GenerateError::MalformedImage`].
pub fn decode_data_url(payload: &str) -> Result<DecodedImage, GenerateError> {
    let caps = RE_DATA_URL
        .captures(payload)
        .ok_or(GenerateError::MalformedImage)?;

    Ok(DecodedImage {
        subtype: caps[1].to_string(),
        data: caps[2].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_png_data_url() {
        let img = decode_data_url("data:image/png;base64,iVBORw0KGgoAAAA").unwrap();
        assert_eq!(img.subtype, "png");
        assert_eq!(img.data, "iVBORw0KGgoAAAA");
        assert_eq!(img.media_type(), "image/png");
    }

    #[test]
    fn decodes_jpeg_data_url() {
        let img = decode_data_url("data:image/jpeg;base64,/9j/4AAQ").unwrap();
        assert_eq!(img.subtype, "jpeg");
        assert_eq!(img.data, "/9j/4AAQ");
    }

    #[test]
    fn any_alphabetic_subtype_passes_through() {
        // No allow-list: the upstream API decides what media it accepts.
        let img = decode_data_url("data:image/webp;base64,UklGR").unwrap();
        assert_eq!(img.subtype, "webp");
    }

    #[test]
    fn empty_data_is_grammatical() {
        let img = decode_data_url("data:image/png;base64,").unwrap();
        assert_eq!(img.data, "");
    }

    #[test]
    fn data_may_span_lines() {
        let img = decode_data_url("data:image/png;base64,AAAA\nBBBB").unwrap();
        assert_eq!(img.data, "AAAA\nBBBB");
    }

    #[test]
    fn rejects_missing_prefix() {
        assert!(matches!(
            decode_data_url("iVBORw0KGgo"),
            Err(GenerateError::MalformedImage)
        ));
    }

    #[test]
    fn rejects_empty_subtype() {
        assert!(decode_data_url("data:image/;base64,AAAA").is_err());
    }

    #[test]
    fn rejects_non_alphabetic_subtype() {
        assert!(decode_data_url("data:image/svg+xml;base64,AAAA").is_err());
    }

    #[test]
    fn rejects_non_image_media_type() {
        assert!(decode_data_url("data:text/plain;base64,aGVsbG8=").is_err());
    }

    #[test]
    fn rejects_missing_base64_marker() {
        assert!(decode_data_url("data:image/png;base65,AAAA").is_err());
        assert!(decode_data_url("data:image/png,AAAA").is_err());
    }

    #[test]
    fn rejects_trailing_garbage_before_prefix() {
        assert!(decode_data_url(" data:image/png;base64,AAAA").is_err());
    }
}
