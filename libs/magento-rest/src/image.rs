//! Base64-encoded image payloads of the Magento media gallery interface.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

/// Errors raised when validating image content.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    #[error("malformed base64 image data: {0}")]
    MalformedBase64(#[from] base64::DecodeError),

    #[error("image content is empty")]
    Empty,
}

/// Inline image content as Magento's REST API carries it: the payload
/// base64-encoded next to its MIME type and file name.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageContent {
    pub base64_encoded_data: String,
    #[serde(rename = "type")]
    pub mime_type: String,
    pub name: String,
}

impl ImageContent {
    pub fn new(
        base64_encoded_data: impl Into<String>,
        mime_type: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            base64_encoded_data: base64_encoded_data.into(),
            mime_type: mime_type.into(),
            name: name.into(),
        }
    }

    /// Decode the payload, validating the base64 encoding.
    ///
    /// # Errors
    ///
    /// [`ImageError::Empty`] when no data is present,
    /// [`ImageError::MalformedBase64`] when the payload is not valid base64.
    pub fn decode(&self) -> Result<Vec<u8>, ImageError> {
        if self.base64_encoded_data.is_empty() {
            return Err(ImageError::Empty);
        }
        Ok(STANDARD.decode(&self.base64_encoded_data)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_valid_payload() {
        let image = ImageContent::new("aGVsbG8=", "image/png", "hello.png");
        assert_eq!(image.decode().unwrap(), b"hello");
    }

    #[test]
    fn malformed_base64_is_a_format_error() {
        let image = ImageContent::new("not@base64!", "image/png", "broken.png");
        assert!(matches!(
            image.decode(),
            Err(ImageError::MalformedBase64(_))
        ));
    }

    #[test]
    fn empty_payload_is_rejected() {
        let image = ImageContent::new("", "image/png", "empty.png");
        assert!(matches!(image.decode(), Err(ImageError::Empty)));
    }

    #[test]
    fn serde_uses_magento_field_names() {
        let image = ImageContent::new("aGVsbG8=", "image/png", "hello.png");
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["type"], "image/png");
        assert_eq!(json["base64_encoded_data"], "aGVsbG8=");
    }
}
