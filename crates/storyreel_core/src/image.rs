//! Image payload type.

use base64::Engine;
use serde::{Deserialize, Serialize};

/// A rendered image as returned by the image service.
///
/// The binary payload serializes as base64 so that project snapshots stay
/// portable, self-describing JSON.
///
/// # Examples
///
/// ```
/// use storyreel_core::ImageData;
///
/// let image = ImageData {
///     mime: Some("image/png".to_string()),
///     data: vec![0x89, 0x50, 0x4E, 0x47],
/// };
/// assert!(image.to_data_uri().starts_with("data:image/png;base64,"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageData {
    /// MIME type of the image, e.g. "image/png"
    pub mime: Option<String>,
    /// Binary image data
    #[serde(with = "base64_bytes")]
    pub data: Vec<u8>,
}

impl ImageData {
    /// Render the image as a `data:` URI for embedding.
    pub fn to_data_uri(&self) -> String {
        let mime = self.mime.as_deref().unwrap_or("image/png");
        let encoded = base64::engine::general_purpose::STANDARD.encode(&self.data);
        format!("data:{};base64,{}", mime, encoded)
    }
}

mod base64_bytes {
    use base64::Engine;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        let encoded = base64::engine::general_purpose::STANDARD.encode(bytes);
        serializer.serialize_str(&encoded)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        base64::engine::general_purpose::STANDARD
            .decode(encoded.as_bytes())
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_uri_defaults_to_png() {
        let image = ImageData {
            mime: None,
            data: vec![1, 2, 3],
        };
        assert!(image.to_data_uri().starts_with("data:image/png;base64,"));
    }

    #[test]
    fn payload_round_trips_as_base64_json() {
        let image = ImageData {
            mime: Some("image/webp".to_string()),
            data: vec![0xDE, 0xAD, 0xBE, 0xEF],
        };
        let json = serde_json::to_string(&image).unwrap();
        assert!(json.contains("3q2+7w=="));
        let back: ImageData = serde_json::from_str(&json).unwrap();
        assert_eq!(back, image);
    }
}
