//! User-selectable generation tags: image style, era, and aspect ratio.

use serde::{Deserialize, Serialize};

/// Visual style applied to every image render in a session.
///
/// One cinematic photographic style plus four webtoon sub-styles, each with
/// its own rendering-language descriptors supplied by the gateway's prompt
/// composition.
///
/// # Examples
///
/// ```
/// use storyreel_core::ImageStyle;
/// use std::str::FromStr;
///
/// let style = ImageStyle::from_str("webtoon_romance").unwrap();
/// assert_eq!(style.to_string(), "webtoon_romance");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ImageStyle {
    /// Photorealistic cinematic photography
    #[default]
    Cinematic,
    /// Action manhwa: sharp lines, high contrast
    WebtoonAction,
    /// Romance manhwa: pastel, soft atmosphere
    WebtoonRomance,
    /// Thriller manhwa: gritty, heavy shadows
    WebtoonThriller,
    /// Korean yadam: ink-wash aesthetic with manhwa lines
    WebtoonYadam,
}

/// Historical setting of the drama.
///
/// Selects between a modern-day South Korean setting and the Joseon
/// dynasty period, altering both the analysis instructions and the render
/// prompts (clothing, architecture, props).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Era {
    /// Present-day South Korea
    #[default]
    Modern,
    /// Joseon dynasty period
    Joseon,
}

/// Aspect ratio for every image in a session.
///
/// Serializes to the ratio tag the image service expects.
///
/// # Examples
///
/// ```
/// use storyreel_core::AspectRatio;
///
/// assert_eq!(AspectRatio::Wide.as_str(), "16:9");
/// assert_eq!(AspectRatio::Tall.as_str(), "9:16");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumString,
)]
pub enum AspectRatio {
    /// Landscape 16:9
    #[default]
    #[serde(rename = "16:9")]
    #[strum(serialize = "16:9", serialize = "wide")]
    Wide,
    /// Portrait 9:16
    #[serde(rename = "9:16")]
    #[strum(serialize = "9:16", serialize = "tall")]
    Tall,
}

impl AspectRatio {
    /// The ratio tag understood by the image service.
    pub fn as_str(&self) -> &'static str {
        match self {
            AspectRatio::Wide => "16:9",
            AspectRatio::Tall => "9:16",
        }
    }
}

impl std::fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn style_round_trips_through_serde() {
        let json = serde_json::to_string(&ImageStyle::WebtoonYadam).unwrap();
        assert_eq!(json, "\"webtoon_yadam\"");
        let back: ImageStyle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ImageStyle::WebtoonYadam);
    }

    #[test]
    fn aspect_ratio_serializes_to_ratio_tag() {
        assert_eq!(serde_json::to_string(&AspectRatio::Wide).unwrap(), "\"16:9\"");
        assert_eq!(serde_json::to_string(&AspectRatio::Tall).unwrap(), "\"9:16\"");
    }

    #[test]
    fn aspect_ratio_parses_both_spellings() {
        assert_eq!(AspectRatio::from_str("16:9").unwrap(), AspectRatio::Wide);
        assert_eq!(AspectRatio::from_str("tall").unwrap(), AspectRatio::Tall);
    }

    #[test]
    fn defaults_match_the_script_form() {
        assert_eq!(ImageStyle::default(), ImageStyle::Cinematic);
        assert_eq!(Era::default(), Era::Modern);
        assert_eq!(AspectRatio::default(), AspectRatio::Wide);
    }
}
