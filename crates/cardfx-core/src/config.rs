//! Card configuration: variant and glow tokens, gradients, and the
//! validating construction boundary.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CardError, CardResult};

/// Gradient used when the caller does not supply one.
pub const DEFAULT_GRADIENT: &str = "from-purple-600 to-pink-600";

/// Rendering/interaction mode of a card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// Rotates around its vertical axis to reveal a back face
    #[default]
    Flip,
    /// Grows and reveals extra content after a short delay
    Expand,
    /// Three stacked panels that peel apart
    Layered,
}

impl Variant {
    pub const ALL: [Variant; 3] = [Variant::Flip, Variant::Expand, Variant::Layered];

    /// Parses a variant token, falling back to [`Variant::Flip`] for
    /// anything unrecognized.
    pub fn from_token(token: &str) -> Self {
        match token.trim().to_ascii_lowercase().as_str() {
            "flip" => Variant::Flip,
            "expand" => Variant::Expand,
            "layered" => Variant::Layered,
            other => {
                tracing::debug!(token = other, "unknown card variant, using flip");
                Variant::Flip
            }
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Flip => "flip",
            Variant::Expand => "expand",
            Variant::Layered => "layered",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Named hover-shadow preset
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GlowColor {
    #[default]
    Blue,
    Purple,
    Pink,
    Green,
    Orange,
    Red,
}

impl GlowColor {
    pub const ALL: [GlowColor; 6] = [
        GlowColor::Blue,
        GlowColor::Purple,
        GlowColor::Pink,
        GlowColor::Green,
        GlowColor::Orange,
        GlowColor::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            GlowColor::Blue => "blue",
            GlowColor::Purple => "purple",
            GlowColor::Pink => "pink",
            GlowColor::Green => "green",
            GlowColor::Orange => "orange",
            GlowColor::Red => "red",
        }
    }
}

impl FromStr for GlowColor {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(GlowColor::Blue),
            "purple" => Ok(GlowColor::Purple),
            "pink" => Ok(GlowColor::Pink),
            "green" => Ok(GlowColor::Green),
            "orange" => Ok(GlowColor::Orange),
            "red" => Ok(GlowColor::Red),
            _ => Err(CardError::UnknownGlowColor(s.to_string())),
        }
    }
}

impl fmt::Display for GlowColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Two-color gradient style token.
///
/// Accepts either the `from-<color> to-<color>` shorthand or any raw CSS
/// `background` value. Not validated.
#[derive(Clone, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gradient(String);

impl Gradient {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// CSS `background` value for this gradient.
    ///
    /// Shorthand tokens whose colors are both known resolve to a
    /// `linear-gradient`; everything else is returned verbatim.
    pub fn css(&self) -> String {
        let mut from = None;
        let mut to = None;
        for part in self.0.split_whitespace() {
            if let Some(name) = part.strip_prefix("from-") {
                from = palette(name);
            } else if let Some(name) = part.strip_prefix("to-") {
                to = palette(name);
            }
        }
        match (from, to) {
            (Some(from), Some(to)) => {
                format!("linear-gradient(to bottom right, {}, {})", from, to)
            }
            _ => self.0.clone(),
        }
    }
}

impl Default for Gradient {
    fn default() -> Self {
        Self(DEFAULT_GRADIENT.to_string())
    }
}

impl From<&str> for Gradient {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Color shades understood by the gradient shorthand.
fn palette(name: &str) -> Option<&'static str> {
    let hex = match name {
        "blue-600" => "#2563eb",
        "cyan-600" => "#0891b2",
        "purple-600" => "#9333ea",
        "pink-600" => "#db2777",
        "green-500" => "#22c55e",
        "teal-600" => "#0d9488",
        "orange-500" => "#f97316",
        "red-600" => "#dc2626",
        "gray-700" => "#374151",
        "gray-800" => "#1f2937",
        "gray-900" => "#111827",
        _ => return None,
    };
    Some(hex)
}

/// Validated, immutable configuration of one card instance.
#[derive(Clone, PartialEq, Debug)]
pub struct CardConfig<C> {
    pub variant: Variant,
    pub front: C,
    pub back: Option<C>,
    pub expanded: Option<C>,
    pub glow: GlowColor,
    pub gradient: Gradient,
    pub icon: Option<C>,
    pub class_name: String,
}

impl<C> CardConfig<C> {
    /// Creates a flip card with default glow and gradient.
    pub fn new(front: C) -> Self {
        Self {
            variant: Variant::default(),
            front,
            back: None,
            expanded: None,
            glow: GlowColor::default(),
            gradient: Gradient::default(),
            icon: None,
            class_name: String::new(),
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn back(mut self, back: C) -> Self {
        self.back = Some(back);
        self
    }

    pub fn expanded(mut self, expanded: C) -> Self {
        self.expanded = Some(expanded);
        self
    }

    pub fn glow(mut self, glow: GlowColor) -> Self {
        self.glow = glow;
        self
    }

    pub fn gradient(mut self, gradient: impl Into<Gradient>) -> Self {
        self.gradient = gradient.into();
        self
    }

    pub fn icon(mut self, icon: C) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }
}

/// Untyped construction surface. Every field is optional; tokens are
/// resolved when converting into a [`CardConfig`].
#[derive(Clone, PartialEq, Debug, Default, Deserialize)]
pub struct RawCardConfig<C> {
    pub variant: Option<String>,
    pub front: Option<C>,
    pub back: Option<C>,
    pub expanded: Option<C>,
    pub glow_color: Option<String>,
    pub gradient: Option<String>,
    pub icon: Option<C>,
    pub class_name: Option<String>,
}

impl<C: Default> TryFrom<RawCardConfig<C>> for CardConfig<C> {
    type Error = CardError;

    fn try_from(raw: RawCardConfig<C>) -> CardResult<Self> {
        let glow = match raw.glow_color.as_deref() {
            Some(token) => token.parse::<GlowColor>().inspect_err(|err| {
                tracing::warn!(%err, "rejecting card configuration");
            })?,
            None => GlowColor::default(),
        };
        let variant = raw
            .variant
            .as_deref()
            .map(Variant::from_token)
            .unwrap_or_default();

        Ok(CardConfig {
            variant,
            front: raw.front.unwrap_or_default(),
            back: raw.back,
            expanded: raw.expanded,
            glow,
            gradient: raw.gradient.map(Gradient::new).unwrap_or_default(),
            icon: raw.icon,
            class_name: raw.class_name.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_tokens() {
        assert_eq!(Variant::from_token("flip"), Variant::Flip);
        assert_eq!(Variant::from_token(" Expand "), Variant::Expand);
        assert_eq!(Variant::from_token("LAYERED"), Variant::Layered);
    }

    #[test]
    fn unknown_variant_falls_back_to_flip() {
        assert_eq!(Variant::from_token("spin"), Variant::Flip);
        assert_eq!(Variant::from_token(""), Variant::Flip);
    }

    #[test]
    fn glow_parse_is_strict() {
        for glow in GlowColor::ALL {
            assert_eq!(glow.as_str().parse::<GlowColor>().unwrap(), glow);
        }
        assert_eq!("Purple".parse::<GlowColor>().unwrap(), GlowColor::Purple);
        assert!(matches!(
            "teal".parse::<GlowColor>(),
            Err(CardError::UnknownGlowColor(t)) if t == "teal"
        ));
    }

    #[test]
    fn gradient_shorthand_resolves() {
        let g = Gradient::new("from-blue-600 to-cyan-600");
        assert_eq!(
            g.css(),
            "linear-gradient(to bottom right, #2563eb, #0891b2)"
        );
    }

    #[test]
    fn gradient_raw_css_passes_through() {
        let raw = "linear-gradient(90deg, red, blue)";
        assert_eq!(Gradient::new(raw).css(), raw);
        // Unknown shade keeps the token as-is
        assert_eq!(Gradient::new("from-lime-300 to-red-600").css(), "from-lime-300 to-red-600");
    }

    #[test]
    fn builder_defaults() {
        let config = CardConfig::new("front");
        assert_eq!(config.variant, Variant::Flip);
        assert_eq!(config.glow, GlowColor::Blue);
        assert_eq!(config.gradient.as_str(), DEFAULT_GRADIENT);
        assert!(config.class_name.is_empty());
        assert!(config.back.is_none());
    }

    #[test]
    fn raw_config_defaults() {
        let config: CardConfig<String> = RawCardConfig::default().try_into().unwrap();
        assert_eq!(config.variant, Variant::Flip);
        assert_eq!(config.glow, GlowColor::Blue);
        assert_eq!(config.front, "");
    }

    #[test]
    fn raw_config_rejects_unknown_glow() {
        let raw = RawCardConfig::<String> {
            glow_color: Some("magenta".to_string()),
            ..Default::default()
        };
        let result: CardResult<CardConfig<String>> = raw.try_into();
        assert!(matches!(result, Err(CardError::UnknownGlowColor(_))));
    }

    #[test]
    fn raw_config_from_json() {
        let raw: RawCardConfig<String> = serde_json::from_str(
            r#"{"variant": "expand", "front": "hi", "glow_color": "orange", "class_name": "wide"}"#,
        )
        .unwrap();
        let config = CardConfig::try_from(raw).unwrap();
        assert_eq!(config.variant, Variant::Expand);
        assert_eq!(config.glow, GlowColor::Orange);
        assert_eq!(config.front, "hi");
        assert_eq!(config.class_name, "wide");
    }
}
