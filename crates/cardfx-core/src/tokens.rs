//! Style token table
//!
//! Presentation constants (glow shadows, durations, stagger delays) kept
//! out of the rendering code so a theme file can override them.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::GlowColor;
use crate::error::{CardError, CardResult};

/// One CSS `box-shadow` value per glow color
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowShadows {
    pub blue: String,
    pub purple: String,
    pub pink: String,
    pub green: String,
    pub orange: String,
    pub red: String,
}

impl GlowShadows {
    pub fn shadow(&self, glow: GlowColor) -> &str {
        match glow {
            GlowColor::Blue => &self.blue,
            GlowColor::Purple => &self.purple,
            GlowColor::Pink => &self.pink,
            GlowColor::Green => &self.green,
            GlowColor::Orange => &self.orange,
            GlowColor::Red => &self.red,
        }
    }
}

impl Default for GlowShadows {
    fn default() -> Self {
        let glow = |rgb: &str| format!("0 25px 50px -12px rgba({}, 0.5)", rgb);
        Self {
            blue: glow("59, 130, 246"),
            purple: glow("168, 85, 247"),
            pink: glow("236, 72, 153"),
            green: glow("34, 197, 94"),
            orange: glow("249, 115, 22"),
            red: glow("239, 68, 68"),
        }
    }
}

/// Style tokens shared by every card in a gallery
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleTokens {
    pub glow_shadows: GlowShadows,
    pub flip_duration_ms: u64,
    pub expand_duration_ms: u64,
    pub layer_duration_ms: u64,
    pub hover_duration_ms: u64,
    /// Delay between hover start and the expand reveal
    pub expand_delay_ms: u64,
    /// Transition delays for the top, middle and base panels
    pub layer_stagger_ms: [u64; 3],
    pub corner_radius_px: u32,
}

impl Default for StyleTokens {
    fn default() -> Self {
        Self {
            glow_shadows: GlowShadows::default(),
            flip_duration_ms: 700,
            expand_duration_ms: 500,
            layer_duration_ms: 500,
            hover_duration_ms: 300,
            expand_delay_ms: 100,
            layer_stagger_ms: [0, 75, 150],
            corner_radius_px: 12,
        }
    }
}

impl StyleTokens {
    /// Parses and validates a JSON token table. Missing keys keep
    /// their defaults.
    pub fn from_json(json: &str) -> CardResult<Self> {
        let tokens: StyleTokens = serde_json::from_str(json)?;
        tokens.validate()?;
        Ok(tokens)
    }

    /// Reads a JSON token table from disk.
    pub fn load(path: impl AsRef<Path>) -> CardResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tokens = Self::from_json(&json)?;
        tracing::debug!(path = %path.display(), "loaded style tokens");
        Ok(tokens)
    }

    pub fn validate(&self) -> CardResult<()> {
        let [top, middle, base] = self.layer_stagger_ms;
        if !(top < middle && middle < base) {
            return Err(CardError::InvalidTokens(format!(
                "layer_stagger_ms must increase from top to base, got [{}, {}, {}]",
                top, middle, base
            )));
        }
        if let Some(glow) = GlowColor::ALL
            .into_iter()
            .find(|glow| self.glow_shadows.shadow(*glow).trim().is_empty())
        {
            return Err(CardError::InvalidTokens(format!(
                "glow shadow for {} is empty",
                glow
            )));
        }
        Ok(())
    }

    pub fn expand_delay(&self) -> Duration {
        Duration::from_millis(self.expand_delay_ms)
    }

    pub fn shadow(&self, glow: GlowColor) -> &str {
        self.glow_shadows.shadow(glow)
    }
}
