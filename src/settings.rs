//! Startup settings: style token discovery and the variant filter.

use std::path::{Path, PathBuf};

use anyhow::Context;
use cardfx_core::{StyleTokens, Variant};

/// Default token file location, `<config dir>/cardfx/tokens.json`
pub fn default_tokens_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cardfx").join("tokens.json"))
}

/// Loads style tokens from an explicit path, the default location if it
/// exists, or falls back to built-in defaults.
pub fn resolve_tokens(explicit: Option<&Path>) -> anyhow::Result<StyleTokens> {
    if let Some(path) = explicit {
        return StyleTokens::load(path)
            .with_context(|| format!("Failed to load style tokens from {}", path.display()));
    }

    match default_tokens_path() {
        Some(path) if path.exists() => StyleTokens::load(&path)
            .with_context(|| format!("Failed to load style tokens from {}", path.display())),
        _ => {
            tracing::debug!("no token file found, using built-in style tokens");
            Ok(StyleTokens::default())
        }
    }
}

/// Restricts the gallery to one variant
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct VariantFilter(Option<Variant>);

impl VariantFilter {
    pub fn from_arg(arg: Option<&str>) -> Self {
        Self(arg.map(Variant::from_token))
    }

    pub fn variant(&self) -> Option<Variant> {
        self.0
    }

    pub fn allows(&self, variant: Variant) -> bool {
        self.0.map_or(true, |only| only == variant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn explicit_token_file_is_loaded() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"expand_delay_ms": 40}}"#).unwrap();
        let tokens = resolve_tokens(Some(file.path())).unwrap();
        assert_eq!(tokens.expand_delay_ms, 40);
    }

    #[test]
    fn missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = resolve_tokens(Some(dir.path().join("nope.json").as_path())).unwrap_err();
        assert!(err.to_string().contains("Failed to load style tokens"));
    }

    #[test]
    fn filter_defaults_to_everything() {
        let filter = VariantFilter::from_arg(None);
        assert!(Variant::ALL.iter().all(|v| filter.allows(*v)));
    }

    #[test]
    fn filter_by_variant() {
        let filter = VariantFilter::from_arg(Some("expand"));
        assert!(filter.allows(Variant::Expand));
        assert!(!filter.allows(Variant::Flip));
    }

    #[test]
    fn unknown_filter_falls_back_to_flip() {
        let filter = VariantFilter::from_arg(Some("wobble"));
        assert_eq!(filter.variant(), Some(Variant::Flip));
    }
}
