//! Class and inline-style resolution for each variant's poses.
//!
//! Rendering code never branches on raw state flags; it asks for a
//! [`CardView`] and copies the class/style strings onto its elements.

use std::time::Duration;

use crate::config::{CardConfig, Variant};
use crate::machine::InteractionState;
use crate::tokens::StyleTokens;

/// Class list and inline style for one element
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ElementStyle {
    pub class: String,
    pub style: String,
}

impl ElementStyle {
    fn new(class: impl Into<String>, style: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            style: style.into(),
        }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class.split_whitespace().any(|c| c == class)
    }
}

fn join_classes<'a>(classes: impl IntoIterator<Item = &'a str>) -> String {
    classes
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Front and back faces of one rotating object
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct FlipView {
    pub root: ElementStyle,
    pub inner: ElementStyle,
    pub front: ElementStyle,
    pub back: ElementStyle,
    pub dot: ElementStyle,
    pub flipped: bool,
}

/// Growing card with a height-clipped reveal block
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ExpandView {
    pub root: ElementStyle,
    pub backdrop: ElementStyle,
    pub front: ElementStyle,
    pub expanded: ElementStyle,
    pub dot: ElementStyle,
    pub expanded_visible: bool,
}

/// Stacked panel of a layered card
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum LayerPanel {
    Base,
    Middle,
    Top,
}

/// Active-pose displacement of a panel
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct PanelOffset {
    pub translate_px: f32,
    pub rotate_deg: f32,
    pub scale: f32,
}

impl PanelOffset {
    fn transform(&self) -> String {
        let mut parts = Vec::new();
        if self.translate_px != 0.0 {
            parts.push(format!(
                "translate({}px, {}px)",
                self.translate_px, self.translate_px
            ));
        }
        if self.rotate_deg != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate_deg));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if parts.is_empty() {
            "none".to_string()
        } else {
            parts.join(" ")
        }
    }
}

impl LayerPanel {
    /// Back-to-front paint order
    pub const STACK: [LayerPanel; 3] = [LayerPanel::Base, LayerPanel::Middle, LayerPanel::Top];

    pub fn class(&self) -> &'static str {
        match self {
            LayerPanel::Base => "card-layer--base",
            LayerPanel::Middle => "card-layer--middle",
            LayerPanel::Top => "card-layer--top",
        }
    }

    /// Transition delay; the top panel starts first.
    pub fn stagger(&self, tokens: &StyleTokens) -> Duration {
        let [top, middle, base] = tokens.layer_stagger_ms;
        Duration::from_millis(match self {
            LayerPanel::Top => top,
            LayerPanel::Middle => middle,
            LayerPanel::Base => base,
        })
    }

    /// The base panel moves the most, the top panel only scales.
    pub fn offset(&self) -> PanelOffset {
        match self {
            LayerPanel::Base => PanelOffset {
                translate_px: 8.0,
                rotate_deg: 1.0,
                scale: 1.0,
            },
            LayerPanel::Middle => PanelOffset {
                translate_px: 4.0,
                rotate_deg: 0.5,
                scale: 1.0,
            },
            LayerPanel::Top => PanelOffset {
                translate_px: 0.0,
                rotate_deg: 0.0,
                scale: 1.05,
            },
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct PanelView {
    pub panel: LayerPanel,
    pub style: ElementStyle,
    /// Stagger applied when the panels separate
    pub delay: Duration,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LayeredView {
    pub root: ElementStyle,
    /// Ordered base, middle, top
    pub panels: [PanelView; 3],
    pub dot: ElementStyle,
    pub separated: bool,
}

impl LayeredView {
    pub fn panel(&self, panel: LayerPanel) -> &PanelView {
        match panel {
            LayerPanel::Base => &self.panels[0],
            LayerPanel::Middle => &self.panels[1],
            LayerPanel::Top => &self.panels[2],
        }
    }
}

/// Resolved styling for a card in its current state
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum CardView {
    Flip(FlipView),
    Expand(ExpandView),
    Layered(LayeredView),
}

impl CardView {
    pub fn resolve<C>(
        config: &CardConfig<C>,
        state: InteractionState,
        tokens: &StyleTokens,
    ) -> Self {
        match config.variant {
            Variant::Flip => CardView::Flip(flip_view(config, state, tokens)),
            Variant::Expand => CardView::Expand(expand_view(config, state, tokens)),
            Variant::Layered => CardView::Layered(layered_view(config, state, tokens)),
        }
    }

    pub fn root(&self) -> &ElementStyle {
        match self {
            CardView::Flip(v) => &v.root,
            CardView::Expand(v) => &v.root,
            CardView::Layered(v) => &v.root,
        }
    }
}

/// Flip pose: the inner object rotates when flipped.
pub fn flip_view<C>(config: &CardConfig<C>, state: InteractionState, tokens: &StyleTokens) -> FlipView {
    let shadow = tokens.shadow(config.glow);
    let radius = tokens.corner_radius_px;
    let face_style = |background: &str| {
        format!(
            "background: {}; border-radius: {}px; box-shadow: {}; transition: box-shadow {}ms ease;",
            background, radius, shadow, tokens.hover_duration_ms
        )
    };

    FlipView {
        root: ElementStyle::new(
            join_classes(["card", "card--flip", config.class_name.as_str()]),
            "",
        ),
        inner: ElementStyle::new(
            join_classes(["card-flip__inner", if state.is_flipped { "rotated" } else { "" }]),
            format!("transition: transform {}ms ease;", tokens.flip_duration_ms),
        ),
        front: ElementStyle::new(
            "card-face card-face--front",
            face_style(&config.gradient.css()),
        ),
        back: ElementStyle::new(
            "card-face card-face--back",
            face_style("linear-gradient(to bottom right, #111827, #1f2937)"),
        ),
        dot: ElementStyle::new("card-dot pulse", ""),
        flipped: state.is_flipped,
    }
}

/// Expand pose: glow follows hover, size and reveal follow expansion.
pub fn expand_view<C>(
    config: &CardConfig<C>,
    state: InteractionState,
    tokens: &StyleTokens,
) -> ExpandView {
    let duration = tokens.expand_duration_ms;
    let shadow = if state.is_hovered {
        tokens.shadow(config.glow)
    } else {
        "0 20px 25px -5px rgba(0, 0, 0, 0.3)"
    };

    ExpandView {
        root: ElementStyle::new(
            join_classes([
                "card",
                "card--expand",
                if state.is_expanded { "expanded" } else { "" },
                if state.is_hovered { "hovered" } else { "" },
                config.class_name.as_str(),
            ]),
            format!(
                "border-radius: {}px; box-shadow: {}; transition: all {}ms ease-out;",
                tokens.corner_radius_px + 4,
                shadow,
                duration
            ),
        ),
        backdrop: ElementStyle::new(
            "card-expand__backdrop",
            format!("background: {};", config.gradient.css()),
        ),
        front: ElementStyle::new(
            "card-expand__front",
            if state.is_expanded {
                format!("opacity: 1; transform: translateY(0); transition: all {}ms;", duration)
            } else {
                format!("opacity: 0.8; transform: translateY(8px); transition: all {}ms;", duration)
            },
        ),
        expanded: ElementStyle::new(
            join_classes(["card-expand__more", if state.is_expanded { "open" } else { "" }]),
            if state.is_expanded {
                format!("max-height: 12rem; opacity: 1; transition: all {}ms;", duration)
            } else {
                format!("max-height: 0; opacity: 0; transition: all {}ms;", duration)
            },
        ),
        dot: ElementStyle::new(
            "card-dot",
            format!(
                "transform: scale({}); transition: all {}ms;",
                if state.is_expanded { "1.1" } else { "1" },
                tokens.hover_duration_ms
            ),
        ),
        expanded_visible: state.is_expanded,
    }
}

/// Layered pose: panels offset with a top-first stagger when separated.
pub fn layered_view<C>(
    config: &CardConfig<C>,
    state: InteractionState,
    tokens: &StyleTokens,
) -> LayeredView {
    let separated = state.is_hovered;
    let radius = tokens.corner_radius_px;

    let panels = LayerPanel::STACK.map(|panel| {
        let delay = panel.stagger(tokens);
        // Entering peels top-first; leaving returns all panels together
        let (transform, applied_delay) = if separated {
            (panel.offset().transform(), delay)
        } else {
            ("none".to_string(), Duration::ZERO)
        };
        let background = match panel {
            LayerPanel::Base => "linear-gradient(to bottom right, #1f2937, #111827)".to_string(),
            LayerPanel::Middle => "linear-gradient(to bottom right, #374151, #1f2937)".to_string(),
            LayerPanel::Top => config.gradient.css(),
        };
        let shadow = match panel {
            LayerPanel::Top if separated => tokens.shadow(config.glow),
            _ => "none",
        };
        PanelView {
            panel,
            style: ElementStyle::new(
                join_classes(["card-layer", panel.class()]),
                format!(
                    "background: {}; border-radius: {}px; transform: {}; box-shadow: {}; \
                     transition: all {}ms ease {}ms;",
                    background,
                    radius,
                    transform,
                    shadow,
                    tokens.layer_duration_ms,
                    applied_delay.as_millis()
                ),
            ),
            delay,
        }
    });

    LayeredView {
        root: ElementStyle::new(
            join_classes(["card", "card--layered", config.class_name.as_str()]),
            "",
        ),
        panels,
        dot: ElementStyle::new(
            join_classes(["card-dot", if separated { "bounce" } else { "pulse" }]),
            "",
        ),
        separated,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GlowColor;

    fn rest() -> InteractionState {
        InteractionState::default()
    }

    #[test]
    fn class_name_appended_to_root() {
        let tokens = StyleTokens::default();
        for variant in Variant::ALL {
            let config = CardConfig::new(()).variant(variant).class_name("extra");
            let view = CardView::resolve(&config, rest(), &tokens);
            assert!(view.root().has_class("card"));
            assert!(view.root().has_class("extra"));
        }
    }

    #[test]
    fn empty_class_name_adds_nothing() {
        let tokens = StyleTokens::default();
        let view = CardView::resolve(&CardConfig::new(()), rest(), &tokens);
        assert_eq!(view.root().class, "card card--flip");
    }

    #[test]
    fn flip_rotates_inner_when_flipped() {
        let tokens = StyleTokens::default();
        let config = CardConfig::new(());
        let CardView::Flip(view) = CardView::resolve(
            &config,
            InteractionState {
                is_flipped: true,
                ..rest()
            },
            &tokens,
        ) else {
            panic!("expected flip view");
        };
        assert!(view.inner.has_class("rotated"));
        assert!(view.inner.style.contains("700ms"));
    }

    #[test]
    fn expand_glow_only_while_hovered() {
        let tokens = StyleTokens::default();
        let config = CardConfig::new(()).variant(Variant::Expand).glow(GlowColor::Green);
        let shadow = tokens.shadow(GlowColor::Green);

        let CardView::Expand(idle) = CardView::resolve(&config, rest(), &tokens) else {
            panic!("expected expand view");
        };
        assert!(!idle.root.style.contains(shadow));
        assert!(idle.expanded.style.contains("max-height: 0"));

        let hovered = InteractionState {
            is_hovered: true,
            ..rest()
        };
        let CardView::Expand(view) = CardView::resolve(&config, hovered, &tokens) else {
            panic!("expected expand view");
        };
        assert!(view.root.style.contains(shadow));
        assert!(!view.root.has_class("expanded"));
        assert!(!view.expanded_visible);
    }

    #[test]
    fn layered_panels_separate_with_stagger() {
        let tokens = StyleTokens::default();
        let config = CardConfig::new(()).variant(Variant::Layered);
        let hovered = InteractionState {
            is_hovered: true,
            ..rest()
        };
        let CardView::Layered(view) = CardView::resolve(&config, hovered, &tokens) else {
            panic!("expected layered view");
        };
        assert!(view.separated);
        assert!(view.dot.has_class("bounce"));
        assert!(view
            .panel(LayerPanel::Base)
            .style
            .style
            .contains("translate(8px, 8px) rotate(1deg)"));
        assert!(view.panel(LayerPanel::Top).style.style.contains("scale(1.05)"));
        assert!(view.panel(LayerPanel::Top).delay < view.panel(LayerPanel::Middle).delay);
        assert!(view.panel(LayerPanel::Middle).delay < view.panel(LayerPanel::Base).delay);
    }

    #[test]
    fn rest_panels_are_coincident() {
        let tokens = StyleTokens::default();
        let config = CardConfig::new(()).variant(Variant::Layered);
        let CardView::Layered(view) = CardView::resolve(&config, rest(), &tokens) else {
            panic!("expected layered view");
        };
        assert!(!view.separated);
        assert!(view.dot.has_class("pulse"));
        for panel in &view.panels {
            assert!(panel.style.style.contains("transform: none;"));
        }
    }
}
