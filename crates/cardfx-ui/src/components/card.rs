//! Interactive Card Components
//!
//! [`InteractiveCard`] takes the card options as individual props and
//! renders a [`Card`]; [`Card`] picks the variant component once from the
//! validated [`CardConfig`].

use cardfx_core::{
    expand_view, flip_view, layered_view, CardConfig, GlowColor, Gradient, StyleTokens, Variant,
};
use dioxus::prelude::*;

use super::hooks::use_card_machine;

/// Style tokens from context, or the built-in defaults.
fn use_style_tokens() -> StyleTokens {
    try_use_context::<StyleTokens>().unwrap_or_default()
}

/// Properties for the InteractiveCard component
#[derive(Clone, PartialEq, Props)]
pub struct InteractiveCardProps {
    /// Visual/interaction variant
    #[props(default)]
    pub variant: Variant,
    /// Content shown at rest
    pub front: Element,
    /// Back face content (flip)
    #[props(default)]
    pub back: Option<Element>,
    /// Revealed content (expand)
    #[props(default)]
    pub expanded: Option<Element>,
    /// Hover shadow preset
    #[props(default)]
    pub glow: GlowColor,
    /// Background gradient token
    #[props(default)]
    pub gradient: Gradient,
    /// Optional glyph shown in the card header
    #[props(default)]
    pub icon: Option<Element>,
    /// Optional additional CSS classes
    #[props(default)]
    pub class: Option<String>,
}

/// Hover-animated card
///
/// # Example
///
/// ```rust,ignore
/// rsx! {
///     InteractiveCard {
///         variant: Variant::Flip,
///         glow: GlowColor::Blue,
///         gradient: Gradient::new("from-blue-600 to-cyan-600"),
///         icon: rsx! { CardIcon { kind: IconKind::Code } },
///         front: rsx! { h2 { "Hello World" } },
///         back: rsx! { p { "This is the back!" } },
///     }
/// }
/// ```
#[component]
pub fn InteractiveCard(props: InteractiveCardProps) -> Element {
    let mut config = CardConfig::new(props.front)
        .variant(props.variant)
        .glow(props.glow)
        .gradient(props.gradient)
        .class_name(props.class.unwrap_or_default());
    config.back = props.back;
    config.expanded = props.expanded;
    config.icon = props.icon;

    rsx! {
        Card { config }
    }
}

/// Renders a validated card configuration with its variant component
#[component]
pub fn Card(config: CardConfig<Element>) -> Element {
    match config.variant {
        Variant::Flip => rsx! { FlipCard { config } },
        Variant::Expand => rsx! { ExpandCard { config } },
        Variant::Layered => rsx! { LayeredCard { config } },
    }
}

/// Front face rotates away to reveal the back face on hover
#[component]
pub fn FlipCard(config: CardConfig<Element>) -> Element {
    let tokens = use_style_tokens();
    let mut card = use_card_machine(Variant::Flip, tokens.expand_delay());

    let view = flip_view(&config, card.state(), &tokens);

    rsx! {
        div {
            class: "{view.root.class}",
            onmouseenter: move |_| card.enter(),
            onmouseleave: move |_| card.leave(),

            div { class: "{view.inner.class}", style: "{view.inner.style}",
                // Front Face
                div { class: "{view.front.class}", style: "{view.front.style}",
                    div { class: "card-header",
                        if let Some(icon) = &config.icon {
                            span { class: "card-icon", {icon.clone()} }
                        }
                        div { class: "{view.dot.class}" }
                    }
                    {config.front.clone()}
                }

                // Back Face
                div {
                    class: "{view.back.class}",
                    style: "{view.back.style}",
                    "aria-hidden": if view.flipped { "false" } else { "true" },
                    if let Some(back) = &config.back {
                        {back.clone()}
                    }
                }
            }
        }
    }
}

/// Grows after a short hover delay and reveals extra content
#[component]
pub fn ExpandCard(config: CardConfig<Element>) -> Element {
    let tokens = use_style_tokens();
    let mut card = use_card_machine(Variant::Expand, tokens.expand_delay());

    let view = expand_view(&config, card.state(), &tokens);

    rsx! {
        div {
            class: "{view.root.class}",
            style: "{view.root.style}",
            onmouseenter: move |_| card.enter(),
            onmouseleave: move |_| card.leave(),

            div { class: "{view.backdrop.class}", style: "{view.backdrop.style}" }

            div { class: "card-expand__body",
                div { class: "card-header",
                    if let Some(icon) = &config.icon {
                        span { class: "card-icon", {icon.clone()} }
                    }
                    div { style: "{view.dot.style}",
                        div { class: "{view.dot.class}" }
                    }
                }

                div { class: "{view.front.class}", style: "{view.front.style}",
                    {config.front.clone()}
                }

                div {
                    class: "{view.expanded.class}",
                    style: "{view.expanded.style}",
                    "aria-hidden": if view.expanded_visible { "false" } else { "true" },
                    if let Some(expanded) = &config.expanded {
                        {expanded.clone()}
                    }
                }
            }
        }
    }
}

/// Three stacked panels that peel apart on hover
#[component]
pub fn LayeredCard(config: CardConfig<Element>) -> Element {
    let tokens = use_style_tokens();
    let mut card = use_card_machine(Variant::Layered, tokens.expand_delay());

    let view = layered_view(&config, card.state(), &tokens);
    let [base, middle, top] = &view.panels;

    rsx! {
        div {
            class: "{view.root.class}",
            onmouseenter: move |_| card.enter(),
            onmouseleave: move |_| card.leave(),

            div { class: "{base.style.class}", style: "{base.style.style}" }
            div { class: "{middle.style.class}", style: "{middle.style.style}" }
            div { class: "{top.style.class}", style: "{top.style.style}",
                div { class: "card-header",
                    if let Some(icon) = &config.icon {
                        span { class: "card-icon", {icon.clone()} }
                    }
                    div { class: "{view.dot.class}" }
                }
                {config.front.clone()}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[allow(non_snake_case)]
    fn HelloCard() -> Element {
        rsx! {
            InteractiveCard {
                front: rsx! { h2 { "Hello World" } },
                back: rsx! { p { "This is the back!" } },
            }
        }
    }

    #[allow(non_snake_case)]
    fn EveryVariant() -> Element {
        rsx! {
            for variant in Variant::ALL {
                InteractiveCard {
                    variant,
                    glow: GlowColor::Orange,
                    class: "extra".to_string(),
                    front: rsx! { h3 { "{variant}" } },
                    expanded: rsx! { p { "more" } },
                }
            }
        }
    }

    #[test]
    fn interactive_card_renders_flip_by_default() {
        let mut dom = VirtualDom::new(HelloCard);
        let edits = format!("{:?}", dom.rebuild_to_vec());
        assert!(edits.contains("card--flip"));
    }

    #[test]
    fn interactive_card_renders_each_variant() {
        let mut dom = VirtualDom::new(EveryVariant);
        let edits = format!("{:?}", dom.rebuild_to_vec());
        assert!(edits.contains("card--flip"));
        assert!(edits.contains("card--expand"));
        assert!(edits.contains("card--layered"));
    }
}
