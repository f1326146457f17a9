//! Demo cards shown by the gallery.

use cardfx_core::{CardConfig, Gallery, GlowColor, Gradient, Variant};
use cardfx_ui::{CardIcon, IconKind};
use dioxus::prelude::*;

use crate::settings::VariantFilter;
use crate::theme::colors;

/// Secondary content of a demo card
#[derive(Clone, PartialEq, Debug)]
pub enum DemoDetail {
    /// Labelled bullet list with colored dots
    Stack {
        heading: &'static str,
        items: Vec<(&'static str, &'static str)>,
    },
    /// Big-number statistics
    Stats {
        heading: &'static str,
        stats: Vec<(&'static str, &'static str)>,
    },
    /// Stacked highlight tiles
    Highlights(Vec<(&'static str, &'static str)>),
    /// Labelled progress meter
    Meter { label: &'static str, score: u8 },
}

/// One showcase entry
#[derive(Clone, PartialEq, Debug)]
pub struct DemoCard {
    pub variant: Variant,
    pub icon: IconKind,
    pub gradient: &'static str,
    pub glow: GlowColor,
    pub title: &'static str,
    pub tagline: &'static str,
    pub detail: DemoDetail,
}

pub fn demo_cards() -> Vec<DemoCard> {
    vec![
        DemoCard {
            variant: Variant::Flip,
            icon: IconKind::Code,
            gradient: "from-blue-600 to-cyan-600",
            glow: GlowColor::Blue,
            title: "Frontend Magic",
            tagline: "Crafting beautiful user experiences with Dioxus",
            detail: DemoDetail::Stack {
                heading: "Tech Stack",
                items: vec![
                    (colors::BLUE_400, "Rust & Dioxus"),
                    (colors::GREEN_400, "Plain CSS"),
                    (colors::PURPLE_400, "Signals & Tasks"),
                ],
            },
        },
        DemoCard {
            variant: Variant::Expand,
            icon: IconKind::Palette,
            gradient: "from-purple-600 to-pink-600",
            glow: GlowColor::Purple,
            title: "Design System",
            tagline: "Building scalable component libraries",
            detail: DemoDetail::Highlights(vec![
                ("Atomic Design", "Modular, reusable components"),
                ("Accessibility First", "WCAG 2.1 AA compliant"),
            ]),
        },
        DemoCard {
            variant: Variant::Layered,
            icon: IconKind::Zap,
            gradient: "from-orange-500 to-red-600",
            glow: GlowColor::Orange,
            title: "Performance",
            tagline: "Optimized for speed and efficiency",
            detail: DemoDetail::Meter {
                label: "Core Web Vitals",
                score: 98,
            },
        },
        DemoCard {
            variant: Variant::Flip,
            icon: IconKind::Users,
            gradient: "from-green-500 to-teal-600",
            glow: GlowColor::Green,
            title: "Collaboration",
            tagline: "Working seamlessly with cross-functional teams",
            detail: DemoDetail::Stats {
                heading: "Team Impact",
                stats: vec![("15+", "Projects"), ("8", "Team Members")],
            },
        },
    ]
}

/// Demo cards that pass the filter, in showcase order
pub fn filtered_cards(filter: VariantFilter) -> Vec<DemoCard> {
    demo_cards()
        .into_iter()
        .filter(|card| filter.allows(card.variant))
        .collect()
}

/// Builds the rendered gallery
pub fn showcase(filter: VariantFilter) -> Gallery<Element> {
    filtered_cards(filter).into_iter().map(into_config).collect()
}

fn into_config(card: DemoCard) -> CardConfig<Element> {
    let front = rsx! {
        div {
            h3 { class: "demo-title", "{card.title}" }
            p { class: "demo-text", "{card.tagline}" }
            if let DemoDetail::Meter { label, score } = &card.detail {
                {render_meter(label, *score)}
            }
        }
    };

    let config = CardConfig::new(front)
        .variant(card.variant)
        .glow(card.glow)
        .gradient(Gradient::new(card.gradient))
        .icon(rsx! { CardIcon { kind: card.icon } });

    match &card.detail {
        DemoDetail::Stack { .. } | DemoDetail::Stats { .. } => {
            config.back(render_detail(&card.detail))
        }
        DemoDetail::Highlights(_) => config.expanded(render_detail(&card.detail)),
        DemoDetail::Meter { .. } => config,
    }
}

fn render_meter(label: &str, score: u8) -> Element {
    rsx! {
        div { class: "demo-meter",
            div { class: "demo-meter__legend",
                span { "{label}" }
                span { "{score}/100" }
            }
            div { class: "demo-meter__track",
                div { class: "demo-meter__fill", style: "width: {score}%;" }
            }
        }
    }
}

fn render_detail(detail: &DemoDetail) -> Element {
    match detail {
        DemoDetail::Stack { heading, items } => rsx! {
            div {
                h3 { class: "demo-heading", "{heading}" }
                ul { class: "demo-stack",
                    for (color, label) in items.iter() {
                        li {
                            span { class: "demo-stack__dot", style: "background: {color};" }
                            span { "{label}" }
                        }
                    }
                }
            }
        },
        DemoDetail::Stats { heading, stats } => rsx! {
            div {
                h3 { class: "demo-heading", "{heading}" }
                div { class: "demo-stats",
                    for (value, label) in stats.iter() {
                        div { class: "demo-stats__item",
                            div { class: "demo-stats__value", "{value}" }
                            div { class: "demo-stats__label", "{label}" }
                        }
                    }
                }
            }
        },
        DemoDetail::Highlights(tiles) => rsx! {
            div { class: "demo-highlights",
                for (heading, text) in tiles.iter() {
                    div { class: "demo-highlights__tile",
                        h4 { "{heading}" }
                        p { "{text}" }
                    }
                }
            }
        },
        DemoDetail::Meter { label, score } => render_meter(label, *score),
    }
}
