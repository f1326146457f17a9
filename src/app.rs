use cardfx_core::Variant;
use cardfx_ui::{CardGallery, InteractiveCard, CARD_STYLES};
use dioxus::prelude::*;

use crate::demo;
use crate::settings::VariantFilter;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Style tokens and the variant filter arrive as root context from the
/// launcher; cards read the tokens themselves.
#[component]
pub fn App() -> Element {
    let filter = try_use_context::<VariantFilter>().unwrap_or_default();
    let gallery = demo::showcase(filter);

    rsx! {
        style { {GLOBAL_STYLES} }
        style { {CARD_STYLES} }
        CardGallery {
            title: "Interactive Card Gallery".to_string(),
            subtitle: "Hover over cards to see the magic happen".to_string(),
            gallery,
        }
        if filter.allows(Variant::Flip) {
            QuickStart {}
        }
    }
}

/// Minimal card built straight from props
#[component]
fn QuickStart() -> Element {
    rsx! {
        section { class: "quick-start",
            h2 { class: "quick-start__title", "Quick Start" }
            InteractiveCard {
                front: rsx! { h2 { class: "demo-title", "Hello World" } },
                back: rsx! { p { class: "demo-text", "This is the back!" } },
            }
        }
    }
}
