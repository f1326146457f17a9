//! Card Gallery Component
//!
//! Renders one independent card per configured entry in a responsive grid.

use cardfx_core::{Gallery, Variant};
use dioxus::prelude::*;

use super::card::Card;

/// Grid of interactive cards
///
/// # Examples
///
/// ```rust,ignore
/// let gallery: Gallery<Element> = vec![
///     CardConfig::new(rsx! { h3 { "Frontend Magic" } })
///         .back(rsx! { h3 { "Tech Stack" } }),
/// ]
/// .into_iter()
/// .collect();
///
/// rsx! {
///     CardGallery {
///         title: "Interactive Card Gallery",
///         gallery,
///     }
/// }
/// ```
#[component]
pub fn CardGallery(
    /// Gallery heading
    title: String,
    /// Line under the heading
    #[props(default)]
    subtitle: Option<String>,
    /// Cards to render, in order
    gallery: Gallery<Element>,
    /// Show the feature summary panel under the grid
    #[props(default = true)]
    show_features: bool,
) -> Element {
    rsx! {
        div { class: "card-gallery",
            header { class: "card-gallery__header",
                h1 { class: "card-gallery__title", "{title}" }
                if let Some(subtitle) = &subtitle {
                    p { class: "card-gallery__subtitle", "{subtitle}" }
                }
            }

            div { class: "card-gallery__grid",
                for (index, config) in gallery.iter().enumerate() {
                    Card { key: "{index}", config: config.clone() }
                }
            }

            if show_features {
                FeatureSummary {}
            }
        }
    }
}

/// Summary of the options every card accepts
#[component]
fn FeatureSummary() -> Element {
    let variants = variant_list();

    rsx! {
        section { class: "card-features",
            h2 { class: "card-features__title", "Customizable & Reusable" }
            p { class: "card-features__lead",
                "Each card component accepts props for complete customization:"
            }
            div { class: "card-features__grid",
                div { class: "card-features__item",
                    h3 { "Animation Types" }
                    p { "{variants}" }
                }
                div { class: "card-features__item",
                    h3 { "Style Options" }
                    p { "Custom gradients, glow colors, icons" }
                }
                div { class: "card-features__item",
                    h3 { "Content Flexible" }
                    p { "Any rsx content supported" }
                }
            }
        }
    }
}

fn variant_list() -> String {
    Variant::ALL
        .iter()
        .map(Variant::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
