//! Card Icons
//!
//! Inline Lucide glyphs for the card header. They inherit `currentColor`.

use dioxus::prelude::*;

/// Available header glyphs
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum IconKind {
    Code,
    Palette,
    Zap,
    Users,
    Heart,
    Star,
}

impl IconKind {
    /// Accessible label for the glyph
    pub fn label(&self) -> &'static str {
        match self {
            IconKind::Code => "Code",
            IconKind::Palette => "Palette",
            IconKind::Zap => "Zap",
            IconKind::Users => "Users",
            IconKind::Heart => "Heart",
            IconKind::Star => "Star",
        }
    }
}

/// Renders a 24x24 stroked icon
#[component]
pub fn CardIcon(kind: IconKind, #[props(default = 32)] size: u32) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "{size}",
            height: "{size}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            role: "img",
            "aria-label": "{kind.label()}",
            {icon_paths(kind)}
        }
    }
}

fn icon_paths(kind: IconKind) -> Element {
    match kind {
        IconKind::Code => rsx! {
            polyline { points: "16 18 22 12 16 6" }
            polyline { points: "8 6 2 12 8 18" }
        },
        IconKind::Palette => rsx! {
            circle { cx: "13.5", cy: "6.5", r: ".5", fill: "currentColor" }
            circle { cx: "17.5", cy: "10.5", r: ".5", fill: "currentColor" }
            circle { cx: "8.5", cy: "7.5", r: ".5", fill: "currentColor" }
            circle { cx: "6.5", cy: "12.5", r: ".5", fill: "currentColor" }
            path { d: "M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z" }
        },
        IconKind::Zap => rsx! {
            polygon { points: "13 2 3 14 12 14 11 22 21 10 12 10 13 2" }
        },
        IconKind::Users => rsx! {
            path { d: "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" }
            circle { cx: "9", cy: "7", r: "4" }
            path { d: "M22 21v-2a4 4 0 0 0-3-3.87" }
            path { d: "M16 3.13a4 4 0 0 1 0 7.75" }
        },
        IconKind::Heart => rsx! {
            path { d: "M19 14c1.49-1.46 3-3.21 3-5.5A5.5 5.5 0 0 0 16.5 3c-1.76 0-3 .5-4.5 2-1.5-1.5-2.74-2-4.5-2A5.5 5.5 0 0 0 2 8.5c0 2.3 1.5 4.05 3 5.5l7 7Z" }
        },
        IconKind::Star => rsx! {
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        },
    }
}
