//! CardFX UI Components
//!
//! Dioxus components for hover-animated cards:
//! - **Flip**: the card rotates around its vertical axis to show a back face
//! - **Expand**: the card grows and reveals extra content after a short delay
//! - **Layered**: three stacked panels peel apart
//!
//! Styling comes from [`CARD_STYLES`] plus inline values resolved from a
//! [`cardfx_core::StyleTokens`] table provided through context.

pub mod components;

pub use components::*;
