//! CardFX Core Library
//!
//! Framework-independent logic behind the interactive card widgets.
//!
//! ## Overview
//!
//! A card is configured once with a [`CardConfig`] and then driven by two
//! pointer events. Each mounted card owns a [`CardMachine`] that tracks its
//! [`InteractionState`]; [`CardView`] turns that state into class lists and
//! inline styles using a [`StyleTokens`] table.
//!
//! ## Quick Start
//!
//! ```
//! use cardfx_core::{CardConfig, CardMachine, CardView, GlowColor, Pose, StyleTokens, Variant};
//!
//! let tokens = StyleTokens::default();
//! let config = CardConfig::new("Frontend Magic")
//!     .variant(Variant::Expand)
//!     .glow("purple".parse::<GlowColor>()?)
//!     .expanded("Atomic Design");
//!
//! let mut machine = CardMachine::new(config.variant, tokens.expand_delay());
//! let scheduled = machine.pointer_enter().expect("expand is deferred");
//! // ... host waits `scheduled.delay` ...
//! machine.timer_fired(scheduled.ticket);
//! assert_eq!(machine.pose(), Pose::Active);
//!
//! let view = CardView::resolve(&config, machine.state(), &tokens);
//! assert!(view.root().has_class("expanded"));
//! # Ok::<(), cardfx_core::CardError>(())
//! ```

pub mod config;
pub mod error;
pub mod gallery;
pub mod machine;
pub mod tokens;
pub mod view;

// Re-exports
pub use config::{CardConfig, GlowColor, Gradient, RawCardConfig, Variant, DEFAULT_GRADIENT};
pub use error::{CardError, CardResult};
pub use gallery::{Gallery, GalleryInstances};
pub use machine::{
    CardMachine, InteractionState, Pose, ScheduledExpand, TimerTicket, TransitionPolicy,
};
pub use tokens::{GlowShadows, StyleTokens};
pub use view::{
    expand_view, flip_view, layered_view, CardView, ElementStyle, ExpandView, FlipView,
    LayerPanel, LayeredView, PanelOffset, PanelView,
};
