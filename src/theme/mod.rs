//! Gallery theme: palette constants and the page stylesheet.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
