//! Card components and the hook that drives them

mod card;
mod card_gallery;
mod hooks;
mod icon;
mod styles;

pub use card::*;
pub use card_gallery::*;
pub use hooks::*;
pub use icon::*;
pub use styles::CARD_STYLES;
