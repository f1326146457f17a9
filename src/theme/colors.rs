//! Color constants for demo card content.

// === ACCENTS (list dots, stat values) ===
pub const BLUE_400: &str = "#60a5fa";
pub const GREEN_400: &str = "#4ade80";
pub const PURPLE_400: &str = "#c084fc";
