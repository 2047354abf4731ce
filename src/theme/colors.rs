//! Color constants for the red-thread palette.
//!
//! Silk paper, golden hour light, and the red thread that ties the page
//! together.

#![allow(dead_code)]

// === PAPER (Backgrounds) ===
pub const SILK_WHITE: &str = "#fdfbf7";
pub const GOLDEN_HOUR: &str = "#f7f0e3";
pub const PAPER_SHADOW: &str = "rgba(60, 42, 33, 0.18)";

// === RED THREAD (Accent, Titles, Actions) ===
pub const RED_THREAD: &str = "#c0273f";
pub const RED_THREAD_DEEP: &str = "#9d2235";
pub const RED_THREAD_LIGHT: &str = "rgba(192, 39, 63, 0.08)";

// === TEXT ===
pub const INK: &str = "#3d3731";
pub const INK_SOFT: &str = "#6b625a";
pub const INK_MUTED: &str = "#9a9088";

// === SEMANTIC ===
pub const SUCCESS: &str = "#3e7a4e";
pub const DANGER: &str = "#b3261e";
