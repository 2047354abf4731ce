//! Theme for the invitation page.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
