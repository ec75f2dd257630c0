//! Theme for EmoLearn: color tokens and the global stylesheet.

pub mod colors;
mod styles;

pub use styles::GLOBAL_STYLES;
