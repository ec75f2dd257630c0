//! EmoLearn UI Components
//!
//! Dioxus building blocks for the mood-adaptive learning screens.
//!
//! ## Design Philosophy
//!
//! Soft, calm surfaces that let the mood color carry the page:
//! - **Primary (#6d5dfc)**: main actions, selected state, brand
//! - **Success (#3fb984)**: achievements, completion
//! - **Accent (#f2994a)**: time and secondary highlights
//! - **Emotion tokens**: one tint per catalog emotion (`emotion-calm`, ...)
//!
//! Components only take display data; they never own session state.

pub mod components;

pub use components::*;
