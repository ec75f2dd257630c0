//! Page components for EmoLearn.
//!
//! Exactly one is mounted at a time, chosen by the root controller.

mod dashboard;
mod selection;

pub use dashboard::DashboardPage;
pub use selection::SelectionPage;
