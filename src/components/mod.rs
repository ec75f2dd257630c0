//! UI Components for EmoLearn.
//!
//! Screen-level pieces; generic building blocks live in `emolearn-ui`.

mod app_header;
mod emotion_selector;
mod landing_sections;
mod learning_dashboard;

pub use app_header::AppHeader;
pub use emotion_selector::EmotionSelector;
pub use landing_sections::{FeatureCards, HeroBanner};
pub use learning_dashboard::LearningDashboard;
