//! Reusable UI components
//!
//! All components render plain elements with design-system classes;
//! styling lives in the app's global stylesheet.

mod badge;
mod button;
mod card;
mod icon;
mod progress;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use icon::*;
pub use progress::*;
