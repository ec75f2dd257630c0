#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use emolearn_core::{logging, SessionConfig};

/// Global session configuration, set from command line
static SESSION_CONFIG: OnceLock<SessionConfig> = OnceLock::new();

/// Get the session configuration (set from command line or default)
pub fn get_session_config() -> SessionConfig {
    SESSION_CONFIG.get().cloned().unwrap_or_default()
}

/// EmoLearn - Emotion-sensitive learning
#[derive(Parser, Debug)]
#[command(name = "emolearn-desktop")]
#[command(about = "EmoLearn - Personalized learning that adapts to how you feel")]
struct Args {
    /// Open directly on the dashboard for this mood (calm, energetic, focused, stressed, confident)
    #[arg(short, long)]
    mood: Option<String>,

    /// Delay before auto-advancing to the dashboard after picking a mood
    #[arg(long, value_name = "MS")]
    advance_delay_ms: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let args = Args::parse();

    logging::init(args.verbose.max(1));

    let config = SessionConfig::from_args(args.advance_delay_ms, args.mood.as_deref());
    tracing::info!(
        advance_delay = ?config.advance_delay,
        mood = ?config.initial_mood,
        "Starting EmoLearn"
    );
    let _ = SESSION_CONFIG.set(config);

    let window_width = 1100.0;
    let window_height = 900.0;

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("EmoLearn")
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
