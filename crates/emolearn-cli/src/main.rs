//! EmoLearn CLI
//!
//! Text preview of the catalog, the dashboard and the session flow, built on
//! emolearn-core.
//!
//! ## Usage
//!
//! ```bash
//! # List the emotions offered on the selection screen
//! emolearn emotions
//!
//! # Render the dashboard for a mood (unknown moods get the default)
//! emolearn dashboard stressed
//! emolearn dashboard focused --json
//!
//! # Replay session events through the state machine
//! emolearn session select:calm elapse reset
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use emolearn_core::{
    emotions, logging, Dashboard, Session, SessionEvent, Transition, ACTIVITY_ACTION,
};

/// EmoLearn - Emotion-sensitive learning preview
#[derive(Parser)]
#[command(name = "emolearn")]
#[command(version = "0.1.0")]
#[command(about = "EmoLearn - Emotion-sensitive learning preview")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the emotion catalog
    Emotions {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Render the dashboard for a mood
    Dashboard {
        /// Emotion identifier (calm, energetic, focused, stressed, confident)
        emotion: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Replay session events: select:<id>, start, elapse, reset
    Session {
        #[arg(required = true)]
        events: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match cli.command {
        Commands::Emotions { json } => {
            if json {
                println!("{}", serde_json::to_string_pretty(emotions())?);
            } else {
                println!("How are you feeling today?");
                println!();
                for emotion in emotions() {
                    println!(
                        "  {} {:<10} {:<10} {}",
                        emotion.icon.glyph(),
                        emotion.id,
                        emotion.label,
                        emotion.description
                    );
                }
            }
        }

        Commands::Dashboard { emotion, json } => {
            let dashboard = Dashboard::for_raw(&emotion);
            if json {
                println!("{}", serde_json::to_string_pretty(&dashboard)?);
            } else {
                print!("{}", render_dashboard(&dashboard));
            }
        }

        Commands::Session { events } => {
            let mut session = Session::new();
            for raw in &events {
                let event: SessionEvent = raw
                    .parse()
                    .with_context(|| format!("Cannot replay event '{}'", raw))?;
                let transition = session.apply(event);
                let selected = session
                    .selected()
                    .map(|id| id.as_str())
                    .unwrap_or("-");
                println!(
                    "{:<18} {:<10} selected={:<10} {}",
                    raw,
                    session.screen(),
                    selected,
                    describe(transition)
                );
            }
            if let Some(dashboard) = session.dashboard() {
                println!();
                print!("{}", render_dashboard(&dashboard));
            }
        }
    }

    Ok(())
}

fn describe(transition: Transition) -> &'static str {
    match transition {
        Transition::Selected(_) => "(auto-advance scheduled)",
        Transition::EnteredDashboard => "(entered dashboard)",
        Transition::ReturnedToSelection => "(back to selection)",
        Transition::Ignored => "(no change)",
    }
}

/// Text bar for a 0..=100 percentage, ten cells wide
fn progress_bar(percent: u8) -> String {
    let filled = (usize::from(percent.min(100)) + 5) / 10;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

fn render_dashboard(dashboard: &Dashboard) -> String {
    let mut out = String::new();
    let content = dashboard.content;

    out.push_str(&format!("{}\n", content.title));
    out.push_str(&format!("  {}\n\n", content.description));

    out.push_str("Progress\n");
    for metric in dashboard.metrics {
        out.push_str(&format!(
            "  {} {:<16} {:<8} {} {}%\n",
            metric.icon.glyph(),
            metric.label,
            metric.value,
            progress_bar(metric.percent),
            metric.percent
        ));
    }

    out.push_str("\nRecommended for Your Current Mood\n");
    for (index, activity) in dashboard.activities.iter().enumerate() {
        let marker = if activity.primary { ">" } else { " " };
        out.push_str(&format!(
            "  {}{}. {} ({}) [{}] {}\n",
            marker,
            index + 1,
            activity.label,
            activity.duration,
            activity.badge,
            ACTIVITY_ACTION
        ));
    }

    out.push_str("\nRecent Achievements\n");
    for achievement in dashboard.achievements {
        out.push_str(&format!("  \u{2713} {} - {}\n", achievement.title, achievement.subtitle()));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use emolearn_core::EmotionId;

    #[test]
    fn progress_bar_rounds_to_cells() {
        assert_eq!(progress_bar(0), "[----------]");
        assert_eq!(progress_bar(70), "[#######---]");
        assert_eq!(progress_bar(83), "[########--]");
        assert_eq!(progress_bar(100), "[##########]");
    }

    #[test]
    fn render_lists_activities_in_order() {
        let text = render_dashboard(&Dashboard::for_emotion(EmotionId::Stressed));
        let first = text.find("Review familiar topics").unwrap();
        let second = text.find("Short exercises").unwrap();
        let third = text.find("Breathing techniques").unwrap();
        assert!(first < second && second < third);
        assert!(text.starts_with("Gentle Learning\n"));
    }
}
