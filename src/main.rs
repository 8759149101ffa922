//! slidewheel - Terminal carousel demo
//!
//! Runs the carousel controller against the ratatui terminal viewport.

use anyhow::Result;
use clap::{Arg, ArgAction, Command};
use slidewheel::{Carousel, CarouselConfig, TerminalViewport};
use std::path::Path;
use std::time::Duration;

/// Deck shown when no slides file is given.
fn sample_deck() -> Vec<String> {
    vec![
        "Welcome to slidewheel".to_string(),
        "Auto-advances every few seconds".to_string(),
        "Arrows navigate without resetting the countdown".to_string(),
        "n/p and digit jumps restart it".to_string(),
    ]
}

fn load_deck(path: &Path) -> Result<Vec<String>> {
    let contents = std::fs::read_to_string(path)?;
    let slides: Vec<String> = contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect();
    if slides.is_empty() {
        anyhow::bail!("No slides found in {}", path.display());
    }
    Ok(slides)
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging for development
    env_logger::init();

    let matches = Command::new("slidewheel")
        .version(slidewheel::VERSION)
        .about("An auto-advancing carousel in your terminal")
        .long_about(
            "slidewheel renders a slide deck as a terminal carousel with \
             auto-advance, arrow-key navigation, next/prev controls (n/p), \
             and indicator jumps (1-9).",
        )
        .arg(
            Arg::new("slides")
                .help("Path to a text file with one slide per line")
                .required(false)
                .index(1),
        )
        .arg(
            Arg::new("delay-ms")
                .long("delay-ms")
                .help("Milliseconds between automatic advances")
                .value_parser(clap::value_parser!(u64).range(1..))
                .default_value("5000"),
        )
        .arg(
            Arg::new("no-auto-scroll")
                .long("no-auto-scroll")
                .help("Disable automatic advancing")
                .action(ArgAction::SetTrue),
        )
        .get_matches();

    let slides = match matches.get_one::<String>("slides") {
        Some(path) => load_deck(Path::new(path))?,
        None => sample_deck(),
    };

    let config = CarouselConfig {
        auto_scroll: !matches.get_flag("no-auto-scroll"),
        auto_scroll_delay: Duration::from_millis(
            *matches
                .get_one::<u64>("delay-ms")
                .expect("delay-ms has a default"),
        ),
        ..CarouselConfig::default()
    };

    let viewport = Box::new(TerminalViewport::new(slides));
    let mut carousel = Carousel::new(viewport, config)?;

    carousel.run().await?;

    Ok(())
}
