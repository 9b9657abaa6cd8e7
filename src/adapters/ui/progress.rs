//! Spinner shown while a reply is pending.

use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

/// Start a "thinking" spinner. Call `finish_and_clear` when the reply arrives.
pub fn thinking_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    let style = ProgressStyle::with_template("{spinner:.magenta} {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
        .tick_strings(&["·  ", "·· ", "···", " ··", "  ·", "   "]);
    pb.set_style(style);
    pb.set_message("Alex is thinking...");
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}
