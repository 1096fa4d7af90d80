use std::path::PathBuf;

use clap::{Parser, Subcommand};

use moodboard::config::{ColorChoice, Config};

/// Ask a mood server for a suggestion that fits how you feel
#[derive(Debug, Parser)]
#[command(name = "moodboard", version, about)]
pub struct Cli {
    /// Mood server base URL (overrides [server] base_url)
    #[arg(long, global = true, value_name = "URL")]
    pub server: Option<String>,

    /// Config file to read instead of ~/.config/moodboard/config.toml
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// When to color the result (overrides [display] color)
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorChoice>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze TEXT, or stdin when TEXT is omitted
    Analyze { text: Option<String> },
    /// Go to the chat page
    Chat,
    /// Go to the song page
    Song,
}

impl Cli {
    /// Apply command line overrides on top of the file config
    pub fn apply_overrides(&self, config: &mut Config) {
        if let Some(server) = &self.server {
            config.server.base_url = server.clone();
        }
        if let Some(color) = self.color {
            config.display.color = color;
        }
    }
}

/// Drop the line terminator a shell pipe adds to stdin
pub fn strip_trailing_newline(mut input: String) -> String {
    if input.ends_with('\n') {
        input.pop();
        if input.ends_with('\r') {
            input.pop();
        }
    }
    input
}
