use std::io::{self, Read, Write};
use std::process::ExitCode;

use clap::Parser;
use color_eyre::Result;
use crossterm::tty::IsTty;

use moodboard::config::load_config;
use moodboard::page::render_page;
use moodboard::{AnalyzeClient, AnalyzeTransport, MemoryPage, MoodPanel, Outcome};
use reqwest::Url;

mod cli;

use cli::{Cli, Command, strip_trailing_newline};

fn main() -> Result<ExitCode> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_deref())?;
    cli.apply_overrides(&mut config);

    let base_url = config.server.base_url()?;
    let stdout = io::stdout();
    let colors = config.display.color.enabled(stdout.is_tty());

    let mut panel = MoodPanel::new();

    match cli.command {
        Command::Analyze { text } => {
            let text = match text {
                Some(text) => text,
                None => {
                    let mut input = String::new();
                    io::stdin().read_to_string(&mut input)?;
                    strip_trailing_newline(input)
                }
            };

            let client = AnalyzeClient::new(&base_url)?;
            let mut page = MemoryPage::with_input(text);

            let pending = panel.begin(&mut page);
            if let Some(status) = page.result() {
                eprintln!("{}", status.plain_text());
            }

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            let result = runtime.block_on(client.analyze(&pending.text));
            let outcome = panel.finish(&mut page, pending.request_id, result);

            render_page(&mut stdout.lock(), &page, colors)?;

            Ok(match outcome {
                Outcome::Rendered => ExitCode::SUCCESS,
                Outcome::Failed | Outcome::Stale => ExitCode::FAILURE,
            })
        }
        Command::Chat => show_location(&base_url, |page| panel.go_to_chat(page)),
        Command::Song => show_location(&base_url, |page| panel.go_to_song(page)),
    }
}

/// Run a navigation handler and print the absolute URL it leads to
fn show_location(base_url: &Url, handler: impl FnOnce(&mut MemoryPage)) -> Result<ExitCode> {
    let mut page = MemoryPage::new();
    handler(&mut page);

    if let Some(path) = page.location() {
        writeln!(io::stdout().lock(), "{}", base_url.join(path)?)?;
    }
    Ok(ExitCode::SUCCESS)
}
