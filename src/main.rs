// Weekly Schedule command line
// Renders a card configuration file to HTML or inspects its grid layout

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use weekly_schedule::models::schedule::{ScheduleConfig, ScheduleEvent};
use weekly_schedule::models::weekday::WeekDay;
use weekly_schedule::services::config::{default_config_path, load_config, normalize, save_config};
use weekly_schedule::ui_html::{configure, register_builtin_cards, CardTheme};

/// Weekly schedule card renderer
#[derive(Parser, Debug)]
#[command(name = "weekly-schedule")]
#[command(version, about, long_about = None)]
struct Args {
    /// Theme preset (light or dark)
    #[arg(short, long, global = true, default_value = "light")]
    theme: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a config file to an HTML card
    Render {
        /// Config file (.toml or .json); defaults to the platform config file
        config: Option<PathBuf>,
        /// Output file; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print the computed grid as JSON
    Layout {
        /// Config file (.toml or .json)
        config: Option<PathBuf>,
    },
    /// Validate a config file
    Check {
        /// Config file (.toml or .json)
        config: Option<PathBuf>,
    },
    /// Write a sample config file
    Init {
        /// Destination; defaults to the platform config file
        path: Option<PathBuf>,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();
    register_builtin_cards();

    let theme = CardTheme::preset(&args.theme)?;

    match args.command {
        Command::Render { config, output } => {
            let config = load_normalized(config)?;
            let rendered = configure(&config, &theme)?;
            match output {
                Some(path) => {
                    fs::write(&path, &rendered.html)
                        .with_context(|| format!("Failed to write {}", path.display()))?;
                    log::info!("Wrote card to {}", path.display());
                }
                None => print!("{}", rendered.html),
            }
        }
        Command::Layout { config } => {
            let config = load_normalized(config)?;
            let rendered = configure(&config, &theme)?;
            let json = serde_json::to_string_pretty(&rendered.grid)
                .context("Failed to encode grid")?;
            println!("{}", json);
        }
        Command::Check { config } => {
            let config = load_normalized(config)?;
            config.validate()?;
            let entries: usize = config.events.iter().map(|e| e.schedule.len()).sum();
            println!(
                "OK: {} events, {} schedule entries, hours {:02}:00-{:02}:00",
                config.events.len(),
                entries,
                config.start_hour,
                config.end_hour
            );
        }
        Command::Init { path, force } => {
            let path = match path {
                Some(path) => path,
                None => default_config_path()?,
            };
            if path.exists() && !force {
                bail!("{} already exists (use --force to overwrite)", path.display());
            }
            save_config(&path, &sample_config())?;
            println!("Wrote sample config to {}", path.display());
        }
    }

    Ok(())
}

fn load_normalized(path: Option<PathBuf>) -> Result<ScheduleConfig> {
    let path = match path {
        Some(path) => path,
        None => default_config_path()?,
    };
    let partial = load_config(&path)?;
    Ok(normalize(&partial))
}

fn sample_config() -> ScheduleConfig {
    ScheduleConfig {
        title: Some("My week".to_string()),
        start_hour: 8,
        end_hour: 18,
        events: vec![
            ScheduleEvent::new("Gym")
                .color("#e53935")
                .entry(WeekDay::Monday, 8, 9)
                .entry(WeekDay::Thursday, 8, 9),
            ScheduleEvent::new("Standup")
                .entry(WeekDay::Monday, 9, 9)
                .entry(WeekDay::Wednesday, 9, 9)
                .entry(WeekDay::Friday, 9, 9),
            ScheduleEvent::new("Reading").entry(WeekDay::Tuesday, 17, 18),
        ],
        ..Default::default()
    }
}
