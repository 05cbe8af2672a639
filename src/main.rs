//! # ctrident - console system information viewer
//!
//! Shows kernel, system, battery, network, storage and account details of a
//! two-screen handheld, with a built-in button tester. The console is
//! emulated from a device profile and drawn in the terminal.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod app;
mod config;
pub mod constants;
mod error;
mod models;
mod monitor;
mod platform;
mod terminal;
mod ui;
mod utils;

use std::fs::{self, File};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::HomeSource;
use config::Config;
use constants::custom_theme_path;
use platform::{startup_services, EmulatedPlatform, ServiceScope};
use terminal::{TerminalDisplay, TerminalInput, TerminalSession};
use ui::{Font, RenderContext, Textures, Theme};

/// ctrident - handheld console system information viewer
#[derive(Parser, Debug)]
#[command(name = "ctrident", version, about = "Console system information viewer for the terminal")]
struct Cli {
    /// Config file to use instead of ~/.config/ctrident/config.toml
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// UI language (zh, en)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,

    /// Color theme (default, dusk, or a custom theme name)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// Write the debug log even in release builds
    #[arg(long)]
    debug_log: bool,

    /// Emulate Citra: no MCU service
    #[arg(long)]
    citra: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load and apply CLI overrides to config
    let mut config = match cli.config {
        Some(ref path) => Config::load_from(path),
        None => Config::load(),
    };
    if let Some(ref lang) = cli.lang {
        config.lang = lang.clone();
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if cli.debug_log {
        config.debug_log = true;
    }
    if cli.citra {
        config.device.citra = true;
    }

    if config.debug_log {
        init_logging(&config);
    }

    // Probe for CJK glyphs before entering the alternate screen
    let cjk_supported = config.lang != "zh" || utils::detect_cjk_support();
    let lang = utils::resolve_language(&config.lang, cjk_supported);
    rust_i18n::set_locale(lang);
    info!(lang, requested = %config.lang, "locale selected");

    let theme = Theme::by_name(&config.theme)
        .or_else(|| Theme::from_toml_file(&custom_theme_path(&config.theme)))
        .unwrap_or_default();
    let font = Font::load(config.font.as_deref())?;
    let textures = Textures::load()?;
    let ctx = RenderContext::new(font, textures.clone());

    let citra = config.device.citra;
    let mut platform = EmulatedPlatform::new(config.device.clone());
    let mut services = ServiceScope::acquire(&mut platform, &startup_services(citra))
        .context("failed to initialise console services")?;

    let session = TerminalSession::enter()?;
    let mut display = TerminalDisplay::new(textures)?;
    let mut input = TerminalInput::new(
        Duration::from_millis(config.frame_interval_ms),
        Duration::from_millis(config.hold_window_ms),
        session.reports_key_releases(),
        crossterm::terminal::size()?,
    );

    let mut app = app::App::new(ctx, theme, HomeSource::for_citra(citra));
    let result = app.run(&mut *services, &mut input, &mut display);

    drop(display);
    drop(session);
    info!("terminal restored");
    result
}

/// Route `tracing` output to the debug log file. Failing to open the file
/// only costs the log.
fn init_logging(config: &Config) {
    if let Some(dir) = config.log_file.parent() {
        if let Err(e) = fs::create_dir_all(dir) {
            eprintln!("Warning: cannot create log directory {}: {}", dir.display(), e);
            return;
        }
    }
    let file = match File::create(&config.log_file) {
        Ok(f) => f,
        Err(e) => {
            eprintln!(
                "Warning: cannot open log file {}: {}",
                config.log_file.display(),
                e
            );
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();
}
