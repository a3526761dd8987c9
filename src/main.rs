#![allow(non_snake_case)]

mod app;
mod clipboard;
mod components;
pub mod context;
mod links;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{ContentFeed, FolioConfig, ScrollLock, ViewportController};
use parking_lot::Mutex;
use tracing_subscriber::EnvFilter;

/// Everything the UI needs that is decided before launch
#[derive(Debug)]
pub struct Startup {
    pub content: ContentFeed,
    /// Handed to the root component exactly once
    controller: Mutex<Option<ViewportController>>,
}

impl Startup {
    pub fn take_controller(&self) -> Option<ViewportController> {
        self.controller.lock().take()
    }
}

/// Set once in `main` before the window opens
static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Startup state (command line, config file, content feed)
pub fn startup() -> Option<&'static Startup> {
    STARTUP.get()
}

/// Folio - single-page portfolio
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - single-page developer portfolio")]
struct Args {
    /// Content feed (JSON). Defaults to the built-in feed.
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Config file (TOML). Defaults to <config dir>/folio/config.toml if present.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Initial window width
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 860.0)]
    height: f64,

    /// Keep the system cursor instead of the animated follower
    #[arg(long)]
    no_cursor: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = FolioConfig::load(args.config.as_deref()).context("loading config")?;
    if args.no_cursor {
        config.pointer.enabled = false;
    }
    let content =
        ContentFeed::load_or_builtin(args.content.as_deref()).context("loading content feed")?;

    let title = format!("{} - {}", content.personal.name, content.personal.role);
    tracing::info!(
        sections = content.nav.len(),
        cursor = config.pointer.enabled,
        "Starting '{}'",
        title
    );

    let controller = ViewportController::new(
        config,
        content.section_ids(),
        None,
        ScrollLock::new(),
    )
    .context("building viewport controller")?;

    let _ = STARTUP.set(Startup {
        content,
        controller: Mutex::new(Some(controller)),
    });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);
    Ok(())
}
