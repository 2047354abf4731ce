#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use redthread_core::WeddingContent;

use crate::context::AppSettings;

/// Global settings, set from command line before launch
static SETTINGS: OnceLock<AppSettings> = OnceLock::new();

/// Get the application settings (content + RSVP endpoint).
pub fn get_settings() -> AppSettings {
    SETTINGS.get().cloned().unwrap_or_else(|| AppSettings {
        content: WeddingContent::builtin(),
        rsvp_endpoint: None,
    })
}

/// Red Thread - Wedding Invitation
#[derive(Parser, Debug)]
#[command(name = "redthread-desktop")]
#[command(about = "Red Thread - animated wedding invitation")]
struct Args {
    /// Content file (JSON); built-in content is used when omitted
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// RSVP submission endpoint (overrides REDTHREAD_RSVP_URL)
    #[arg(short, long)]
    rsvp_url: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let content = match args.content {
        Some(ref path) => match WeddingContent::from_file(path) {
            Ok(content) => {
                tracing::info!("Loaded content from {:?}", path);
                content
            }
            Err(e) => {
                tracing::error!("Failed to load content from {:?}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => WeddingContent::builtin(),
    };

    let rsvp_endpoint = args
        .rsvp_url
        .or_else(|| std::env::var("REDTHREAD_RSVP_URL").ok());
    if rsvp_endpoint.is_none() {
        tracing::warn!("No RSVP endpoint configured; submissions will fail locally");
    }

    let title = format!(
        "{} & {} - Thiệp Cưới",
        content.groom.display_name, content.bride.display_name
    );

    let _ = SETTINGS.set(AppSettings {
        content,
        rsvp_endpoint,
    });

    // Window size: phone-like portrait, the layout the invitation targets
    let window_width = 480.0;
    let window_height = 920.0;

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
