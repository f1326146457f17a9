#![allow(non_snake_case)]

mod app;
mod demo;
mod settings;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;

use crate::settings::{resolve_tokens, VariantFilter};

/// CardFX - Interactive card gallery
#[derive(Parser, Debug)]
#[command(name = "cardfx-gallery")]
#[command(about = "Showcase of hover-animated flip, expand and layered cards")]
struct Args {
    /// Style token file (JSON); defaults to <config dir>/cardfx/tokens.json when present
    #[arg(short, long)]
    tokens: Option<std::path::PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Only show cards of one variant (flip, expand, layered)
    #[arg(short, long)]
    only: Option<String>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let tokens = resolve_tokens(args.tokens.as_deref())?;
    let filter = VariantFilter::from_arg(args.only.as_deref());

    tracing::info!(
        filter = ?filter.variant(),
        expand_delay_ms = tokens.expand_delay_ms,
        "Starting card gallery"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("CardFX - Interactive Card Gallery")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .with_context(tokens)
        .with_context(filter)
        .launch(app::App);

    Ok(())
}
