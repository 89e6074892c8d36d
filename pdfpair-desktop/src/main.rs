//! pdfpair - Merge two PDF files into one.
//!
//! Opens a small window with two drop slots and a merge button.

mod app;
mod cli;
mod surface;

use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

use crate::app::PdfPairApp;
use crate::cli::Cli;

const WINDOW_TITLE: &str = "PDF Pair";

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = cli.to_config()?;
    tracing::info!(version = pdfpair::VERSION, "starting {}", pdfpair::NAME);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(WINDOW_TITLE)
            .with_inner_size([440.0, 420.0])
            .with_min_inner_size([400.0, 380.0])
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(PdfPairApp::new(cc, config)))),
    )
    .map_err(|e| anyhow::anyhow!("window failed: {e}"))
}
