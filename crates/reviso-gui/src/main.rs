#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use anyhow::{Context, Result};
use clap::Parser;
use eframe::egui;
use reviso_core::MindMapNode;
use std::path::PathBuf;

mod app;
mod canvas;

use app::RevisoApp;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a mind-map JSON file; a bundled sample is shown when omitted
    path: Option<PathBuf>,
}

fn main() -> Result<()> {
    // Log to stdout (if you run with `RUST_LOG=debug`).
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let tree = match &args.path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("reading mind map from {}", path.display()))?;
            let tree: MindMapNode = serde_json::from_str(&raw)
                .with_context(|| format!("parsing mind map from {}", path.display()))?;
            tree.validate()
                .with_context(|| format!("invalid mind map in {}", path.display()))?;
            tree
        }
        None => app::sample_map(),
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([1280.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Reviso",
        options,
        Box::new(|_cc| Ok(Box::new(RevisoApp::new(tree)))),
    )
    .map_err(|err| anyhow::anyhow!("eframe error: {err}"))
}
