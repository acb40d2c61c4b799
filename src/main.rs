#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

use clap::Parser;
use eframe::egui;
use monitoring_dashboard::{Args, Dashboard, INITIAL_HEIGHT, INITIAL_WIDTH, PROGRAM_TITLE};

// Application Entry Point
fn main() -> eframe::Result<()> {
    // Initialize logging, info level unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Only --help and --version are accepted
    let _args = Args::parse();

    log::info!("Starting {}", PROGRAM_TITLE);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([INITIAL_WIDTH, INITIAL_HEIGHT])
            .with_title(PROGRAM_TITLE),
        ..Default::default()
    };

    // Blocks until the window is closed
    let result = eframe::run_native(
        PROGRAM_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(Dashboard::new()))),
    );

    log::info!("{} closed.", PROGRAM_TITLE);
    result
}
