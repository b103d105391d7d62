// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use ctr_verify::{config::{options::AppOptions, state::GuiState}, gui, log};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init();

    let state = GuiState::default();
    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.window_w as f32, state.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, AppOptions::from_env(), state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
