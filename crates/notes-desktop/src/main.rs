//! simple-notes Desktop Application
//!
//! A single-window app for short text notes: sidebar list, editor panel,
//! search, and clipboard copy, persisted locally as JSON.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod components;
mod services;
mod state;
mod theme;
mod views;

use dioxus::desktop::{Config, WindowBuilder};

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("notes=debug".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting simple-notes...");

    let config =
        Config::new().with_window(WindowBuilder::new().with_title("Simple Notes"));

    // Launch the app
    dioxus::LaunchBuilder::new()
        .with_cfg(config)
        .launch(app::App);
}
