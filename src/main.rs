#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod infra;
mod ui;
mod util;

use dioxus::prelude::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::infra::dataset;
use crate::util::{config::AppConfig, version::APP_SHORT_NAME, version::version_label};

fn main() {
    let config = AppConfig::from_env();
    init_tracing(&config);

    tracing::info!(version = %version_label(), "starting {APP_SHORT_NAME}");

    // The dataset is loaded once; a bad dataset stops the app before any window opens.
    let catalog = match dataset::init_catalog(&config) {
        Ok(catalog) => catalog,
        Err(err) => {
            tracing::error!("failed to load tariff dataset: {err}");
            std::process::exit(1);
        }
    };

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    let builder = LaunchBuilder::new().with_context(catalog);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(APP_SHORT_NAME)
            )
        };
        builder.with_cfg(config)
    };

    builder.launch(app::App);
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(util::config::DEFAULT_LOG_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
