//! CarBar Desktop - native shell for the hosted CarBar web app
//!
//! Probes the host display, derives the window geometry, and opens a single
//! private-mode webview pointed at the hosted frontend. The process blocks
//! in the event loop until the user closes the window.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

use anyhow::Context;
use carbar_core::{display, LaunchConfig, WindowGeometry};
use tauri::{PhysicalPosition, PhysicalSize, WebviewUrl, WebviewWindowBuilder};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,carbar_core=debug".to_string()),
        )
        .init();

    tracing::info!(
        version = carbar_core::VERSION,
        "Starting CarBar"
    );

    if let Err(err) = run() {
        tracing::error!(error = %err, "CarBar failed");
        eprintln!("carbar: fatal: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let config = LaunchConfig::default();
    config.validate().context("launch configuration rejected")?;

    // DPI awareness has to be set before the first metrics query
    display::init_dpi_awareness();

    let screen = display::detect();
    let geometry = WindowGeometry::for_screen(screen);

    tracing::info!(%screen, %geometry, "Resolved window geometry");

    tauri::Builder::default()
        .setup(move |app| {
            let window = WebviewWindowBuilder::new(
                app,
                "main",
                WebviewUrl::External(config.url.clone()),
            )
            .title(&config.title)
            .resizable(config.resizable)
            .incognito(config.private_mode)
            .visible(false)
            .build()?;

            // The probe reports physical pixels, so the geometry is applied
            // as physical values rather than logical ones, then the window
            // is revealed at its final place.
            window.set_size(PhysicalSize::new(geometry.width, geometry.height))?;
            window.set_position(PhysicalPosition::new(geometry.x, geometry.y))?;
            window.show()?;

            #[cfg(debug_assertions)]
            if config.debug {
                window.open_devtools();
            }

            tracing::info!("CarBar window ready");

            Ok(())
        })
        .run(tauri::generate_context!())
        .context("error while running CarBar")?;

    Ok(())
}
