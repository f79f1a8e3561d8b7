//! CarBar Core - launch logic for the CarBar desktop shell
//!
//! This crate provides everything the shell binary needs before a webview
//! exists:
//! - Display metrics probing (Win32 system metrics on Windows, a fixed
//!   fallback resolution elsewhere)
//! - One-time process DPI-awareness initialization
//! - Window geometry derivation (breakpoint sizing plus centering)
//! - The fixed launch configuration
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │                  CarBar Core                   │
//! ├────────────────────────────────────────────────┤
//! │                                                │
//! │  ┌──────────────┐          ┌────────────────┐  │
//! │  │   Display    │          │     Launch     │  │
//! │  │    Probe     │          │     Config     │  │
//! │  └──────┬───────┘          └───────┬────────┘  │
//! │         │                          │           │
//! │  ┌──────┴───────┐                  │           │
//! │  │    Window    │◄─────────────────┘           │
//! │  │   Geometry   │      (shell binary)          │
//! │  └──────────────┘                              │
//! └────────────────────────────────────────────────┘
//! ```
//!
//! The flow is linear: probe the display once, derive the geometry, hand
//! both to the shell. Nothing here touches the webview itself.

pub mod display;
pub mod error;
pub mod geometry;
pub mod launch;

pub use display::{
    create_probe, detect, detect_with, init_dpi_awareness, DisplayProbe, FallbackProbe,
    ScreenMetrics,
};
pub use error::{Error, Result};
pub use geometry::WindowGeometry;
pub use launch::{LaunchConfig, APP_URL, WINDOW_TITLE};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
