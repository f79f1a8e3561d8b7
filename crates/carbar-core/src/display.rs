//! Display metrics probing
//!
//! The shell sizes and centers its window against the primary display, so
//! the first thing it needs is the display's resolution in physical pixels.
//! Each platform gets its own [`DisplayProbe`] implementation; hosts without
//! a native query use [`FallbackProbe`], which reports a fixed 1920x1080.
//!
//! On Windows the process must be marked DPI-aware before the first metrics
//! query, otherwise the OS rescales the reported values on high-DPI
//! displays. [`init_dpi_awareness`] performs that one-time step.

use serde::{Deserialize, Serialize};
use std::sync::Once;

use crate::Result;

#[cfg(windows)]
use crate::Error;
#[cfg(windows)]
use windows::Win32::UI::HiDpi::SetProcessDPIAware;
#[cfg(windows)]
use windows::Win32::UI::WindowsAndMessaging::{GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN};

/// Primary display size in physical pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScreenMetrics {
    pub width: u32,
    pub height: u32,
}

impl ScreenMetrics {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Resolution assumed when no probe exists for the platform or the
    /// platform probe misbehaves
    pub const FALLBACK: ScreenMetrics = ScreenMetrics {
        width: 1920,
        height: 1080,
    };
}

impl std::fmt::Display for ScreenMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Trait for platform display probes
///
/// Implementations report the primary display size in physical pixels.
/// Call [`init_dpi_awareness`] before the first probe; on Windows the
/// metrics are otherwise scaled by the OS.
pub trait DisplayProbe: Send + Sync {
    /// Probe name for logs
    fn name(&self) -> &'static str;

    /// Query the primary display size
    fn probe(&self) -> Result<ScreenMetrics>;
}

/// Probe backed by the Win32 system metrics API
#[cfg(windows)]
pub struct Win32Probe;

#[cfg(windows)]
impl DisplayProbe for Win32Probe {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn probe(&self) -> Result<ScreenMetrics> {
        // GetSystemMetrics signals failure by returning 0, without setting
        // a last-error code.
        let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
        let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };

        if width <= 0 || height <= 0 {
            return Err(Error::InvalidMetrics { width, height });
        }

        Ok(ScreenMetrics::new(width as u32, height as u32))
    }
}

/// Probe for platforms without a native metrics query
///
/// Always reports [`ScreenMetrics::FALLBACK`].
pub struct FallbackProbe;

impl DisplayProbe for FallbackProbe {
    fn name(&self) -> &'static str {
        "fallback"
    }

    fn probe(&self) -> Result<ScreenMetrics> {
        Ok(ScreenMetrics::FALLBACK)
    }
}

/// Create the display probe for the current platform
pub fn create_probe() -> Box<dyn DisplayProbe> {
    #[cfg(windows)]
    {
        Box::new(Win32Probe)
    }

    #[cfg(not(windows))]
    {
        Box::new(FallbackProbe)
    }
}

/// Detect the primary display size with the platform probe
///
/// Never fails: probe errors and zero dimensions are logged and replaced
/// by [`ScreenMetrics::FALLBACK`].
pub fn detect() -> ScreenMetrics {
    let probe = create_probe();
    detect_with(probe.as_ref())
}

/// Detect the primary display size with a specific probe
pub fn detect_with(probe: &dyn DisplayProbe) -> ScreenMetrics {
    match probe.probe() {
        Ok(metrics) if metrics.width == 0 || metrics.height == 0 => {
            tracing::warn!(
                probe = probe.name(),
                %metrics,
                fallback = %ScreenMetrics::FALLBACK,
                "Display probe reported a zero dimension, using fallback resolution"
            );
            ScreenMetrics::FALLBACK
        }
        Ok(metrics) => {
            tracing::debug!(probe = probe.name(), %metrics, "Display probe succeeded");
            metrics
        }
        Err(err) => {
            tracing::warn!(
                probe = probe.name(),
                error = %err,
                fallback = %ScreenMetrics::FALLBACK,
                "Display probe failed, using fallback resolution"
            );
            ScreenMetrics::FALLBACK
        }
    }
}

static DPI_INIT: Once = Once::new();

/// Mark the process DPI-aware so metric queries report physical pixels
///
/// Must run before the first [`detect`]/[`DisplayProbe::probe`] call. The
/// underlying Win32 call affects the whole process for its lifetime and
/// cannot be undone; repeated calls are no-ops. On non-Windows platforms
/// this does nothing.
pub fn init_dpi_awareness() {
    DPI_INIT.call_once(|| {
        #[cfg(windows)]
        {
            // Returns FALSE when awareness was already set for the process,
            // in which case metrics are physical already.
            let ok = unsafe { SetProcessDPIAware() };
            tracing::debug!(success = ok.as_bool(), "Process marked DPI-aware");
        }

        #[cfg(not(windows))]
        tracing::debug!("DPI awareness handled by the platform");
    });
}
