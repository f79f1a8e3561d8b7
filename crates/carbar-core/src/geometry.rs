//! Window geometry derivation
//!
//! The hosted frontend is a phone-shaped single page app, so the window is
//! one of two fixed portrait sizes picked by a screen-width breakpoint,
//! centered on the display.

use serde::{Deserialize, Serialize};

use crate::display::ScreenMetrics;

/// Window size and position in physical pixels
///
/// Produced once at startup by [`WindowGeometry::for_screen`] and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WindowGeometry {
    /// Window width
    pub width: u32,
    /// Window height
    pub height: u32,
    /// Left edge offset from the screen origin
    pub x: i32,
    /// Top edge offset from the screen origin
    pub y: i32,
}

impl WindowGeometry {
    /// Screen width at or below which the small window size is used
    pub const BREAKPOINT_WIDTH: u32 = 1366;

    /// Window size for screens at or below [`Self::BREAKPOINT_WIDTH`]
    pub const SMALL_SIZE: (u32, u32) = (390, 844);

    /// Window size for screens above [`Self::BREAKPOINT_WIDTH`]
    pub const LARGE_SIZE: (u32, u32) = (412, 915);

    /// Derive the window geometry for a screen
    ///
    /// Picks the size from the breakpoint rule, then centers the window with
    /// truncating integer division. Offsets go negative when the window is
    /// wider or taller than the screen; callers get the literal centered
    /// values, not clamped ones, so the window keeps its size on small
    /// displays even if an edge leaves the visible area.
    pub fn for_screen(screen: ScreenMetrics) -> Self {
        let (width, height) = if screen.width <= Self::BREAKPOINT_WIDTH {
            Self::SMALL_SIZE
        } else {
            Self::LARGE_SIZE
        };

        let x = (screen.width as i32 - width as i32) / 2;
        let y = (screen.height as i32 - height as i32) / 2;

        Self { width, height, x, y }
    }
}

impl std::fmt::Display for WindowGeometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}x{}@({},{})", self.width, self.height, self.x, self.y)
    }
}
