//! Egui widget components for the Wordcube board.
//!
//! This crate provides the presentation layer over `wordcube-core`:
//!
//! - **Buttons**: styled command buttons for rotate/reset/make-play
//! - **Layout**: separators and section labels
//! - **Panel**: the board panel that paints the pool and the active face
//!   and feeds pointer input into the core

pub mod buttons;
pub mod layout;
pub mod panel;

pub use buttons::CommandButton;
pub use layout::{section_label, separator};
pub use panel::{BoardPanel, BoardPanelStyle, BoardResponse};

/// Standard sizing constants used across widgets.
pub mod sizing {
    /// Command button height
    pub const BUTTON_HEIGHT: f32 = 24.0;
    /// Standard corner radius
    pub const CORNER_RADIUS: u8 = 4;
    /// Tile corner radius
    pub const TILE_RADIUS: u8 = 6;
}

/// Standard colors used across widgets.
pub mod theme {
    use egui::Color32;

    /// Text color (dark gray)
    pub const TEXT: Color32 = Color32::from_rgb(60, 60, 60);
    /// Muted text color
    pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 120, 120);
    /// Border color
    pub const BORDER: Color32 = Color32::from_rgb(220, 220, 220);
    /// Selection/active color (blue)
    pub const ACCENT: Color32 = Color32::from_rgb(59, 130, 246);
    /// Hover background
    pub const HOVER_BG: Color32 = Color32::from_rgb(245, 245, 245);
    /// Pool strip background
    pub const POOL_BG: Color32 = Color32::from_rgb(248, 248, 250);
    /// Face background
    pub const FACE_BG: Color32 = Color32::from_rgb(252, 252, 252);
    /// Face grid lines
    pub const GRID_LINE: Color32 = Color32::from_rgb(228, 228, 232);
    /// Tile fill (letter-tile amber)
    pub const TILE_FILL: Color32 = Color32::from_rgb(249, 233, 198);
    /// Tile border
    pub const TILE_BORDER: Color32 = Color32::from_rgb(206, 180, 132);
}
