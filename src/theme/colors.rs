//! Colors - Monochrome Theme with Status Accents

use gpui::{Rgba, rgb, rgba};

/// Color palette - All colors are accessed via associated functions
pub struct Palette;

impl Palette {
    // Backgrounds
    /// Main background
    pub fn background() -> Rgba { rgb(0xf5f5f5) }
    /// Content area and card background
    pub fn content_bg() -> Rgba { rgb(0xffffff) }
    /// Header background
    pub fn header_bg() -> Rgba { rgb(0x000000) }
    /// Sidebar background
    pub fn sidebar_bg() -> Rgba { rgb(0xffffff) }
    /// Welcome page gradient stand-in
    pub fn welcome_bg() -> Rgba { rgb(0xeef2ff) }
    /// Log panel background
    pub fn log_panel_bg() -> Rgba { rgb(0x111827) }

    // Text colors
    /// Primary text
    pub fn text_primary() -> Rgba { rgb(0x000000) }
    /// Secondary text
    pub fn text_secondary() -> Rgba { rgb(0x4b5563) }
    /// Muted text
    pub fn text_muted() -> Rgba { rgb(0x9ca3af) }
    /// Light text (on dark backgrounds)
    pub fn text_light() -> Rgba { rgb(0xffffff) }
    /// Accent text on the welcome card
    pub fn text_accent() -> Rgba { rgb(0x4f46e5) }

    // Status colors
    pub fn success() -> Rgba { rgb(0x16a34a) }
    pub fn warning() -> Rgba { rgb(0xf59e0b) }
    pub fn danger() -> Rgba { rgb(0xdc2626) }
    pub fn info() -> Rgba { rgb(0x2563eb) }
    pub fn offline() -> Rgba { rgb(0x9ca3af) }

    // Borders
    /// Strong border used around widgets
    pub fn border_strong() -> Rgba { rgb(0x000000) }
    /// Default border
    pub fn border() -> Rgba { rgb(0xe5e7eb) }

    // Buttons
    pub fn button_primary_bg() -> Rgba { rgb(0x000000) }
    pub fn button_primary_hover() -> Rgba { rgb(0x1f2937) }
    pub fn button_primary_text() -> Rgba { rgb(0xffffff) }
    pub fn button_accent_bg() -> Rgba { rgb(0x4f46e5) }
    pub fn button_accent_hover() -> Rgba { rgb(0x4338ca) }
    pub fn button_ghost_text() -> Rgba { rgb(0x4b5563) }
    pub fn button_ghost_hover() -> Rgba { rgb(0xf3f4f6) }

    // Table colors
    pub fn table_header_bg() -> Rgba { rgb(0xf9fafb) }
    pub fn table_row_hover() -> Rgba { rgb(0xf3f4f6) }
    pub fn table_row_alt() -> Rgba { rgb(0xfafafa) }

    // Inputs
    pub fn input_bg() -> Rgba { rgb(0xffffff) }
    pub fn input_border() -> Rgba { rgb(0xd1d5db) }

    // Overlays
    pub fn subtle_overlay() -> Rgba { rgba(0xffffff22) }
    pub fn strong_overlay() -> Rgba { rgba(0xffffff44) }
}
