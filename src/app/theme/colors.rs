//! Color Constants
//!
//! Calm teal/cream palette carried over from the mobile app's styling.

use eframe::egui::Color32;

/// Main background - Warm cream
pub const BG_CREAM: Color32 = Color32::from_rgb(0xF7, 0xF4, 0xEE);

/// Card/panel background - Off-white
pub const CARD_BG: Color32 = Color32::from_rgb(0xFF, 0xFD, 0xF9);

/// Primary accent - Muted teal
pub const ACCENT: Color32 = Color32::from_rgb(0x89, 0xB0, 0xAE);

/// Button fill - Light blue-teal
pub const BUTTON: Color32 = Color32::from_rgb(0x88, 0xC0, 0xD0);

/// Top bar background - Deep teal
pub const TOP_BAR_BG: Color32 = Color32::from_rgb(0x3E, 0x5C, 0x5A);

/// Primary text - Near black
pub const TEXT_DARK: Color32 = Color32::from_rgb(0x2B, 0x2B, 0x28);

/// Secondary text - Gray
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x8A, 0x8A, 0x84);

/// Light text on dark fills
pub const TEXT_LIGHT: Color32 = Color32::from_rgb(0xF5, 0xF5, 0xF0);

/// Error messages - Soft red
pub const ERROR: Color32 = Color32::from_rgb(0xC0, 0x4A, 0x3E);

/// Success/notice messages - Green
pub const NOTICE: Color32 = Color32::from_rgb(0x4A, 0x8C, 0x5C);

/// Hint banner background - Pale yellow
pub const HINT_BG: Color32 = Color32::from_rgb(0xFB, 0xF3, 0xD5);

/// Summary box background - Pale teal
pub const SUMMARY_BG: Color32 = Color32::from_rgb(0xE3, 0xEE, 0xED);

/// Overdue reminder flag - Amber
pub const OVERDUE: Color32 = Color32::from_rgb(0xD9, 0x8E, 0x32);
