//! Color constants for the credential gallery.
//!
//! Mirrors the CSS custom properties in `styles.rs`.

#![allow(dead_code)]

// === SURFACES ===
pub const SURFACE_PAGE: &str = "#0f1115";
pub const SURFACE_CARD: &str = "#ffffff";
pub const SURFACE_CARD_HOVER: &str = "rgba(148, 163, 184, 0.25)";
pub const SURFACE_BACKDROP: &str = "rgba(0, 0, 0, 0.55)";

// === EMERALD (Calls to action) ===
pub const EMERALD: &str = "#059669";
pub const EMERALD_BRIGHT: &str = "#10b981";

// === TEXT ===
pub const TEXT_STRONG: &str = "#1f2937";
pub const TEXT_BODY: &str = "#4b5563";
pub const TEXT_MUTED: &str = "#9ca3af";
pub const TEXT_ON_DARK: &str = "#e5e7eb";

// === BORDERS ===
pub const BORDER_SOFT: &str = "#e5e7eb";
pub const BORDER_PILL: &str = "#d1d5db";
