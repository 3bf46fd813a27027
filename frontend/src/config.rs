use log::Level;

pub const BRAND_NAME: &str = "Meridian Systems";

/// Delay before a selected product's installation guide slides in.
pub const INSTALL_GUIDE_REVEAL_DELAY_MS: u32 = 300;

/// An element is revealed once its top edge is this far above the bottom of the viewport.
pub const REVEAL_OFFSET_PX: f64 = 100.0;
pub const REVEAL_INITIAL_CHECK_MS: u32 = 100;

pub const NAV_SCROLLED_THRESHOLD_PX: i32 = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose logging when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
