use log::Level;

/// Space left above a section after scrolling to it, clears the fixed header.
pub const HEADER_OFFSET: f64 = 80.0;

pub const SCROLLSPY_ENABLED: bool = false;
pub const SCROLLSPY_DEBOUNCE_MS: u32 = 100;

pub const FUNNEL_STEP_DELAY_MS: u32 = 200;
pub const FUNNEL_VISIBILITY_THRESHOLD: f64 = 0.5;

pub const INITIAL_SECTION: &str = "general";

pub const MENU_TOGGLE_ID: &str = "mobile-menu-toggle";

/// Sections in page order: (section key, tab label).
pub const SECTIONS: &[(&str, &str)] = &[
    ("general", "General"),
    ("process", "Process"),
    ("pricing", "Pricing"),
    ("team", "Team"),
];

/// Bookable intro call times as (hour, minute) in 24h clock.
pub const TIME_SLOTS: &[(u32, u32)] = &[(9, 0), (10, 0), (11, 30), (14, 0), (15, 0), (16, 30)];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
