//! Rishi Electronics site behaviors
//!
//! Core modules:
//! - `field`: Particle simulation for the animated backdrop (pure, seedable)
//! - `renderer`: Drawing surface abstraction and per-frame rendering
//! - `backdrop`: Particle field renderer lifecycle (attach, tick, resize, stop)
//! - `booking`: Booking form validation, date window, submission record
//! - `ui`: Navigation, smooth scroll and fade-in decisions
//! - `platform`: Browser glue (wasm32) and the headless frame loop

pub mod backdrop;
pub mod booking;
pub mod error;
pub mod field;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod ui;

pub use backdrop::Backdrop;
pub use error::{SettingsError, SetupError};
pub use field::{Particle, ParticleField};
pub use settings::BackdropSettings;

/// Site configuration constants
pub mod consts {
    /// Element id of the backdrop canvas
    pub const CANVAS_ID: &str = "tech-canvas";

    /// Backdrop defaults
    pub const PARTICLE_COUNT: usize = 60;
    pub const CONNECTION_DISTANCE: f64 = 150.0;
    /// Velocity range per axis is [-SPEED/2, SPEED/2)
    pub const SPEED: f64 = 0.5;
    pub const PARTICLE_RADIUS_MIN: f64 = 1.0;
    pub const PARTICLE_RADIUS_MAX: f64 = 3.0;
    pub const PARTICLE_COLOR: &str = "rgba(56, 189, 248, 0.5)"; // Light blue
    pub const CONNECTION_COLOR: &str = "rgba(56, 189, 248, 0.15)"; // Faint blue lines
    pub const CONNECTION_LINE_WIDTH: f64 = 1.0;

    /// Pair enumeration is O(n²); above this count a frame may not fit the budget
    pub const PAIRWISE_PARTICLE_CEILING: usize = 300;
    /// Hard cap accepted from settings overrides
    pub const MAX_PARTICLE_COUNT: usize = 2000;

    /// Headless frame interval (~60 Hz) when no display refresh signal exists
    pub const HEADLESS_FRAME_INTERVAL_MS: u64 = 16;

    /// Height of the fixed navbar, subtracted from smooth-scroll targets
    pub const NAV_SCROLL_OFFSET: f64 = 80.0;
    /// Scroll position after which the navbar gets its heavier shadow
    pub const NAVBAR_SHADOW_THRESHOLD: f64 = 100.0;

    /// Bookings may be made up to this many days ahead
    pub const BOOKING_WINDOW_DAYS: i64 = 30;
    /// Phone numbers are exactly this many digits
    pub const PHONE_DIGITS: usize = 10;

    /// Fade-in stagger between cards in the same group (seconds)
    pub const REVEAL_STAGGER_SECS: f64 = 0.1;
    pub const REVEAL_DURATION_SECS: f64 = 0.6;
    pub const REVEAL_OFFSET_PX: f64 = 30.0;
    pub const REVEAL_THRESHOLD: f64 = 0.1;
    pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
}
