//! Page behaviors outside the backdrop
//!
//! Only the decisions live here (which style, which scroll offset); the
//! DOM side is in `platform::web`.

pub mod nav;
pub mod reveal;
pub mod scroll;

pub use nav::{HamburgerStyle, navbar_shadow};
pub use reveal::{RevealStyle, transition_for};
pub use scroll::{AnchorAction, route_anchor, scroll_top_for};
