//! Mobile navigation and navbar styling

use crate::consts::NAVBAR_SHADOW_THRESHOLD;

pub const SHADOW_RAISED: &str = "0 4px 20px rgba(0, 0, 0, 0.1)";
pub const SHADOW_RESTING: &str = "0 4px 6px -1px rgba(0, 0, 0, 0.1)";

/// Inline styles for the three hamburger bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HamburgerStyle {
    pub top_transform: &'static str,
    pub middle_opacity: &'static str,
    pub bottom_transform: &'static str,
}

impl HamburgerStyle {
    /// Bars fold into an X while the menu is open
    pub fn for_menu(open: bool) -> Self {
        if open {
            Self {
                top_transform: "rotate(45deg) translate(5px, 5px)",
                middle_opacity: "0",
                bottom_transform: "rotate(-45deg) translate(7px, -6px)",
            }
        } else {
            Self {
                top_transform: "none",
                middle_opacity: "1",
                bottom_transform: "none",
            }
        }
    }
}

/// Navbar box-shadow for a vertical scroll offset
pub fn navbar_shadow(scroll_y: f64) -> &'static str {
    if scroll_y > NAVBAR_SHADOW_THRESHOLD {
        SHADOW_RAISED
    } else {
        SHADOW_RESTING
    }
}
