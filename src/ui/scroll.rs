//! In-page anchor routing

use crate::consts::NAV_SCROLL_OFFSET;

/// What a click on an `a[href^="#"]` should do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorAction<'a> {
    /// Bare `#`: swallow the click
    Ignore,
    /// Scroll to the element matching this selector, if it exists
    ScrollTo(&'a str),
    /// Not an in-page anchor; let the browser handle it
    Default,
}

pub fn route_anchor(href: &str) -> AnchorAction<'_> {
    match href {
        "#" => AnchorAction::Ignore,
        h if h.starts_with('#') => AnchorAction::ScrollTo(h),
        _ => AnchorAction::Default,
    }
}

/// Scroll position that puts a target just below the fixed navbar
pub fn scroll_top_for(target_offset_top: f64) -> f64 {
    target_offset_top - NAV_SCROLL_OFFSET
}
