//! Scroll-triggered fade-in for cards

use crate::consts::{REVEAL_DURATION_SECS, REVEAL_OFFSET_PX, REVEAL_STAGGER_SECS};

/// Card groups that fade in, each staggered independently
pub const REVEAL_GROUPS: [&str; 2] = [".service-card", ".contact-card"];

/// Inline style values for one card
#[derive(Debug, Clone, PartialEq)]
pub struct RevealStyle {
    pub opacity: &'static str,
    pub transform: String,
    pub transition: Option<String>,
}

/// Hidden starting state for the `index`-th card of its group
pub fn hidden(index: usize) -> RevealStyle {
    RevealStyle {
        opacity: "0",
        transform: format!("translateY({}px)", REVEAL_OFFSET_PX),
        transition: Some(transition_for(index)),
    }
}

/// State once the card scrolls into view (transition left as set)
pub fn revealed() -> RevealStyle {
    RevealStyle {
        opacity: "1",
        transform: "translateY(0)".to_string(),
        transition: None,
    }
}

/// `all 0.6s ease-out {index * 0.1}s`
pub fn transition_for(index: usize) -> String {
    let delay = index as f64 * REVEAL_STAGGER_SECS;
    // Round away float noise (0.30000000000000004)
    let delay = (delay * 1000.0).round() / 1000.0;
    format!("all {}s ease-out {}s", REVEAL_DURATION_SECS, delay)
}
