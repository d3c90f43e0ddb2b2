//! Browser wiring
//!
//! Every `init` here looks up its elements, attaches listeners and
//! returns. Missing elements disable only the behavior that needs them.

pub mod backdrop;
pub mod booking;
pub mod dom;
pub mod modal;
pub mod nav;
pub mod reveal;
pub mod scroll;

pub use backdrop::BackdropHandle;
