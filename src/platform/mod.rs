//! Platform layer
//!
//! - `headless`: fixed-interval frame loop for native runs and tests
//! - `web`: DOM wiring for every page behavior (wasm32 only)

#[cfg(not(target_arch = "wasm32"))]
pub mod headless;

#[cfg(target_arch = "wasm32")]
pub mod web;
