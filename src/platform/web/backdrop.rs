//! Canvas backdrop driven by `requestAnimationFrame`

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use super::dom;
use crate::backdrop::Backdrop;
use crate::consts::CANVAS_ID;
use crate::renderer::CanvasSurface;
use crate::settings::BackdropSettings;

type SharedBackdrop = Rc<RefCell<Backdrop<CanvasSurface>>>;

/// Running backdrop; dropping the handle does not stop it
#[derive(Clone)]
pub struct BackdropHandle {
    backdrop: SharedBackdrop,
}

impl BackdropHandle {
    /// Stop before the next frame; no further frames are scheduled
    pub fn stop(&self) {
        self.backdrop.borrow_mut().stop();
    }

    pub fn is_running(&self) -> bool {
        self.backdrop.borrow().is_running()
    }
}

/// Attach to `#tech-canvas` and start the frame loop
///
/// Missing canvas or 2D context: nothing is scheduled and `None` comes
/// back.
pub fn start(window: &Window, document: &Document, settings: BackdropSettings) -> Option<BackdropHandle> {
    let surface = match CanvasSurface::find(document, CANVAS_ID) {
        Ok(surface) => Some(surface),
        Err(e) => {
            log::debug!("Backdrop disabled: {}", e);
            None
        }
    };

    let seed = js_sys::Date::now() as u64;
    let backdrop = Backdrop::attach(surface, settings, seed)?;
    let backdrop: SharedBackdrop = Rc::new(RefCell::new(backdrop));

    // Resize: re-measure and regenerate, loop keeps running
    {
        let backdrop = backdrop.clone();
        dom::on(window, "resize", move |_event| {
            backdrop.borrow_mut().resize();
        });
    }

    request_frame(backdrop.clone());
    log::info!("Backdrop running (seed {})", seed);

    Some(BackdropHandle { backdrop })
}

fn request_frame(backdrop: SharedBackdrop) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let closure = Closure::once(move |_time: f64| {
        frame(backdrop);
    });
    if window
        .request_animation_frame(closure.as_ref().unchecked_ref())
        .is_ok()
    {
        closure.forget();
    }
}

fn frame(backdrop: SharedBackdrop) {
    let keep_going = backdrop.borrow_mut().tick().is_some();
    if keep_going {
        request_frame(backdrop);
    }
}
