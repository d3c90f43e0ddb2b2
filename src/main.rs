//! Rishi Electronics site entry point
//!
//! In the browser: wires every page behavior once the document is ready.
//! Natively: runs the backdrop headless against a recording surface.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_site {
    use std::cell::RefCell;

    use web_sys::{Document, Window};

    use rishi_site::{BackdropSettings, SetupError};
    use rishi_site::platform::web::{self, BackdropHandle, dom};

    thread_local! {
        static BACKDROP: RefCell<Option<BackdropHandle>> = const { RefCell::new(None) };
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(log::Level::Info).is_err() {
            web_sys::console::warn_1(&"Logger already initialized".into());
        }

        let (window, document) = match page() {
            Ok(page) => page,
            Err(e) => {
                web_sys::console::error_1(&format!("Site scripts disabled: {}", e).into());
                return;
            }
        };

        if document.ready_state() == "loading" {
            let ready_window = window.clone();
            let ready_document = document.clone();
            let mut started = false;
            dom::on(&document, "DOMContentLoaded", move |_event| {
                if !started {
                    started = true;
                    init_page(&ready_window, &ready_document);
                }
            });
        } else {
            init_page(&window, &document);
        }
    }

    fn page() -> Result<(Window, Document), SetupError> {
        let window = dom::window()?;
        let document = window.document().ok_or(SetupError::NoDocument)?;
        Ok((window, document))
    }

    fn init_page(window: &Window, document: &Document) {
        web::nav::init(window, document);
        web::booking::init(document);
        web::scroll::init(window, document);
        if let Err(e) = web::reveal::init(document) {
            log::debug!("Fade-in disabled: {}", e);
        }

        let handle = web::backdrop::start(window, document, BackdropSettings::load());
        BACKDROP.with(|slot| *slot.borrow_mut() = handle);

        log::info!("👋 Welcome to Rishi Electronics!");
        log::info!(
            "For the best electronics repair services, book your appointment through our website."
        );
    }

    /// Stop the backdrop animation (host teardown)
    pub fn stop_backdrop() {
        BACKDROP.with(|slot| {
            if let Some(handle) = slot.borrow_mut().take() {
                handle.stop();
            }
        });
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_site::run();
}

/// Stop the backdrop animation; exported for pages that tear down the view
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn stop_backdrop() {
    wasm_site::stop_backdrop();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use std::time::{SystemTime, UNIX_EPOCH};

    use rishi_site::platform::headless::{default_interval, run_fixed_interval};
    use rishi_site::renderer::RecordingSurface;
    use rishi_site::{Backdrop, BackdropSettings};

    const DEFAULT_TICKS: u64 = 300;
    const FRAMES_PER_REPORT: u64 = 60;

    env_logger::init();
    log::info!("Rishi site backdrop (headless) starting...");

    let ticks = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<u64>() {
            Ok(n) => n,
            Err(_) => {
                eprintln!("usage: rishi-site [TICKS]");
                std::process::exit(2);
            }
        },
        None => DEFAULT_TICKS,
    };

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default();

    let settings = BackdropSettings::load();
    let surface = RecordingSurface::new(800.0, 600.0);
    let Some(mut backdrop) = Backdrop::attach(Some(surface), settings, seed) else {
        return;
    };

    let summary = run_fixed_interval(&mut backdrop, ticks, default_interval(), |index, b, stats| {
        if index + 1 == ticks / 2 {
            b.surface_mut().set_size(400.0, 300.0);
            b.resize();
            log::info!("Resized to 400x300, particles regenerated");
        }
        if (index + 1) % FRAMES_PER_REPORT == 0 {
            log::info!(
                "frame {}: {} particles, {} connections",
                index + 1,
                stats.particles,
                stats.connections
            );
        }
    });

    println!(
        "{} frames, {:.1} connections/frame on average, peak {}",
        summary.frames,
        summary.mean_connections(),
        summary.max_connections
    );
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
