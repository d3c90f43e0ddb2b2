//! Particle field renderer
//!
//! Binds a `ParticleField` to a drawing surface and drives it one frame
//! at a time. Scheduling is left to the caller (`requestAnimationFrame` in
//! the browser, a fixed interval headless), which keeps every call here
//! synchronous and non-reentrant.

use crate::field::ParticleField;
use crate::renderer::{DrawSurface, FrameStats, draw_frame};
use crate::settings::BackdropSettings;

/// Animated particle-network background
#[derive(Debug)]
pub struct Backdrop<S: DrawSurface> {
    surface: S,
    field: ParticleField,
    stopped: bool,
    frames: u64,
}

impl<S: DrawSurface> Backdrop<S> {
    /// Measure the surface and seed the field
    ///
    /// Without a surface there is nothing to animate: returns `None`
    /// without touching any state.
    pub fn attach(surface: Option<S>, settings: BackdropSettings, seed: u64) -> Option<Self> {
        let Some(mut surface) = surface else {
            log::debug!("No drawing surface, backdrop disabled");
            return None;
        };

        if settings.exceeds_pairwise_ceiling() {
            log::warn!(
                "{} particles exceeds the pairwise connection ceiling; frames may drop",
                settings.particle_count
            );
        }

        let (width, height) = surface.measure();
        let field = ParticleField::new(width, height, settings, seed);
        log::debug!(
            "Backdrop attached: {}x{}, {} particles",
            width,
            height,
            field.particles().len()
        );

        Some(Self {
            surface,
            field,
            stopped: false,
            frames: 0,
        })
    }

    /// Advance and draw one frame
    ///
    /// Returns `None` once stopped; the caller must not schedule another
    /// frame in that case.
    pub fn tick(&mut self) -> Option<FrameStats> {
        if self.stopped {
            return None;
        }
        self.field.step();
        let stats = draw_frame(&mut self.surface, &self.field);
        self.frames += 1;
        Some(stats)
    }

    /// Host surface changed size: re-measure first, then regenerate
    pub fn resize(&mut self) {
        if self.stopped {
            return;
        }
        let (width, height) = self.surface.measure();
        self.field.resize(width, height);
        log::debug!("Backdrop resized to {}x{}", width, height);
    }

    /// Stop animating; later ticks and resizes do nothing
    pub fn stop(&mut self) {
        if !self.stopped {
            log::debug!("Backdrop stopped after {} frames", self.frames);
        }
        self.stopped = true;
    }

    pub fn is_running(&self) -> bool {
        !self.stopped
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn field(&self) -> &ParticleField {
        &self.field
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Access to the surface, e.g. to change a recorder's reported size
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::RecordingSurface;

    fn attached(width: f64, height: f64) -> Backdrop<RecordingSurface> {
        Backdrop::attach(
            Some(RecordingSurface::new(width, height)),
            BackdropSettings::default(),
            77,
        )
        .unwrap()
    }

    #[test]
    fn test_attach_without_surface_is_noop() {
        let backdrop = Backdrop::<RecordingSurface>::attach(None, BackdropSettings::default(), 1);
        assert!(backdrop.is_none());
    }

    #[test]
    fn test_attach_measures_surface() {
        let backdrop = attached(1024.0, 768.0);
        assert_eq!(backdrop.field().width(), 1024.0);
        assert_eq!(backdrop.field().height(), 768.0);
        assert_eq!(backdrop.field().particles().len(), 60);
        // Nothing drawn until the first tick
        assert_eq!(backdrop.surface().frames(), 0);
    }

    #[test]
    fn test_tick_draws_every_particle() {
        let mut backdrop = attached(800.0, 600.0);
        let stats = backdrop.tick().unwrap();
        assert_eq!(stats.particles, 60);
        assert_eq!(backdrop.surface().circle_count(), 60);
        assert_eq!(backdrop.surface().line_count(), stats.connections);
        assert_eq!(backdrop.frames(), 1);
    }

    #[test]
    fn test_resize_remeasures_before_regenerating() {
        let mut backdrop = attached(800.0, 600.0);
        backdrop.tick();
        backdrop.surface_mut().set_size(400.0, 300.0);
        backdrop.resize();

        assert_eq!(backdrop.field().width(), 400.0);
        assert_eq!(backdrop.field().height(), 300.0);
        assert_eq!(backdrop.field().particles().len(), 60);
        for p in backdrop.field().particles() {
            assert!(p.pos.x >= 0.0 && p.pos.x < 400.0);
            assert!(p.pos.y >= 0.0 && p.pos.y < 300.0);
        }
        // Loop keeps going against the new set
        assert!(backdrop.tick().is_some());
    }

    #[test]
    fn test_stop_halts_ticks() {
        let mut backdrop = attached(800.0, 600.0);
        backdrop.tick();
        backdrop.stop();
        assert!(!backdrop.is_running());

        let before = backdrop.field().particles().to_vec();
        assert!(backdrop.tick().is_none());
        backdrop.resize();
        assert_eq!(backdrop.field().particles(), before.as_slice());
        assert_eq!(backdrop.surface().frames(), 1);
    }
}
