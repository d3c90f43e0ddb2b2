//! Headless backdrop behavior through the public API

use glam::DVec2;
use rishi_site::field::{ParticleField, advance, reflect};
use rishi_site::renderer::{DrawCommand, DrawSurface, RecordingSurface, draw_frame};
use rishi_site::{Backdrop, BackdropSettings, Particle};

fn attach(width: f64, height: f64, seed: u64) -> Backdrop<RecordingSurface> {
    Backdrop::attach(
        Some(RecordingSurface::new(width, height)),
        BackdropSettings::default(),
        seed,
    )
    .expect("surface present")
}

#[test]
fn test_missing_surface_schedules_nothing() {
    let backdrop: Option<Backdrop<RecordingSurface>> =
        Backdrop::attach(None, BackdropSettings::default(), 1);
    assert!(backdrop.is_none());
}

#[test]
fn test_resize_800x600_to_400x300() {
    let mut backdrop = attach(800.0, 600.0, 31337);
    for _ in 0..30 {
        backdrop.tick();
    }

    backdrop.surface_mut().set_size(400.0, 300.0);
    backdrop.resize();

    let field = backdrop.field();
    assert_eq!(field.particles().len(), 60);
    assert!(field.particles().iter().all(|p| {
        (0.0..400.0).contains(&p.pos.x) && (0.0..300.0).contains(&p.pos.y)
    }));

    // Next frame clears the new, smaller area
    backdrop.tick();
    assert_eq!(
        backdrop.surface().commands()[0],
        DrawCommand::Clear {
            width: 400.0,
            height: 300.0
        }
    );
}

#[test]
fn test_left_edge_reflection_flips_once() {
    let mut p = Particle::new(DVec2::new(0.0, 10.0), DVec2::new(-0.1, 0.0), 1.0);
    advance(&mut p);
    reflect(&mut p, 400.0, 300.0);
    assert!(p.vel.x > 0.0);
    assert!((p.vel.x - 0.1).abs() < 1e-12);
}

#[test]
fn test_lines_only_below_threshold() {
    let settings = BackdropSettings {
        particle_count: 4,
        ..Default::default()
    };
    let mut field = ParticleField::new(1000.0, 1000.0, settings, 5);
    let positions = [
        DVec2::new(0.0, 0.0),
        DVec2::new(150.0, 0.0),   // exactly at threshold from #0
        DVec2::new(0.0, 149.0),   // just inside from #0
        DVec2::new(900.0, 900.0), // isolated
    ];
    for (p, pos) in field.particles_mut().iter_mut().zip(positions) {
        p.pos = pos;
    }

    let mut surface = RecordingSurface::new(1000.0, 1000.0);
    let stats = draw_frame(&mut surface, &field);
    assert_eq!(stats.connections, 1);
    assert!(surface.commands().contains(&DrawCommand::Line {
        from: DVec2::new(0.0, 0.0),
        to: DVec2::new(0.0, 149.0),
        color: "rgba(56, 189, 248, 0.15)".to_string(),
        line_width: 1.0,
    }));
}

#[test]
fn test_long_run_stays_bounded() {
    let mut backdrop = attach(320.0, 240.0, 99);
    for _ in 0..5_000 {
        backdrop.tick();
    }
    let slack = BackdropSettings::default().speed;
    for p in backdrop.field().particles() {
        assert!(p.pos.x >= -slack && p.pos.x <= 320.0 + slack);
        assert!(p.pos.y >= -slack && p.pos.y <= 240.0 + slack);
    }
}

/// A surface that never reports a size, like a canvas measured before layout
struct Unlaid;

impl DrawSurface for Unlaid {
    fn measure(&mut self) -> (f64, f64) {
        (0.0, 0.0)
    }
    fn clear(&mut self, _width: f64, _height: f64) {}
    fn fill_circle(&mut self, _center: DVec2, _radius: f64, _color: &str) {}
    fn stroke_line(&mut self, _from: DVec2, _to: DVec2, _color: &str, _line_width: f64) {}
}

#[test]
fn test_zero_sized_surface_never_produces_nan() {
    let mut backdrop = Backdrop::attach(Some(Unlaid), BackdropSettings::default(), 4).unwrap();
    for _ in 0..100 {
        let stats = backdrop.tick().unwrap();
        assert_eq!(stats.particles, 60);
    }
    assert!(
        backdrop
            .field()
            .particles()
            .iter()
            .all(|p| p.pos.is_finite() && p.vel.is_finite())
    );
}
