// Host-side scenario tests driving the cursor controller tick by tick.

use cursor_core::*;
use glam::Vec2;
use std::time::Duration;

const FRAME: Duration = Duration::from_millis(16);

#[test]
fn single_tick_move_right_spawns_trailing_burst() {
    let mut c = CursorController::default();
    c.pointer_entered();
    c.pointer_moved(100.0, 0.0);
    c.tick(FRAME);

    assert!((c.pointer().heading_degrees() - 90.0).abs() < 1e-4);
    let particles = c.particles().particles();
    assert_eq!(particles.len(), 5);
    for p in particles {
        assert_eq!(p.position, Vec2::new(100.0, 0.0));
        assert!((p.velocity - Vec2::new(-1.0, 0.0) * 0.5).length() < 1e-6);
    }
}

#[test]
fn still_pointer_spawns_nothing_after_first_tick() {
    let mut c = CursorController::default();
    c.pointer_entered();
    c.pointer_moved(40.0, 40.0);
    c.tick(FRAME);
    let n = c.particles().len();
    c.tick(FRAME);
    c.pointer_moved(40.2, 40.2);
    c.tick(FRAME);
    // Only decay happens: nothing new was added.
    assert!(c.particles().len() <= n);
    assert!(c.particles().particles().iter().all(|p| p.id.0 < n as u64));
}

#[test]
fn displacement_is_measured_between_ticks_not_events() {
    let mut c = CursorController::default();
    c.pointer_moved(10.0, 10.0);
    c.tick(FRAME);
    let base = c.particles().len();
    // Many tiny events adding up to more than the threshold within one frame.
    for i in 1..=10 {
        c.pointer_moved(10.0 + i as f32 * 0.1, 10.0);
    }
    c.tick(Duration::ZERO);
    assert_eq!(c.particles().len(), base + 5);
}

#[test]
fn simulation_runs_while_hidden() {
    let mut c = CursorController::default();
    c.pointer_moved(200.0, 100.0);
    c.tick(FRAME);
    assert!(!c.pointer().is_visible());
    assert_eq!(c.particles().len(), 5);
    assert!(!c.view().glyph.visible);
    assert_eq!(c.view().particles.len(), 5);
}

#[test]
fn leaving_fades_glyph_while_particles_finish_decaying() {
    let mut c = CursorController::default();
    c.pointer_entered();
    for i in 0..20 {
        c.pointer_moved(i as f32 * 4.0, 0.0);
        c.tick(FRAME);
    }
    assert_eq!(c.glyph_opacity(), 1.0);
    assert!(!c.particles().is_empty());

    c.pointer_left();
    c.tick(Duration::from_millis(150));
    let v = c.view();
    assert!(v.glyph.visible);
    assert!((v.glyph.opacity - 0.5).abs() < 1e-4);

    let mut elapsed = Duration::from_millis(150);
    while !c.particles().is_empty() {
        c.tick(FRAME);
        elapsed += FRAME;
        assert!(elapsed < Duration::from_secs(1));
    }
    assert!(c.glyph_opacity() > 0.0);
    c.tick(Duration::from_millis(300));
    assert_eq!(c.glyph_opacity(), 0.0);
    assert!(!c.view().glyph.visible);
}

#[test]
fn reentering_fades_glyph_back_in() {
    let mut c = CursorController::default();
    c.pointer_entered();
    c.tick(Duration::from_millis(100));
    let partial = c.glyph_opacity();
    assert!(partial > 0.0 && partial < 1.0);
    c.pointer_left();
    c.tick(Duration::from_millis(50));
    assert!(c.glyph_opacity() < partial);
    c.pointer_entered();
    c.tick(Duration::from_millis(300));
    assert_eq!(c.glyph_opacity(), 1.0);
}

#[test]
fn view_mirrors_state() {
    let mut c = CursorController::default();
    c.pointer_entered();
    c.pointer_moved(30.0, 40.0);
    c.tick(Duration::from_millis(300));
    c.pointer_moved(30.0, 45.0);
    c.tick(FRAME);

    let v = c.view();
    assert_eq!(v.glyph.position, Vec2::new(30.0, 45.0));
    assert!((v.glyph.rotation_degrees - 180.0).abs() < 1e-3);
    assert_eq!(v.glyph.opacity, 1.0);
    assert_eq!(v.particles.len(), c.particles().len());
    for (pv, p) in v.particles.iter().zip(c.particles().particles()) {
        assert_eq!(pv.id, p.id);
        assert_eq!(pv.position, p.position);
        assert_eq!(pv.size, p.scale);
        assert_eq!(pv.opacity, p.alpha);
    }
}

#[test]
fn touch_leave_does_not_hide_mouse_glyph() {
    let mut c = CursorController::default();
    assert!(c.handle_pointer("mouse", PointerInput::Entered));
    assert!(c.handle_pointer("mouse", PointerInput::moved(50.0, 50.0)));
    c.tick(Duration::from_millis(300));
    assert_eq!(c.glyph_opacity(), 1.0);

    // A tap on a touch screen sends its own enter/move/leave sequence.
    assert!(!c.handle_pointer("touch", PointerInput::Entered));
    assert!(!c.handle_pointer("touch", PointerInput::moved(400.0, 10.0)));
    assert!(!c.handle_pointer("touch", PointerInput::Left));
    c.tick(Duration::from_millis(300));

    assert!(c.pointer().is_visible());
    assert_eq!(c.pointer().position(), Vec2::new(50.0, 50.0));
    assert_eq!(c.glyph_opacity(), 1.0);
    assert!(c.view().glyph.visible);
}

#[test]
fn mouse_leave_still_hides_glyph() {
    let mut c = CursorController::default();
    c.handle_pointer("mouse", PointerInput::Entered);
    c.tick(Duration::from_millis(300));
    assert!(c.handle_pointer("mouse", PointerInput::Left));
    c.tick(Duration::from_millis(300));
    assert!(!c.pointer().is_visible());
    assert!(!c.view().glyph.visible);
}

#[test]
fn custom_params_flow_through() {
    let params = CursorParams {
        burst_size: 2,
        max_distance_px: 4.0,
        heading_offset_deg: 0.0,
        ..CursorParams::default()
    };
    let mut c = CursorController::new(params);
    c.pointer_moved(0.0, 10.0);
    c.tick(Duration::ZERO);
    assert_eq!(c.particles().len(), 2);
    assert!((c.pointer().heading_degrees() - 90.0).abs() < 1e-4);
    for _ in 0..4 {
        c.tick(Duration::ZERO);
    }
    assert!(c.particles().is_empty());
}

#[test]
fn centered_transform_formats_position_and_rotation() {
    assert_eq!(
        centered_transform(Vec2::new(12.5, 3.0), 90.0),
        "translate(12.50px, 3.00px) translate(-50%, -50%) rotate(90.00deg)"
    );
}
