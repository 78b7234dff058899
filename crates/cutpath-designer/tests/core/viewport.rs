use cutpath_core::constants::{MAX_SCALE, MIN_SCALE};
use cutpath_core::{Point2, ScreenPoint, ScreenSize};
use cutpath_designer::viewport::Viewport;
use proptest::prelude::*;

#[test]
fn test_viewport_creation() {
    let vp = Viewport::new(ScreenSize::new(1280.0, 800.0), 100.0);
    assert_eq!(vp.scale(), 100.0);
    assert_eq!(vp.camera(), Point2::ORIGIN);
}

#[test]
fn test_origin_maps_to_center() {
    let vp = Viewport::new(ScreenSize::new(1280.0, 800.0), 100.0);
    let p = vp.world_to_screen(Point2::ORIGIN);
    assert!((p.x - 640.0).abs() < 0.01);
    assert!((p.y - 400.0).abs() < 0.01);
}

#[test]
fn test_positive_y_goes_up() {
    let vp = Viewport::new(ScreenSize::new(800.0, 600.0), 50.0);
    let low = vp.world_to_screen(Point2::new(0.0, 0.0));
    let high = vp.world_to_screen(Point2::new(0.0, 1.0));
    assert!(high.y < low.y);
    assert!((low.y - high.y - 50.0).abs() < 0.01);
}

#[test]
fn test_resize_keeps_scale() {
    let mut vp = Viewport::new(ScreenSize::new(800.0, 600.0), 100.0);
    vp.set_size(ScreenSize::new(1000.0, 1000.0));
    assert_eq!(vp.scale(), 100.0);
    let p = vp.world_to_screen(Point2::ORIGIN);
    assert!((p.x - 500.0).abs() < 0.01);
    assert!((p.y - 500.0).abs() < 0.01);
}

#[test]
fn test_scale_must_be_positive() {
    let mut vp = Viewport::new(ScreenSize::new(800.0, 600.0), 100.0);
    vp.set_scale(0.0);
    assert_eq!(vp.scale(), 100.0);
    vp.set_scale(-3.0);
    assert_eq!(vp.scale(), 100.0);
    vp.set_scale(f64::NAN);
    assert_eq!(vp.scale(), 100.0);
}

#[test]
fn test_new_clamps_to_zoom_bounds() {
    let vp = Viewport::new(ScreenSize::new(800.0, 600.0), 0.5);
    assert_eq!(vp.scale(), MIN_SCALE);
    let vp = Viewport::new(ScreenSize::new(800.0, 600.0), 1e6);
    assert_eq!(vp.scale(), MAX_SCALE);
    assert_eq!(vp.scale_limits(), (MIN_SCALE, MAX_SCALE));
}

#[test]
fn test_zoom_limits() {
    let mut vp = Viewport::new(ScreenSize::new(800.0, 600.0), 96.0);
    vp.set_scale_limits(8.0, 2000.0);
    vp.zoom_by(1000.0);
    assert_eq!(vp.scale(), 2000.0);
    vp.zoom_by(1e-6);
    assert_eq!(vp.scale(), 8.0);
}

#[test]
fn test_pan_to_anchor_keeps_anchor_under_pointer() {
    let mut vp = Viewport::new(ScreenSize::new(800.0, 600.0), 100.0);
    let anchor = vp.screen_to_world(ScreenPoint::new(100.0, 100.0));
    let pointer = ScreenPoint::new(350.0, 420.0);
    vp.pan_to_anchor(anchor, pointer);
    let under = vp.screen_to_world(pointer);
    assert!((under.x - anchor.x).abs() < 1e-9);
    assert!((under.y - anchor.y).abs() < 1e-9);
}

proptest! {
    #[test]
    fn screen_to_world_inverts_world_to_screen(
        x in -1.0e3..1.0e3f64,
        y in -1.0e3..1.0e3f64,
        cam_x in -1.0e3..1.0e3f64,
        cam_y in -1.0e3..1.0e3f64,
        scale in 1.0..5000.0f64,
        width in 1.0..4000.0f64,
        height in 1.0..4000.0f64,
    ) {
        let mut vp = Viewport::new(ScreenSize::new(width, height), scale);
        vp.set_camera(Point2::new(cam_x, cam_y));
        let p = Point2::new(x, y);
        let back = vp.screen_to_world(vp.world_to_screen(p));
        prop_assert!((back.x - p.x).abs() < 1e-6);
        prop_assert!((back.y - p.y).abs() < 1e-6);
    }
}
