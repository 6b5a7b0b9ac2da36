use super::*;

#[test]
fn canvas_rejects_zero_dimensions() {
    assert!(Canvas::new(0, 10).is_err());
    assert!(Canvas::new(10, 0).is_err());
    assert!(Canvas::new(1, 1).is_ok());
}

#[test]
fn canvas_contains_is_half_open() {
    let c = Canvas::new(4, 3).unwrap();
    assert!(c.contains(ScreenPoint::new(0, 0)));
    assert!(c.contains(ScreenPoint::new(3, 2)));
    assert!(!c.contains(ScreenPoint::new(4, 2)));
    assert!(!c.contains(ScreenPoint::new(3, 3)));
    assert!(!c.contains(ScreenPoint::new(-1, 0)));
}

#[test]
fn opaque_sets_full_alpha() {
    assert_eq!(Rgba8::opaque(1, 2, 3).to_array(), [1, 2, 3, 255]);
    assert_eq!(Rgba8::BLACK, Rgba8::new(0, 0, 0, 255));
}
