use super::*;

fn raw() -> RawCurveParams {
    RawCurveParams {
        k: 7,
        scale: 60.0,
        color: Rgba8::opaque(10, 20, 30),
        origin: ScreenPoint::new(100, 200),
        rotation_speed: 0.0002,
    }
}

#[test]
fn sample_count_follows_petal_formula() {
    let expected = [
        (3, 50),
        (5, 75),
        (7, 100),
        (9, 125),
        (11, 150),
        (13, 175),
        (15, 200),
    ];
    for (k, n) in expected {
        assert_eq!(sample_count_for_k(k), n, "k={k}");
    }
}

#[test]
fn valid_params_pass_through_unchanged() {
    let (spec, corrections) = CurveSpec::from_raw(raw(), Canvas::default());
    assert!(corrections.is_empty());
    assert_eq!(spec.k(), 7);
    assert_eq!(spec.scale(), 60.0);
    assert_eq!(spec.sample_count(), 100);
    assert_eq!(spec.total_angular_samples(), 200);
    assert_eq!(spec.rotation_speed(), 0.0002);
    assert_eq!(spec.origin(), ScreenPoint::new(100, 200));
    assert_eq!(spec.color(), Rgba8::opaque(10, 20, 30));
}

#[test]
fn invalid_k_falls_back_to_default_and_rederives_counts() {
    for bad in [-1, 0, 2, 4, 17, 100] {
        let (spec, corrections) = CurveSpec::from_raw(
            RawCurveParams { k: bad, ..raw() },
            Canvas::default(),
        );
        assert_eq!(spec.k(), DEFAULT_K);
        assert_eq!(spec.sample_count(), 75);
        assert_eq!(spec.total_angular_samples(), 150);
        assert_eq!(corrections.len(), 1);
        assert_eq!(corrections[0].field, "k");
    }
}

#[test]
fn out_of_range_scale_and_speed_are_defaulted() {
    let (spec, corrections) = CurveSpec::from_raw(
        RawCurveParams {
            scale: 150.5,
            rotation_speed: f32::NAN,
            ..raw()
        },
        Canvas::default(),
    );
    assert_eq!(spec.scale(), DEFAULT_SCALE);
    assert_eq!(spec.rotation_speed(), DEFAULT_ROTATION_SPEED);
    let fields: Vec<_> = corrections.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["scale", "rotation_speed"]);
}

#[test]
fn bounds_are_inclusive() {
    let (spec, corrections) = CurveSpec::from_raw(
        RawCurveParams {
            scale: SCALE_MAX,
            rotation_speed: ROTATION_SPEED_MIN,
            ..raw()
        },
        Canvas::default(),
    );
    assert!(corrections.is_empty());
    assert_eq!(spec.scale(), SCALE_MAX);
    assert_eq!(spec.rotation_speed(), ROTATION_SPEED_MIN);
}

#[test]
fn origin_outside_canvas_moves_to_center() {
    let canvas = Canvas::new(64, 32).unwrap();
    let (spec, corrections) = CurveSpec::from_raw(
        RawCurveParams {
            origin: ScreenPoint::new(64, 5),
            ..raw()
        },
        canvas,
    );
    assert_eq!(spec.origin(), ScreenPoint::new(32, 5));
    assert_eq!(corrections.len(), 1);
    assert_eq!(corrections[0].field, "origin.x");
    assert_eq!(corrections[0].value, 64.0);
    assert_eq!(corrections[0].default, 32.0);
}

#[test]
fn origin_axes_are_corrected_independently() {
    let canvas = Canvas::new(64, 32).unwrap();
    let (spec, corrections) = CurveSpec::from_raw(
        RawCurveParams {
            origin: ScreenPoint::new(10, -1),
            ..raw()
        },
        canvas,
    );
    assert_eq!(spec.origin(), ScreenPoint::new(10, 16));
    let fields: Vec<_> = corrections.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["origin.y"]);

    let (spec, corrections) = CurveSpec::from_raw(
        RawCurveParams {
            origin: ScreenPoint::new(-3, 40),
            ..raw()
        },
        canvas,
    );
    assert_eq!(spec.origin(), ScreenPoint::new(32, 16));
    let fields: Vec<_> = corrections.iter().map(|c| c.field).collect();
    assert_eq!(fields, vec!["origin.x", "origin.y"]);
}

#[test]
fn origin_on_the_last_pixel_is_kept() {
    let canvas = Canvas::new(64, 32).unwrap();
    let (spec, corrections) = CurveSpec::from_raw(
        RawCurveParams {
            origin: ScreenPoint::new(63, 31),
            ..raw()
        },
        canvas,
    );
    assert!(corrections.is_empty());
    assert_eq!(spec.origin(), ScreenPoint::new(63, 31));
}

#[test]
fn spec_serializes_with_nested_color_and_origin() {
    let (spec, _) = CurveSpec::from_raw(raw(), Canvas::default());
    let json = serde_json::to_value(spec).unwrap();
    assert_eq!(json["k"], 7);
    assert_eq!(json["sample_count"], 100);
    assert_eq!(json["origin"]["x"], 100);
    assert_eq!(json["color"]["a"], 255);
}
