use super::*;
use crate::curve::points::compute_points;
use crate::curve::spec::RawCurveParams;
use crate::foundation::core::{Canvas, Rgba8};
use crate::render::recording::{DrawCall, RecordingSurface};

fn spec(color: Rgba8) -> CurveSpec {
    CurveSpec::from_raw(
        RawCurveParams {
            k: 3,
            scale: 40.0,
            color,
            origin: ScreenPoint::new(100, 100),
            rotation_speed: 0.0003,
        },
        Canvas::default(),
    )
    .0
}

#[test]
fn points_are_drawn_in_index_order_after_color() {
    let s = spec(Rgba8::opaque(1, 2, 3));
    let pts = compute_points(&s, 0.1);
    let writer = SurfaceWriter::new(RecordingSurface::new());
    writer.draw(DrawMode::Points, &s, &pts);

    let rec = writer.into_inner();
    let calls = rec.calls();
    assert_eq!(calls[0], DrawCall::SetDrawColor(Rgba8::opaque(1, 2, 3)));
    let drawn: Vec<_> = calls[1..]
        .iter()
        .map(|c| match c {
            DrawCall::Point { x, y } => ScreenPoint::new(*x, *y),
            other => panic!("unexpected call {other:?}"),
        })
        .collect();
    assert_eq!(drawn, pts.points());
}

#[test]
fn contour_links_consecutive_points_and_closes() {
    let s = spec(Rgba8::opaque(9, 9, 9));
    let pts = compute_points(&s, 0.0);
    let writer = SurfaceWriter::new(RecordingSurface::new());
    writer.draw(DrawMode::Contour, &s, &pts);

    let rec = writer.into_inner();
    let lines = &rec.calls()[1..];
    let p = pts.points();
    assert_eq!(lines.len(), p.len());
    for (i, call) in lines.iter().enumerate() {
        let a = p[i];
        let b = p[(i + 1) % p.len()];
        assert_eq!(
            *call,
            DrawCall::Line {
                x1: a.x,
                y1: a.y,
                x2: b.x,
                y2: b.y
            }
        );
    }
}

#[test]
fn filled_petals_emit_three_lines_per_sample_from_the_origin() {
    let s = spec(Rgba8::opaque(5, 5, 5));
    let pts = compute_points(&s, 0.0);
    let writer = SurfaceWriter::new(RecordingSurface::new());
    writer.draw(DrawMode::FilledPetals, &s, &pts);

    let rec = writer.into_inner();
    let lines = &rec.calls()[1..];
    let p = pts.points();
    let o = s.origin();
    assert_eq!(lines.len(), 3 * p.len());
    for (i, triple) in lines.chunks(3).enumerate() {
        let a = p[i];
        let b = p[(i + 1) % p.len()];
        assert_eq!(
            triple,
            &[
                DrawCall::Line {
                    x1: o.x,
                    y1: o.y,
                    x2: a.x,
                    y2: a.y
                },
                DrawCall::Line {
                    x1: o.x,
                    y1: o.y,
                    x2: b.x,
                    y2: b.y
                },
                DrawCall::Line {
                    x1: a.x,
                    y1: a.y,
                    x2: b.x,
                    y2: b.y
                },
            ]
        );
    }
}

#[test]
fn concurrent_batches_never_interleave() {
    use rayon::prelude::*;

    let specs: Vec<_> = (0..16u8)
        .map(|i| spec(Rgba8::opaque(i, i, i)))
        .collect();
    let sets: Vec<_> = specs
        .iter()
        .enumerate()
        .map(|(i, s)| compute_points(s, i as f32 * 0.1))
        .collect();

    let writer = SurfaceWriter::new(RecordingSurface::new());
    specs.par_iter().zip(sets.par_iter()).for_each(|(s, set)| {
        writer.draw_points(s, set);
    });

    let rec = writer.into_inner();
    let calls = rec.calls();
    let batch = 1 + sets[0].len();
    assert_eq!(calls.len(), batch * specs.len());
    for chunk in calls.chunks(batch) {
        let DrawCall::SetDrawColor(color) = chunk[0] else {
            panic!("batch must start with a color change");
        };
        let idx = color.r as usize;
        let expected: Vec<_> = sets[idx]
            .points()
            .iter()
            .map(|p| DrawCall::Point { x: p.x, y: p.y })
            .collect();
        assert_eq!(&chunk[1..], expected.as_slice());
    }
}
