use super::*;

#[test]
fn no_sample_before_the_window_elapses() {
    let mut m = FrameMetrics::new(MetricsOpts::default(), 0);
    for t in (10..1000).step_by(10) {
        assert_eq!(m.record_frame(t), None);
    }
    assert!(m.history().is_empty());
    assert_eq!(m.state(), MetricsState::Accumulating);
}

#[test]
fn closing_a_window_records_rounded_fps_and_resets() {
    let mut m = FrameMetrics::new(MetricsOpts::default(), 0);
    for t in 1..60 {
        assert_eq!(m.record_frame(t * 16), None);
    }
    // 60th frame at 1024 ms: 60 / 1.024 = 58.59375 -> 58.59
    assert_eq!(m.record_frame(1024), Some(58.59));
    assert_eq!(m.state(), MetricsState::WindowClosed);
    assert_eq!(m.pending_frames(), 0);
    assert_eq!(m.history(), &[58.59]);

    assert_eq!(m.record_frame(1030), None);
    assert_eq!(m.state(), MetricsState::Accumulating);
    assert_eq!(m.pending_frames(), 1);
}

#[test]
fn window_boundary_is_inclusive() {
    let mut m = FrameMetrics::new(MetricsOpts::default(), 500);
    assert_eq!(m.record_frame(1499), None);
    assert_eq!(m.record_frame(1500), Some(2.0));
}

#[test]
fn calibration_divisor_applies_before_rounding() {
    let opts = MetricsOpts {
        calibration_divisor: Some(4.0),
        ..MetricsOpts::default()
    };
    let mut m = FrameMetrics::new(opts, 0);
    for t in 1..10 {
        m.record_frame(t * 100);
    }
    // 10 frames over 1 s, divided by 4.
    assert_eq!(m.record_frame(1000), Some(2.5));
}

#[test]
fn finalize_reduces_history_and_freezes() {
    let mut m = FrameMetrics::new(MetricsOpts::default(), 0);
    m.record_frame(1000);
    m.record_frame(1500);
    m.record_frame(2000);
    let report = m.finalize().unwrap();
    assert_eq!(report.count, 2);
    assert_eq!(report.min, 1.0);
    assert_eq!(report.max, 2.0);
    assert_eq!(m.state(), MetricsState::Finalized);

    assert_eq!(m.record_frame(5000), None);
    assert_eq!(m.history().len(), 2);
    assert_eq!(m.finalize(), Some(report));
}

#[test]
fn finalize_without_samples_is_none() {
    let mut m = FrameMetrics::new(MetricsOpts::default(), 0);
    m.record_frame(10);
    assert_eq!(m.finalize(), None);
}

#[test]
fn opts_validation() {
    assert!(MetricsOpts::default().validate().is_ok());
    assert!(
        MetricsOpts {
            window_ms: 0,
            ..MetricsOpts::default()
        }
        .validate()
        .is_err()
    );
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(
            MetricsOpts {
                calibration_divisor: Some(bad),
                ..MetricsOpts::default()
            }
            .validate()
            .is_err()
        );
    }
}
