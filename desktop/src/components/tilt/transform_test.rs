use super::*;
use fake::Fake;

const BOUNDS: Bounds = Bounds {
    left: 100.0,
    top: 50.0,
    width: 200.0,
    height: 100.0,
};

fn close(expected: f64, actual: f64) -> bool {
    (expected - actual).abs() < 1e-9
}

#[test]
fn center_should_be_flat() {
    let options = TiltOptions::default();
    let pose = tilt_at(&options, BOUNDS, (200.0, 100.0));
    assert!(close(0.0, pose.tilt_x));
    assert!(close(0.0, pose.tilt_y));
    assert!(close(options.max_glare / 2.0, pose.glare_opacity));
}

#[test]
fn corners_should_tilt_to_max() {
    let options = TiltOptions::default();

    // top left
    let pose = tilt_at(&options, BOUNDS, (100.0, 50.0));
    assert!(close(options.max, pose.tilt_x));
    assert!(close(-options.max, pose.tilt_y));
    assert!(close(0.0, pose.glare_opacity));

    // bottom right
    let pose = tilt_at(&options, BOUNDS, (300.0, 150.0));
    assert!(close(-options.max, pose.tilt_x));
    assert!(close(options.max, pose.tilt_y));
    assert!(close(options.max_glare, pose.glare_opacity));
}

#[test]
fn reverse_should_invert_tilt() {
    let options = TiltOptions::default();
    let reversed = TiltOptions {
        reverse: true,
        ..TiltOptions::default()
    };

    let point = (130.0, 70.0);
    let pose = tilt_at(&options, BOUNDS, point);
    let reversed_pose = tilt_at(&reversed, BOUNDS, point);
    assert!(close(-pose.tilt_x, reversed_pose.tilt_x));
    assert!(close(-pose.tilt_y, reversed_pose.tilt_y));
}

#[test]
fn pointer_should_be_clamped_to_bounds() {
    let options = TiltOptions::default();
    for _ in 0..50 {
        let x = (-1_000.0..1_000.0).fake::<f64>();
        let y = (-1_000.0..1_000.0).fake::<f64>();
        let pose = tilt_at(&options, BOUNDS, (x, y));

        assert!(pose.tilt_x.abs() <= options.max + 1e-9);
        assert!(pose.tilt_y.abs() <= options.max + 1e-9);
        assert!((0.0..=options.max_glare).contains(&pose.glare_opacity));
    }
}

#[test]
fn glare_should_point_away_from_center() {
    let options = TiltOptions::default();

    // directly above center
    let pose = tilt_at(&options, BOUNDS, (200.0, 60.0));
    assert!(close(0.0, pose.glare_angle));

    // directly right of center
    let pose = tilt_at(&options, BOUNDS, (290.0, 100.0));
    assert!(close(90.0, pose.glare_angle));
}

#[test]
fn degenerate_bounds_should_be_flat() {
    let options = TiltOptions::default();
    let bounds = Bounds {
        width: 0.0,
        height: 0.0,
        ..BOUNDS
    };

    let pose = tilt_at(&options, bounds, (500.0, 500.0));
    assert!(close(0.0, pose.tilt_x));
    assert!(close(0.0, pose.tilt_y));
}

#[test]
fn rest_transform_should_be_identity() {
    let options = TiltOptions::default();
    assert_eq!(
        "perspective(1000px) rotateX(0.00deg) rotateY(0.00deg) scale3d(1, 1, 1)",
        TiltPose::rest().transform(&options)
    );
}

#[test]
fn hover_transform_should_scale() {
    let options = TiltOptions {
        scale: 1.1,
        ..TiltOptions::default()
    };

    let pose = tilt_at(&options, BOUNDS, (100.0, 50.0));
    assert_eq!(
        "perspective(1000px) rotateX(-25.00deg) rotateY(25.00deg) scale3d(1.1, 1.1, 1.1)",
        pose.transform(&options)
    );
}
