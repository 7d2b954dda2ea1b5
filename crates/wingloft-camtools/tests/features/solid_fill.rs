use wingloft_camtools::{naca_contour, FillPattern, SolidFill};
use wingloft_core::{AirfoilContour, Point2D, Step};

fn square(size: f64) -> AirfoilContour {
    AirfoilContour::new(vec![
        Point2D::new(0.0, 0.0),
        Point2D::new(size, 0.0),
        Point2D::new(size, size),
        Point2D::new(0.0, size),
    ])
}

fn on_square_edge(p: &Point2D, size: f64) -> bool {
    let tol = 1e-9;
    let inside = (-tol..=size + tol).contains(&p.x) && (-tol..=size + tol).contains(&p.y);
    let edge = p.x.abs() < tol
        || (p.x - size).abs() < tol
        || p.y.abs() < tol
        || (p.y - size).abs() < tol;
    inside && edge
}

#[test]
fn test_rotated_segments_end_on_polygon() {
    for angle in [0.0, 30.0, 45.0, 90.0, 137.0] {
        let segments = SolidFill::new(0.5, angle).segments(&square(10.0)).unwrap();
        assert!(!segments.is_empty(), "angle {angle}");
        for segment in &segments {
            assert!(on_square_edge(&segment.start, 10.0), "{angle}: {:?}", segment.start);
            assert!(on_square_edge(&segment.end, 10.0), "{angle}: {:?}", segment.end);
        }
    }
}

#[test]
fn test_horizontal_fill_snakes() {
    let segments = SolidFill::new(1.0, 0.0).segments(&square(10.0)).unwrap();

    // Row 0 only grazes the bottom edge; rows 1..=10 cross the square.
    assert_eq!(segments.len(), 10);
    for pair in segments.windows(2) {
        assert_eq!(pair[0].start.y, pair[0].end.y);
        assert!(pair[1].start.distance_to(&pair[0].end) <= pair[1].end.distance_to(&pair[0].end));
    }
    assert_eq!(segments[0].start.x, 0.0);
    assert_eq!(segments[1].start.x, 10.0);
}

#[test]
fn test_steps_pair_travel_and_draw() {
    let fill = SolidFill::new(0.4, 45.0);
    let contour = naca_contour("0012", 64, 100.0).unwrap();
    let steps = fill.fill(&contour, 3.0).unwrap();
    let segments = fill.segments(&contour).unwrap();

    assert_eq!(steps.len(), 2 * segments.len() + 1);
    for (i, step) in steps[..steps.len() - 1].iter().enumerate() {
        assert_eq!(step.is_travel(), i % 2 == 0);
        assert_eq!(step.point().z, 3.0);
    }
    assert_eq!(
        steps.last(),
        Some(&Step::Travel(segments[0].start.with_z(3.0)))
    );
}

#[test]
fn test_no_intercepts_gives_empty_path() {
    let point = AirfoilContour::new(vec![Point2D::new(1.0, 1.0)]);
    assert!(SolidFill::new(0.4, 45.0).generate(&point, 0.0).unwrap().is_empty());
}
