use wingloft_camtools::{RingGenerator, RingSpec};
use wingloft_core::{LoftError, Point3D, Step};

fn spar() -> RingSpec {
    RingSpec {
        points_per_arc: 6,
        ..RingSpec::new(Point3D::new(30.0, 2.0, 0.0), Point3D::new(20.0, 2.0, 20.0))
    }
}

#[test]
fn test_eight_segments_at_45_degrees() {
    let ring = spar();
    assert_eq!(ring.segment_count(), 8);

    let steps = RingGenerator::generate(&[ring.clone()], 10.0).unwrap();
    assert_eq!(steps.len(), 1 + 8 * 2 * ring.points_per_arc);
    assert!(steps[0].is_travel());
    assert_eq!(steps.iter().filter(|s| s.is_travel()).count(), 1);
}

#[test]
fn test_travel_starts_at_start_angle() {
    let steps = RingGenerator::generate(&[spar()], 10.0).unwrap();
    // Center at z = 10 is (25, 2); 180 degrees is the -x side.
    let start = steps[0].point();
    assert!((start.x - 21.0).abs() < 1e-9);
    assert!((start.y - 2.0).abs() < 1e-9);
    assert_eq!(start.z, 10.0);
}

#[test]
fn test_segments_trace_outer_then_inner_arc() {
    let ring = spar();
    let steps = RingGenerator::generate(&[ring.clone()], 10.0).unwrap();
    let center = ring.center_at(10.0);
    let ppa = ring.points_per_arc;

    for (index, chunk) in steps[1..].chunks(2 * ppa).enumerate() {
        let (outer, inner) = chunk.split_at(ppa);
        for step in outer {
            let r = step.point().distance_to(&center);
            assert!((r - 4.0).abs() < 1e-9, "segment {index} outer radius {r}");
        }
        for step in inner {
            let r = step.point().distance_to(&center);
            assert!((r - 3.25).abs() < 1e-9, "segment {index} inner radius {r}");
        }

        // Both arcs sweep the same span in the same direction.
        let direction = |step: &Step| {
            let p = step.point();
            let r = p.distance_to(&center);
            ((p.x - center.x) / r, (p.y - center.y) / r)
        };
        for k in [0, ppa - 1] {
            let (a, b) = (direction(&outer[k]), direction(&inner[k]));
            assert!((a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9);
        }
    }
}

#[test]
fn test_z_range_is_inclusive() {
    let rings = [spar()];
    assert!(!RingGenerator::generate(&rings, 0.0).unwrap().is_empty());
    assert!(!RingGenerator::generate(&rings, 20.0).unwrap().is_empty());
    assert!(RingGenerator::generate(&rings, 20.01).unwrap().is_empty());
    assert!(RingGenerator::generate(&rings, -0.3).unwrap().is_empty());
}

#[test]
fn test_overlapping_rings_are_concatenated() {
    let mut second = spar();
    second.start_center = Point3D::new(60.0, 0.0, 5.0);
    second.end_center = Point3D::new(60.0, 0.0, 8.0);
    second.segment_angle_deg = 90.0;

    let steps = RingGenerator::generate(&[spar(), second.clone()], 6.0).unwrap();
    let first_len = 1 + 8 * 2 * 6;
    assert_eq!(steps.len(), first_len + 1 + 4 * 2 * 6);
    assert!(steps[first_len].is_travel());
    let start = steps[first_len].point();
    assert!(start.distance_to(&Point3D::new(56.0, 0.0, 6.0)) < 1e-9);
}

#[test]
fn test_invalid_ring_is_an_error_not_a_panic() {
    let empty_arcs = RingSpec {
        points_per_arc: 0,
        ..spar()
    };
    let err = RingGenerator::generate(&[empty_arcs], 10.0).unwrap_err();
    assert!(matches!(err, LoftError::Parameter(_)));

    let no_sweep = RingSpec {
        segment_angle_deg: 0.0,
        ..spar()
    };
    assert!(RingGenerator::generate(&[no_sweep], 10.0).is_err());
}

#[test]
fn test_single_point_arcs_stay_on_the_circles() {
    let sparse = RingSpec {
        points_per_arc: 1,
        ..spar()
    };
    let steps = RingGenerator::generate(&[sparse.clone()], 10.0).unwrap();
    assert_eq!(steps.len(), 1 + 8 * 2);

    let center = sparse.center_at(10.0);
    for pair in steps[1..].chunks(2) {
        let outer = pair[0].point().distance_to(&center);
        let inner = pair[1].point().distance_to(&center);
        assert!((outer - sparse.outer_radius).abs() < 1e-9);
        assert!((inner - sparse.inner_radius()).abs() < 1e-9);
    }
}
