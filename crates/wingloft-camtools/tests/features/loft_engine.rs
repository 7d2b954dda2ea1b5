use wingloft_camtools::{
    AirfoilShape, ChordInterpolation, EdgeAnchoring, LoftConfig, LoftEngine, Station,
};
use wingloft_core::{LoftError, Point2D};

fn tapered() -> Vec<Station> {
    vec![
        Station::naca(0.0, 100.0, "0012"),
        Station::naca(40.0, 75.0, "0012"),
    ]
}

#[test]
fn test_linear_taper_layer_count_and_chords() {
    let config = LoftConfig::default();
    let sections = LoftEngine::new(&config).build(&tapered()).unwrap();

    assert_eq!(sections.len(), 133);
    assert_eq!(sections[0].chord_length, 100.0);
    assert_eq!(sections[0].z, 0.0);

    let last = &sections[132];
    assert!(last.chord_length > 75.0 && last.chord_length < 75.5);
    assert!((last.z - 132.0 * 0.3).abs() < 1e-9);
    assert!(sections
        .windows(2)
        .all(|w| w[1].chord_length < w[0].chord_length));
}

#[test]
fn test_sections_come_back_in_span_then_layer_order() {
    let config = LoftConfig {
        layer_height: 0.5,
        ..Default::default()
    };
    let stations = vec![
        Station::naca(0.0, 100.0, "2412"),
        Station::naca(10.0, 90.0, "2412"),
        Station::naca(12.0, 80.0, "0012"),
        Station::naca(30.0, 40.0, "0009"),
    ];
    let sections = LoftEngine::new(&config).build(&stations).unwrap();

    assert_eq!(sections.len(), 20 + 4 + 36);
    assert!(sections.windows(2).all(|w| w[1].z > w[0].z));
    assert!(sections
        .windows(2)
        .all(|w| (w[1].span, w[1].layer) > (w[0].span, w[0].layer)));

    let sequential = rayon::ThreadPoolBuilder::new()
        .num_threads(1)
        .build()
        .unwrap()
        .install(|| LoftEngine::new(&config).build(&stations).unwrap());
    assert_eq!(sections, sequential);
}

#[test]
fn test_degenerate_span_is_reported() {
    let config = LoftConfig::default();
    let stations = vec![
        Station::naca(0.0, 100.0, "0012"),
        Station::naca(10.0, 100.0, "0012"),
        Station::naca(10.2, 100.0, "0012"),
    ];
    let err = LoftEngine::new(&config).build(&stations).unwrap_err();
    match err {
        LoftError::DegenerateSpan {
            span,
            z_start,
            z_end,
            layer_height,
        } => {
            assert_eq!(span, 1);
            assert_eq!(z_start, 10.0);
            assert_eq!(z_end, 10.2);
            assert_eq!(layer_height, 0.3);
        }
        other => panic!("expected DegenerateSpan, got {other:?}"),
    }
}

#[test]
fn test_unordered_stations_rejected() {
    let config = LoftConfig::default();
    let stations = vec![
        Station::naca(10.0, 100.0, "0012"),
        Station::naca(0.0, 100.0, "0012"),
    ];
    assert!(matches!(
        LoftEngine::new(&config).build(&stations).unwrap_err(),
        LoftError::InvalidParameters(_)
    ));
}

#[test]
fn test_bad_code_fails_the_build() {
    let config = LoftConfig::default();
    let stations = vec![
        Station::naca(0.0, 100.0, "0012"),
        Station::naca(10.0, 100.0, "9X12"),
    ];
    assert!(matches!(
        LoftEngine::new(&config).build(&stations).unwrap_err(),
        LoftError::InvalidAirfoilSpec { .. }
    ));
}

#[test]
fn test_quadratic_without_curve_keeps_chord() {
    let config = LoftConfig {
        chord_interpolation: ChordInterpolation::Quadratic { curve_amount: 0.0 },
        ..Default::default()
    };
    let sections = LoftEngine::new(&config).build(&tapered()).unwrap();
    assert!(sections.iter().all(|s| s.chord_length == 100.0));
}

#[test]
fn test_quadratic_taper_is_slower_than_linear() {
    let config = LoftConfig {
        chord_interpolation: ChordInterpolation::Quadratic { curve_amount: 1.0 },
        ..Default::default()
    };
    let sections = LoftEngine::new(&config).build(&tapered()).unwrap();
    let mid = &sections[66];
    let linear = 100.0 - 25.0 * 66.0 / 133.0;
    assert!(mid.chord_length > linear);
}

#[test]
fn test_elliptical_planform_shrinks_towards_tip() {
    let config = LoftConfig {
        chord_interpolation: ChordInterpolation::EllipticalPlanform,
        ..Default::default()
    };
    let sections = LoftEngine::new(&config).build(&tapered()).unwrap();
    assert_eq!(sections[0].chord_length, 100.0);
    assert!(sections
        .windows(2)
        .all(|w| w[1].chord_length <= w[0].chord_length));
    // z = 39.6 of a 40 mm semi-span.
    assert!(sections[132].chord_length < 15.0);
}

#[test]
fn test_elliptical_overshoot_to_negative_chord_fails() {
    let config = LoftConfig {
        layer_height: 1.0,
        chord_interpolation: ChordInterpolation::Elliptical,
        ..Default::default()
    };
    let stations = vec![
        Station::naca(0.0, 100.0, "0012"),
        Station::naca(10.0, 10.0, "0012"),
    ];
    let err = LoftEngine::new(&config).build(&stations).unwrap_err();
    match err {
        LoftError::InvalidParameters(message) => assert!(message.contains("span 0")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_planform_tip_with_zero_chord_fails() {
    let config = LoftConfig {
        layer_height: 1.0,
        chord_interpolation: ChordInterpolation::EllipticalPlanform,
        ..Default::default()
    };
    // Root at z = -10 with a 10 mm semi-major axis puts the tip at z = 0.
    let stations = vec![
        Station::naca(-10.0, 100.0, "0012"),
        Station::naca(10.0, 50.0, "0012"),
    ];
    assert!(matches!(
        LoftEngine::new(&config).build(&stations).unwrap_err(),
        LoftError::InvalidParameters(_)
    ));
}

#[test]
fn test_edge_anchoring() {
    let edges = |anchoring| {
        let config = LoftConfig {
            edge_anchoring: anchoring,
            ..Default::default()
        };
        let sections = LoftEngine::new(&config).build(&tapered()).unwrap();
        let bounds = sections[100].contour.bounds().unwrap();
        (bounds.min_x, bounds.max_x)
    };

    let (le, te) = edges(EdgeAnchoring::LeadingEdge);
    assert!(le.abs() < 1e-9);
    assert!(te < 100.0);

    let (_, te) = edges(EdgeAnchoring::TrailingEdge);
    assert!((te - 100.0).abs() < 1e-6);

    let (le, te) = edges(EdgeAnchoring::Centered);
    assert!(((le + te) / 2.0 - 50.0).abs() < 1e-6);
}

#[test]
fn test_blend_shapes_morphs_thickness() {
    let config = LoftConfig {
        layer_height: 1.0,
        blend_shapes: true,
        ..Default::default()
    };
    let stations = vec![
        Station::naca(0.0, 100.0, "0012"),
        Station::naca(10.0, 100.0, "0024"),
    ];
    let sections = LoftEngine::new(&config).build(&stations).unwrap();

    let thin = sections[0].contour.bounds().unwrap().max_y;
    let mid = sections[5].contour.bounds().unwrap().max_y;
    assert!((mid - 1.5 * thin).abs() < 1e-9);
}

#[test]
fn test_blend_holds_shape_when_counts_differ() {
    let config = LoftConfig {
        layer_height: 1.0,
        blend_shapes: true,
        ..Default::default()
    };
    let stations = vec![
        Station::naca(0.0, 100.0, "0012"),
        Station::new(
            10.0,
            100.0,
            AirfoilShape::imported(
                "wedge",
                vec![Point2D::new(0.5, 0.2), Point2D::new(0.5, -0.2)],
            ),
        ),
    ];
    let sections = LoftEngine::new(&config).build(&stations).unwrap();
    assert!(sections.iter().all(|s| s.contour.len() == 256));
    assert_eq!(sections[0].contour, sections[9].contour);
}
