use wingloft_camtools::{
    InfillConfig, LoftAssembler, LoftConfig, LoftEngine, RingSpec, SolidFillConfig, Station,
};
use wingloft_core::{Point3D, Step};

fn straight_panel() -> Vec<Station> {
    vec![
        Station::naca(0.0, 50.0, "0012"),
        Station::naca(10.0, 50.0, "0012"),
    ]
}

fn unit_layers() -> LoftConfig {
    LoftConfig {
        resolution: 128,
        layer_height: 1.0,
        ..Default::default()
    }
}

#[test]
fn test_contour_only_step_count() {
    let config = unit_layers();
    let toolpath = LoftAssembler::new(&config).build(&straight_panel()).unwrap();

    assert_eq!(toolpath.len(), 10 * (2 * 128 + 1));
    assert_eq!(toolpath.travel_count(), 10);

    // A constant-chord panel repeats the same outline on every layer.
    let layers: Vec<&[Step]> = toolpath.steps().chunks(257).collect();
    let outline = |layer: &[Step]| layer[1..].iter().map(|s| s.point().xy()).collect::<Vec<_>>();
    let first = outline(layers[0]);
    for (index, layer) in layers.iter().enumerate() {
        assert_eq!(outline(layer), first);
        assert!(layer[1..].iter().all(|s| s.point().z == index as f64));
    }
}

#[test]
fn test_each_layer_opens_with_a_travel_above_the_layer() {
    let config = unit_layers();
    let toolpath = LoftAssembler::new(&config).build(&straight_panel()).unwrap();

    for (layer, chunk) in toolpath.steps().chunks(257).enumerate() {
        let z = layer as f64;
        assert_eq!(chunk[0], Step::Travel(Point3D::new(0.0, 0.0, z + 1.0)));
        assert!(chunk[1..]
            .iter()
            .all(|step| !step.is_travel() && step.point().z == z));
    }
}

#[test]
fn test_infill_and_solid_layers() {
    let config = LoftConfig {
        infill: Some(InfillConfig::default()),
        solid_fill: Some(SolidFillConfig {
            layers: vec![0.0, 9.0],
            ..Default::default()
        }),
        ..unit_layers()
    };
    let sections = LoftEngine::new(&config).build(&straight_panel()).unwrap();
    let toolpath = LoftAssembler::new(&config).assemble(&sections).unwrap();

    let layer_steps = |z: f64| {
        toolpath
            .iter()
            .filter(|step| step.point().z == z)
            .count()
    };

    // Sparse layers: 256 contour points, 12 wave points and the opening
    // travel of the layer below, which sits one layer up.
    for z in 1..9 {
        assert_eq!(layer_steps(z as f64), 256 + 12 + 1);
    }
    // Solid layers carry the scanline fill instead of the wave.
    assert!(layer_steps(0.0) > 256 + 12 + 1);
    assert!(layer_steps(9.0) > 256 + 12 + 1);
    assert!(toolpath.travel_count() > 10);
}

#[test]
fn test_rings_follow_each_layer() {
    let config = LoftConfig {
        rings: vec![RingSpec {
            points_per_arc: 4,
            ..RingSpec::new(Point3D::new(20.0, 0.0, 2.0), Point3D::new(20.0, 0.0, 5.0))
        }],
        ..unit_layers()
    };
    let toolpath = LoftAssembler::new(&config).build(&straight_panel()).unwrap();

    let ring_steps = 1 + 8 * 2 * 4;
    assert_eq!(toolpath.len(), 10 * 257 + 4 * ring_steps);
    assert_eq!(toolpath.travel_count(), 10 + 4);
}

#[test]
fn test_offset_wing_keeps_shape() {
    let config = unit_layers();
    let toolpath = LoftAssembler::new(&config).build(&straight_panel()).unwrap();
    let moved = toolpath.translated(Point3D::new(50.0, 100.0, 0.0));

    let before = toolpath.bounds().unwrap();
    let after = moved.bounds().unwrap();
    assert!((after.min.x - before.min.x - 50.0).abs() < 1e-9);
    assert!((after.max.y - before.max.y - 100.0).abs() < 1e-9);
    assert!((moved.extrusion_length() - toolpath.extrusion_length()).abs() < 1e-6);
}

#[test]
fn test_invalid_config_is_rejected_before_building() {
    let config = LoftConfig {
        layer_height: 0.0,
        ..Default::default()
    };
    assert!(LoftAssembler::new(&config).build(&straight_panel()).is_err());
}
