use nalgebra as na;
use panelflow::influence::doublet_influence;
use panelflow::{
    analyze, Config, FreeStream, GeometryError, PanelError, PanelMethod, SolverConfig, Stage,
};

fn regression_contour() -> Vec<na::Point2<f64>> {
    vec![
        na::Point2::new(0.0, 0.0),
        na::Point2::new(1.0, 0.0),
        na::Point2::new(5.0, 5.0),
        na::Point2::new(0.0, 0.0),
    ]
}

#[test]
fn regression_influence_value_is_frozen() {
    let contour = regression_contour();
    let value = doublet_influence(&contour[2], &contour[0], &contour[1]);
    assert!((value - 0.017_611_643_738_638_64).abs() < 1e-14, "{value}");
}

#[test]
fn regression_pipeline_is_idempotent() {
    let freestream = FreeStream::from_degrees(2.0, 10.0).unwrap();
    let config = SolverConfig::default();

    let first = analyze(&regression_contour(), &freestream, &config).unwrap();
    let second = analyze(&regression_contour(), &freestream, &config).unwrap();

    assert_eq!(first.strengths, second.strengths);
    assert_eq!(first.velocity, second.velocity);
    assert_eq!(first.pressure, second.pressure);
}

#[test]
fn fewer_than_three_points_is_a_geometry_error() {
    let freestream = FreeStream::from_degrees(2.0, 10.0).unwrap();
    let contour = regression_contour();
    for len in 0..3 {
        let err = analyze(&contour[..len], &freestream, &SolverConfig::default()).unwrap_err();
        assert_eq!(err.stage(), Stage::Geometry);
        assert_eq!(
            err,
            PanelError::InvalidGeometry(GeometryError::TooFewPoints { got: len })
        );
    }
}

#[test]
fn degenerate_contours_fail_before_the_solve() {
    let freestream = FreeStream::from_degrees(2.0, 10.0).unwrap();
    let config = SolverConfig::default();

    let flat = vec![
        na::Point2::new(0.0, 0.0),
        na::Point2::new(1.0, 0.0),
        na::Point2::new(2.0, 0.0),
        na::Point2::new(0.0, 0.0),
    ];
    let err = analyze(&flat, &freestream, &config).unwrap_err();
    assert_eq!(err.stage(), Stage::Geometry);
    assert!(matches!(
        err,
        PanelError::InvalidGeometry(GeometryError::ZeroArea { .. })
    ));

    let doubled_back = vec![
        na::Point2::new(1.0, 0.0),
        na::Point2::new(0.0, 0.5),
        na::Point2::new(1.0, 0.0),
        na::Point2::new(0.0, 0.5),
    ];
    let err = analyze(&doubled_back, &freestream, &config).unwrap_err();
    assert_eq!(
        err,
        PanelError::InvalidGeometry(GeometryError::CoincidentPanels { first: 0, second: 1 })
    );
}

#[test]
fn explicit_trailing_edge_override_is_validated() {
    let config = SolverConfig {
        trailing_edge: Some([0, 3]),
        ..SolverConfig::default()
    };
    let err = PanelMethod::new(&regression_contour(), &config).unwrap_err();
    assert_eq!(
        err,
        PanelError::InvalidGeometry(GeometryError::TrailingEdgeOutOfRange { index: 3, panels: 3 })
    );
}

#[test]
fn configuration_file_drives_the_solver() {
    let config = Config::from_toml_str(
        r#"
        [solver.wake]
        length = 5.0
        num_points = 20
        "#,
    )
    .unwrap();

    let method = PanelMethod::new(&regression_contour(), &config.solver).unwrap();
    assert_eq!(method.geometry().wake.points().len(), 20);
    assert_eq!(method.geometry().wake.points()[19].x, 1.0 + 19.0 * 0.25);
}
