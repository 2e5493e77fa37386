use panelflow::{contour, FreeStream, PanelMethod, Solution, SolverConfig, WakeConfig};

fn config(length: f64, num_points: usize) -> SolverConfig {
    SolverConfig {
        wake: WakeConfig { length, num_points },
        ..SolverConfig::default()
    }
}

fn solve(code: &str, alpha_deg: f64, config: &SolverConfig) -> (PanelMethod, Solution) {
    let airfoil = contour::naca_four_digit(code, 41).expect("naca contour");
    let method = PanelMethod::new(&airfoil, config).expect("panel geometry");
    let solution = method
        .solve(&FreeStream::from_degrees(alpha_deg, 10.0).expect("free stream"))
        .expect("panel solve");
    (method, solution)
}

fn max_difference(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y).abs()).fold(0.0, f64::max)
}

#[test]
fn symmetric_section_at_zero_incidence_has_symmetric_pressure() {
    let (method, solution) = solve("0012", 0.0, &SolverConfig::default());
    let n = solution.len();
    assert_eq!(n, 80);

    let mirrored: Vec<f64> = solution.pressure.iter().rev().copied().collect();
    assert!(max_difference(&solution.pressure, &mirrored) < 1e-9);

    let forces = method.force_coefficients(&solution);
    assert!(forces.cl.abs() < 1e-9, "cl = {}", forces.cl);
}

#[test]
fn lift_slope_is_close_to_thin_airfoil_theory() {
    let (method, solution) = solve("0012", 5.0, &config(50.0, 100));
    let forces = method.force_coefficients(&solution);

    assert!(forces.cl > 0.55 && forces.cl < 0.65, "cl = {}", forces.cl);
    assert!(forces.cd.abs() < 0.01, "cd = {}", forces.cd);
    assert!(forces.cm.abs() < 0.02, "cm = {}", forces.cm);
}

#[test]
fn lift_grows_with_incidence() {
    let wake = config(50.0, 100);
    let (low_method, low) = solve("0012", 2.0, &wake);
    let (high_method, high) = solve("0012", 5.0, &wake);

    let cl_low = low_method.force_coefficients(&low).cl;
    let cl_high = high_method.force_coefficients(&high).cl;
    assert!(cl_low > 0.0 && cl_high > cl_low, "{cl_low} vs {cl_high}");
}

#[test]
fn camber_produces_lift_at_zero_incidence() {
    let (method, solution) = solve("2412", 0.0, &config(50.0, 100));
    let cl = method.force_coefficients(&solution).cl;
    assert!(cl > 0.15 && cl < 0.35, "cl = {cl}");
}

#[test]
fn pressure_is_independent_of_wake_point_count() {
    let (_, coarse) = solve("0012", 5.0, &config(50.0, 100));
    let (_, fine) = solve("0012", 5.0, &config(50.0, 400));
    let diff = max_difference(&coarse.pressure, &fine.pressure);
    assert!(diff < 1e-3, "max Cp difference {diff}");
}

#[test]
fn pressure_is_independent_of_a_long_wake_length() {
    let (_, long) = solve("0012", 5.0, &config(200.0, 200));
    let (_, longer) = solve("0012", 5.0, &config(400.0, 400));
    let diff = max_difference(&long.pressure, &longer.pressure);
    assert!(diff < 1e-2, "max Cp difference {diff}");
}

#[test]
fn upper_surface_carries_suction_at_positive_incidence() {
    let (method, solution) = solve("0012", 5.0, &config(50.0, 100));
    let distribution = method.pressure_distribution(&solution);

    let min_upper = distribution.upper().iter().map(|p| p[1]).fold(f64::MAX, f64::min);
    let min_lower = distribution.lower().iter().map(|p| p[1]).fold(f64::MAX, f64::min);
    assert!(min_upper < min_lower);
}
