use approx::assert_relative_eq;
use dielectric_fem::app::{
    solve, write_outputs, ChargeConfiguration, Configuration, GeometryConfiguration,
    MeshConfiguration,
};
use dielectric_fem::device::{DielectricProfile, SpaceCharge};
use dielectric_mesher::{create_radial_mesh_1d, Assignment};
use dielectric_poisson::{Permittivity, PoissonProblemBuilder, QuadratureRule};
use rand::Rng;

fn configuration(
    trivial: bool,
    (interface_radius, outer_radius): (f64, f64),
    (core_elements, shell_elements): (usize, usize),
    boundary_potential: f64,
    quadrature_mixing: f64,
) -> Configuration {
    Configuration {
        output: "unused".to_string(),
        trivial,
        geometry: GeometryConfiguration {
            interface_radius,
            outer_radius,
            boundary_potential,
        },
        charge: ChargeConfiguration { amplitude: 1. },
        mesh: MeshConfiguration {
            core_elements,
            shell_elements,
            quadrature_mixing,
        },
    }
}

#[test]
fn trivial_potential_is_continuous_and_decreasing() {
    let configuration = configuration(true, (1., 2.), (2, 2), 5., 1.);
    let solution = solve(&configuration).unwrap();
    let potential = &solution.potential;

    assert_eq!(potential.len(), 5);
    assert!(potential.iter().all(|value| value.is_finite()));
    assert_eq!(potential[4], 5.);
    for window in potential.as_slice().windows(2) {
        assert!(window[0] >= window[1]);
    }
}

#[test]
fn trivial_potential_matches_the_closed_form_at_the_nodes() {
    let mut rng = rand::thread_rng();
    for _ in 0..10 {
        let b = rng.gen_range(0.1..1.0);
        let r_outer = b + rng.gen_range(0.1..2.0);
        let v0 = rng.gen_range(-3.0..3.0);
        let cells = (rng.gen_range(1..40), rng.gen_range(1..40));
        let configuration = configuration(true, (b, r_outer), cells, v0, 0.5);
        let solution = solve(&configuration).unwrap();

        for (&radius, &value) in solution.radii().iter().zip(solution.potential.iter()) {
            let exact = v0 + (r_outer * r_outer - radius * radius) / 4.;
            assert_relative_eq!(value, exact, epsilon = 1e-10, max_relative = 1e-10);
        }
    }
}

#[test]
fn trivial_displacement_divergence_matches_the_unit_charge() {
    let configuration = configuration(true, (1., 2.), (40, 40), 0., 0.5);
    let solution = solve(&configuration).unwrap();

    assert_eq!(solution.divergence.len(), 79);
    assert!(solution.gauss_law.maximum_deviation < 1e-8);
    assert!(solution.gauss_law.rms_deviation < 1e-8);
    for value in solution.divergence.displacement.iter() {
        assert_relative_eq!(*value, 1., max_relative = 1e-8);
    }
}

#[test]
fn single_element_per_region() {
    let configuration = configuration(false, (0.03, 0.1), (1, 1), 0., 0.5);
    let solution = solve(&configuration).unwrap();

    assert_eq!(solution.potential.len(), 3);
    assert_eq!(solution.potential[2], 0.);
    assert_eq!(solution.fields.len(), 2);
    assert_eq!(solution.divergence.len(), 1);
}

#[test]
fn boundary_row_of_the_assembled_system() {
    let mesh = create_radial_mesh_1d(0.03, 0.1, 4, 6);
    let profile = DielectricProfile::new(0.03, 0.1, false);
    let charge = SpaceCharge::new(0.03, 1., false);
    let system = PoissonProblemBuilder::new()
        .with_mesh(&mesh)
        .with_permittivity(&profile)
        .with_source(&charge)
        .with_quadrature(QuadratureRule::mixed(0.3))
        .with_boundary_potential(2.5)
        .build()
        .unwrap()
        .assemble()
        .unwrap();

    let last = system.num_rows() - 1;
    assert_eq!(system.diagonal()[last], 1.);
    assert_eq!(system.lower()[last - 1], 0.);
    assert_eq!(system.rhs()[last], 2.5);

    // Interior rows conserve flux, the diagonal balances the couplings
    for row in 1..last {
        let couplings = system.lower()[row - 1].abs() + system.upper()[row].abs();
        assert_relative_eq!(system.diagonal()[row], couplings, max_relative = 1e-12);
    }
    for row in 0..last - 1 {
        assert_relative_eq!(system.upper()[row], system.lower()[row], max_relative = 1e-12);
    }
}

#[test]
fn permittivity_is_discontinuous_at_the_interface() {
    let profile = DielectricProfile::new(1., 2., false);
    assert_eq!(profile.relative_permittivity(1., Assignment::Core), 1.);
    assert_eq!(profile.relative_permittivity(1., Assignment::Shell), 8.);
    assert_eq!(profile.relative_permittivity(2., Assignment::Shell), 2.);
}

#[test]
fn shell_flux_equals_the_enclosed_core_charge() {
    let (b, r_outer) = (0.03, 0.1);
    let configuration = configuration(false, (b, r_outer), (200, 200), 0., 0.5);
    let solution = solve(&configuration).unwrap();
    let expected = SpaceCharge::from(&configuration).enclosed(b);

    for (&midpoint, &displacement) in solution
        .fields
        .midpoints
        .iter()
        .zip(solution.fields.displacement.iter())
    {
        if midpoint > b {
            assert_relative_eq!(midpoint * displacement, expected, max_relative = 1e-3);
        }
    }
    assert_relative_eq!(
        solution.gauss_law.outer_flux,
        solution.gauss_law.enclosed_charge,
        max_relative = 1e-3
    );
}

#[test]
fn divergence_is_consistent_with_the_fields() {
    let configuration = configuration(false, (0.03, 0.1), (20, 30), 1., 0.5);
    let solution = solve(&configuration).unwrap();
    let fields = &solution.fields;
    let divergence = &solution.divergence;

    assert_eq!(divergence.len(), fields.len() - 1);
    for i in 0..divergence.len() {
        let (r0, r1) = (fields.midpoints[i], fields.midpoints[i + 1]);
        let centre = (r0 + r1) / 2.;
        assert_relative_eq!(divergence.midpoints[i], centre, max_relative = 1e-14);
        let expected = (fields.electric[i + 1] + fields.electric[i]) / (2. * centre)
            + (fields.electric[i + 1] - fields.electric[i]) / (r1 - r0);
        assert_relative_eq!(divergence.electric[i], expected, max_relative = 1e-12);
    }
}

#[test]
fn tables_are_written_with_one_row_per_sample() {
    let directory = std::env::temp_dir().join(format!("dielectric-pipeline-{}", std::process::id()));
    let mut configuration = configuration(false, (0.03, 0.1), (5, 7), 0., 0.5);
    configuration.output = directory.join("out").join("run").display().to_string();
    let solution = solve(&configuration).unwrap();
    write_outputs(&configuration, &solution).unwrap();

    let count = |path: std::path::PathBuf, columns: usize| {
        let contents = std::fs::read_to_string(path).unwrap();
        for line in contents.lines() {
            assert_eq!(line.split_whitespace().count(), columns);
        }
        contents.lines().count()
    };
    assert_eq!(count(configuration.potential_path(), 2), 13);
    assert_eq!(count(configuration.field_path(), 3), 12);
    assert_eq!(count(configuration.divergence_path(), 4), 11);

    std::fs::remove_dir_all(&directory).unwrap();
}
