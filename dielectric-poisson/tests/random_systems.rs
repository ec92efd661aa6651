use approx::assert_relative_eq;
use dielectric_poisson::TridiagonalSystem;
use nalgebra::DVector;
use proptest::prelude::*;
use utilities::{construct_radial_laplacian, construct_test_system};

#[test]
fn random_diagonally_dominant_systems_have_vanishing_residual() {
    for num_rows in [2, 3, 17, 256] {
        let (diagonal, lower, upper, rhs) = construct_test_system(num_rows);
        let system = TridiagonalSystem::from_bands(diagonal, lower, upper, rhs).unwrap();
        let solution = system.solve();
        assert!(system.residual(&solution).amax() < 1e-10);
    }
}

#[test]
fn radial_laplacian_steps_follow_the_enclosed_load() {
    // Summing rows 0..=k gives (k + 1/2)(u[k] - u[k + 1]) = (k + 1) h^2
    let (diagonal, lower, upper, rhs) = construct_radial_laplacian(65);
    let system = TridiagonalSystem::from_bands(diagonal, lower, upper, rhs).unwrap();
    let solution = system.solve();
    assert!(solution.iter().all(|value| value.is_finite()));
    assert!(solution
        .as_slice()
        .windows(2)
        .all(|pair| pair[0] >= pair[1]));
    let h2 = 1f64 / 64. / 64.;
    assert_relative_eq!(solution[64], h2);
    for k in 0..64 {
        let step = solution[k] - solution[k + 1];
        assert_relative_eq!(step, (k as f64 + 1.) * h2 / (k as f64 + 0.5), max_relative = 1e-9);
    }
}

fn dominant_bands() -> impl Strategy<Value = (Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>)> {
    (2usize..64).prop_flat_map(|n| {
        (
            proptest::collection::vec(0.5f64..2.0, n),
            proptest::collection::vec(-1f64..1.0, n - 1),
            proptest::collection::vec(-1f64..1.0, n - 1),
            proptest::collection::vec(-10f64..10.0, n),
        )
    })
}

proptest! {
    #[test]
    fn dominant_systems_are_solved_to_round_off((margin, lower, upper, rhs) in dominant_bands()) {
        let n = margin.len();
        let diagonal = (0..n)
            .map(|i| {
                let left = if i > 0 { lower[i - 1].abs() } else { 0. };
                let right = if i < n - 1 { upper[i].abs() } else { 0. };
                margin[i] + left + right
            })
            .collect::<Vec<_>>();
        let system = TridiagonalSystem::from_bands(
            DVector::from_vec(diagonal),
            DVector::from_vec(lower),
            DVector::from_vec(upper),
            DVector::from_vec(rhs),
        )
        .unwrap();
        let solution = system.solve();
        prop_assert!(system.residual(&solution).amax() < 1e-9);
    }
}
