// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use nalgebra::DVector;
use rand::{thread_rng, Rng};

/// The bands of a tridiagonal system, ordered (diagonal, lower, upper, rhs)
pub type Bands = (DVector<f64>, DVector<f64>, DVector<f64>, DVector<f64>);

/// A random, strictly diagonally dominant tridiagonal system with `num_rows` unknowns
pub fn construct_test_system(num_rows: usize) -> Bands {
    let mut rng = thread_rng();
    let lower = DVector::from_fn(num_rows - 1, |_, _| rng.gen_range(-1f64..1.));
    let upper = DVector::from_fn(num_rows - 1, |_, _| rng.gen_range(-1f64..1.));
    let diagonal = DVector::from_fn(num_rows, |i, _| {
        let mut off_diagonal = 0.;
        if i > 0 {
            off_diagonal += lower[i - 1].abs();
        }
        if i + 1 < num_rows {
            off_diagonal += upper[i].abs();
        }
        off_diagonal + 1. + rng.gen::<f64>()
    });
    let rhs = DVector::from_fn(num_rows, |_, _| rng.gen_range(-1f64..1.));
    (diagonal, lower, upper, rhs)
}

/// The stiffness bands of `-(r u')'` on a uniform mesh of `num_rows` nodes over `[0, 1]`, with the
/// final row replaced by a unit Dirichlet row
pub fn construct_radial_laplacian(num_rows: usize) -> Bands {
    let h = 1. / (num_rows - 1) as f64;
    // \int r dr / h^2 over element k
    let stiffness = DVector::from_fn(num_rows - 1, |k, _| k as f64 + 0.5);
    let mut diagonal = DVector::zeros(num_rows);
    for (k, &s) in stiffness.iter().enumerate() {
        diagonal[k] += s;
        diagonal[k + 1] += s;
    }
    let upper = -stiffness.clone();
    let mut lower = -stiffness;
    lower[num_rows - 2] = 0.;
    diagonal[num_rows - 1] = 1.;
    let rhs = DVector::from_element(num_rows, h * h);
    (diagonal, lower, upper, rhs)
}
