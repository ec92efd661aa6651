// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Direct solution of tridiagonal linear systems
//!
//! Row `i` of the system reads
//! `lower[i - 1] * x[i - 1] + diagonal[i] * x[i] + upper[i] * x[i + 1] = rhs[i]`
//! so `lower` and `upper` are one element shorter than the diagonal.
use crate::SystemError;
use nalgebra::{DVector, RealField};

/// A linear system whose coefficient matrix is tridiagonal
#[derive(Clone, Debug, PartialEq)]
pub struct TridiagonalSystem<T: RealField> {
    diagonal: DVector<T>,
    lower: DVector<T>,
    upper: DVector<T>,
    rhs: DVector<T>,
}

impl<T> TridiagonalSystem<T>
where
    T: Copy + RealField,
{
    /// A system of `n` unknowns with every coefficient set to zero
    pub fn zeros(n: usize) -> Result<Self, SystemError> {
        if n == 0 {
            return Err(SystemError::Empty);
        }
        Ok(Self {
            diagonal: DVector::zeros(n),
            lower: DVector::zeros(n - 1),
            upper: DVector::zeros(n - 1),
            rhs: DVector::zeros(n),
        })
    }

    pub fn from_bands(
        diagonal: DVector<T>,
        lower: DVector<T>,
        upper: DVector<T>,
        rhs: DVector<T>,
    ) -> Result<Self, SystemError> {
        let n = diagonal.len();
        if n == 0 {
            return Err(SystemError::Empty);
        }
        for (band, found, expected) in [
            ("lower", lower.len(), n - 1),
            ("upper", upper.len(), n - 1),
            ("rhs", rhs.len(), n),
        ] {
            if found != expected {
                return Err(SystemError::BandLength {
                    band,
                    found,
                    expected,
                });
            }
        }
        Ok(Self {
            diagonal,
            lower,
            upper,
            rhs,
        })
    }

    pub fn num_rows(&self) -> usize {
        self.diagonal.len()
    }

    pub fn diagonal(&self) -> &DVector<T> {
        &self.diagonal
    }

    pub fn lower(&self) -> &DVector<T> {
        &self.lower
    }

    pub fn upper(&self) -> &DVector<T> {
        &self.upper
    }

    pub fn rhs(&self) -> &DVector<T> {
        &self.rhs
    }

    pub(crate) fn diagonal_mut(&mut self) -> &mut DVector<T> {
        &mut self.diagonal
    }

    pub(crate) fn lower_mut(&mut self) -> &mut DVector<T> {
        &mut self.lower
    }

    pub(crate) fn upper_mut(&mut self) -> &mut DVector<T> {
        &mut self.upper
    }

    pub(crate) fn rhs_mut(&mut self) -> &mut DVector<T> {
        &mut self.rhs
    }

    /// Whether the off-diagonal bands agree to within `tolerance`
    pub fn is_symmetric(&self, tolerance: T) -> bool {
        self.lower
            .iter()
            .zip(self.upper.iter())
            .all(|(&lower, &upper)| (lower - upper).abs() <= tolerance)
    }

    /// The matrix-vector product `A x`
    pub fn apply(&self, x: &DVector<T>) -> DVector<T> {
        assert_eq!(x.len(), self.num_rows());
        let n = self.num_rows();
        DVector::from_fn(n, |i, _| {
            let mut value = self.diagonal[i] * x[i];
            if i > 0 {
                value += self.lower[i - 1] * x[i - 1];
            }
            if i + 1 < n {
                value += self.upper[i] * x[i + 1];
            }
            value
        })
    }

    /// The residual `rhs - A x`
    pub fn residual(&self, x: &DVector<T>) -> DVector<T> {
        &self.rhs - self.apply(x)
    }

    /// Solves the system by Gauss elimination without pivoting.
    ///
    /// The bands are copied before elimination, so the system is unchanged and can be reused.
    ///
    /// The matrix must be diagonally dominant enough that no pivot vanishes during the
    /// forward sweep. This is not checked: a zero pivot produces non-finite entries in the
    /// returned solution.
    pub fn solve(&self) -> DVector<T> {
        let n = self.num_rows();
        let mut diagonal = self.diagonal.clone();
        let mut rhs = self.rhs.clone();

        for i in 1..n {
            let pivot = self.lower[i - 1] / diagonal[i - 1];
            diagonal[i] -= pivot * self.upper[i - 1];
            let previous = rhs[i - 1];
            rhs[i] -= pivot * previous;
        }

        let mut solution = DVector::zeros(n);
        solution[n - 1] = rhs[n - 1] / diagonal[n - 1];
        for i in (0..n - 1).rev() {
            solution[i] = (rhs[i] - self.upper[i] * solution[i + 1]) / diagonal[i];
        }
        solution
    }
}
