// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Assembly of the stiffness operator $ -\frac{\mathrm{d}}{\mathrm{d} r} r \epsilon_r \frac{\mathrm{d}}{\mathrm{d} r} $
//!
//! With hat functions on element `k` of width `h` the local stiffness matrix is
//! `I / h^2 * [1, -1; -1, 1]` scaled by `h`, where `I` approximates the integral of
//! `r * epsilon_r` over the element. The local matrix is symmetric, so the assembled bands are too.
use crate::TridiagonalSystem;
use dielectric_mesher::{Assignment, ElementMethods, RadialMesh};
use nalgebra::RealField;
use std::marker::PhantomData;

/// A relative permittivity profile
///
/// The profile may be discontinuous at the interface radius. `side` selects which one-sided
/// limit is returned when `radius` sits on the discontinuity.
pub trait Permittivity<T> {
    fn relative_permittivity(&self, radius: T, side: Assignment) -> T;
}

impl<T, F> Permittivity<T> for F
where
    F: Fn(T, Assignment) -> T,
{
    fn relative_permittivity(&self, radius: T, side: Assignment) -> T {
        self(radius, side)
    }
}

/// Blends the trapezoidal and midpoint rules on a single element
///
/// A weight `mixing` of one is the pure trapezoidal rule, evaluating only at the element
/// vertices, and a weight of zero is the pure midpoint rule.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadratureRule<T> {
    mixing: T,
}

impl<T: Copy + RealField> QuadratureRule<T> {
    /// The caller guarantees `0 <= mixing <= 1`
    pub fn mixed(mixing: T) -> Self {
        Self { mixing }
    }

    pub fn midpoint() -> Self {
        Self::mixed(T::zero())
    }

    pub fn trapezoidal() -> Self {
        Self::mixed(T::one())
    }

    /// The weights given to the (vertex, midpoint) evaluations
    pub fn weights(&self) -> (T, T) {
        (self.mixing, T::one() - self.mixing)
    }

    /// Combines an estimate built from vertex evaluations with one built from the midpoint
    pub fn blend(&self, at_vertices: T, at_midpoint: T) -> T {
        let (vertex_weight, midpoint_weight) = self.weights();
        vertex_weight * at_vertices + midpoint_weight * at_midpoint
    }
}

pub struct OperatorAssemblerBuilder<T, RefMesh, RefPermittivity> {
    mesh: RefMesh,
    permittivity: RefPermittivity,
    quadrature: QuadratureRule<T>,
}

impl<T: Copy + RealField> OperatorAssemblerBuilder<T, (), ()> {
    pub fn new() -> Self {
        Self {
            mesh: (),
            permittivity: (),
            quadrature: QuadratureRule::midpoint(),
        }
    }
}

impl<T: Copy + RealField> Default for OperatorAssemblerBuilder<T, (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, RefMesh, RefPermittivity> OperatorAssemblerBuilder<T, RefMesh, RefPermittivity> {
    pub fn with_mesh<Mesh>(
        self,
        mesh: &Mesh,
    ) -> OperatorAssemblerBuilder<T, &Mesh, RefPermittivity> {
        OperatorAssemblerBuilder {
            mesh,
            permittivity: self.permittivity,
            quadrature: self.quadrature,
        }
    }

    pub fn with_permittivity<Permittivity>(
        self,
        permittivity: &Permittivity,
    ) -> OperatorAssemblerBuilder<T, RefMesh, &Permittivity> {
        OperatorAssemblerBuilder {
            mesh: self.mesh,
            permittivity,
            quadrature: self.quadrature,
        }
    }

    pub fn with_quadrature(self, quadrature: QuadratureRule<T>) -> Self {
        Self { quadrature, ..self }
    }
}

pub struct OperatorAssembler<'a, T, Mesh, Permittivity> {
    mesh: &'a Mesh,
    permittivity: &'a Permittivity,
    quadrature: QuadratureRule<T>,
    marker: PhantomData<T>,
}

impl<'a, T, Mesh, Permittivity> OperatorAssemblerBuilder<T, &'a Mesh, &'a Permittivity> {
    pub fn build(self) -> OperatorAssembler<'a, T, Mesh, Permittivity> {
        OperatorAssembler {
            mesh: self.mesh,
            permittivity: self.permittivity,
            quadrature: self.quadrature,
            marker: PhantomData,
        }
    }
}

impl<'a, T, Mesh, Eps> OperatorAssembler<'a, T, Mesh, Eps>
where
    T: Copy + RealField,
    Mesh: RadialMesh<T>,
    Eps: Permittivity<T>,
{
    /// The approximation to `1 / h * \int r epsilon_r dr` over element `index`
    ///
    /// Every evaluation on the element uses the element's own side of the interface, so the
    /// last core element sees the inner limit at the interface and the first shell element the outer.
    pub fn element_stiffness(&self, index: usize) -> T {
        let element = self.mesh.element(index);
        let side = element.assignment();
        let (inner, outer) = element.endpoints();
        let midpoint = element.midpoint().x;
        let two = T::one() + T::one();

        let at_vertices = self.permittivity.relative_permittivity(inner, side) * inner
            + self.permittivity.relative_permittivity(outer, side) * outer;
        let at_midpoint = self.permittivity.relative_permittivity(midpoint, side) * (inner + outer);

        self.quadrature.blend(at_vertices, at_midpoint) / (two * element.diameter())
    }

    /// Adds the element stiffness contributions into the bands of `system`
    pub fn assemble_operator_into(&self, system: &mut TridiagonalSystem<T>) {
        assert_eq!(system.num_rows(), self.mesh.number_of_nodes());
        for index in 0..self.mesh.number_of_elements() {
            let stiffness = self.element_stiffness(index);
            system.diagonal_mut()[index] += stiffness;
            system.diagonal_mut()[index + 1] += stiffness;
            system.lower_mut()[index] -= stiffness;
            system.upper_mut()[index] -= stiffness;
        }
    }
}

/// Replaces the final equation with `x[n - 1] = value`
///
/// The coupling from the final row to its neighbour is removed. The neighbour's coupling to the
/// final unknown is kept, so the known value is carried into the rest of the system by the solver.
pub fn apply_dirichlet<T: Copy + RealField>(system: &mut TridiagonalSystem<T>, value: T) {
    let last = system.num_rows() - 1;
    system.rhs_mut()[last] = value;
    system.diagonal_mut()[last] = T::one();
    if last > 0 {
        system.lower_mut()[last - 1] = T::zero();
    }
}
