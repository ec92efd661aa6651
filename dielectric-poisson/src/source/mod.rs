// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Assembly of the load vector $ \int r \rho_{lib} \phi_i \mathrm{d} r $
use crate::{QuadratureRule, TridiagonalSystem};
use dielectric_mesher::{ElementMethods, RadialMesh};
use nalgebra::RealField;
use std::marker::PhantomData;

/// A free charge density, normalised by the vacuum permittivity
pub trait ChargeDensity<T> {
    fn charge_density(&self, radius: T) -> T;
}

impl<T, F> ChargeDensity<T> for F
where
    F: Fn(T) -> T,
{
    fn charge_density(&self, radius: T) -> T {
        self(radius)
    }
}

pub struct SourceAssemblerBuilder<T, RefMesh, RefSource> {
    mesh: RefMesh,
    source: RefSource,
    quadrature: QuadratureRule<T>,
}

impl<T: Copy + RealField> SourceAssemblerBuilder<T, (), ()> {
    pub fn new() -> Self {
        Self {
            mesh: (),
            source: (),
            quadrature: QuadratureRule::midpoint(),
        }
    }
}

impl<T: Copy + RealField> Default for SourceAssemblerBuilder<T, (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, RefMesh, RefSource> SourceAssemblerBuilder<T, RefMesh, RefSource> {
    pub fn with_mesh<Mesh>(self, mesh: &Mesh) -> SourceAssemblerBuilder<T, &Mesh, RefSource> {
        SourceAssemblerBuilder {
            mesh,
            source: self.source,
            quadrature: self.quadrature,
        }
    }

    pub fn with_source<Source>(
        self,
        source: &Source,
    ) -> SourceAssemblerBuilder<T, RefMesh, &Source> {
        SourceAssemblerBuilder {
            mesh: self.mesh,
            source,
            quadrature: self.quadrature,
        }
    }

    pub fn with_quadrature(self, quadrature: QuadratureRule<T>) -> Self {
        Self { quadrature, ..self }
    }
}

pub struct SourceAssembler<'a, T, Mesh, Source> {
    mesh: &'a Mesh,
    source: &'a Source,
    quadrature: QuadratureRule<T>,
    marker: PhantomData<T>,
}

impl<'a, T, Mesh, Source> SourceAssemblerBuilder<T, &'a Mesh, &'a Source> {
    pub fn build(self) -> SourceAssembler<'a, T, Mesh, Source> {
        SourceAssembler {
            mesh: self.mesh,
            source: self.source,
            quadrature: self.quadrature,
            marker: PhantomData,
        }
    }
}

impl<'a, T, Mesh, Source> SourceAssembler<'a, T, Mesh, Source>
where
    T: Copy + RealField,
    Mesh: RadialMesh<T>,
    Source: ChargeDensity<T>,
{
    /// The contributions of element `index` to the load of its (inner, outer) vertex
    ///
    /// Each vertex receives half of the element's weight, taken either from the charge at the
    /// vertex itself or from the charge at the element midpoint.
    pub fn element_load(&self, index: usize) -> (T, T) {
        let element = self.mesh.element(index);
        let (inner, outer) = element.endpoints();
        let midpoint = element.midpoint().x;
        let half = T::one() / (T::one() + T::one());
        let width = element.diameter();

        let at_midpoint = self.source.charge_density(midpoint) * midpoint * half;
        let load = |radius: T| {
            self.quadrature.blend(
                self.source.charge_density(radius) * radius * half,
                at_midpoint,
            ) * width
        };
        (load(inner), load(outer))
    }

    /// Adds the element loads into the right hand side of `system`
    pub fn assemble_vector_into(&self, system: &mut TridiagonalSystem<T>) {
        assert_eq!(system.num_rows(), self.mesh.number_of_nodes());
        for index in 0..self.mesh.number_of_elements() {
            let (inner, outer) = self.element_load(index);
            system.rhs_mut()[index] += inner;
            system.rhs_mut()[index + 1] += outer;
        }
    }
}

#[cfg(test)]
mod test {
    use super::SourceAssemblerBuilder;
    use crate::{QuadratureRule, TridiagonalSystem};
    use approx::assert_relative_eq;
    use dielectric_mesher::create_radial_mesh_1d;

    fn unit_charge(_radius: f64) -> f64 {
        1.
    }

    #[test]
    fn total_load_approximates_the_weighted_charge() {
        // \int_0^R r dr = R^2 / 2, which both rules reproduce for a constant charge
        let mesh = create_radial_mesh_1d(1f64, 3f64, 4, 6);
        for mixing in [0., 0.25, 1.] {
            let assembler = SourceAssemblerBuilder::new()
                .with_mesh(&mesh)
                .with_source(&unit_charge)
                .with_quadrature(QuadratureRule::mixed(mixing))
                .build();
            let mut system = TridiagonalSystem::<f64>::zeros(mesh.num_nodes()).unwrap();
            assembler.assemble_vector_into(&mut system);
            assert_relative_eq!(system.rhs().sum(), 4.5, max_relative = 1e-12);
        }
    }

    #[test]
    fn axis_vertex_receives_no_vertex_weighted_load() {
        let mesh = create_radial_mesh_1d(1f64, 2f64, 2, 2);
        let assembler = SourceAssemblerBuilder::new()
            .with_mesh(&mesh)
            .with_source(&unit_charge)
            .with_quadrature(QuadratureRule::trapezoidal())
            .build();
        let (inner, outer) = assembler.element_load(0);
        assert_eq!(inner, 0.);
        // rho * r / 2 * h at r = h = 0.5
        assert_relative_eq!(outer, 0.125);
    }

    #[test]
    fn interior_vertices_collect_from_both_neighbours() {
        let mesh = create_radial_mesh_1d(1f64, 2f64, 2, 2);
        let assembler = SourceAssemblerBuilder::new()
            .with_mesh(&mesh)
            .with_source(&unit_charge)
            .build();
        let mut system = TridiagonalSystem::<f64>::zeros(mesh.num_nodes()).unwrap();
        assembler.assemble_vector_into(&mut system);
        let expected = assembler.element_load(1).1 + assembler.element_load(2).0;
        assert_relative_eq!(system.rhs()[2], expected);
    }
}
