// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::{
    apply_dirichlet, BuildError, ChargeDensity, OperatorAssemblerBuilder, Permittivity,
    QuadratureRule, SourceAssemblerBuilder, TridiagonalSystem,
};
use dielectric_mesher::RadialMesh;
use nalgebra::{DVector, RealField};

pub struct PoissonProblemBuilder<T, RefMesh, RefPermittivity, RefSource> {
    mesh: RefMesh,
    permittivity: RefPermittivity,
    source: RefSource,
    quadrature: QuadratureRule<T>,
    boundary_potential: T,
}

impl<T: Copy + RealField> PoissonProblemBuilder<T, (), (), ()> {
    pub fn new() -> Self {
        Self {
            mesh: (),
            permittivity: (),
            source: (),
            quadrature: QuadratureRule::midpoint(),
            boundary_potential: T::zero(),
        }
    }
}

impl<T: Copy + RealField> Default for PoissonProblemBuilder<T, (), (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, RefMesh, RefPermittivity, RefSource>
    PoissonProblemBuilder<T, RefMesh, RefPermittivity, RefSource>
{
    pub fn with_mesh<Mesh>(
        self,
        mesh: &Mesh,
    ) -> PoissonProblemBuilder<T, &Mesh, RefPermittivity, RefSource> {
        PoissonProblemBuilder {
            mesh,
            permittivity: self.permittivity,
            source: self.source,
            quadrature: self.quadrature,
            boundary_potential: self.boundary_potential,
        }
    }

    pub fn with_permittivity<Permittivity>(
        self,
        permittivity: &Permittivity,
    ) -> PoissonProblemBuilder<T, RefMesh, &Permittivity, RefSource> {
        PoissonProblemBuilder {
            mesh: self.mesh,
            permittivity,
            source: self.source,
            quadrature: self.quadrature,
            boundary_potential: self.boundary_potential,
        }
    }

    pub fn with_source<Source>(
        self,
        source: &Source,
    ) -> PoissonProblemBuilder<T, RefMesh, RefPermittivity, &Source> {
        PoissonProblemBuilder {
            mesh: self.mesh,
            permittivity: self.permittivity,
            source,
            quadrature: self.quadrature,
            boundary_potential: self.boundary_potential,
        }
    }

    pub fn with_quadrature(self, quadrature: QuadratureRule<T>) -> Self {
        Self { quadrature, ..self }
    }

    /// The potential held at the outer radius
    pub fn with_boundary_potential(self, boundary_potential: T) -> Self {
        Self {
            boundary_potential,
            ..self
        }
    }
}

impl<'a, T, Mesh, Eps, Source> PoissonProblemBuilder<T, &'a Mesh, &'a Eps, &'a Source>
where
    T: Copy + RealField,
    Mesh: RadialMesh<T>,
{
    pub fn build(self) -> Result<PoissonProblem<'a, T, Mesh, Eps, Source>, BuildError> {
        if self.mesh.number_of_nodes() < 2 {
            return Err(BuildError::Mesh(format!(
                "the mesh must contain at least one element, found {} nodes",
                self.mesh.number_of_nodes()
            )));
        }
        Ok(PoissonProblem {
            mesh: self.mesh,
            permittivity: self.permittivity,
            source: self.source,
            quadrature: self.quadrature,
            boundary_potential: self.boundary_potential,
        })
    }
}

/// The discretised radial Poisson problem with the potential fixed at the outer radius
///
/// No condition is imposed on the axis: the factor `r` in the weak form removes the boundary
/// term there, so regularity of the potential at `r = 0` is enforced naturally.
pub struct PoissonProblem<'a, T, Mesh, Eps, Source> {
    mesh: &'a Mesh,
    permittivity: &'a Eps,
    source: &'a Source,
    quadrature: QuadratureRule<T>,
    boundary_potential: T,
}

impl<'a, T, Mesh, Eps, Source> PoissonProblem<'a, T, Mesh, Eps, Source>
where
    T: Copy + RealField,
    Mesh: RadialMesh<T>,
    Eps: Permittivity<T>,
    Source: ChargeDensity<T>,
{
    /// Builds the stiffness bands and load vector, then fixes the outer potential
    pub fn assemble(&self) -> Result<TridiagonalSystem<T>, BuildError> {
        let mut system = TridiagonalSystem::zeros(self.mesh.number_of_nodes())?;

        OperatorAssemblerBuilder::new()
            .with_mesh(self.mesh)
            .with_permittivity(self.permittivity)
            .with_quadrature(self.quadrature)
            .build()
            .assemble_operator_into(&mut system);

        SourceAssemblerBuilder::new()
            .with_mesh(self.mesh)
            .with_source(self.source)
            .with_quadrature(self.quadrature)
            .build()
            .assemble_vector_into(&mut system);

        apply_dirichlet(&mut system, self.boundary_potential);
        Ok(system)
    }

    /// Assembles and solves for the potential at every mesh vertex
    #[tracing::instrument(name = "Poisson", skip_all, fields(nodes = self.mesh.number_of_nodes()))]
    pub fn solve(&self) -> Result<DVector<T>, BuildError> {
        let system = self.assemble()?;
        tracing::debug!("assembled tridiagonal system of {} rows", system.num_rows());

        let potential = system.solve();
        tracing::debug!("residual norm {}", system.residual(&potential).norm());
        Ok(potential)
    }
}
