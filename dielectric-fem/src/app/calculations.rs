// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Calculations
//!
//! Delegated functions from `App` to mesh the device, solve for the potential, derive the
//! fields and write the result tables

use super::{error::DielectricError, Configuration};
use crate::{
    device::{DielectricProfile, SpaceCharge},
    postprocessor::{writer, Divergence, Fields, GaussLawSummary, PostProcessorBuilder},
};
use dielectric_mesher::{create_radial_mesh_1d, Mesh1d};
use dielectric_poisson::{PoissonProblemBuilder, QuadratureRule};
use nalgebra::DVector;

/// The result of a full calculation, everything the output tables are built from
#[derive(Debug)]
pub struct Solution {
    /// The two-region mesh the problem was solved on
    pub mesh: Mesh1d<f64>,
    /// The potential at every mesh node
    pub potential: DVector<f64>,
    /// Fields at the element midpoints
    pub fields: Fields<f64>,
    /// Divergences between neighbouring element midpoints
    pub divergence: Divergence<f64>,
    /// Agreement of the displacement field with the free charge
    pub gauss_law: GaussLawSummary<f64>,
}

impl Solution {
    /// The radius of every mesh node
    pub fn radii(&self) -> DVector<f64> {
        self.mesh.radii()
    }
}

/// Runs the calculation described by a validated `Configuration`
pub fn solve(configuration: &Configuration) -> Result<Solution, DielectricError> {
    let geometry = &configuration.geometry;
    tracing::info!(
        "Meshing {} core and {} shell elements",
        configuration.mesh.core_elements,
        configuration.mesh.shell_elements
    );
    let mesh = create_radial_mesh_1d(
        geometry.interface_radius,
        geometry.outer_radius,
        configuration.mesh.core_elements,
        configuration.mesh.shell_elements,
    );

    let permittivity = DielectricProfile::from(configuration);
    let charge = SpaceCharge::from(configuration);

    tracing::info!("Solving for the potential");
    let potential = PoissonProblemBuilder::new()
        .with_mesh(&mesh)
        .with_permittivity(&permittivity)
        .with_source(&charge)
        .with_quadrature(QuadratureRule::mixed(configuration.mesh.quadrature_mixing))
        .with_boundary_potential(geometry.boundary_potential)
        .build()?
        .solve()?;

    tracing::info!("Computing fields");
    let postprocessor = PostProcessorBuilder::new()
        .with_mesh(&mesh)
        .with_permittivity(&permittivity)
        .build();
    let fields = postprocessor.fields(&potential)?;
    let divergence = postprocessor.divergence(&fields)?;
    let gauss_law = postprocessor.gauss_law(&fields, &divergence, &charge);
    tracing::info!(
        "Gauss's law: max |div D - rho| = {:.3e}, rms = {:.3e}, outer flux = {:.6e}, enclosed charge = {:.6e}",
        gauss_law.maximum_deviation,
        gauss_law.rms_deviation,
        gauss_law.outer_flux,
        gauss_law.enclosed_charge
    );

    Ok(Solution {
        mesh,
        potential,
        fields,
        divergence,
        gauss_law,
    })
}

/// Writes the potential, field and divergence tables next to the configured output prefix
pub fn write_outputs(
    configuration: &Configuration,
    solution: &Solution,
) -> Result<(), DielectricError> {
    let charge = SpaceCharge::from(configuration);
    let path = configuration.potential_path();
    tracing::info!("Writing {}", path.display());
    writer::write_potential(&path, &solution.radii(), &solution.potential)?;

    let path = configuration.field_path();
    tracing::info!("Writing {}", path.display());
    writer::write_fields(&path, &solution.fields)?;

    let path = configuration.divergence_path();
    tracing::info!("Writing {}", path.display());
    writer::write_divergence(&path, &solution.divergence, &charge)?;
    Ok(())
}
