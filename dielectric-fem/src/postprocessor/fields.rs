// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use super::{PostProcessor, PostProcessorError};
use dielectric_mesher::{ElementMethods, RadialMesh};
use dielectric_poisson::{ChargeDensity, Permittivity};
use itertools::Itertools;
use nalgebra::{DVector, RealField};

/// The radial electric field and the displacement field divided by `epsilon_0`, sampled at the
/// element midpoints
#[derive(Clone, Debug)]
pub struct Fields<T: RealField> {
    /// Element midpoints
    pub midpoints: DVector<T>,
    /// `E_r`
    pub electric: DVector<T>,
    /// `D_r / epsilon_0`
    pub displacement: DVector<T>,
}

/// The cylindrical divergence of the fields, sampled halfway between neighbouring element midpoints
#[derive(Clone, Debug)]
pub struct Divergence<T: RealField> {
    /// Centres between neighbouring element midpoints
    pub midpoints: DVector<T>,
    /// `div E_r`
    pub electric: DVector<T>,
    /// `div D_r / epsilon_0`
    pub displacement: DVector<T>,
}

/// How closely the displacement field satisfies Gauss's law
#[derive(Clone, Debug)]
pub struct GaussLawSummary<T> {
    /// Largest deviation of `div D` from the free charge density
    pub maximum_deviation: T,
    /// Root mean square deviation of `div D` from the free charge density
    pub rms_deviation: T,
    /// `r D_r` at the outermost element midpoint
    pub outer_flux: T,
    /// Midpoint-rule estimate of `\int \rho r dr` from the axis to the outermost element midpoint
    pub enclosed_charge: T,
}

impl<T: Copy + RealField> Fields<T> {
    /// Number of midpoints
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}

impl<T: Copy + RealField> Divergence<T> {
    /// Number of samples
    pub fn len(&self) -> usize {
        self.midpoints.len()
    }

    /// Whether there are no samples
    pub fn is_empty(&self) -> bool {
        self.midpoints.is_empty()
    }
}

/// Central difference approximation to `1 / r d(r F) / dr` between consecutive samples of `F`
fn cylindrical_divergence<T: Copy + RealField>(
    midpoints: &DVector<T>,
    values: &DVector<T>,
) -> DVector<T> {
    let two = T::one() + T::one();
    let divergence = midpoints
        .iter()
        .zip(values.iter())
        .tuple_windows()
        .map(|((&r0, &f0), (&r1, &f1))| {
            let centre = (r0 + r1) / two;
            (f1 + f0) / (two * centre) + (f1 - f0) / (r1 - r0)
        })
        .collect::<Vec<_>>();
    DVector::from_vec(divergence)
}

impl<'a, T, Mesh, Eps> PostProcessor<'a, T, Mesh, Eps>
where
    T: Copy + RealField,
    Mesh: RadialMesh<T>,
    Eps: Permittivity<T>,
{
    /// Computes `E_r = -d phi / dr` on each element and `D_r = epsilon_r E_r` at its midpoint
    pub fn fields(&self, potential: &DVector<T>) -> Result<Fields<T>, PostProcessorError> {
        if potential.len() != self.mesh.number_of_nodes() {
            return Err(PostProcessorError::InconsistentDimensions(format!(
                "potential has {} values but the mesh has {} nodes",
                potential.len(),
                self.mesh.number_of_nodes()
            )));
        }
        let num_elements = self.mesh.number_of_elements();
        let mut midpoints = DVector::zeros(num_elements);
        let mut electric = DVector::zeros(num_elements);
        let mut displacement = DVector::zeros(num_elements);

        for index in 0..num_elements {
            let element = self.mesh.element(index);
            let midpoint = element.midpoint().x;
            let field = (potential[index] - potential[index + 1]) / element.diameter();
            // Midpoints never sit on the interface, the side is taken from the point itself
            let epsilon = self
                .permittivity
                .relative_permittivity(midpoint, self.mesh.classify(midpoint));

            midpoints[index] = midpoint;
            electric[index] = field;
            displacement[index] = epsilon * field;
        }

        Ok(Fields {
            midpoints,
            electric,
            displacement,
        })
    }

    /// Computes `1/r d(r F)/dr` for both fields between neighbouring midpoints
    pub fn divergence(&self, fields: &Fields<T>) -> Result<Divergence<T>, PostProcessorError> {
        if fields.electric.len() != fields.len() || fields.displacement.len() != fields.len() {
            return Err(PostProcessorError::InconsistentDimensions(format!(
                "fields sampled at {} midpoints have {} electric and {} displacement values",
                fields.len(),
                fields.electric.len(),
                fields.displacement.len()
            )));
        }
        let two = T::one() + T::one();
        let midpoints = DVector::from_iterator(
            fields.len().saturating_sub(1),
            fields
                .midpoints
                .iter()
                .tuple_windows()
                .map(|(&r0, &r1)| (r0 + r1) / two),
        );
        Ok(Divergence {
            midpoints,
            electric: cylindrical_divergence(&fields.midpoints, &fields.electric),
            displacement: cylindrical_divergence(&fields.midpoints, &fields.displacement),
        })
    }

    /// Compares the divergence of the displacement field with the free charge, both locally and
    /// through the flux leaving the outermost element midpoint
    pub fn gauss_law<Source>(
        &self,
        fields: &Fields<T>,
        divergence: &Divergence<T>,
        charge: &Source,
    ) -> GaussLawSummary<T>
    where
        Source: ChargeDensity<T>,
    {
        let deviations = DVector::from_iterator(
            divergence.len(),
            divergence
                .midpoints
                .iter()
                .zip(divergence.displacement.iter())
                .map(|(&radius, &value)| value - charge.charge_density(radius)),
        );
        let rms_deviation = if deviations.is_empty() {
            T::zero()
        } else {
            deviations.norm() / nalgebra::convert::<f64, T>(deviations.len() as f64).sqrt()
        };

        let (outer_flux, enclosed_charge) = match fields.len() {
            0 => (T::zero(), T::zero()),
            n => {
                let last = n - 1;
                let outer_radius = fields.midpoints[last];
                let mut enclosed = T::zero();
                for index in 0..last {
                    let element = self.mesh.element(index);
                    let midpoint = element.midpoint().x;
                    enclosed += charge.charge_density(midpoint) * midpoint * element.diameter();
                }
                // Half of the final element lies inside its own midpoint
                let element = self.mesh.element(last);
                let (inner, _) = element.endpoints();
                let centre = (inner + outer_radius) / (T::one() + T::one());
                enclosed += charge.charge_density(centre) * centre * (outer_radius - inner);

                (outer_radius * fields.displacement[last], enclosed)
            }
        };

        GaussLawSummary {
            maximum_deviation: deviations
                .iter()
                .fold(T::zero(), |acc, &value| acc.max(value.abs())),
            rms_deviation,
            outer_flux,
            enclosed_charge,
        }
    }
}
