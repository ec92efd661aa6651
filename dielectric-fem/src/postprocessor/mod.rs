// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Post-processing
//!
//! Derives the radial electric and displacement fields from the potential, and their divergences
//! which are compared against the free charge density as a check of Gauss's law.
mod fields;
pub(crate) mod writer;

pub use fields::{Divergence, Fields, GaussLawSummary};

use miette::Diagnostic;
use std::marker::PhantomData;

/// Failures while deriving the fields
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum PostProcessorError {
    /// Input vectors whose lengths disagree with the mesh or with each other
    #[error("inconsistent dimensions: {0}")]
    InconsistentDimensions(String),
}

/// Builder for a `PostProcessor`
pub struct PostProcessorBuilder<T, RefMesh, RefPermittivity> {
    mesh: RefMesh,
    permittivity: RefPermittivity,
    marker: PhantomData<T>,
}

/// Derives fields and divergences from a potential on a mesh
pub struct PostProcessor<'a, T, Mesh, Permittivity> {
    mesh: &'a Mesh,
    permittivity: &'a Permittivity,
    marker: PhantomData<T>,
}

impl<T> PostProcessorBuilder<T, (), ()> {
    /// A builder with neither a mesh nor a permittivity
    pub fn new() -> Self {
        PostProcessorBuilder {
            mesh: (),
            permittivity: (),
            marker: PhantomData,
        }
    }
}

impl<T> Default for PostProcessorBuilder<T, (), ()> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, RefMesh, RefPermittivity> PostProcessorBuilder<T, RefMesh, RefPermittivity> {
    /// Attach the mesh the potential lives on
    pub fn with_mesh<Mesh>(self, mesh: &Mesh) -> PostProcessorBuilder<T, &Mesh, RefPermittivity> {
        PostProcessorBuilder {
            mesh,
            permittivity: self.permittivity,
            marker: PhantomData,
        }
    }

    /// Attach the permittivity used for the displacement field
    pub fn with_permittivity<Permittivity>(
        self,
        permittivity: &Permittivity,
    ) -> PostProcessorBuilder<T, RefMesh, &Permittivity> {
        PostProcessorBuilder {
            mesh: self.mesh,
            permittivity,
            marker: PhantomData,
        }
    }
}

impl<'a, T, Mesh, Permittivity> PostProcessorBuilder<T, &'a Mesh, &'a Permittivity> {
    /// Finish the builder
    pub fn build(self) -> PostProcessor<'a, T, Mesh, Permittivity> {
        PostProcessor {
            mesh: self.mesh,
            permittivity: self.permittivity,
            marker: PhantomData,
        }
    }
}
