// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! One-dimensional radial meshes for the two-region dielectric problem.
//!
//! A mesh is a strictly increasing sequence of radii starting on the axis,
//! split at the interface radius into a core region and a surrounding shell.
//! Each region is discretised uniformly, so the mesh as a whole is non-uniform.

mod assignment;
mod generate;
mod mesh;
mod primitives;

pub use assignment::*;
pub use generate::*;
pub use mesh::*;
pub use primitives::*;

use nalgebra::RealField;

/// The information an assembler needs from a radial mesh.
///
/// Implemented for [`Mesh1d`], the assemblers in `dielectric-poisson` are generic over it
/// so they can be driven by any mesh that can hand out its elements in order.
pub trait RadialMesh<T>
where
    T: Copy + RealField,
{
    fn number_of_nodes(&self) -> usize;
    fn number_of_elements(&self) -> usize;
    /// The element spanning nodes `index` and `index + 1`
    fn element(&self, index: usize) -> LineSegment1d<T>;
    /// The radius at which the material properties are discontinuous
    fn interface_radius(&self) -> T;
    /// Which region a point at `radius` belongs to
    fn classify(&self, radius: T) -> Assignment;
}

impl<T> RadialMesh<T> for Mesh1d<T>
where
    T: Copy + RealField,
{
    fn number_of_nodes(&self) -> usize {
        self.num_nodes()
    }
    fn number_of_elements(&self) -> usize {
        self.num_elements()
    }
    fn element(&self, index: usize) -> LineSegment1d<T> {
        self.element(index)
    }
    fn interface_radius(&self) -> T {
        self.interface_radius()
    }
    fn classify(&self, radius: T) -> Assignment {
        self.classify(radius)
    }
}
