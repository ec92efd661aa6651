// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::{Assignment, LineSegment1d};
use nalgebra::{DVector, Point1, RealField};

/// A one-dimensional radial `Mesh`
///
/// The vertices are strictly increasing radii. Element `k` spans vertices `k` and `k + 1` and
/// carries the `Assignment` of the region it lies in. Meshes are never mutated after construction.
#[derive(Clone, Debug)]
pub struct Mesh1d<T: RealField> {
    vertices: Vec<Point1<T>>,
    assignments: Vec<Assignment>,
    interface_index: usize,
}

impl<T> Mesh1d<T>
where
    T: Copy + RealField,
{
    pub(crate) fn from_vertices_and_assignments(
        vertices: Vec<Point1<T>>,
        assignments: Vec<Assignment>,
        interface_index: usize,
    ) -> Self {
        debug_assert!(vertices.is_empty() || assignments.len() + 1 == vertices.len());
        Self {
            vertices,
            assignments,
            interface_index,
        }
    }

    pub fn num_nodes(&self) -> usize {
        self.vertices.len()
    }

    pub fn num_elements(&self) -> usize {
        self.assignments.len()
    }

    pub fn vertices(&self) -> &[Point1<T>] {
        &self.vertices
    }

    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Index of the vertex sitting on the interface between the core and the shell
    pub fn interface_index(&self) -> usize {
        self.interface_index
    }

    pub fn interface_radius(&self) -> T {
        self.vertices[self.interface_index].x
    }

    pub fn outer_radius(&self) -> T {
        self.vertices[self.vertices.len() - 1].x
    }

    /// The radial coordinate of every vertex
    pub fn radii(&self) -> DVector<T> {
        DVector::from_iterator(self.num_nodes(), self.vertices.iter().map(|v| v.x))
    }

    /// The width of every element
    pub fn element_widths(&self) -> DVector<T> {
        DVector::from_iterator(
            self.num_elements(),
            self.vertices.windows(2).map(|pair| pair[1].x - pair[0].x),
        )
    }

    pub fn element(&self, index: usize) -> LineSegment1d<T> {
        LineSegment1d::from_vertices(
            &[self.vertices[index], self.vertices[index + 1]],
            &[index, index + 1],
            self.assignments[index],
        )
    }

    pub fn elements(&self) -> impl Iterator<Item = LineSegment1d<T>> + '_ {
        (0..self.num_elements()).map(move |index| self.element(index))
    }

    /// Classifies a point by the region it falls in: points strictly inside the interface radius
    /// belong to the core, everything else to the shell
    pub fn classify(&self, radius: T) -> Assignment {
        if radius < self.interface_radius() {
            Assignment::Core
        } else {
            Assignment::Shell
        }
    }
}
