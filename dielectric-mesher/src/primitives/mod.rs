// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::Assignment;
use nalgebra::{Point1, RealField};

pub trait ElementMethods<T: RealField> {
    fn vertex_indices(&self) -> &[usize];
    fn midpoint(&self) -> Point1<T>;
    fn diameter(&self) -> T;
    fn assignment(&self) -> Assignment;
}

/// A single interval of a radial mesh
#[derive(Clone, Debug)]
pub struct LineSegment1d<T>
where
    T: RealField,
{
    vertices: [Point1<T>; 2],
    vertex_indices: [usize; 2],
    assignment: Assignment,
}

impl<T> LineSegment1d<T>
where
    T: Copy + RealField,
{
    pub fn from_vertices(
        vertices: &[Point1<T>; 2],
        vertex_indices: &[usize; 2],
        assignment: Assignment,
    ) -> Self {
        Self {
            vertices: vertices.to_owned(),
            vertex_indices: vertex_indices.to_owned(),
            assignment,
        }
    }

    pub fn reference() -> Self {
        Self::from_vertices(
            &[Point1::new(-T::one()), Point1::new(T::one())],
            &[0, 1],
            Assignment::Core,
        )
    }

    /// The inner and outer radius of the segment
    pub fn endpoints(&self) -> (T, T) {
        (self.vertices[0].x, self.vertices[1].x)
    }
}

impl<T: Copy + RealField> ElementMethods<T> for LineSegment1d<T> {
    fn midpoint(&self) -> Point1<T> {
        Point1::new((self.vertices[0].x + self.vertices[1].x) / (T::one() + T::one()))
    }
    fn vertex_indices(&self) -> &[usize] {
        &self.vertex_indices
    }
    fn diameter(&self) -> T {
        (self.vertices[0].x - self.vertices[1].x).abs()
    }
    fn assignment(&self) -> Assignment {
        self.assignment
    }
}
