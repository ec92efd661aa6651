// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use crate::{Assignment, Mesh1d};
use nalgebra::{Point1, RealField};

pub fn create_unit_line_segment_mesh_1d<T>(cells: usize) -> Mesh1d<T>
where
    T: Copy + RealField,
{
    create_line_segment_mesh_1d(T::one(), cells, T::zero())
}

/// A uniform mesh of `cells` elements over `[left, left + length]`, all assigned to the core
pub fn create_line_segment_mesh_1d<T>(length: T, cells: usize, left: T) -> Mesh1d<T>
where
    T: Copy + RealField,
{
    if cells == 0 {
        return Mesh1d::from_vertices_and_assignments(Vec::new(), Vec::new(), 0);
    }
    let cell_size = length / nalgebra::convert::<f64, T>(cells as f64);
    let vertices = (0..=cells)
        .map(|i| Point1::new(left + nalgebra::convert::<f64, T>(i as f64) * cell_size))
        .collect();
    Mesh1d::from_vertices_and_assignments(vertices, vec![Assignment::Core; cells], cells)
}

/// The two-region radial mesh.
///
/// The core `[0, interface_radius]` is split into `core_cells` uniform elements and the shell
/// `[interface_radius, outer_radius]` into `shell_cells` uniform elements. Vertex `core_cells`
/// is exactly `interface_radius` and the final vertex is exactly `outer_radius`.
///
/// The caller guarantees `0 < interface_radius < outer_radius`. If either region has no
/// cells the mesh is empty.
pub fn create_radial_mesh_1d<T>(
    interface_radius: T,
    outer_radius: T,
    core_cells: usize,
    shell_cells: usize,
) -> Mesh1d<T>
where
    T: Copy + RealField,
{
    if core_cells == 0 || shell_cells == 0 {
        return Mesh1d::from_vertices_and_assignments(Vec::new(), Vec::new(), 0);
    }
    let core_step = interface_radius / nalgebra::convert::<f64, T>(core_cells as f64);
    let shell_step =
        (outer_radius - interface_radius) / nalgebra::convert::<f64, T>(shell_cells as f64);

    let mut vertices = Vec::with_capacity(core_cells + shell_cells + 1);
    for i in 0..core_cells {
        vertices.push(Point1::new(
            nalgebra::convert::<f64, T>(i as f64) * core_step,
        ));
    }
    for i in 0..shell_cells {
        vertices.push(Point1::new(
            interface_radius + nalgebra::convert::<f64, T>(i as f64) * shell_step,
        ));
    }
    // The outer edge is exactly `outer_radius`, not the accumulated sum of steps
    vertices.push(Point1::new(outer_radius));

    let assignments = std::iter::repeat(Assignment::Core)
        .take(core_cells)
        .chain(std::iter::repeat(Assignment::Shell).take(shell_cells))
        .collect();

    Mesh1d::from_vertices_and_assignments(vertices, assignments, core_cells)
}

#[cfg(test)]
mod test {
    use super::{create_radial_mesh_1d, create_unit_line_segment_mesh_1d};
    use crate::{Assignment, ElementMethods};
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn unit_mesh_is_uniform() {
        let mesh: super::Mesh1d<f64> = create_unit_line_segment_mesh_1d(20);
        assert_eq!(mesh.num_nodes(), 21);
        for width in mesh.element_widths().iter() {
            assert_relative_eq!(*width, 0.05, epsilon = 1e-14);
        }
        assert_relative_eq!(mesh.outer_radius(), 1f64, epsilon = 1e-14);
    }

    #[test]
    fn radial_mesh_with_one_cell_per_region_has_three_vertices() {
        let mesh = create_radial_mesh_1d(1f64, 2f64, 1, 1);
        let radii = mesh.radii();
        assert_eq!(radii.len(), 3);
        assert_eq!(radii[0], 0f64);
        assert_eq!(radii[1], 1f64);
        assert_eq!(radii[2], 2f64);
        assert_eq!(mesh.assignments(), &[Assignment::Core, Assignment::Shell]);
    }

    #[test]
    fn regions_are_uniform_with_their_own_step() {
        let (b, r) = (0.3f64, 1.0f64);
        let mesh = create_radial_mesh_1d(b, r, 6, 14);
        let widths = mesh.element_widths();
        for width in widths.iter().take(6) {
            assert_relative_eq!(*width, b / 6., epsilon = 1e-14);
        }
        for width in widths.iter().skip(6) {
            assert_relative_eq!(*width, (r - b) / 14., epsilon = 1e-14);
        }
    }

    #[test]
    fn elements_on_either_side_of_the_interface_carry_their_region() {
        let mesh = create_radial_mesh_1d(1f64, 3f64, 3, 5);
        let assignments: Vec<Assignment> = mesh.elements().map(|e| e.assignment()).collect();
        assert_eq!(assignments[2], Assignment::Core);
        assert_eq!(assignments[3], Assignment::Shell);
        assert_eq!(mesh.classify(0.999), Assignment::Core);
        assert_eq!(mesh.classify(1.0), Assignment::Shell);
    }

    #[test]
    fn empty_regions_produce_an_empty_mesh() {
        let mesh = create_radial_mesh_1d(1f64, 2f64, 0, 4);
        assert_eq!(mesh.num_nodes(), 0);
        assert_eq!(mesh.num_elements(), 0);
    }

    proptest! {
        #[test]
        fn radial_mesh_is_strictly_increasing_and_hits_the_interface(
            core_cells in 1usize..200,
            shell_cells in 1usize..200,
            interface_radius in 1e-3f64..10.,
            shell_thickness in 1e-3f64..10.,
        ) {
            let outer_radius = interface_radius + shell_thickness;
            let mesh = create_radial_mesh_1d(interface_radius, outer_radius, core_cells, shell_cells);
            let radii = mesh.radii();

            prop_assert_eq!(radii.len(), core_cells + shell_cells + 1);
            prop_assert_eq!(radii[0], 0f64);
            prop_assert_eq!(radii[core_cells], interface_radius);
            prop_assert_eq!(radii[core_cells + shell_cells], outer_radius);
            prop_assert!(radii.as_slice().windows(2).all(|pair| pair[1] > pair[0]));
            prop_assert_eq!(mesh.interface_index(), core_cells);
            prop_assert_eq!(mesh.interface_radius(), interface_radius);
        }
    }
}
