// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Constants
//!
//! Defines physical and material constants used in the simulation

/// Permittivity of free space in F / m. Charge densities are given divided by it
pub const EPSILON_0: f64 = 8.85418782e-12;

/// Relative permittivity inside the interface radius
pub const CORE_PERMITTIVITY: f64 = 1.0;
/// Relative permittivity of the shell just outside the interface
pub const SHELL_INNER_PERMITTIVITY: f64 = 8.0;
/// Relative permittivity of the shell at the outer radius
pub const SHELL_OUTER_PERMITTIVITY: f64 = 2.0;

/// Distance from the interface, relative to its radius, within which a point sits on it
pub const INTERFACE_TOLERANCE: f64 = 1e-12;
