// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Dielectric is a finite element solver for the electrostatic potential of a charged cylinder
//! wrapped in a dielectric shell.
//!
//! # Overview
//! The device is an infinitely long cylinder of radius `b` carrying a parabolic free charge
//! density, surrounded by a shell extending to radius `R` whose relative permittivity falls
//! linearly from 8 at the interface to 2 at the outer edge. The potential is held fixed at `R`.
//! Assuming cylindrical symmetry, the radial Poisson equation
//!
//! `-1/r d/dr (r epsilon_r dphi/dr) = rho / epsilon_0`
//!
//! is discretised with linear finite elements on a mesh which is uniform within each region, and
//! the resulting tridiagonal system solved directly. The electric and displacement fields and
//! their divergences are then derived from the nodal potential.
//!
//! # Usage
//! Dielectric is distributed as a binary crate. Parameters are read from a `.toml` file:
//!
//! ```toml
//! output = "results/run"
//! trivial = false
//!
//! [geometry]
//! interface_radius = 0.03
//! outer_radius = 0.1
//! boundary_potential = 0.0
//!
//! [charge]
//! amplitude = 1.0
//!
//! [mesh]
//! core_elements = 50
//! shell_elements = 50
//! quadrature_mixing = 0.5
//! ```
//!
//! and any field can be overridden on the command line, `dielectric-fem run.toml mesh.core_elements=200`.
//! Defaults for missing fields are read from `.config/default.toml` relative to the working
//! directory, so runs relying on them should start from the repository root.

#![warn(missing_docs)]
#![allow(clippy::type_complexity)]

/// The command line global application, tracing and display primitives
pub mod app;

/// Physical constants
pub mod constants;

/// Material profiles of the device
pub mod device;

/// Error handling
mod error;

/// Computes the fields and their divergences from the potential
pub mod postprocessor;

pub use error::IOError;
