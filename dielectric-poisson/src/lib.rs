// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! This crate solves the radial Poisson equation for a two-region dielectric using
//! piecewise-linear finite elements.
//!
//! In cylindrical symmetry the equation is
//! $ -\frac{\mathrm{d}}{\mathrm{d} r} \left( r \epsilon_r \frac{\mathrm{d} \phi}{\mathrm{d} r} \right) = r \rho_{lib} / \epsilon_0 $
//!
//! The Galerkin discretisation on a 1D mesh couples each node only to its neighbours, so the
//! discrete problem is a tridiagonal system which is solved directly by Gauss elimination.
mod error;
mod operator;
mod problem;
mod solve;
mod source;

pub use error::*;
pub use operator::*;
pub use problem::*;
pub use solve::*;
pub use source::*;
