// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Device
//!
//! The material profiles of the two-region dielectric: a space-charge bearing core of radius `b`
//! inside a graded dielectric shell extending to `R`.
//!
//! In the `trivial` configuration both profiles are replaced by unit constants, which gives a
//! problem with a known closed-form solution.

use crate::app::Configuration;
use crate::constants::{
    CORE_PERMITTIVITY, EPSILON_0, INTERFACE_TOLERANCE, SHELL_INNER_PERMITTIVITY,
    SHELL_OUTER_PERMITTIVITY,
};
use dielectric_mesher::Assignment;
use dielectric_poisson::{ChargeDensity, Permittivity};

/// The relative permittivity profile
#[derive(Copy, Clone, Debug)]
pub struct DielectricProfile {
    interface_radius: f64,
    outer_radius: f64,
    trivial: bool,
}

impl DielectricProfile {
    /// The profile of a core of radius `interface_radius` in a shell reaching `outer_radius`
    pub fn new(interface_radius: f64, outer_radius: f64, trivial: bool) -> Self {
        Self {
            interface_radius,
            outer_radius,
            trivial,
        }
    }

    fn is_core(&self, radius: f64, side: Assignment) -> bool {
        let tolerance = INTERFACE_TOLERANCE * self.interface_radius;
        radius <= self.interface_radius - tolerance
            || ((radius - self.interface_radius).abs() <= tolerance && side.is_core())
    }
}

impl Permittivity<f64> for DielectricProfile {
    /// Unity in the core, falling linearly across the shell from 8 at the interface to 2 at the
    /// outer radius
    fn relative_permittivity(&self, radius: f64, side: Assignment) -> f64 {
        if self.trivial || self.is_core(radius, side) {
            CORE_PERMITTIVITY
        } else {
            SHELL_INNER_PERMITTIVITY
                - (SHELL_INNER_PERMITTIVITY - SHELL_OUTER_PERMITTIVITY)
                    * (radius - self.interface_radius)
                    / (self.outer_radius - self.interface_radius)
        }
    }
}

/// The free charge density divided by the vacuum permittivity
#[derive(Copy, Clone, Debug)]
pub struct SpaceCharge {
    interface_radius: f64,
    amplitude: f64,
    trivial: bool,
}

impl SpaceCharge {
    /// A parabolic density peaking at `amplitude` on the axis
    pub fn new(interface_radius: f64, amplitude: f64, trivial: bool) -> Self {
        Self {
            interface_radius,
            amplitude,
            trivial,
        }
    }

    /// The charge per unit length enclosed within `radius`, divided by `2 pi epsilon_0`
    pub fn enclosed(&self, radius: f64) -> f64 {
        if self.trivial {
            return radius.powi(2) / 2.;
        }
        let r = radius.min(self.interface_radius);
        self.amplitude * (r.powi(2) / 2. - r.powi(4) / (4. * self.interface_radius.powi(2)))
    }

    /// The charge per unit length enclosed within `radius` in C / m
    pub fn charge_per_unit_length(&self, radius: f64) -> f64 {
        2. * std::f64::consts::PI * EPSILON_0 * self.enclosed(radius)
    }
}

impl ChargeDensity<f64> for SpaceCharge {
    /// A parabolic profile peaking on the axis and vanishing at the interface, zero in the shell
    fn charge_density(&self, radius: f64) -> f64 {
        if self.trivial {
            1.
        } else if radius > self.interface_radius {
            0.
        } else {
            self.amplitude * (1. - (radius / self.interface_radius).powi(2))
        }
    }
}

impl From<&Configuration> for DielectricProfile {
    fn from(configuration: &Configuration) -> Self {
        Self::new(
            configuration.geometry.interface_radius,
            configuration.geometry.outer_radius,
            configuration.trivial,
        )
    }
}

impl From<&Configuration> for SpaceCharge {
    fn from(configuration: &Configuration) -> Self {
        Self::new(
            configuration.geometry.interface_radius,
            configuration.charge.amplitude,
            configuration.trivial,
        )
    }
}
