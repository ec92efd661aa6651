// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use miette::Diagnostic;

#[derive(thiserror::Error, Debug, Diagnostic)]
/// Error for tridiagonal systems whose bands do not fit together
pub enum SystemError {
    #[error("a tridiagonal system needs at least one unknown")]
    Empty,
    #[error("the {band} band has length {found}, expected {expected}")]
    BandLength {
        band: &'static str,
        found: usize,
        expected: usize,
    },
}

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum BuildError {
    #[error(transparent)]
    System(#[from] SystemError),
    #[error("{0}")]
    Mesh(String),
}
