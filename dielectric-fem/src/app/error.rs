// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! # Error
//! The error type for the binary

use miette::Diagnostic;

/// Any failure of a calculation run from a `Configuration`
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum DielectricError {
    /// Writing a result table failed
    #[error(transparent)]
    #[diagnostic(code(dielectric::io_error))]
    IoError(#[from] crate::error::IOError),
    /// The configuration could not be loaded
    #[error(transparent)]
    Configuration(#[from] super::configuration::ConfigurationError),
    /// The Poisson problem could not be set up
    #[error(transparent)]
    Build(#[from] dielectric_poisson::BuildError),
    /// The fields could not be derived from the potential
    #[error(transparent)]
    PostProcessor(#[from] crate::postprocessor::PostProcessorError),
}
