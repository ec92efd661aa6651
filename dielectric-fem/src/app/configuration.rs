// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

use config::{Config, Environment, File};
use miette::Diagnostic;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Failures while reading or validating a `Configuration`
#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum ConfigurationError {
    /// A source could not be read or deserialised
    #[error(transparent)]
    #[diagnostic(code(dielectric::configuration::read))]
    Read(#[from] config::ConfigError),
    /// A command line override without an `=`
    #[error("override `{0}` is not of the form `key=value`")]
    #[diagnostic(help("pass overrides such as `mesh.core_elements=200`"))]
    Override(String),
    /// Values the mesher or solver cannot accept
    #[error("invalid configuration: {0}")]
    #[diagnostic(code(dielectric::configuration::invalid))]
    Invalid(String),
}

/// The full parameter set of a calculation. Immutable once loaded.
#[derive(Clone, Debug, Deserialize)]
pub struct Configuration {
    /// Prefix of the output tables, may include a directory
    pub output: String,
    /// Replaces both material profiles with unit constants
    #[serde(default)]
    pub trivial: bool,
    /// Radii and boundary potential
    pub geometry: GeometryConfiguration,
    /// Free charge in the core
    pub charge: ChargeConfiguration,
    /// Discretisation
    pub mesh: MeshConfiguration,
}

/// The `[geometry]` table
#[derive(Clone, Debug, Deserialize)]
pub struct GeometryConfiguration {
    /// Radius of the core, `b`
    pub interface_radius: f64,
    /// Outer radius of the shell, `R`
    pub outer_radius: f64,
    /// Potential held at the outer radius, `V0`
    pub boundary_potential: f64,
}

/// The `[charge]` table
#[derive(Clone, Debug, Deserialize)]
pub struct ChargeConfiguration {
    /// Peak normalised charge density on the axis, `a0`
    pub amplitude: f64,
}

/// The `[mesh]` table
#[derive(Clone, Debug, Deserialize)]
pub struct MeshConfiguration {
    /// Number of elements in the core, `N1`
    pub core_elements: usize,
    /// Number of elements in the shell, `N2`
    pub shell_elements: usize,
    /// Weight of the vertex rule against the midpoint rule, `p`
    pub quadrature_mixing: f64,
}

impl Configuration {
    /// Reads the configuration at `path`, layered over the repository defaults and under any
    /// `DIELECTRIC__` environment variables and command line `key=value` overrides
    pub fn build(path: &Path, overrides: &[String]) -> Result<Self, ConfigurationError> {
        let mut builder = Config::builder()
            // The default settings for the simulation, optional
            .add_source(File::with_name(".config/default").required(false))
            .add_source(File::from(path))
            .add_source(Environment::with_prefix("DIELECTRIC").separator("__"));

        for item in overrides {
            let (key, value) = item
                .split_once('=')
                .ok_or_else(|| ConfigurationError::Override(item.clone()))?;
            builder = builder.set_override(key.trim(), value.trim())?;
        }

        let configuration: Self = builder.build()?.try_deserialize()?;
        configuration.validate()?;
        Ok(configuration)
    }

    /// Checks the preconditions the mesher and solver rely on
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        let geometry = &self.geometry;
        let values = [
            ("geometry.interface_radius", geometry.interface_radius),
            ("geometry.outer_radius", geometry.outer_radius),
            ("geometry.boundary_potential", geometry.boundary_potential),
            ("charge.amplitude", self.charge.amplitude),
            ("mesh.quadrature_mixing", self.mesh.quadrature_mixing),
        ];
        if let Some((key, value)) = values.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigurationError::Invalid(format!(
                "{key} must be finite, found {value}"
            )));
        }
        if self.mesh.core_elements == 0 || self.mesh.shell_elements == 0 {
            return Err(ConfigurationError::Invalid(format!(
                "both regions need at least one element, found {} in the core and {} in the shell",
                self.mesh.core_elements, self.mesh.shell_elements
            )));
        }
        if !(geometry.interface_radius > 0. && geometry.interface_radius < geometry.outer_radius) {
            return Err(ConfigurationError::Invalid(format!(
                "radii must satisfy 0 < interface_radius < outer_radius, found {} and {}",
                geometry.interface_radius, geometry.outer_radius
            )));
        }
        if !(0. ..=1.).contains(&self.mesh.quadrature_mixing) {
            return Err(ConfigurationError::Invalid(format!(
                "quadrature_mixing must lie in [0, 1], found {}",
                self.mesh.quadrature_mixing
            )));
        }
        Ok(())
    }

    /// The file the potential table is written to
    pub fn potential_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_phi.out", self.output))
    }

    /// The file the field table is written to
    pub fn field_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_Er_Dr.out", self.output))
    }

    /// The file the divergence table is written to
    pub fn divergence_path(&self) -> PathBuf {
        PathBuf::from(format!("{}_rholib_divEr_divDr.out", self.output))
    }

    /// The directory holding the outputs, and the run log
    pub fn output_directory(&self) -> PathBuf {
        match self.potential_path().parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Configuration, ConfigurationError};
    use std::io::Write;
    use std::path::PathBuf;

    const VALID: &str = r#"
output = "results/run"

[geometry]
interface_radius = 0.03
outer_radius = 0.1
boundary_potential = 0.0

[charge]
amplitude = 1.0

[mesh]
core_elements = 50
shell_elements = 40
quadrature_mixing = 0.5
"#;

    fn write_configuration(name: &str, contents: &str) -> PathBuf {
        let directory = std::env::temp_dir().join(format!(
            "dielectric-configuration-{}-{}",
            std::process::id(),
            name
        ));
        std::fs::create_dir_all(&directory).unwrap();
        let path = directory.join("configuration.toml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn valid_file_is_read() {
        let path = write_configuration("valid", VALID);
        let configuration = Configuration::build(&path, &[]).unwrap();
        assert!(!configuration.trivial);
        assert_eq!(configuration.mesh.core_elements, 50);
        assert_eq!(configuration.mesh.shell_elements, 40);
        assert_eq!(configuration.geometry.outer_radius, 0.1);
        assert_eq!(configuration.potential_path(), PathBuf::from("results/run_phi.out"));
        assert_eq!(configuration.output_directory(), PathBuf::from("results"));
    }

    #[test]
    fn command_line_overrides_replace_file_values() {
        let path = write_configuration("overrides", VALID);
        let overrides = vec![
            "mesh.core_elements=7".to_string(),
            "trivial = true".to_string(),
            "geometry.boundary_potential=2.5".to_string(),
        ];
        let configuration = Configuration::build(&path, &overrides).unwrap();
        assert_eq!(configuration.mesh.core_elements, 7);
        assert!(configuration.trivial);
        assert_eq!(configuration.geometry.boundary_potential, 2.5);
    }

    #[test]
    fn malformed_override_is_rejected() {
        let path = write_configuration("malformed", VALID);
        let result = Configuration::build(&path, &["mesh.core_elements".to_string()]);
        assert!(matches!(result, Err(ConfigurationError::Override(_))));
    }

    #[test]
    fn interface_outside_the_shell_is_rejected() {
        let path = write_configuration("radii", VALID);
        let result = Configuration::build(&path, &["geometry.interface_radius=0.2".to_string()]);
        assert!(matches!(result, Err(ConfigurationError::Invalid(_))));
    }

    #[test]
    fn empty_region_is_rejected() {
        let path = write_configuration("empty", VALID);
        let result = Configuration::build(&path, &["mesh.shell_elements=0".to_string()]);
        assert!(matches!(result, Err(ConfigurationError::Invalid(_))));
    }

    #[test]
    fn mixing_outside_the_unit_interval_is_rejected() {
        let path = write_configuration("mixing", VALID);
        let result = Configuration::build(&path, &["mesh.quadrature_mixing=1.5".to_string()]);
        assert!(matches!(result, Err(ConfigurationError::Invalid(_))));
    }
}
