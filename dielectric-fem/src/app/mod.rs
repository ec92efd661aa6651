// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! This module governs the high-level implementation of the simulation
mod calculations;
mod configuration;
mod error;
mod styles;
mod telemetry;

pub use calculations::{solve, write_outputs, Solution};
pub use configuration::{
    ChargeConfiguration, Configuration, ConfigurationError, GeometryConfiguration,
    MeshConfiguration,
};
pub use error::DielectricError;

use clap::{ArgEnum, Parser};
use owo_colors::OwoColorize;
use std::path::PathBuf;
use styles::Styles;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct App {
    /// The configuration file
    #[clap(default_value = "configuration.toml")]
    file_path: PathBuf,
    /// Parameter overrides of the form `key=value`, for example `mesh.core_elements=200`
    overrides: Vec<String>,
    #[clap(arg_enum, short, long, default_value = "info")]
    log_level: LogLevel,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, ArgEnum)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        };
        write!(f, "{level}")
    }
}

/// Reads the configuration, runs the calculation and writes the result tables
pub fn run() -> color_eyre::Result<()> {
    let cli = App::parse();

    let configuration = Configuration::build(&cli.file_path, &cli.overrides)?;
    let directory = configuration.output_directory();
    std::fs::create_dir_all(&directory)?;

    let (subscriber, _guard) = telemetry::get_subscriber(cli.log_level, &directory);
    telemetry::init_subscriber(subscriber)?;
    tracing::info!("Read configuration from {}", cli.file_path.display());
    tracing::debug!("{:?}", configuration);

    let solution = solve(&configuration)?;
    write_outputs(&configuration, &solution)?;

    print_summary(&configuration, &solution)?;
    Ok(())
}

fn print_summary(configuration: &Configuration, solution: &Solution) -> std::io::Result<()> {
    let styles = Styles::for_stdout();
    let term = console::Term::stdout();
    let geometry = &configuration.geometry;
    let potential = &solution.potential;
    let charge = crate::device::SpaceCharge::from(configuration);

    term.write_line(&format!("{}", "Dielectric".style(styles.heading_style)))?;
    let rows = [
        ("interface radius", format!("{:e}", geometry.interface_radius)),
        ("outer radius", format!("{:e}", geometry.outer_radius)),
        ("nodes", format!("{}", potential.len())),
        ("axis potential", format!("{:.6e}", potential[0])),
        (
            "core charge (C / m)",
            format!("{:.6e}", charge.charge_per_unit_length(geometry.interface_radius)),
        ),
        (
            "outer flux / enclosed charge",
            format!(
                "{:.6e} / {:.6e}",
                solution.gauss_law.outer_flux, solution.gauss_law.enclosed_charge
            ),
        ),
    ];
    for (label, value) in rows.iter() {
        term.write_line(&format!(
            "  {:<30}{}",
            label.style(styles.label_style),
            value.style(styles.value_style)
        ))?;
    }
    if configuration.trivial {
        term.write_line(&format!(
            "  {}",
            "trivial profiles, unit permittivity and charge".style(styles.warning_style)
        ))?;
    }
    Ok(())
}
