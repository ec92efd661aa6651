// Copyright 2022 Chris Gubbin
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://apache.org/licenses/LICENSE-2.0> or the MIT license <LICENSE-MIT or
// http://opensource.org/licenses/MIT>, at your option. This file may not be
// copied, modified, or distributed except according to those terms.

//! Plain text tables, one row per sample and whitespace separated columns, each value printed
//! in scientific notation with fifteen significant digits.

use super::{Divergence, Fields};
use crate::error::IOError;
use dielectric_poisson::ChargeDensity;
use nalgebra::DVector;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_columns(path: &Path, columns: &[&[f64]]) -> Result<(), IOError> {
    let wrap = |source| IOError::Write {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }
    let mut writer = BufWriter::new(File::create(path).map_err(wrap)?);

    let rows = columns.iter().map(|column| column.len()).min().unwrap_or(0);
    for row in 0..rows {
        let line = columns
            .iter()
            .map(|column| format!("{:.14e}", column[row]))
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}", line).map_err(wrap)?;
    }
    writer.flush().map_err(wrap)?;
    tracing::debug!("Wrote {} rows to {}", rows, path.display());
    Ok(())
}

/// Writes `r phi` for every mesh node
pub(crate) fn write_potential(
    path: &Path,
    radii: &DVector<f64>,
    potential: &DVector<f64>,
) -> Result<(), IOError> {
    write_columns(path, &[radii.as_slice(), potential.as_slice()])
}

/// Writes `r_mid E_r D_r / epsilon_0` for every element
pub(crate) fn write_fields(path: &Path, fields: &Fields<f64>) -> Result<(), IOError> {
    write_columns(
        path,
        &[
            fields.midpoints.as_slice(),
            fields.electric.as_slice(),
            fields.displacement.as_slice(),
        ],
    )
}

/// Writes `r_midmid rho / epsilon_0 div(E_r) div(D_r) / epsilon_0` for every pair of elements
pub(crate) fn write_divergence<Source: ChargeDensity<f64>>(
    path: &Path,
    divergence: &Divergence<f64>,
    charge: &Source,
) -> Result<(), IOError> {
    let density = divergence.midpoints.map(|radius| charge.charge_density(radius));
    write_columns(
        path,
        &[
            divergence.midpoints.as_slice(),
            density.as_slice(),
            divergence.electric.as_slice(),
            divergence.displacement.as_slice(),
        ],
    )
}

#[cfg(test)]
mod test {
    use super::write_potential;
    use nalgebra::DVector;

    #[test]
    fn potential_table_has_one_row_per_node() {
        let directory = std::env::temp_dir().join("dielectric-fem-writer-test");
        let path = directory.join("nested").join("table_phi.out");
        let radii = DVector::from_vec(vec![0., 0.5, 1.]);
        let potential = DVector::from_vec(vec![1.25, 1. / 3., 0.]);
        write_potential(&path, &radii, &potential).unwrap();

        let contents = std::fs::read_to_string(&path).unwrap();
        let lines = contents.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "0.00000000000000e0 1.25000000000000e0");
        let parsed = lines[1]
            .split_whitespace()
            .map(|value| value.parse::<f64>().unwrap())
            .collect::<Vec<_>>();
        assert_eq!(parsed.len(), 2);
        approx::assert_relative_eq!(parsed[1], 1. / 3., max_relative = 1e-14);

        std::fs::remove_dir_all(&directory).unwrap();
    }
}
