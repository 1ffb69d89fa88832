//! Line-oriented diagnostic logs. Meant for people and plotting scripts,
//! not for byte-exact parsing.

use std::io::Write;

use crate::diag::excess::ExcessReport;
use crate::diag::footpoint::FootPointRecord;
use crate::error::GeoError;
use crate::geom::{Lpa, Xyz};

/// Angle in degrees, fixed width.
pub fn fixed_angular(rad: f64) -> String {
    format!("{:+14.9}", rad.to_degrees())
}

/// Length with micro-unit resolution, fixed width.
pub fn fixed_linear(len: f64) -> String {
    format!("{len:+17.6}")
}

/// Full precision scientific notation.
pub fn all_digits(val: f64) -> String {
    format!("{val:+.15e}")
}

fn lpa_fields(lpa: &Lpa) -> String {
    format!(
        "lon: {} par: {} alt: {}",
        fixed_angular(lpa.lon),
        fixed_angular(lpa.par),
        fixed_linear(lpa.alt)
    )
}

fn xyz_fields(xyz: &Xyz) -> String {
    format!(
        "{} {} {}",
        all_digits(xyz[0]),
        all_digits(xyz[1]),
        all_digits(xyz[2])
    )
}

/// One line per sample point.
pub fn write_excess_records<W: Write>(out: &mut W, report: &ExcessReport) -> Result<(), GeoError> {
    for rec in &report.records {
        writeln!(
            out,
            "par: {} alt: {} excess: {} grad_eps: {} d_eta_per_r: {}",
            fixed_angular(rec.x_lpa.par),
            all_digits(rec.x_lpa.alt),
            fixed_linear(rec.excess),
            all_digits(rec.grad_eps),
            all_digits(rec.d_eta_per_r()),
        )?;
    }
    Ok(())
}

/// Comment lines with the excess extent; nothing for an empty report.
pub fn write_excess_summary<W: Write>(out: &mut W, report: &ExcessReport) -> Result<(), GeoError> {
    if let Some((min_excess, max_excess)) = report.extent() {
        writeln!(out, "# min_excess: {}", fixed_linear(min_excess))?;
        writeln!(out, "# max_excess: {}", fixed_linear(max_excess))?;
    }
    Ok(())
}

/// One line per sample point: where it is, and how far the solver missed.
pub fn write_foot_point_records<W: Write>(
    out: &mut W,
    records: &[FootPointRecord],
) -> Result<(), GeoError> {
    for rec in records {
        writeln!(
            out,
            "{} p_dif: {} p_mag_dif: {}",
            lpa_fields(&rec.x_lpa),
            xyz_fields(&rec.p_dif()),
            all_digits(rec.p_mag_dif()),
        )?;
    }
    Ok(())
}
