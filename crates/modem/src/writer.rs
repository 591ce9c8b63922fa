//! ModEM data file writer.

use std::path::Path;

use tracing::info;

use crate::data::{BlockHeader, ModemData};
use crate::error::ModemError;
use crate::station::Station;

/// Write a dataset to `path` in ModEM format.
///
/// The file is formatted in memory first and written in one call, so a
/// formatting problem never leaves a partial file behind.
///
/// # Errors
///
/// Returns [`ModemError::Io`] if the file cannot be written.
pub fn write_modem(path: &Path, data: &ModemData, comment: &str) -> Result<(), ModemError> {
    let text = format_modem(data, comment);
    std::fs::write(path, text).map_err(|e| ModemError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    info!(
        path = %path.display(),
        n_periods = data.n_periods(),
        n_stations = data.n_stations(),
        "wrote ModEM data"
    );
    Ok(())
}

/// Format a dataset as ModEM text.
///
/// `comment` replaces every block's description line; a leading `#` is added
/// if missing and line breaks are folded into spaces. Period and station
/// counts are recomputed from the rows written. Rows are ordered by period,
/// then station code, then the block's component order.
pub fn format_modem(data: &ModemData, comment: &str) -> String {
    let comment = comment_line(comment);
    let mut out = String::new();

    for (idx, header) in data.blocks().iter().enumerate() {
        let (n_periods, n_stations) = data.block_extent(idx);
        push_header(&mut out, header, &comment, n_periods, n_stations);

        for &period in data.periods() {
            for station in data.stations().values() {
                push_rows(&mut out, header, idx, period, station);
            }
        }
    }
    out
}

fn comment_line(comment: &str) -> String {
    let folded = comment.split(['\n', '\r']).collect::<Vec<_>>().join(" ");
    let folded = folded.trim();
    if folded.starts_with('#') {
        folded.to_string()
    } else {
        format!("# {folded}")
    }
}

fn push_header(
    out: &mut String,
    header: &BlockHeader,
    comment: &str,
    n_periods: usize,
    n_stations: usize,
) {
    let origin = header
        .origin
        .iter()
        .map(|&v| format_fixed(v, 3))
        .collect::<Vec<_>>()
        .join(" ");

    out.push_str(comment);
    out.push('\n');
    out.push_str(&format!("# {}\n", header.columns));
    out.push_str(&format!("> {}\n", header.data_type));
    out.push_str(&format!("> {}\n", header.sign_convention));
    out.push_str(&format!("> {}\n", header.units));
    out.push_str(&format!("> {}\n", format_fixed(header.orientation, 2)));
    out.push_str(&format!("> {origin}\n"));
    out.push_str(&format!("> {n_periods} {n_stations}\n"));
}

fn push_rows(out: &mut String, header: &BlockHeader, block: usize, period: f64, station: &Station) {
    let loc = station.location();
    for name in &header.components {
        let Ok(c) = station.get_component(period, name) else {
            continue;
        };
        if c.block() != block {
            continue;
        }
        out.push_str(&format!(
            "{} {} {:>8} {:>8} {:>12} {:>12} {:>12} {} {:>14} {:>14} {:>14}\n",
            format_sci(period),
            station.code(),
            format_fixed(loc.latitude, 3),
            format_fixed(loc.longitude, 3),
            format_fixed(loc.x, 3),
            format_fixed(loc.y, 3),
            format_fixed(loc.z, 3),
            name,
            format_sci(c.real()),
            format_sci(c.imag()),
            format_sci(c.error()),
        ));
    }
}

/// Formats `value` in Fortran-style scientific notation with a signed,
/// two-digit exponent (`1.000000E-02`).
///
/// The mantissa carries the shortest digits that parse back to `value`,
/// padded to at least six fractional digits.
fn format_sci(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let raw = format!("{value:E}");
    let Some((mantissa, exp)) = raw.split_once('E') else {
        return raw;
    };
    match exp.parse::<i32>() {
        Ok(e) => {
            let sign = if e < 0 { '-' } else { '+' };
            format!("{}E{sign}{:02}", pad_fraction(mantissa, 6), e.abs())
        }
        Err(_) => raw,
    }
}

/// Formats `value` in fixed notation with the shortest digits that parse
/// back to `value`, padded to at least `min_decimals` fractional digits.
fn format_fixed(value: f64, min_decimals: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    pad_fraction(&value.to_string(), min_decimals)
}

fn pad_fraction(digits: &str, min_decimals: usize) -> String {
    let (int_part, frac) = digits.split_once('.').unwrap_or((digits, ""));
    if frac.len() >= min_decimals {
        return format!("{int_part}.{frac}");
    }
    format!("{int_part}.{frac:0<min_decimals$}")
}
