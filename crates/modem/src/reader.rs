//! ModEM data file reader.

use std::iter::Peekable;
use std::path::Path;

use num_complex::Complex64;
use tracing::{debug, info, warn};

use crate::component::Component;
use crate::data::{BlockHeader, ModemData};
use crate::error::ModemError;
use crate::station::Location;

/// Number of whitespace-separated fields on a data row.
const ROW_FIELDS: usize = 11;

/// Read a ModEM data file from disk.
///
/// # Errors
///
/// Returns [`ModemError::FileNotFound`] if `path` does not exist,
/// [`ModemError::Io`] if it cannot be read, and any error from
/// [`parse_modem`].
pub fn read_modem(path: &Path) -> Result<ModemData, ModemError> {
    if !path.exists() {
        return Err(ModemError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let text = std::fs::read_to_string(path).map_err(|e| ModemError::Io {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let data = parse_modem(&text)?;
    info!(
        path = %path.display(),
        n_periods = data.n_periods(),
        n_stations = data.n_stations(),
        n_blocks = data.blocks().len(),
        "read ModEM data"
    );
    Ok(data)
}

/// Parse the text of a ModEM data file.
///
/// Each block starts with one or two `#` lines (description, column header)
/// followed by six `>` lines, then data rows of eleven fields. Blank lines
/// are skipped. Declared period/station counts that disagree with the rows
/// are reported as warnings.
///
/// # Errors
///
/// Returns [`ModemError::MissingHeader`] for rows before any header or for
/// incomplete headers, [`ModemError::Parse`] for malformed lines, and
/// [`ModemError::DuplicateComponent`] for repeated measurements.
pub fn parse_modem(text: &str) -> Result<ModemData, ModemError> {
    let mut data = ModemData::new();
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty())
        .peekable();

    let mut current: Option<usize> = None;
    while let Some(&(line_no, line)) = lines.peek() {
        if line.starts_with('#') {
            let header = parse_header(&mut lines)?;
            debug!(data_type = %header.data_type, line = line_no, "block header");
            current = Some(data.push_block(header));
            continue;
        }
        lines.next();

        let Some(block) = current else {
            return Err(ModemError::MissingHeader {
                line: line_no,
                reason: "data row before any block header".to_string(),
            });
        };
        let row = parse_row(line, line_no)?;
        data.insert(
            block,
            row.period,
            row.code,
            row.location,
            row.component,
            Component::new(row.value, row.error, block),
        )?;
    }

    for (idx, header) in data.blocks().iter().enumerate() {
        let (n_periods, n_stations) = data.block_extent(idx);
        if n_periods != header.declared_periods || n_stations != header.declared_stations {
            warn!(
                data_type = %header.data_type,
                declared_periods = header.declared_periods,
                declared_stations = header.declared_stations,
                n_periods,
                n_stations,
                "declared block size does not match data rows"
            );
        }
    }

    Ok(data)
}

/// One parsed data row, borrowing string fields from the line.
struct Row<'a> {
    period: f64,
    code: &'a str,
    location: Location,
    component: &'a str,
    value: Complex64,
    error: f64,
}

fn parse_row(line: &str, line_no: usize) -> Result<Row<'_>, ModemError> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() != ROW_FIELDS {
        return Err(ModemError::Parse {
            line: line_no,
            reason: format!("expected {ROW_FIELDS} fields, got {}", fields.len()),
        });
    }
    let num = |idx: usize, what: &str| parse_number(fields[idx], what, line_no);

    Ok(Row {
        period: num(0, "period")?,
        code: fields[1],
        location: Location {
            latitude: num(2, "latitude")?,
            longitude: num(3, "longitude")?,
            x: num(4, "x")?,
            y: num(5, "y")?,
            z: num(6, "z")?,
        },
        component: fields[7],
        value: Complex64::new(num(8, "real part")?, num(9, "imaginary part")?),
        error: num(10, "error")?,
    })
}

fn parse_header<'a, I>(lines: &mut Peekable<I>) -> Result<BlockHeader, ModemError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    let mut comments = Vec::with_capacity(2);
    while comments.len() < 2 {
        match lines.peek() {
            Some(&(_, line)) if line.starts_with('#') => {
                comments.push(line.trim_start_matches('#').trim().to_string());
                lines.next();
            }
            _ => break,
        }
    }

    let mut header = BlockHeader::new(String::new());
    let mut comments = comments.into_iter();
    header.description = comments.next().unwrap_or_default();
    if let Some(columns) = comments.next() {
        header.columns = columns;
    }

    let mut info_lines = Vec::with_capacity(6);
    let mut last_line = 0;
    while info_lines.len() < 6 {
        match lines.peek() {
            Some(&(line_no, line)) if line.starts_with('>') => {
                info_lines.push((line_no, line.trim_start_matches('>').trim()));
                last_line = line_no;
                lines.next();
            }
            Some(&(line_no, _)) => {
                return Err(ModemError::MissingHeader {
                    line: line_no,
                    reason: format!("expected 6 '>' lines, found {}", info_lines.len()),
                });
            }
            None => {
                return Err(ModemError::MissingHeader {
                    line: last_line + 1,
                    reason: format!("file ended after {} of 6 '>' lines", info_lines.len()),
                });
            }
        }
    }

    header.data_type = info_lines[0].1.to_string();
    header.sign_convention = info_lines[1].1.to_string();
    header.units = info_lines[2].1.to_string();

    let (line_no, orientation) = info_lines[3];
    header.orientation = parse_number(orientation, "orientation", line_no)?;

    let (line_no, origin) = info_lines[4];
    header.origin = origin
        .split_whitespace()
        .map(|tok| parse_number(tok, "origin", line_no))
        .collect::<Result<Vec<_>, _>>()?;
    if !(2..=3).contains(&header.origin.len()) {
        return Err(ModemError::Parse {
            line: line_no,
            reason: format!("origin needs 2 or 3 values, got {}", header.origin.len()),
        });
    }

    let (line_no, counts) = info_lines[5];
    let counts: Vec<&str> = counts.split_whitespace().collect();
    if counts.len() != 2 {
        return Err(ModemError::Parse {
            line: line_no,
            reason: format!("expected period and station counts, got {} values", counts.len()),
        });
    }
    header.declared_periods = parse_count(counts[0], line_no)?;
    header.declared_stations = parse_count(counts[1], line_no)?;

    Ok(header)
}

/// Parses a floating-point field, accepting Fortran `D` exponents.
fn parse_number(token: &str, what: &str, line_no: usize) -> Result<f64, ModemError> {
    let normalized = token.replace(['D', 'd'], "E");
    normalized.parse::<f64>().map_err(|_| ModemError::Parse {
        line: line_no,
        reason: format!("invalid {what}: {token:?}"),
    })
}

fn parse_count(token: &str, line_no: usize) -> Result<usize, ModemError> {
    token.parse::<usize>().map_err(|_| ModemError::Parse {
        line: line_no,
        reason: format!("invalid count: {token:?}"),
    })
}
