use once_cell::sync::Lazy;
use regex::Regex;
use std::io::BufRead;
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Column names of the cluster catalog, in file order.
pub const COLUMNS: [&str; 10] = [
    "m", "redshift", "sigma", "ip", "x", "y", "z", "vx", "vy", "vz",
];

/// Lines that are blank or whose first non-whitespace character is `#`.
static SKIP_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*(#|$)").unwrap());

/// One row of the Deep Wedge cluster catalog.
///
/// `m` is the member particle count, `sigma` the velocity dispersion and
/// `ip` the parent-halo flag; positions and velocities are comoving.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterRecord {
    pub m: i64,
    pub redshift: f64,
    pub sigma: f64,
    pub ip: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub vx: f64,
    pub vy: f64,
    pub vz: f64,
}

impl ClusterRecord {
    /// Render the record as output fields, column order matching [`COLUMNS`].
    ///
    /// Floats use `{:?}` so whole values keep their decimal point (`10.0`
    /// stays `10.0`), which keeps reruns over the same archive
    /// byte-identical.
    pub fn fields(&self) -> [String; 10] {
        [
            self.m.to_string(),
            format!("{:?}", self.redshift),
            format!("{:?}", self.sigma),
            self.ip.to_string(),
            format!("{:?}", self.x),
            format!("{:?}", self.y),
            format!("{:?}", self.z),
            format!("{:?}", self.vx),
            format!("{:?}", self.vy),
            format!("{:?}", self.vz),
        ]
    }
}

/// Parse one raw catalog line.
///
/// Returns `Ok(None)` for comment/blank lines. Every other line must split
/// into exactly 10 whitespace-separated numeric tokens; anything else is
/// fatal, naming the offending line.
pub fn parse_line(line: &str, lineno: usize) -> Result<Option<ClusterRecord>> {
    if SKIP_LINE.is_match(line) {
        return Ok(None);
    }

    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() != COLUMNS.len() {
        return Err(PipelineError::RecordShape {
            lineno,
            found: tokens.len(),
            line: line.to_string(),
        });
    }

    let int = |idx: usize| -> Result<i64> {
        tokens[idx]
            .parse()
            .map_err(|_| PipelineError::TypeCoercion {
                lineno,
                column: COLUMNS[idx],
                token: tokens[idx].to_string(),
            })
    };
    let float = |idx: usize| -> Result<f64> {
        tokens[idx]
            .parse()
            .map_err(|_| PipelineError::TypeCoercion {
                lineno,
                column: COLUMNS[idx],
                token: tokens[idx].to_string(),
            })
    };

    Ok(Some(ClusterRecord {
        m: int(0)?,
        redshift: float(1)?,
        sigma: float(2)?,
        ip: int(3)?,
        x: float(4)?,
        y: float(5)?,
        z: float(6)?,
        vx: float(7)?,
        vy: float(8)?,
        vz: float(9)?,
    }))
}

/// Parse the whole catalog file, preserving record order.
pub fn parse_catalog<R: BufRead>(reader: R) -> Result<Vec<ClusterRecord>> {
    let mut records = Vec::new();
    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(record) = parse_line(&line, idx + 1)? {
            records.push(record);
        }
    }
    debug!(records = records.len(), "catalog parsed");
    Ok(records)
}
