//! TSPLIB coordinate files.
//!
//! Only the node lines matter: a line whose first token is a node number
//! (a run of ASCII digits) is followed by its x and y coordinates.
//! Everything else (`NAME:`, `DIMENSION:`, `NODE_COORD_SECTION`, `EOF`,
//! blank lines) is skipped.
//!
//! ```text
//! NAME: square
//! TYPE: TSP
//! DIMENSION: 4
//! EDGE_WEIGHT_TYPE: EUC_2D
//! NODE_COORD_SECTION
//! 1 0.0 0.0
//! 2 0.0 1.0
//! 3 1.0 1.0
//! 4 1.0 0.0
//! EOF
//! ```

use std::path::Path;

use tracing::debug;

use crate::error::{Result, TspError};
use crate::models::Point;

/// Reads the points of a TSPLIB-style file, in file order.
///
/// # Errors
///
/// Returns [`TspError::Io`] if the file cannot be read and
/// [`TspError::Parse`] if a node line is malformed.
pub fn load_points(path: impl AsRef<Path>) -> Result<Vec<Point>> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let points = parse_points(&contents)?;
    debug!(path = %path.display(), points = points.len(), "loaded instance");
    Ok(points)
}

/// Parses the points of TSPLIB-style text, in order of appearance.
///
/// # Errors
///
/// Returns [`TspError::Parse`] if a node line lacks a coordinate or a
/// coordinate is not a finite number.
///
/// # Examples
///
/// ```
/// use u_tsp::instance::parse_points;
///
/// let text = "NAME: tiny\nNODE_COORD_SECTION\n1 3.5 4\n2 -1e2 0\nEOF\n";
/// let points = parse_points(text).unwrap();
/// assert_eq!(points.len(), 2);
/// assert_eq!(points[0].x(), 3.5);
/// assert_eq!(points[1].x(), -100.0);
///
/// assert!(parse_points("1 abc 2.0").is_err());
/// ```
pub fn parse_points(text: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let mut parts = line.split_whitespace();
        let Some(first) = parts.next() else {
            continue;
        };
        if !is_node_id(first) {
            continue;
        }

        let x = parse_coordinate(parts.next(), "x", line_no)?;
        let y = parse_coordinate(parts.next(), "y", line_no)?;
        points.push(Point::new(x, y));
    }

    Ok(points)
}

fn is_node_id(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

fn parse_coordinate(token: Option<&str>, axis: &str, line: usize) -> Result<f64> {
    let token = token.ok_or_else(|| TspError::Parse {
        line,
        message: format!("missing {axis} coordinate"),
    })?;
    let value: f64 = token.parse().map_err(|_| TspError::Parse {
        line,
        message: format!("invalid {axis} coordinate '{token}'"),
    })?;
    if !value.is_finite() {
        return Err(TspError::Parse {
            line,
            message: format!("non-finite {axis} coordinate '{token}'"),
        });
    }
    Ok(value)
}
