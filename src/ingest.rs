//! Parses the points and queries input files described in the external interface: whitespace-
//! separated text, one record per line. This is adapter territory, not core — the geometry
//! kernel and the index itself never touch I/O.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::geometry::{check_latitude, check_longitude, BBox, LonLat};
use crate::point::Point;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed line {line} in points file: {reason}\n  {text}")]
    MalformedPoint {
        line: usize,
        text: String,
        reason: String,
    },
}

#[derive(Debug)]
enum LineReason {
    WrongFieldCount(usize),
    NotANumber(&'static str),
    OutOfRange(&'static str),
}

impl fmt::Display for LineReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineReason::WrongFieldCount(n) => write!(f, "expected 3 fields, got {n}"),
            LineReason::NotANumber(field) => write!(f, "field {field:?} is not a number"),
            LineReason::OutOfRange(field) => write!(f, "field {field:?} is out of range"),
        }
    }
}

/// Parses the points file: one `id latitude longitude` record per line (note the file order is
/// `lat, lon`; [`Point`] stores `(lon, lat)`). Any malformed or out-of-range line aborts the
/// whole ingestion, per the points file being a fatal-on-error input.
pub fn read_points<P: AsRef<Path>>(path: P) -> Result<Vec<Point<String>>, IngestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_points(&contents)
}

/// Parses the queries file: one `minLat maxLat minLon maxLon` record per line. Malformed lines
/// (wrong arity, non-numeric fields) or lines describing an invalid box are skipped with a
/// logged warning rather than aborting ingestion.
pub fn read_queries<P: AsRef<Path>>(path: P) -> Result<Vec<BBox>, IngestError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| IngestError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(parse_queries(&contents))
}

fn parse_points(contents: &str) -> Result<Vec<Point<String>>, IngestError> {
    let mut points = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line_no = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(malformed_point(line_no, line, LineReason::WrongFieldCount(fields.len())));
        }
        let id = fields[0].to_string();
        let lat: f64 = fields[1]
            .parse()
            .map_err(|_| malformed_point(line_no, line, LineReason::NotANumber("latitude")))?;
        let lon: f64 = fields[2]
            .parse()
            .map_err(|_| malformed_point(line_no, line, LineReason::NotANumber("longitude")))?;
        if !check_latitude(lat) {
            return Err(malformed_point(line_no, line, LineReason::OutOfRange("latitude")));
        }
        if !check_longitude(lon) {
            return Err(malformed_point(line_no, line, LineReason::OutOfRange("longitude")));
        }
        points.push(Point::new(id, lon, lat));
    }
    Ok(points)
}

fn parse_queries(contents: &str) -> Vec<BBox> {
    let mut queries = Vec::new();
    for (i, line) in contents.lines().enumerate() {
        let line_no = i + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 4 {
            log::warn!(
                "queries file line {line_no}: expected 4 fields, got {}; skipping",
                fields.len()
            );
            continue;
        }

        let parsed: Result<Vec<f64>, _> = fields.iter().map(|f| f.parse::<f64>()).collect();
        let values = match parsed {
            Ok(v) => v,
            Err(_) => {
                log::warn!("queries file line {line_no}: non-numeric field; skipping");
                continue;
            }
        };
        let (min_lat, max_lat, min_lon, max_lon) = (values[0], values[1], values[2], values[3]);

        let query = BBox::new(LonLat::new(max_lon, max_lat), LonLat::new(min_lon, min_lat));
        if !query.check() {
            log::warn!("queries file line {line_no}: invalid box; skipping");
            continue;
        }
        queries.push(query);
    }
    queries
}

fn malformed_point(line: usize, text: &str, reason: LineReason) -> IngestError {
    IngestError::MalformedPoint {
        line,
        text: text.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn parses_valid_points() {
        let points = parse_points("a 10.0 20.0\nb -5.5 170.25\n").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].id, "a");
        assert_eq!(points[0].lat, 10.0);
        assert_eq!(points[0].lon, 20.0);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert!(parse_points("a 10.0\n").is_err());
        assert!(parse_points("a 10.0 20.0 30.0\n").is_err());
    }

    #[test]
    fn rejects_blank_line() {
        assert!(parse_points("a 10.0 20.0\n\nb 1.0 1.0\n").is_err());
    }

    #[test]
    fn rejects_non_numeric_field() {
        assert!(parse_points("a oops 20.0\n").is_err());
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        assert!(parse_points("a 91.0 20.0\n").is_err());
        assert!(parse_points("a 10.0 200.0\n").is_err());
    }

    #[test]
    fn error_reports_offending_line_verbatim() {
        let err = parse_points("a 10.0 20.0\nbad line here\n").unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("bad line here"));
        assert!(msg.contains("line 2"));
    }

    #[test]
    fn skips_malformed_query_lines_but_keeps_valid_ones() {
        let queries = parse_queries("-2 2 -2\n-2 2 -2 2\nnot a number at all here\n");
        assert_eq!(queries.len(), 1);
    }

    #[test]
    fn skips_query_with_inverted_latitude() {
        let queries = parse_queries("2 -2 -2 2\n");
        assert!(queries.is_empty());
    }
}
