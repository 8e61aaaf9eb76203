//! Whitespace-delimited calibration tables.
//!
//! A capture session is described by two plain-text files: one row per
//! camera translation (`x y z`) and one row per cubemap-face quaternion
//! (`qx qy qz qw`). No header, no versioning. Blank lines are skipped.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use roomtex_core::{Real, Vec3, BOUNDARY_EPS};

/// Errors raised while loading a calibration table.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}:{line}: invalid float", path.display())]
    Parse { path: PathBuf, line: usize },
    #[error("{}:{line}: expected {expected} values, got {got}", path.display())]
    WrongColumnCount {
        path: PathBuf,
        line: usize,
        expected: usize,
        got: usize,
    },
    #[error("{} is empty", path.display())]
    Empty { path: PathBuf },
    #[error("{}:{line}: zero-norm quaternion", path.display())]
    ZeroQuaternion { path: PathBuf, line: usize },
}

/// Parse a table into `(line_number, values)` rows, enforcing the column
/// count per row and that the file contains at least one row.
fn parse_rows(path: &Path, expected: usize) -> Result<Vec<(usize, Vec<Real>)>, TableError> {
    let text = std::fs::read_to_string(path).map_err(|source| TableError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rows = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let values: Vec<Real> = line
            .split_whitespace()
            .map(|v| v.parse::<Real>())
            .collect::<Result<_, _>>()
            .map_err(|_| TableError::Parse {
                path: path.to_path_buf(),
                line: idx + 1,
            })?;
        if values.len() != expected {
            return Err(TableError::WrongColumnCount {
                path: path.to_path_buf(),
                line: idx + 1,
                expected,
                got: values.len(),
            });
        }
        rows.push((idx + 1, values));
    }

    if rows.is_empty() {
        return Err(TableError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(rows)
}

/// Load camera translations, one `x y z` row per capture position.
pub fn load_translations(path: &Path) -> Result<Vec<Vec3>, TableError> {
    Ok(parse_rows(path, 3)?
        .into_iter()
        .map(|(_, row)| Vec3::new(row[0], row[1], row[2]))
        .collect())
}

/// Load orientation quaternions, one `qx qy qz qw` row per view.
///
/// Rows must have non-zero norm; conversion to a rotation normalizes
/// them, which is undefined for a zero quaternion.
pub fn load_quaternions(path: &Path) -> Result<Vec<[Real; 4]>, TableError> {
    let rows = parse_rows(path, 4)?;

    let mut quaternions = Vec::with_capacity(rows.len());
    for (line, row) in rows {
        let q = [row[0], row[1], row[2], row[3]];
        let norm = (q[0] * q[0] + q[1] * q[1] + q[2] * q[2] + q[3] * q[3]).sqrt();
        if norm <= BOUNDARY_EPS {
            return Err(TableError::ZeroQuaternion {
                path: path.to_path_buf(),
                line,
            });
        }
        quaternions.push(q);
    }
    Ok(quaternions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_table(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn translations_parse_row_per_position() {
        let file = write_table("0.0 0.0 1.6\n1.0 -0.5 1.6\n");
        let translations = load_translations(file.path()).unwrap();

        assert_eq!(translations.len(), 2);
        assert_eq!(translations[1], Vec3::new(1.0, -0.5, 1.6));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let file = write_table("\n0.0 0.0 1.6\n\n1.0 0.0 1.6\n\n");
        assert_eq!(load_translations(file.path()).unwrap().len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_translations(Path::new("/nonexistent/cam_translations.txt")).unwrap_err();
        assert!(matches!(err, TableError::Io { .. }));
    }

    #[test]
    fn wrong_arity_reports_the_line() {
        let file = write_table("0.0 0.0 1.6\n1.0 0.0\n");
        let err = load_translations(file.path()).unwrap_err();
        match err {
            TableError::WrongColumnCount {
                line,
                expected,
                got,
                ..
            } => {
                assert_eq!(line, 2);
                assert_eq!(expected, 3);
                assert_eq!(got, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn garbage_reports_a_parse_error() {
        let file = write_table("0.0 zero 1.6\n");
        assert!(matches!(
            load_translations(file.path()).unwrap_err(),
            TableError::Parse { line: 1, .. }
        ));
    }

    #[test]
    fn empty_table_is_rejected() {
        let file = write_table("\n\n");
        assert!(matches!(
            load_translations(file.path()).unwrap_err(),
            TableError::Empty { .. }
        ));
    }

    #[test]
    fn zero_quaternion_is_rejected() {
        let file = write_table("0.0 0.0 0.0 1.0\n0.0 0.0 0.0 0.0\n");
        assert!(matches!(
            load_quaternions(file.path()).unwrap_err(),
            TableError::ZeroQuaternion { line: 2, .. }
        ));
    }

    #[test]
    fn quaternions_parse_scalar_last() {
        let file = write_table("0.0 0.707107 0.0 0.707107\n");
        let quaternions = load_quaternions(file.path()).unwrap();
        assert_eq!(quaternions, vec![[0.0, 0.707107, 0.0, 0.707107]]);
    }
}
