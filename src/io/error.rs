//! Error types and path context for board I/O

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for loading, saving and rendering boards
#[derive(Debug)]
pub enum PuzzleError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Board or state text does not have the required shape
    InvalidDimensions {
        /// Required (columns, rows)
        expected: (usize, usize),
        /// Offending (columns, rows)
        found: (usize, usize),
    },

    /// Character outside the board or state alphabet
    UnknownSymbol {
        /// The character read
        symbol: char,
        /// Column of the character
        x: usize,
        /// Row of the character
        y: usize,
    },

    /// Position outside the board
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
    },

    /// Attempt to reorient a tile whose orientation is fixed
    TileLocked {
        /// Column of the tile
        x: usize,
        /// Row of the tile
        y: usize,
    },

    /// Failed to save a rendered board
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for PuzzleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidDimensions { expected, found } => {
                write!(
                    f,
                    "Board must be {}x{} tiles, found {}x{}",
                    expected.0, expected.1, found.0, found.1
                )
            }
            Self::UnknownSymbol { symbol, x, y } => {
                write!(f, "Unknown symbol '{symbol}' at column {x}, row {y}")
            }
            Self::OutOfBounds { x, y } => {
                write!(f, "Position ({x}, {y}) is outside the board")
            }
            Self::TileLocked { x, y } => {
                write!(f, "Tile at ({x}, {y}) is locked")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for PuzzleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for puzzle results
pub type Result<T> = std::result::Result<T, PuzzleError>;

/// Attaches the path being worked on to file errors
pub trait WithPath<T> {
    /// Record `path` and `operation` on file system and export errors
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<PuzzleError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            PuzzleError::FileSystem { source, .. } => PuzzleError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            PuzzleError::ImageExport { source, .. } => PuzzleError::ImageExport {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<std::io::Error> for PuzzleError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<image::ImageError> for PuzzleError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> PuzzleError {
    PuzzleError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
