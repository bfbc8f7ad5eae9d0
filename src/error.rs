//! Error types for the SOP algebra engine
//!
//! Failures are grouped by kind, following the interface contract of the
//! engine:
//!
//! - [`ArgumentError`] - operands that cannot be combined (mismatched
//!   variable counts)
//! - [`RangeError`] - indices outside the valid range of a cube or cover
//! - [`ParseCoverError`] - malformed cover text
//! - [`ExprParseError`] - malformed boolean expression text
//!
//! A contradictory cube product is *not* an error: it produces the invalid
//! cube sentinel (see [`Cube::is_invalid`](crate::Cube::is_invalid)), which
//! is an ordinary value that propagates through further operations.

use std::fmt;
use std::io;

/// Error for operands that cannot be combined
///
/// Every binary operation on cubes, covers and literal sets requires both
/// operands to have the same variable count. The checked methods report a
/// mismatch with this error; the operator forms (`|`, `-`, `*`, `/`) panic
/// instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentError {
    /// The two operands were built over different variable counts
    VariableNumMismatch {
        /// Variable count of the left operand
        left: usize,
        /// Variable count of the right operand
        right: usize,
    },
}

impl fmt::Display for ArgumentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgumentError::VariableNumMismatch { left, right } => write!(
                f,
                "variable_num mismatch: left operand has {} variables, right operand has {}",
                left, right
            ),
        }
    }
}

impl std::error::Error for ArgumentError {}

impl From<ArgumentError> for io::Error {
    fn from(err: ArgumentError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Error for indices outside the valid range of a cube or cover
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// A cube index `i >= cube_num()` was passed to a cover accessor
    CubeIndex {
        /// The offending index
        index: usize,
        /// The number of cubes in the cover
        cube_num: usize,
    },
    /// A variable index `v >= variable_num()` was passed to an accessor
    Variable {
        /// The offending variable index
        var: usize,
        /// The variable count of the cube or cover
        variable_num: usize,
    },
    /// A literal refers to a variable outside the cube or cover
    Literal {
        /// Variable id of the offending literal
        varid: usize,
        /// The variable count of the cube or cover
        variable_num: usize,
    },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeError::CubeIndex { index, cube_num } => write!(
                f,
                "cube index {} is out of range for a cover with {} cubes",
                index, cube_num
            ),
            RangeError::Variable { var, variable_num } => write!(
                f,
                "variable {} is out of range for variable_num {}",
                var, variable_num
            ),
            RangeError::Literal {
                varid,
                variable_num,
            } => write!(
                f,
                "literal on variable {} is out of range for variable_num {}",
                varid, variable_num
            ),
        }
    }
}

impl std::error::Error for RangeError {}

impl From<RangeError> for io::Error {
    fn from(err: RangeError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}

/// Error raised while parsing the cover text format
///
/// The format is one line per cube, every line exactly `variable_num`
/// characters from `{'0', '1', '-'}`. The width of the first line fixes the
/// expected width of all following lines.
#[derive(Debug)]
pub enum ParseCoverError {
    /// A line whose width differs from the first line's width
    WidthMismatch {
        /// 1-based line number of the offending line
        line: usize,
        /// Width established by the first line
        expected: usize,
        /// Width of the offending line
        found: usize,
    },
    /// A character outside `{'0', '1', '-'}`
    InvalidCharacter {
        /// 1-based line number
        line: usize,
        /// 1-based column number
        column: usize,
        /// The offending character
        found: char,
    },
    /// The underlying reader failed
    Io(io::Error),
}

impl fmt::Display for ParseCoverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseCoverError::WidthMismatch {
                line,
                expected,
                found,
            } => write!(
                f,
                "line {}: expected {} characters per cube, found {}",
                line, expected, found
            ),
            ParseCoverError::InvalidCharacter {
                line,
                column,
                found,
            } => write!(
                f,
                "line {}, column {}: invalid character {:?}, expected '0', '1' or '-'",
                line, column, found
            ),
            ParseCoverError::Io(err) => write!(f, "read error: {}", err),
        }
    }
}

impl std::error::Error for ParseCoverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseCoverError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ParseCoverError {
    fn from(err: io::Error) -> Self {
        ParseCoverError::Io(err)
    }
}

impl From<ParseCoverError> for io::Error {
    fn from(err: ParseCoverError) -> Self {
        match err {
            ParseCoverError::Io(inner) => inner,
            other => io::Error::new(io::ErrorKind::InvalidData, other),
        }
    }
}

/// Error raised while parsing a boolean expression string
///
/// Wraps the generated parser's diagnostics in a stable type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExprParseError {
    pub(crate) message: String,
}

impl ExprParseError {
    /// The parser's diagnostic message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for ExprParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse boolean expression: {}", self.message)
    }
}

impl std::error::Error for ExprParseError {}
