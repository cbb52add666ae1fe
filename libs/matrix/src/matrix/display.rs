//! Text rendering.

use super::matrix::Matrix;
use crate::element::Element;
use std::{
    fmt::{self, Write as _},
    io,
};
use tracing::error;

/// One line per row with entries separated by a single space, then a blank line.
impl<T: Element> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.height {
            let row = self.row(i).map_err(|_| fmt::Error)?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_char(' ')?;
                }
                write!(f, "{value}")?;
            }
            f.write_char('\n')?;
        }
        f.write_char('\n')
    }
}

impl<T: Element> Matrix<T> {
    /// Writes the rendered matrix to `sink`.
    pub fn write_to<W: io::Write>(&self, mut sink: W) -> io::Result<()> {
        write!(sink, "{self}")?;
        sink.flush()
    }

    /// Prints the rendered matrix to standard output.
    pub fn display(&self) {
        if let Err(e) = self.write_to(io::stdout().lock()) {
            error!("Failed to display matrix: {e}");
        }
    }
}
