// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// Semantic and I/O errors the interpreter can hit.
#[derive(Debug)]
pub enum Error {
    Wire(svg_pipeline_types::Error),
    Io(std::io::Error),
    /// `restore` with only the root style frame on the stack.
    RestoreUnderflow,
    /// `pop_matrix` with an empty transform stack.
    PopMatrixUnderflow,
    /// A command that reads or replaces the current point ran before `begin_path`.
    EmptyPath,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Wire(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::RestoreUnderflow => write!(f, "restore with no matching save"),
            Error::PopMatrixUnderflow => write!(f, "pop_matrix with no matching push_matrix"),
            Error::EmptyPath => write!(f, "current-point access before move_to"),
        }
    }
}

impl std::error::Error for Error {}

impl From<svg_pipeline_types::Error> for Error {
    fn from(e: svg_pipeline_types::Error) -> Self {
        Error::Wire(e)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}
