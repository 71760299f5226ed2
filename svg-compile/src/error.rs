// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors the compiler can hit while lexing XML or path data.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    NotUtf8,
    Xml(roxmltree::Error),
    /// An SVG path command letter this pipeline doesn't support (arcs, quadratics, or garbage).
    UnsupportedPathCommand(char),
    PathData(svgtypes::Error),
    Transform(svgtypes::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "failed to read input: {}", e),
            Error::NotUtf8 => write!(f, "input is not valid UTF-8"),
            Error::Xml(e) => write!(f, "XML parsing failed: {}", e),
            Error::UnsupportedPathCommand(c) => {
                write!(f, "unsupported path command '{}'", c)
            }
            Error::PathData(e) => write!(f, "malformed path data: {}", e),
            Error::Transform(e) => write!(f, "malformed transform: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<roxmltree::Error> for Error {
    fn from(e: roxmltree::Error) -> Self {
        Error::Xml(e)
    }
}
