// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors the rasterizer can hit: malformed polygon records, I/O failure,
/// or PNG encode failure.
#[derive(Debug)]
pub enum Error {
    Wire(svg_pipeline_types::Error),
    Io(std::io::Error),
    Png(png::EncodingError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Wire(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::Png(e) => write!(f, "PNG encoding failed: {}", e),
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

impl From<png::EncodingError> for Error {
    fn from(e: png::EncodingError) -> Self {
        Error::Png(e)
    }
}
