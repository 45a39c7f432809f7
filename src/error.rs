//! Error types for rendering operations.

use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::Encoding;

/// Errors that can occur while rendering a node tree.
///
/// Only raw file nodes can fail; every other node kind renders unconditionally.
#[derive(Error, Debug)]
pub enum Error {
    #[error("resource not found: {}", .path.display())]
    ResourceNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot decode {} as {encoding}", .path.display())]
    Decoding { path: PathBuf, encoding: Encoding },
}

pub type Result<T> = std::result::Result<T, Error>;
