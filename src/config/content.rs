// SPDX-License-Identifier: MIT OR Apache-2.0

//! Inline-or-on-disk content resolution.
//!
//! Kubeconfig documents can carry certificate material either embedded
//! directly (`certificate-authority-data`) or as a reference to a file on
//! disk (`certificate-authority`). [`Content`] captures that duality and
//! resolves to raw bytes on demand.

use std::fs;
use std::io;

use tracing::trace;

/// A value that is either embedded inline or referenced by a file path.
///
/// Equality is on the unresolved representation: `Path("x")` and `Data("x")`
/// are never equal, even if resolving both would yield the same bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    /// Location of the content on disk.
    Path(String),
    /// Raw content embedded in the document.
    Data(String),
}

impl Content {
    /// Resolve to raw bytes, reading from disk in the `Path` case.
    ///
    /// Resolution is uncached: resolving a `Path` twice performs two
    /// independent reads. Callers that need the bytes repeatedly should
    /// resolve once and reuse the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the referenced file cannot be opened or read.
    /// The `Data` case never touches the filesystem and never fails.
    pub fn resolve(&self) -> io::Result<Vec<u8>> {
        match self {
            Content::Path(path) => {
                trace!(target: "kubeconfig::content", "reading content from {}", path);
                fs::read(path)
            }
            Content::Data(data) => Ok(data.clone().into_bytes()),
        }
    }

    /// Check if this content is a file path reference.
    #[must_use]
    pub fn is_path(&self) -> bool {
        matches!(self, Content::Path(_))
    }

    /// Check if this content is embedded inline.
    #[must_use]
    pub fn is_data(&self) -> bool {
        matches!(self, Content::Data(_))
    }
}
