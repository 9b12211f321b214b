//! Error types for texture loading.
//!
//! Symbol resolution and painting themselves have no recoverable failure
//! modes: an unresolvable type yields `None` and painting "no symbol" is a
//! defined no-op. The only fallible collaborator is the texture loader,
//! whose errors are recoverable for the loader but treated as fatal by the
//! symbol atlas (the atlas asset is a build-time invariant, so there is no
//! degraded rendering path).

use std::io;

use thiserror::Error;

/// Errors a [`TextureLoader`](crate::atlas::TextureLoader) may report.
#[derive(Debug, Error)]
pub enum TextureError {
    #[error("asset `{asset}` not found")]
    MissingAsset { asset: String },

    #[error("failed to decode `{asset}`: {reason}")]
    Decode { asset: String, reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
