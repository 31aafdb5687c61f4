use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced when opening an image sequence.
///
/// All variants are recoverable. In particular a missing annotation file is
/// reported to the caller instead of terminating the process.
#[derive(Error, Debug)]
pub enum OpenError {
    #[error("no input source specified (expected -f or -fdir)")]
    NoInputSpecified,

    #[error("no images found in directory: {}", directory.display())]
    NoImagesFound { directory: PathBuf },

    #[error("missing bounding-box annotation for {}: expected {}", image.display(), expected.display())]
    MissingAnnotation { image: PathBuf, expected: PathBuf },

    #[error("malformed annotation file {}: {detail}", path.display())]
    MalformedAnnotation { path: PathBuf, detail: String },

    #[error("failed to read directory {}: {source}", path.display())]
    ReadDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read annotation file {}: {source}", path.display())]
    ReadAnnotation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
