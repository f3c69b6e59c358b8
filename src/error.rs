//! Error kinds for a generation run.
//!
//! Every variant is fatal and maps to exit code 1. Missing individual slide
//! files are deliberately not represented here; the collector reports them
//! as warnings.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// No presentation name was given on the command line.
    #[error("please specify a presentation name")]
    Usage,

    /// `slides/<name>/` does not exist.
    #[error("presentation directory not found: {}", expected.display())]
    PresentationNotFound {
        expected: PathBuf,
        /// Names of the presentations that do exist, or `None` when the
        /// `slides/` directory itself is missing.
        available: Option<Vec<String>>,
    },

    /// `slides/<name>.html` does not exist.
    #[error("presentation HTML file not found: {}", expected.display())]
    MetadataNotFound { expected: PathBuf },

    /// The slide-order declaration is missing or its literal does not parse.
    #[error("could not read slide order: {0}")]
    MetadataParse(String),

    /// The rendering service failed at some stage.
    #[error("error generating PDF: {0}")]
    Render(String),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        1
    }
}
