//! Defines custom error types for the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a page cannot be rendered.
pub enum RenderError {
    #[error("Input file not found: {}", .0.display())]
    InputNotFound(PathBuf),

    #[error("Template not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
