//! Error types for browsing, loading and displaying models.

use std::path::PathBuf;

use thiserror::Error;

use crate::model::Category;

/// Errors raised before the file picker is ever opened.
#[derive(Error, Debug)]
pub enum BrowseError {
    #[error("Please select a body part first.")]
    NoSelection,

    #[error("Directory for {category} models not found: {}", .path.display())]
    DirectoryNotFound { category: Category, path: PathBuf },
}

/// Errors raised while parsing a chosen model file.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{}: unsupported model format (expected .stl or .obj)", .0.display())]
    UnsupportedFormat(PathBuf),

    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse STL file {}: {source}", .path.display())]
    Stl {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse OBJ file {}: {source}", .path.display())]
    Obj {
        path: PathBuf,
        source: obj::ObjError,
    },
}

/// Errors raised while handing a scene to a viewer unit.
#[derive(Error, Debug)]
pub enum DisplayError {
    #[error("failed to start viewer thread: {0}")]
    Spawn(std::io::Error),
}

/// Errors raised while reading the model library configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
