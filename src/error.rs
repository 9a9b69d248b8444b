//! Error types for model card export.

use std::io;

use thiserror::Error;

use crate::export::Format;

/// Errors that can occur while exporting a model card.
#[derive(Error, Debug)]
pub enum Error {
    /// The record is missing a field every export requires.
    #[error("Missing required field: {0}")]
    MissingRequiredField(&'static str),

    /// A renderer failed while assembling its document.
    #[error("Failed to generate {format} document: {message}")]
    Generation { format: Format, message: String },

    /// The finished document could not be handed to its destination.
    #[error("Failed to deliver {filename}: {source}")]
    Delivery {
        filename: String,
        #[source]
        source: io::Error,
    },

    #[error("Invalid value for option {key}: {value:?}")]
    InvalidOption { key: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Wrap a failure raised while generating `format`.
    pub fn generation(format: Format, err: impl std::fmt::Display) -> Self {
        Error::Generation {
            format,
            message: err.to_string(),
        }
    }

    /// True for failures of the validation step, which happen before any
    /// content is generated.
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::MissingRequiredField(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
