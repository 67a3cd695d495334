#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the gh-stats crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

use std::path::{Path, PathBuf};

/// Exit status reported for configuration problems.
pub const CONFIGURATION_EXIT_CODE: i32 = 2;
/// Exit status reported for every other fatal failure.
pub const FAILURE_EXIT_CODE: i32 = 1;

/// Unified error type returned by configuration loading, owner resolution and
/// output rendering.
///
/// Failures of individual repository requests are not represented here: they
/// are reported and skipped by the aggregation pipeline and never abort a run.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// Wraps I/O errors that occur while reading the repositories manifest.
    #[error("failed to read manifest from {path:?}: {source}")]
    Io {
        /// Location of the manifest file.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse manifest: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Returned when the invocation or the manifest violates invariants.
    #[error("invalid configuration: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps serialization errors when writing the JSON artifact.
    #[error("failed to serialize stats: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
    },
    /// Wraps I/O errors that occur while writing an output artifact.
    #[error("failed to write output at {path:?}: {source}")]
    Output {
        /// Location of the artifact being produced.
        path:   PathBuf,
        /// Underlying I/O error reported by the operating system.
        source: std::io::Error
    },
    /// Returned when the CSV encoder rejects a record.
    #[error("failed to encode CSV: {message}")]
    Csv {
        /// Human readable message describing the encoding failure.
        message: String
    },
    /// Service errors when interacting with the GitHub API.
    #[error("service error: {message}")]
    Service {
        /// Human readable message describing the service error.
        message: String
    }
}

impl Error {
    /// Constructs a validation error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the validation failure.
    pub fn validation<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Validation {
            message: message.into()
        }
    }

    /// Constructs a service error from the provided displayable value.
    ///
    /// # Parameters
    ///
    /// * `message` - Human-readable description of the service error.
    pub fn service<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Service {
            message: message.into()
        }
    }

    /// Returns `true` for errors caused by the invocation itself rather than
    /// by I/O or the remote service.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Validation { .. } | Self::Parse { .. } | Self::Io { .. })
    }

    /// Process exit status associated with the error.
    ///
    /// Configuration problems use [`CONFIGURATION_EXIT_CODE`] so that callers
    /// can tell a bad invocation apart from a failed run.
    pub fn exit_code(&self) -> i32 {
        if self.is_configuration() {
            CONFIGURATION_EXIT_CODE
        } else {
            FAILURE_EXIT_CODE
        }
    }

    /// Formats the error for diagnostics without the variant name.
    ///
    /// The returned string matches the [`std::fmt::Display`] implementation.
    pub fn to_display_string(&self) -> String {
        format!("{self}")
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(source: serde_yaml::Error) -> Self {
        Self::Parse {
            source
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Self::Serialize {
            source
        }
    }
}

/// Keeps the message carried by the [`masterror::AppError`]; its `Display`
/// only names the error kind.
impl From<masterror::AppError> for Error {
    fn from(error: masterror::AppError) -> Self {
        Self::Service {
            message: error.render_message().into_owned()
        }
    }
}

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the manifest that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}

/// Creates an [`Error::Output`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the artifact that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn output_error(path: &Path, source: std::io::Error) -> Error {
    Error::Output {
        path: path.to_path_buf(),
        source
    }
}
