#![allow(non_shorthand_field_patterns)]
#![doc = "Error handling primitives shared across the profile-readme crate."]
// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! The derive emitted by [`masterror::Error`] expands pattern matches that
//! trigger the `non_shorthand_field_patterns` lint. The lint is disabled for
//! the module to keep the generated implementations warning-free.

use std::path::{Path, PathBuf};

/// Unified error type returned by the fetcher, the configuration loader and
/// the CLI.
///
/// Fetch failures are terminal for the current generation attempt: nothing in
/// the crate retries them. The display strings are written for end users so
/// callers can surface them verbatim.
#[derive(Debug, masterror::Error)]
pub enum Error {
    /// The requested account does not exist upstream.
    #[error("user '{login}' was not found; check the username and try again")]
    NotFound {
        /// Handle that failed to resolve.
        login: String
    },
    /// Upstream refused the request because the API quota is exhausted.
    #[error("GitHub API rate limit exceeded; wait a minute and try again")]
    RateLimited,
    /// Any other non-success response from the code-forge API.
    #[error("GitHub API error ({status}): {message}")]
    Upstream {
        /// Raw HTTP status code.
        status:  u16,
        /// Message reported by the API, if any.
        message: String
    },
    /// The request could not be performed or its body could not be decoded.
    #[error("failed to reach GitHub API: {message}")]
    Transport {
        /// Human readable description of the transport failure.
        message: String
    },
    /// Returned when user input violates invariants.
    #[error("invalid input: {message}")]
    Validation {
        /// Human readable message describing the validation problem.
        message: String
    },
    /// Wraps I/O errors while reading configuration or writing documents.
    #[error("failed to access {path:?}: {source}")]
    Io {
        /// Location of the file being accessed.
        path:   PathBuf,
        /// Underlying I/O error.
        source: std::io::Error
    },
    /// Wraps YAML decoding errors.
    #[error("failed to parse configuration: {source}")]
    Parse {
        /// Source decoding error from serde_yaml.
        source: serde_yaml::Error
    },
    /// Wraps serialization errors when writing JSON summaries.
    #[error("failed to serialize report: {source}")]
    Serialize {
        /// Underlying serialization error.
        source: serde_json::Error
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

    /// Constructs a transport error from the provided displayable value.
    pub fn transport<M>(message: M) -> Self
    where
        M: Into<String>
    {
        Self::Transport {
            message: message.into()
        }
    }

    /// Maps a non-success HTTP status reported for `login` into a typed error.
    ///
    /// GitHub signals quota exhaustion with either `403` or `429`; every other
    /// status outside the success range is reported as [`Error::Upstream`].
    ///
    /// # Parameters
    ///
    /// * `login` - Handle the request was issued for.
    /// * `status` - Raw HTTP status code.
    /// * `message` - Message body reported by the API.
    pub fn from_status<M>(login: &str, status: u16, message: M) -> Self
    where
        M: Into<String>
    {
        match status {
            404 => Self::NotFound {
                login: login.to_owned()
            },
            403 | 429 => Self::RateLimited,
            _ => Self::Upstream {
                status,
                message: message.into()
            }
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

/// Creates an [`Error::Io`] variant capturing the failing path and source.
///
/// # Parameters
///
/// * `path` - Location of the file that triggered the error.
/// * `source` - I/O error reported by the operating system.
pub fn io_error(path: &Path, source: std::io::Error) -> Error {
    Error::Io {
        path: path.to_path_buf(),
        source
    }
}
