// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Validated GitHub handles.
//!
//! A [`Username`] contains between 1 and 39 ASCII alphanumeric characters
//! where single hyphens may separate alphanumeric runs. Leading, trailing and
//! consecutive hyphens are rejected, which keeps the handle safe to embed in
//! API routes and badge URLs without further escaping.

use std::{fmt, str::FromStr};

use serde::Serialize;

use crate::error::Error;

/// Longest handle GitHub accepts.
const MAX_USERNAME_LENGTH: usize = 39;

/// GitHub handle that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Username(String);

impl Username {
    /// Validates `input` after trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when the handle is
    /// empty, too long, or contains characters other than alphanumerics and
    /// interior hyphens.
    ///
    /// # Examples
    ///
    /// ```
    /// use profile_readme::Username;
    ///
    /// let username = Username::parse("  octo-cat ",)?;
    /// assert_eq!(username.as_str(), "octo-cat");
    /// assert!(Username::parse("-octocat",).is_err());
    /// # Ok::<(), profile_readme::Error>(())
    /// ```
    pub fn parse(input: &str) -> Result<Self, Error> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("please enter a GitHub username"));
        }

        if trimmed.len() > MAX_USERNAME_LENGTH {
            return Err(Error::validation(format!(
                "username \"{trimmed}\" is longer than {MAX_USERNAME_LENGTH} characters"
            )));
        }

        let mut previous_hyphen = true;
        for candidate in trimmed.chars() {
            match candidate {
                'A'..='Z' | 'a'..='z' | '0'..='9' => previous_hyphen = false,
                '-' if !previous_hyphen => previous_hyphen = true,
                _ => return Err(invalid_username(trimmed))
            }
        }

        if previous_hyphen {
            return Err(invalid_username(trimmed));
        }

        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the handle as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

fn invalid_username(input: &str) -> Error {
    Error::validation(format!(
        "invalid username \"{input}\"; GitHub usernames can only contain letters, numbers, and single hyphens between them"
    ))
}

impl FromStr for Username {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::parse(value)
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Username {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
