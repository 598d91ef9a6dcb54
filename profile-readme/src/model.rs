// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Records returned by the code-forge API.
//!
//! The types mirror the subset of the GitHub REST payloads consumed by the
//! pipeline. They are immutable once fetched and deserialize directly from the
//! `/users/{login}` and `/users/{login}/repos` responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Public account record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UserProfile {
    /// Unique handle.
    pub login:            String,
    /// Display name chosen by the account owner.
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub name:             Option<String>,
    /// Free-form biography.
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub bio:              Option<String>,
    /// Avatar image reference.
    #[serde(default)]
    pub avatar_url:       String,
    /// Number of public repositories reported by the API.
    #[serde(default)]
    pub public_repos:     u64,
    /// Follower count.
    #[serde(default)]
    pub followers:        u64,
    /// Number of accounts followed.
    #[serde(default)]
    pub following:        u64,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub company:          Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub location:         Option<String>,
    /// Blog or portfolio URL, with or without scheme.
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub blog:             Option<String>,
    /// Twitter / X handle without the leading `@`.
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub twitter_username: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub email:            Option<String>,
    /// `None` when the account never answered the question.
    #[serde(default)]
    pub hireable:         Option<bool>,
    /// Account creation timestamp.
    pub created_at:       DateTime<Utc>
}

impl UserProfile {
    /// Name shown in the document header, falling back to the login.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(&self.login)
    }

    /// Returns `true` when the account flagged itself as available for hire.
    pub fn is_hireable(&self) -> bool {
        self.hireable.unwrap_or(false)
    }
}

/// Repository owned by a profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryRecord {
    pub name:              String,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub description:       Option<String>,
    /// Primary language detected by the forge.
    #[serde(default)]
    pub language:          Option<String>,
    #[serde(default)]
    pub stargazers_count:  u64,
    #[serde(default)]
    pub forks_count:       u64,
    #[serde(default)]
    pub open_issues_count: u64,
    /// Whether the repository is a fork of another one.
    #[serde(default)]
    pub fork:              bool,
    pub updated_at:        DateTime<Utc>,
    #[serde(default)]
    pub topics:            Vec<String>,
    /// Canonical web URL.
    pub html_url:          String,
    /// Declared repository size as reported by the forge.
    #[serde(default)]
    pub size:              Option<u64>
}

/// Treats JSON `null` and blank strings as absent values.
///
/// GitHub reports unset profile fields such as `blog` as empty strings rather
/// than `null`.
fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|text| !text.trim().is_empty()))
}
