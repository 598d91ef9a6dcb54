// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Rendering options for generated profile documents.
//!
//! The options mirror the structure of the optional YAML document accepted by
//! the CLI. Every field has a default so an empty document (or no document at
//! all) yields the stock layout, and out-of-range values are rejected during
//! deserialization.

use std::{fmt, fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{self, Error};

/// Number of projects listed in the top-projects table by default.
pub const DEFAULT_TOP_PROJECTS: u8 = 6;
/// Upper bound accepted for the top-projects table.
const MAX_TOP_PROJECTS: u8 = 20;

/// Options controlling how a profile document is rendered.
///
/// # Examples
///
/// ```
/// use profile_readme::{BadgeProvider, BadgeStyle, RenderOptions};
///
/// let yaml = r#"
/// provider: readme_stats
/// style: flat_square
/// top_projects: 4
/// "#;
/// let options: RenderOptions = serde_yaml::from_str(yaml,).expect("valid options",);
/// assert_eq!(options.provider, BadgeProvider::ReadmeStats);
/// assert_eq!(options.style, BadgeStyle::FlatSquare);
/// assert_eq!(options.top_projects, 4);
/// assert!(options.streak);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderOptions {
    /// Badge service used for the stats and language sections.
    pub provider:     BadgeProvider,
    /// Visual preset applied to shields.io badges.
    pub style:        BadgeStyle,
    /// Number of projects listed in the top-projects table (`1..=20`).
    #[serde(deserialize_with = "deserialize_top_projects")]
    pub top_projects: u8,
    /// Whether the contribution streak card is embedded.
    pub streak:       bool,
    /// Optional override of the GitHub REST API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base_url: Option<String>
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            provider:     BadgeProvider::default(),
            style:        BadgeStyle::default(),
            top_projects: DEFAULT_TOP_PROJECTS,
            streak:       true,
            api_base_url: None
        }
    }
}

/// External badge service referenced by the stats and language sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeProvider {
    /// Static shields.io badges computed from the fetched data.
    #[default]
    Shields,
    /// Cards rendered on demand by github-readme-stats.
    ReadmeStats
}

/// Visual presets supported by shields.io.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeStyle {
    Flat,
    FlatSquare,
    Plastic,
    /// Large uppercase badges.
    #[default]
    ForTheBadge
}

impl BadgeStyle {
    /// Value of the shields.io `style` query parameter.
    pub fn as_query(self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::FlatSquare => "flat-square",
            Self::Plastic => "plastic",
            Self::ForTheBadge => "for-the-badge"
        }
    }
}

impl FromStr for BadgeProvider {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(value).as_str() {
            "shields" => Ok(Self::Shields),
            "readme_stats" => Ok(Self::ReadmeStats),
            other => Err(Error::validation(format!(
                "unknown badge provider '{other}' (expected shields or readme-stats)"
            )))
        }
    }
}

impl FromStr for BadgeStyle {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match normalize_keyword(value).as_str() {
            "flat" => Ok(Self::Flat),
            "flat_square" => Ok(Self::FlatSquare),
            "plastic" => Ok(Self::Plastic),
            "for_the_badge" => Ok(Self::ForTheBadge),
            other => Err(Error::validation(format!(
                "unknown badge style '{other}' (expected flat, flat-square, plastic or for-the-badge)"
            )))
        }
    }
}

impl fmt::Display for BadgeProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Shields => "shields",
            Self::ReadmeStats => "readme-stats"
        })
    }
}

fn normalize_keyword(value: &str) -> String {
    value.trim().to_ascii_lowercase().replace('-', "_")
}

/// Loads render options from the YAML document at `path`.
///
/// # Errors
///
/// Returns [`Error::Io`](Error::Io) when the file cannot be read and
/// [`Error::Parse`](Error::Parse) when the YAML cannot be decoded.
pub fn load_options(path: &Path) -> Result<RenderOptions, Error> {
    let contents = fs::read_to_string(path).map_err(|source| error::io_error(path, source))?;
    parse_options(&contents)
}

/// Parses render options from a YAML document string.
///
/// Blank documents produce [`RenderOptions::default`].
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML cannot be decoded
/// or a value is out of range.
pub fn parse_options(contents: &str) -> Result<RenderOptions, Error> {
    if contents.trim().is_empty() {
        return Ok(RenderOptions::default());
    }

    Ok(serde_yaml::from_str(contents)?)
}

fn deserialize_top_projects<'de, D>(deserializer: D) -> Result<u8, D::Error>
where
    D: serde::Deserializer<'de>
{
    let value = u8::deserialize(deserializer)?;
    if value == 0 || value > MAX_TOP_PROJECTS {
        return Err(serde::de::Error::custom(
            "top_projects must be between 1 and 20"
        ));
    }
    Ok(value)
}
