// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Generator for GitHub profile README documents.
//!
//! The library fetches a user's public profile and first page of
//! repositories, aggregates language shares and repository totals, awards
//! tiered achievements, and renders a Markdown document built from external
//! badge and card images. Rendering is pure; only [`fetch_profile`] touches
//! the network.
//!
//! # Example
//!
//! ```
//! use profile_readme::{RenderOptions, Username, parse_options};
//!
//! let login = Username::parse("  octocat ",).expect("valid username",);
//! assert_eq!(login.as_str(), "octocat");
//!
//! let options = parse_options("top_projects: 3\nstreak: false\n",).expect("valid options",);
//! assert_eq!(options.top_projects, 3);
//! assert!(!options.streak);
//! assert_ne!(options, RenderOptions::default());
//! ```

mod badge;
mod config;
mod document;
mod error;
mod github;
mod model;
mod pipeline;
mod report;
mod stats;
mod techstack;
mod tiers;
mod username;

pub use badge::{SkillBadge, escape_badge_text, static_badge_url};
pub use config::{
    BadgeProvider, BadgeStyle, DEFAULT_TOP_PROJECTS, RenderOptions, load_options, parse_options,
};
pub use document::{GeneratedDocument, render_document};
pub use error::{Error, io_error};
pub use github::{
    DEFAULT_API_BASE_URL, GitHubClient, Profile, ProfileSource, REPOSITORY_PAGE_SIZE,
    fetch_profile,
};
pub use model::{RepositoryRecord, UserProfile};
pub use pipeline::{build_profile_report, build_profile_report_in_year, generate_profile_document};
pub use report::ProfileReport;
pub use stats::{
    LanguageStat, RepositoryTotals, aggregate_languages, language_color, top_projects, total_stars,
};
pub use techstack::{infer_tools, language_badge, language_badges};
pub use tiers::{
    ACCOUNT_AGE_TIERS, Achievement, AchievementTier, FOLLOWER_TIERS, FORK_TIERS, LANGUAGE_TIERS,
    Metric, ProfileMetrics, REPOSITORY_TIERS, STAR_TIERS, classify, classify_profile,
};
pub use username::Username;
