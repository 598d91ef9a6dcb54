// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! End-to-end generation: fetch, aggregate, classify and render.
//!
//! Each call runs a fresh fetch; nothing is cached between calls and any
//! fetch failure aborts before rendering.

use chrono::{Datelike, Utc};
use tracing::info;

use crate::{
    config::RenderOptions,
    document::{GeneratedDocument, render_document},
    error::Error,
    github::{ProfileSource, fetch_profile},
    report::ProfileReport,
    username::Username,
};

/// Fetches a profile and derives its statistics and achievements.
///
/// The account-age tier is measured against the current UTC calendar year.
///
/// # Errors
///
/// Returns any error produced by [`fetch_profile`].
pub async fn build_profile_report<S,>(
    source: &S,
    login: &Username,
    options: &RenderOptions,
) -> Result<ProfileReport, Error,>
where
    S: ProfileSource + Sync,
{
    build_profile_report_in_year(source, login, options, Utc::now().year(),).await
}

/// Same as [`build_profile_report`] with an explicit current year.
///
/// # Errors
///
/// Returns any error produced by [`fetch_profile`].
pub async fn build_profile_report_in_year<S,>(
    source: &S,
    login: &Username,
    options: &RenderOptions,
    current_year: i32,
) -> Result<ProfileReport, Error,>
where
    S: ProfileSource + Sync,
{
    let profile = fetch_profile(source, login,).await?;
    let report =
        ProfileReport::build(profile, usize::from(options.top_projects,), current_year,);

    info!(
        "Aggregated {} repositories for {}: {} languages, {} achievements",
        report.repositories.len(),
        report.user.login,
        report.languages.len(),
        report.achievements.len()
    );

    Ok(report,)
}

/// Produces the profile README document for `login`.
///
/// # Errors
///
/// Returns [`Error::NotFound`], [`Error::RateLimited`], [`Error::Upstream`]
/// or [`Error::Transport`] when fetching fails. No partial document is
/// produced.
///
/// # Example
///
/// ```no_run
/// use profile_readme::{GitHubClient, RenderOptions, Username, generate_profile_document};
///
/// # async fn example() -> Result<(), profile_readme::Error> {
/// let client = GitHubClient::new()?;
/// let login = Username::parse("octocat",)?;
/// let document = generate_profile_document(&client, &login, &RenderOptions::default(),).await?;
/// println!("{}", document.to_markdown());
/// # Ok(())
/// # }
/// ```
pub async fn generate_profile_document<S,>(
    source: &S,
    login: &Username,
    options: &RenderOptions,
) -> Result<GeneratedDocument, Error,>
where
    S: ProfileSource + Sync,
{
    let report = build_profile_report(source, login, options,).await?;
    let document = render_document(&report, options,);

    info!("Rendered {} lines for {}", document.lines().len(), report.user.login);
    Ok(document,)
}
