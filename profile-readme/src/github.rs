// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Profile data fetching from the GitHub REST API.
//!
//! Retrieves the user record and a single page of repositories concurrently.
//! Failures are surfaced immediately as typed errors; nothing is retried and
//! no page beyond the first is requested.

use std::future::Future;

use octocrab::{Octocrab, service::middleware::retry::RetryConfig};
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{
    error::Error,
    model::{RepositoryRecord, UserProfile},
    username::Username,
};

/// Default public API endpoint.
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";
/// Repositories requested in the single page fetched per profile.
pub const REPOSITORY_PAGE_SIZE: u8 = 100;

/// Raw records fetched for a profile.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct Profile
{
    pub user:         UserProfile,
    /// Repositories in API order (most recently updated first).
    pub repositories: Vec<RepositoryRecord,>,
}

/// Source of profile records.
///
/// [`GitHubClient`] talks to the live API; tests substitute in-memory
/// sources.
pub trait ProfileSource
{
    /// Fetches the account record for `login`.
    fn fetch_user(
        &self,
        login: &Username,
    ) -> impl Future<Output = Result<UserProfile, Error,>,> + Send;

    /// Fetches the first page of repositories owned by `login`.
    fn fetch_repositories(
        &self,
        login: &Username,
    ) -> impl Future<Output = Result<Vec<RepositoryRecord,>, Error,>,> + Send;
}

/// Fetches the user record and repository list concurrently.
///
/// Both requests must succeed; the first failure aborts the whole fetch and
/// no partial profile is returned.
///
/// # Errors
///
/// Propagates [`Error::NotFound`], [`Error::RateLimited`],
/// [`Error::Upstream`] and [`Error::Transport`] from the source.
pub async fn fetch_profile<S,>(source: &S, login: &Username,) -> Result<Profile, Error,>
where
    S: ProfileSource + Sync,
{
    let (user, repositories,) =
        tokio::try_join!(source.fetch_user(login), source.fetch_repositories(login))?;

    debug!("Fetched profile {} with {} repositories", user.login, repositories.len());

    Ok(Profile {
        user,
        repositories,
    },)
}

/// Upper bound on the characters of a non-JSON error body kept in messages.
const ERROR_BODY_LIMIT: usize = 200;

/// Error payload returned by the API for failed requests.
#[derive(Debug, Deserialize,)]
struct ApiErrorBody
{
    message: String,
}

fn user_route(login: &Username,) -> String
{
    format!("/users/{login}")
}

fn repositories_route(login: &Username,) -> String
{
    format!("/users/{login}/repos?per_page={REPOSITORY_PAGE_SIZE}&sort=updated&direction=desc")
}

/// Unauthenticated GitHub REST client.
#[derive(Debug, Clone,)]
pub struct GitHubClient
{
    octocrab: Octocrab,
}

impl GitHubClient
{
    /// Builds a client for the public API at [`DEFAULT_API_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the HTTP client cannot be
    /// initialized.
    pub fn new() -> Result<Self, Error,>
    {
        Self::with_base_url(DEFAULT_API_BASE_URL,)
    }

    /// Builds a client for a custom API base URL, e.g. a GitHub Enterprise
    /// instance.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the URL cannot be parsed and
    /// [`Error::Transport`] when the HTTP client cannot be initialized.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use profile_readme::{GitHubClient, Username, fetch_profile};
    ///
    /// # async fn example() -> Result<(), profile_readme::Error> {
    /// let client = GitHubClient::with_base_url("https://api.github.com",)?;
    /// let profile = fetch_profile(&client, &Username::parse("octocat",)?,).await?;
    /// println!("{} repositories", profile.repositories.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_base_url(base_url: &str,) -> Result<Self, Error,>
    {
        let octocrab = Octocrab::builder()
            .base_uri(base_url,)
            .map_err(|e| Error::validation(format!("invalid API base URL '{base_url}': {e}"),),)?
            .add_retry_config(RetryConfig::None,)
            .build()
            .map_err(|e| Error::transport(transport_message(&e,),),)?;

        Ok(Self {
            octocrab,
        },)
    }

    /// Wraps an existing octocrab client.
    pub fn from_octocrab(octocrab: Octocrab,) -> Self
    {
        Self {
            octocrab,
        }
    }

    /// Issues a GET request and decodes a successful JSON body.
    ///
    /// The status is inspected before decoding, so non-success responses map
    /// to typed errors whatever their body looks like.
    async fn get_json<T,>(&self, login: &Username, route: String,) -> Result<T, Error,>
    where
        T: DeserializeOwned,
    {
        let response = self
            .octocrab
            ._get(route,)
            .await
            .map_err(|e| Error::transport(transport_message(&e,),),)?;
        let status = response.status();
        let body = self
            .octocrab
            .body_to_string(response,)
            .await
            .map_err(|e| Error::transport(transport_message(&e,),),)?;

        if !status.is_success() {
            debug!("GitHub answered {} for {}", status, login);
            let fallback = status.canonical_reason().unwrap_or("request failed",);
            return Err(Error::from_status(
                login.as_str(),
                status.as_u16(),
                error_message(&body, fallback,),
            ),);
        }

        serde_json::from_str(&body,)
            .map_err(|e| Error::transport(format!("failed to decode GitHub response: {e}"),),)
    }
}

impl ProfileSource for GitHubClient
{
    async fn fetch_user(&self, login: &Username,) -> Result<UserProfile, Error,>
    {
        debug!("Fetching user record for {}", login);
        self.get_json(login, user_route(login,),).await
    }

    async fn fetch_repositories(&self, login: &Username,) -> Result<Vec<RepositoryRecord,>, Error,>
    {
        debug!("Fetching repositories for {}", login);
        self.get_json(login, repositories_route(login,),).await
    }
}

/// Extracts a user-facing message from an error response body.
fn error_message(body: &str, fallback: &str,) -> String
{
    if let Ok(payload,) = serde_json::from_str::<ApiErrorBody,>(body,) {
        return payload.message;
    }

    match body.lines().map(str::trim,).find(|line| !line.is_empty(),) {
        Some(line,) => line.chars().take(ERROR_BODY_LIMIT,).collect(),
        None => fallback.to_owned(),
    }
}

/// Describes a transport failure without the captured backtrace.
fn transport_message(error: &octocrab::Error,) -> String
{
    let message = match std::error::Error::source(error,) {
        Some(source,) => source.to_string(),
        None => error.to_string(),
    };
    strip_backtrace(&message,).to_owned()
}

fn strip_backtrace(message: &str,) -> &str
{
    match message.find("\nFound at",) {
        Some(index,) => message[..index].trim_end(),
        None => message.trim_end(),
    }
}
