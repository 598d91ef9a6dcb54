// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Aggregated view of a fetched profile.
//!
//! A [`ProfileReport`] bundles the raw records with every statistic and
//! achievement derived from them. It is rebuilt wholesale from a
//! [`Profile`](crate::Profile) and never updated in place.

use serde::Serialize;

use crate::{
    github::Profile,
    model::{RepositoryRecord, UserProfile},
    stats::{self, LanguageStat, RepositoryTotals},
    tiers::{self, Achievement, ProfileMetrics},
};

/// Profile records together with derived statistics and achievements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileReport {
    pub user:         UserProfile,
    /// Repositories in API order.
    pub repositories: Vec<RepositoryRecord>,
    /// Language shares sorted by descending weight.
    pub languages:    Vec<LanguageStat>,
    /// Highest-starred original repositories.
    pub top_projects: Vec<RepositoryRecord>,
    /// Stars across all repositories, forks included.
    pub total_stars:  u64,
    pub totals:       RepositoryTotals,
    pub achievements: Vec<Achievement>
}

impl ProfileReport {
    /// Aggregates `profile` and classifies its achievements.
    ///
    /// # Parameters
    ///
    /// * `profile` - Records returned by the fetcher.
    /// * `top_projects` - Maximum number of projects kept in the ranking.
    /// * `current_year` - Calendar year used for the account-age tier.
    pub fn build(profile: Profile, top_projects: usize, current_year: i32) -> Self {
        let Profile {
            user,
            repositories
        } = profile;

        let languages = stats::aggregate_languages(&repositories);
        let top_projects: Vec<RepositoryRecord> = stats::top_projects(&repositories, top_projects)
            .into_iter()
            .cloned()
            .collect();
        let total_stars = stats::total_stars(&repositories);
        let totals = RepositoryTotals::from_repositories(&repositories);

        let metrics =
            ProfileMetrics::new(&user, &totals, total_stars, languages.len(), current_year);
        let achievements = tiers::classify_profile(&metrics);

        Self {
            user,
            repositories,
            languages,
            top_projects,
            total_stars,
            totals,
            achievements
        }
    }
}
