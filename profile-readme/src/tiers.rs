// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Achievement tiers awarded from aggregated profile metrics.
//!
//! Each metric owns an ascending threshold table. A metric earns the highest
//! tier whose minimum does not exceed its value, or nothing when the value is
//! below every minimum.

use chrono::Datelike;
use serde::Serialize;

use crate::{model::UserProfile, stats::RepositoryTotals};

/// Threshold record unlocking a named achievement level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AchievementTier {
    /// Smallest metric value that unlocks the tier.
    pub minimum: i64,
    pub label:   &'static str,
    pub icon:    &'static str,
    /// Badge color as a bare hex triplet.
    pub color:   &'static str
}

const fn tier(
    minimum: i64,
    label: &'static str,
    icon: &'static str,
    color: &'static str
) -> AchievementTier {
    AchievementTier {
        minimum,
        label,
        icon,
        color
    }
}

pub const STAR_TIERS: &[AchievementTier] = &[
    tier(1, "Star Gazer", "⭐", "C0C0C0"),
    tier(10, "Star Collector", "⭐", "FFD700"),
    tier(50, "Star Magnet", "🌟", "FF8C00"),
    tier(100, "Star Master", "🌟", "FF4500"),
    tier(500, "Superstar", "💫", "FF0000"),
    tier(1000, "Star Legend", "💫", "8B0000"),
];

pub const REPOSITORY_TIERS: &[AchievementTier] = &[
    tier(1, "First Repo", "📦", "C0C0C0"),
    tier(5, "Creator", "📦", "4169E1"),
    tier(10, "Repository Pro", "📁", "3fb950"),
    tier(30, "Prolific Coder", "📁", "228B22"),
    tier(50, "Repo Machine", "🗂️", "006400"),
    tier(100, "Repo Legend", "🗂️", "004d00"),
];

pub const FOLLOWER_TIERS: &[AchievementTier] = &[
    tier(1, "Friendly Face", "👥", "C0C0C0"),
    tier(10, "Networker", "👥", "9370DB"),
    tier(50, "Influencer", "🌐", "8A2BE2"),
    tier(100, "Community Star", "🌐", "7B1FA2"),
    tier(500, "Thought Leader", "🏛️", "6A0DAD"),
    tier(1000, "GitHub Celebrity", "🏛️", "4a0080"),
];

pub const LANGUAGE_TIERS: &[AchievementTier] = &[
    tier(1, "Coder", "💻", "C0C0C0"),
    tier(3, "Multilingual", "💻", "1E90FF"),
    tier(5, "Polyglot", "🔤", "0077B6"),
    tier(8, "Language Master", "🔤", "005f8a"),
    tier(12, "Language Legend", "🗣️", "003f5c"),
];

pub const FORK_TIERS: &[AchievementTier] = &[
    tier(1, "Forked", "🍴", "C0C0C0"),
    tier(10, "Popular Code", "🍴", "D29922"),
    tier(50, "Fork Magnet", "🔱", "FF8C00"),
    tier(100, "Fork Master", "🔱", "FF4500"),
];

pub const ACCOUNT_AGE_TIERS: &[AchievementTier] = &[
    tier(1, "GitHub Member", "📅", "C0C0C0"),
    tier(2, "Dedicated", "📅", "20B2AA"),
    tier(5, "Veteran", "🎖️", "2E8B57"),
    tier(8, "OG Developer", "🎖️", "006400"),
    tier(10, "GitHub Pioneer", "🏅", "8B4513"),
];

/// Metric a tier was awarded for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Stars,
    Repositories,
    Followers,
    Languages,
    Forks,
    AccountAge
}

impl Metric {
    /// Threshold table associated with the metric.
    pub fn tiers(self) -> &'static [AchievementTier] {
        match self {
            Self::Stars => STAR_TIERS,
            Self::Repositories => REPOSITORY_TIERS,
            Self::Followers => FOLLOWER_TIERS,
            Self::Languages => LANGUAGE_TIERS,
            Self::Forks => FORK_TIERS,
            Self::AccountAge => ACCOUNT_AGE_TIERS
        }
    }
}

/// Tier awarded to a profile together with the value that earned it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub metric: Metric,
    pub tier:   AchievementTier,
    /// Human readable value such as `42 Stars` or `Since 2015`.
    pub value:  String
}

/// Metric values evaluated by [`classify_profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileMetrics {
    pub total_stars:    u64,
    pub original_repos: u64,
    pub followers:      u64,
    /// Number of distinct languages, not weighted.
    pub languages:      usize,
    pub total_forks:    u64,
    pub created_year:   i32,
    pub current_year:   i32
}

impl ProfileMetrics {
    /// Collects metric values from a profile and its aggregated statistics.
    ///
    /// `current_year` is supplied by the caller so classification stays
    /// deterministic.
    pub fn new(
        profile: &UserProfile,
        totals: &RepositoryTotals,
        total_stars: u64,
        languages: usize,
        current_year: i32
    ) -> Self {
        Self {
            total_stars,
            original_repos: totals.original_repos,
            followers: profile.followers,
            languages,
            total_forks: totals.forks,
            created_year: profile.created_at.year(),
            current_year
        }
    }

    /// Calendar years between account creation and `current_year`.
    ///
    /// Only the year components are compared, so an account created in
    /// December counts a full year on the following January 1st.
    pub fn years_active(&self) -> i64 {
        i64::from(self.current_year) - i64::from(self.created_year)
    }
}

/// Returns the highest tier in `tiers` whose minimum does not exceed `value`.
///
/// `tiers` must be sorted by ascending minimum.
///
/// # Examples
///
/// ```
/// use profile_readme::{STAR_TIERS, classify};
///
/// assert!(classify(0, STAR_TIERS,).is_none());
/// assert_eq!(classify(1, STAR_TIERS,).map(|tier| tier.label), Some("Star Gazer"));
/// assert_eq!(classify(75, STAR_TIERS,).map(|tier| tier.label), Some("Star Magnet"));
/// ```
pub fn classify(value: i64, tiers: &[AchievementTier]) -> Option<&AchievementTier> {
    tiers.iter().rev().find(|tier| value >= tier.minimum)
}

/// Evaluates all six metrics and returns the awarded achievements in a fixed
/// order: stars, repositories, followers, languages, forks, account age.
pub fn classify_profile(metrics: &ProfileMetrics) -> Vec<Achievement> {
    let candidates = [
        (Metric::Stars, saturating(metrics.total_stars), format!("{} Stars", metrics.total_stars)),
        (
            Metric::Repositories,
            saturating(metrics.original_repos),
            format!("{} Repos", metrics.original_repos)
        ),
        (
            Metric::Followers,
            saturating(metrics.followers),
            format!("{} Followers", metrics.followers)
        ),
        (
            Metric::Languages,
            i64::try_from(metrics.languages).unwrap_or(i64::MAX),
            format!("{} Languages", metrics.languages)
        ),
        (Metric::Forks, saturating(metrics.total_forks), format!("{} Forks", metrics.total_forks)),
        (Metric::AccountAge, metrics.years_active(), format!("Since {}", metrics.created_year)),
    ];

    candidates
        .into_iter()
        .filter_map(|(metric, value, label)| {
            classify(value, metric.tiers()).map(|tier| Achievement {
                metric,
                tier: *tier,
                value: label
            })
        })
        .collect()
}

fn saturating(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics() -> ProfileMetrics {
        ProfileMetrics {
            total_stars:    0,
            original_repos: 0,
            followers:      0,
            languages:      0,
            total_forks:    0,
            created_year:   2024,
            current_year:   2024
        }
    }

    #[test]
    fn every_table_is_strictly_ascending() {
        for table in [
            STAR_TIERS,
            REPOSITORY_TIERS,
            FOLLOWER_TIERS,
            LANGUAGE_TIERS,
            FORK_TIERS,
            ACCOUNT_AGE_TIERS
        ] {
            assert!(table.windows(2).all(|pair| pair[0].minimum < pair[1].minimum));
        }
    }

    #[test]
    fn classify_selects_highest_reached_tier() {
        assert!(classify(0, STAR_TIERS).is_none());
        assert!(classify(-5, STAR_TIERS).is_none());
        assert_eq!(classify(1, STAR_TIERS).map(|tier| tier.label), Some("Star Gazer"));
        assert_eq!(classify(99, STAR_TIERS).map(|tier| tier.label), Some("Star Magnet"));
        assert_eq!(classify(100, STAR_TIERS).map(|tier| tier.label), Some("Star Master"));
        assert_eq!(classify(1000, STAR_TIERS).map(|tier| tier.label), Some("Star Legend"));
        assert_eq!(classify(i64::MAX, STAR_TIERS).map(|tier| tier.label), Some("Star Legend"));
    }

    #[test]
    fn classify_handles_empty_table() {
        assert!(classify(10, &[]).is_none());
    }

    #[test]
    fn empty_profile_earns_nothing() {
        assert!(classify_profile(&metrics()).is_empty());
    }

    #[test]
    fn achievements_carry_value_strings_in_fixed_order() {
        let metrics = ProfileMetrics {
            total_stars: 42,
            original_repos: 7,
            followers: 3,
            languages: 5,
            total_forks: 120,
            created_year: 2015,
            current_year: 2024
        };

        let achievements = classify_profile(&metrics);
        let summary: Vec<(Metric, &str, &str)> = achievements
            .iter()
            .map(|achievement| (achievement.metric, achievement.tier.label, achievement.value.as_str()))
            .collect();

        assert_eq!(summary, vec![
            (Metric::Stars, "Star Collector", "42 Stars"),
            (Metric::Repositories, "Creator", "7 Repos"),
            (Metric::Followers, "Friendly Face", "3 Followers"),
            (Metric::Languages, "Polyglot", "5 Languages"),
            (Metric::Forks, "Fork Master", "120 Forks"),
            (Metric::AccountAge, "OG Developer", "Since 2015"),
        ]);
    }

    #[test]
    fn account_age_uses_calendar_years() {
        let metrics = ProfileMetrics {
            created_year: 2023,
            current_year: 2024,
            ..metrics()
        };
        assert_eq!(metrics.years_active(), 1);

        let achievements = classify_profile(&metrics);
        assert_eq!(achievements.len(), 1);
        assert_eq!(achievements[0].tier.label, "GitHub Member");
        assert_eq!(achievements[0].value, "Since 2023");
    }

    #[test]
    fn future_creation_year_earns_no_age_tier() {
        let metrics = ProfileMetrics {
            created_year: 2030,
            current_year: 2024,
            ..metrics()
        };
        assert!(classify_profile(&metrics).is_empty());
    }
}
