// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Statistics derived from a profile's repository list.
//!
//! Every function in this module is pure and operates on the repository
//! sequence in API order. Forked repositories count toward the star total but
//! never toward original-repository counters or the top-projects ranking.

use serde::Serialize;

use crate::model::RepositoryRecord;

/// Fallback colors assigned by rank to languages missing from the color table.
const FALLBACK_PALETTE: [&str; 10] = [
    "#58a6ff", "#3fb950", "#d29922", "#f85149", "#bc8cff", "#f778ba", "#79c0ff", "#7ee787",
    "#e3b341", "#ff7b72",
];

/// Percentage shares are distributed in tenths of a percent.
const TENTHS_TOTAL: u64 = 1000;

/// Aggregated share of a single language across all repositories.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageStat {
    /// Language name as reported by the forge.
    pub name:       String,
    /// Sum of repository weights attributed to the language.
    pub weight:     u64,
    /// Share of the total weight, rounded to one decimal place.
    pub percentage: f64,
    /// Display color as `#rrggbb`.
    pub color:      &'static str
}

/// Counters accumulated in a single pass over the repository list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RepositoryTotals {
    /// Sum of fork counts across all repositories.
    pub forks:          u64,
    /// Sum of open issue counts across all repositories.
    pub open_issues:    u64,
    /// Number of repositories that are not forks.
    pub original_repos: u64
}

impl RepositoryTotals {
    /// Accumulates the counters for `repositories`.
    pub fn from_repositories(repositories: &[RepositoryRecord]) -> Self {
        repositories
            .iter()
            .fold(Self::default(), |mut totals, repository| {
                totals.forks += repository.forks_count;
                totals.open_issues += repository.open_issues_count;
                if !repository.fork {
                    totals.original_repos += 1;
                }
                totals
            })
    }
}

/// Sums star counts across every repository, forks included.
pub fn total_stars(repositories: &[RepositoryRecord]) -> u64 {
    repositories
        .iter()
        .map(|repository| repository.stargazers_count)
        .sum()
}

/// Aggregates language shares weighted by repository size.
///
/// Repositories without a primary language are ignored. A repository whose
/// size is absent or zero weighs `1` so single-file projects still register
/// their language. Results are sorted by descending weight; equal weights
/// keep the order in which the languages first appeared.
///
/// Shares are rounded to one decimal place with the largest-remainder method,
/// so they always total exactly `100.0` and each share stays within `0.1` of
/// its exact value. This differs from rounding each share on its own: three
/// equal languages yield `33.4`, `33.3` and `33.3` rather than `33.3` three
/// times. The leftover tenth goes to the largest remainder, and ties go to
/// the heavier language.
///
/// # Examples
///
/// ```
/// use profile_readme::aggregate_languages;
///
/// let languages = aggregate_languages(&[],);
/// assert!(languages.is_empty());
/// ```
pub fn aggregate_languages(repositories: &[RepositoryRecord]) -> Vec<LanguageStat> {
    let mut weights: Vec<(&str, u64)> = Vec::new();

    for repository in repositories {
        let Some(language) = repository.language.as_deref() else {
            continue;
        };
        let weight = repository.size.filter(|size| *size > 0).unwrap_or(1);

        match weights.iter_mut().find(|(name, _)| *name == language) {
            Some((_, total)) => *total += weight,
            None => weights.push((language, weight))
        }
    }

    weights.sort_by(|left, right| right.1.cmp(&left.1));

    let total = weights.iter().map(|(_, weight)| weight).sum::<u64>().max(1);
    let tenths = distribute_tenths(&weights, total);

    weights
        .into_iter()
        .zip(tenths)
        .enumerate()
        .map(|(rank, ((name, weight), tenths))| LanguageStat {
            name: name.to_owned(),
            weight,
            percentage: tenths as f64 / 10.0,
            color: language_color(name).unwrap_or(FALLBACK_PALETTE[rank % FALLBACK_PALETTE.len()])
        })
        .collect()
}

fn distribute_tenths(weights: &[(&str, u64)], total: u64) -> Vec<u64> {
    if weights.is_empty() {
        return Vec::new();
    }

    let scaled: Vec<(u64, u64)> = weights
        .iter()
        .map(|(_, weight)| {
            let product = u128::from(*weight) * u128::from(TENTHS_TOTAL);
            let total = u128::from(total);
            ((product / total) as u64, (product % total) as u64)
        })
        .collect();

    let mut tenths: Vec<u64> = scaled.iter().map(|(floor, _)| *floor).collect();
    let assigned: u64 = tenths.iter().sum();
    let missing = TENTHS_TOTAL.saturating_sub(assigned) as usize;

    let mut by_remainder: Vec<usize> = (0..scaled.len()).collect();
    by_remainder.sort_by(|left, right| scaled[*right].1.cmp(&scaled[*left].1));
    for index in by_remainder.into_iter().take(missing) {
        tenths[index] += 1;
    }

    tenths
}

/// Selects up to `limit` original repositories ranked by stars.
///
/// Ties on star count are broken by the most recent update.
pub fn top_projects(repositories: &[RepositoryRecord], limit: usize) -> Vec<&RepositoryRecord> {
    let mut ranked: Vec<&RepositoryRecord> = repositories
        .iter()
        .filter(|repository| !repository.fork)
        .collect();

    ranked.sort_by(|left, right| {
        right
            .stargazers_count
            .cmp(&left.stargazers_count)
            .then_with(|| right.updated_at.cmp(&left.updated_at))
    });
    ranked.truncate(limit);
    ranked
}

/// Returns the canonical display color for well-known languages.
pub fn language_color(name: &str) -> Option<&'static str> {
    let color = match name {
        "JavaScript" => "#f1e05a",
        "TypeScript" => "#3178c6",
        "Python" => "#3572A5",
        "Java" => "#b07219",
        "C++" => "#f34b7d",
        "C" => "#555555",
        "C#" => "#178600",
        "Go" => "#00ADD8",
        "Rust" => "#dea584",
        "Ruby" => "#701516",
        "PHP" => "#4F5D95",
        "Swift" => "#F05138",
        "Kotlin" => "#A97BFF",
        "Dart" => "#00B4AB",
        "HTML" => "#e34c26",
        "CSS" => "#563d7c",
        "Shell" => "#89e051",
        "Lua" => "#000080",
        "Scala" => "#c22d40",
        "R" => "#198CE7",
        "Perl" => "#0298c3",
        "Haskell" => "#5e5086",
        "Elixir" => "#6e4a7e",
        "Clojure" => "#db5855",
        "Vim Script" | "Vim" => "#199f4b",
        "Vue" => "#41b883",
        "Svelte" => "#ff3e00",
        "SCSS" => "#c6538c",
        "PowerShell" => "#012456",
        "Dockerfile" => "#384d54",
        "Jupyter Notebook" | "Jupyter" => "#DA5B0B",
        "Objective-C" => "#438eff",
        "Zig" => "#ec915c",
        "Nim" => "#ffc200",
        "OCaml" => "#3be133",
        "Erlang" => "#B83998",
        "Assembly" => "#6E4C13",
        _ => return None
    };
    Some(color)
}
