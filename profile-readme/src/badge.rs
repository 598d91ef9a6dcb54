// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Badge URL construction.
//!
//! Badges are external image references; nothing is rendered locally. Static
//! badges follow the shields.io path format `/badge/LABEL-MESSAGE-COLOR`,
//! where literal dashes and underscores must be doubled and spaces become
//! underscores. URL-reserved characters are percent-encoded on top of that so
//! values such as `42.5%` or labels such as `C#` stay intact.

use std::borrow::Cow;

use crate::config::BadgeStyle;

const SHIELDS_BADGE_BASE: &str = "https://img.shields.io/badge";
const README_STATS_BASE: &str = "https://github-readme-stats.vercel.app/api";
const STREAK_STATS_BASE: &str = "https://streak-stats.demolab.com";
const PROFILE_VIEWS_BASE: &str = "https://komarev.com/ghpvc/";

/// Logo-only badge for a language, framework or tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillBadge {
    /// Text shown on the badge.
    pub label:      &'static str,
    /// Background color as a bare hex triplet.
    pub color:      &'static str,
    /// simple-icons slug.
    pub logo:       &'static str,
    pub logo_color: &'static str
}

impl SkillBadge {
    /// Builds the shields.io URL for the badge.
    pub fn url(&self, style: BadgeStyle) -> String {
        format!(
            "{SHIELDS_BADGE_BASE}/{}-{}?logo={}&logoColor={}&style={}",
            escape_badge_text(self.label),
            self.color,
            self.logo,
            self.logo_color,
            style.as_query()
        )
    }

    /// Markdown image reference for the badge.
    pub fn markdown(&self, style: BadgeStyle) -> String {
        image("", &self.url(style))
    }
}

/// Escapes a label or message for the shields.io static badge path.
///
/// # Examples
///
/// ```
/// use profile_readme::escape_badge_text;
///
/// assert_eq!(escape_badge_text("Total Stars"), "Total_Stars");
/// assert_eq!(escape_badge_text("snake_case-name"), "snake__case--name");
/// assert_eq!(escape_badge_text("42.5%"), "42.5%25");
/// ```
pub fn escape_badge_text(value: &str) -> Cow<'_, str> {
    if !value
        .chars()
        .any(|character| matches!(character, '-' | '_' | ' ' | '%' | '#' | '?' | '/' | '&'))
    {
        return Cow::Borrowed(value);
    }

    let mut escaped = String::with_capacity(value.len() + 8);
    for character in value.chars() {
        match character {
            '-' => escaped.push_str("--"),
            '_' => escaped.push_str("__"),
            ' ' => escaped.push('_'),
            '%' => escaped.push_str("%25"),
            '#' => escaped.push_str("%23"),
            '?' => escaped.push_str("%3F"),
            '/' => escaped.push_str("%2F"),
            '&' => escaped.push_str("%26"),
            other => escaped.push(other)
        }
    }
    Cow::Owned(escaped)
}

/// Builds a static label/value badge URL.
///
/// `color` is a hex triplet with or without the leading `#`. When `logo` is
/// provided the icon is rendered in white.
pub fn static_badge_url(
    label: &str,
    value: &str,
    color: &str,
    style: BadgeStyle,
    logo: Option<&str>
) -> String {
    let mut url = format!(
        "{SHIELDS_BADGE_BASE}/{}-{}-{}?style={}",
        escape_badge_text(label),
        escape_badge_text(value),
        color.trim_start_matches('#'),
        style.as_query()
    );
    if let Some(logo) = logo {
        url.push_str("&logo=");
        url.push_str(logo);
        url.push_str("&logoColor=white");
    }
    url
}

/// Markdown image with optional alt text.
pub fn image(alt: &str, url: &str) -> String {
    format!("![{alt}]({url})")
}

/// Markdown image wrapped in a link.
pub fn linked_image(alt: &str, url: &str, href: &str) -> String {
    format!("[{}]({href})", image(alt, url))
}

/// Social-style follower counter linking to the profile.
pub fn followers_badge(login: &str) -> String {
    linked_image(
        "GitHub followers",
        &format!("https://img.shields.io/github/followers/{login}?label=Follow&style=social"),
        &format!("https://github.com/{login}")
    )
}

/// Social-style follower counter for a Twitter / X handle.
pub fn twitter_follow_badge(handle: &str) -> String {
    linked_image(
        "Twitter Follow",
        &format!("https://img.shields.io/twitter/follow/{handle}?style=social"),
        &format!("https://twitter.com/{handle}")
    )
}

pub fn profile_views_badge(login: &str) -> String {
    image(
        "Profile Views",
        &format!("{PROFILE_VIEWS_BASE}?username={login}&color=58a6ff&style=flat-square")
    )
}

/// Contact badge linking to `href`.
pub fn contact_badge(label: &str, color: &str, logo: &str, href: &str, style: BadgeStyle) -> String {
    linked_image(
        label,
        &format!(
            "{SHIELDS_BADGE_BASE}/{}-{color}?style={}&logo={logo}&logoColor=white",
            escape_badge_text(label),
            style.as_query()
        ),
        href
    )
}

/// github-readme-stats summary card.
pub fn readme_stats_card_url(login: &str) -> String {
    format!("{README_STATS_BASE}?username={login}&show_icons=true&theme=github_dark&hide_border=true")
}

/// github-readme-stats compact top-languages card.
pub fn readme_stats_languages_url(login: &str) -> String {
    format!(
        "{README_STATS_BASE}/top-langs/?username={login}&layout=compact&theme=github_dark&hide_border=true"
    )
}

pub fn streak_card_url(login: &str) -> String {
    format!("{STREAK_STATS_BASE}/?user={login}&theme=github-dark-blue&hide_border=true")
}
