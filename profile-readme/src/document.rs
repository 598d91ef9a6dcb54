// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Markdown document generation for profile READMEs.
//!
//! Composes a [`ProfileReport`] into fixed sections: header, social badges,
//! about list, tech stack, top projects, stats, language shares, streak card,
//! achievements, contact badges and footer. Rendering is deterministic and
//! free of side effects.

use std::fmt;

use serde::Serialize;

use crate::{
    badge::{self, SkillBadge},
    config::{BadgeProvider, BadgeStyle, RenderOptions},
    model::RepositoryRecord,
    report::ProfileReport,
    techstack,
};

/// Tagline used when the profile has no bio.
const DEFAULT_TAGLINE: &str = "Passionate developer building awesome things.";
/// Languages considered for tech-stack badges.
const LANGUAGE_BADGE_LIMIT: usize = 12;
/// Languages shown in the share visualization.
const LANGUAGE_SHARE_LIMIT: usize = 8;
const MISSING_CELL: &str = "—";
const SECTION_RULE: &str = "---";
const WAVE_GIF: &str = "https://media.giphy.com/media/hvRJCLFzcasrR4ia7z/giphy.gif";
const FOOTER_WAVE: &str = "https://capsule-render.vercel.app/api?type=waving&color=gradient&customColorList=6,12,19&height=80&section=footer";

/// Markdown document as an ordered sequence of lines.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GeneratedDocument {
    lines: Vec<String>
}

impl GeneratedDocument {
    /// Lines of the document in order.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Joins the lines with `\n`.
    pub fn to_markdown(&self) -> String {
        self.lines.join("\n")
    }

    fn push(&mut self, line: impl Into<String>) {
        self.lines.push(line.into());
    }

    fn blank(&mut self) {
        self.lines.push(String::new());
    }

    fn heading(&mut self, title: &str) {
        self.push(SECTION_RULE);
        self.blank();
        self.push(format!("## {title}"));
        self.blank();
    }

    fn centered(&mut self, content: String) {
        self.push("<div align=\"center\">");
        self.blank();
        self.push(content);
        self.blank();
        self.push("</div>");
        self.blank();
    }
}

impl fmt::Display for GeneratedDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_markdown())
    }
}

/// Renders the profile document for `report`.
///
/// # Example
///
/// ```no_run
/// use profile_readme::{ProfileReport, RenderOptions, render_document};
///
/// # fn example(report: &ProfileReport) {
/// let document = render_document(report, &RenderOptions::default(),);
/// println!("{document}");
/// # }
/// ```
pub fn render_document(report: &ProfileReport, options: &RenderOptions) -> GeneratedDocument {
    let mut document = GeneratedDocument::default();

    write_header(&mut document, report);
    write_about(&mut document, report);
    write_tech_stack(&mut document, report, options.style);
    write_top_projects(&mut document, &report.top_projects);
    write_stats(&mut document, report, options);
    if options.streak {
        document.centered(format!(
            "<img src=\"{}\" alt=\"GitHub Streak\" />",
            badge::streak_card_url(&report.user.login)
        ));
    }
    write_achievements(&mut document, report, options.style);
    write_contact(&mut document, report, options.style);
    write_footer(&mut document);

    document
}

fn write_header(document: &mut GeneratedDocument, report: &ProfileReport) {
    let user = &report.user;

    document.push("<div align=\"center\">");
    document.blank();
    document.push(format!(
        "# Hi there, I'm {} <img src=\"{WAVE_GIF}\" width=\"30px\" />",
        user.display_name()
    ));
    document.blank();
    document.push(format!("### {}", user.bio.as_deref().unwrap_or(DEFAULT_TAGLINE)));
    document.blank();

    let mut social = vec![badge::followers_badge(&user.login)];
    if let Some(handle) = user.twitter_username.as_deref() {
        social.push(badge::twitter_follow_badge(handle));
    }
    social.push(badge::profile_views_badge(&user.login));
    document.push(social.join(" &nbsp; "));
    document.blank();
    document.push("</div>");
    document.blank();
}

fn write_about(document: &mut GeneratedDocument, report: &ProfileReport) {
    let user = &report.user;
    document.heading("🧑‍💻 About Me");

    let mut items = vec![format!(
        "🔭 I have **{}** public repositories on GitHub",
        report.repositories.len()
    )];
    if let Some(location) = user.location.as_deref() {
        items.push(format!("🌍 Based from {location}"));
    }
    items.push(format!("⭐ **{}** total stars earned across my projects", report.total_stars));
    items.push(format!(
        "👥 **{}** followers · **{}** following",
        user.followers, user.following
    ));
    if let Some(company) = user.company.as_deref() {
        items.push(format!("🏢 Working at **{company}**"));
    }
    if let Some(blog) = user.blog.as_deref() {
        items.push(format!("📝 Check out my blog/portfolio: [{blog}]({})", website_url(blog)));
    }
    if user.is_hireable() {
        items.push("💼 Open to new opportunities!".to_owned());
    }

    for item in items {
        document.push(format!("- {item}"));
    }
    document.blank();
}

fn write_tech_stack(document: &mut GeneratedDocument, report: &ProfileReport, style: BadgeStyle) {
    document.heading("🛠️ Tech Stack");

    let languages = techstack::language_badges(
        report.languages.iter().map(|stat| stat.name.as_str()),
        LANGUAGE_BADGE_LIMIT
    );
    if !languages.is_empty() {
        document.push("### Languages");
        document.push(join_badges(&languages, style));
        document.blank();
    }

    let tools = techstack::infer_tools(&report.repositories);
    if !tools.is_empty() {
        document.push("### Frameworks & Tools");
        document.push(join_badges(&tools, style));
        document.blank();
    }
}

fn join_badges(badges: &[SkillBadge], style: BadgeStyle) -> String {
    badges
        .iter()
        .map(|badge| badge.markdown(style))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_top_projects(document: &mut GeneratedDocument, projects: &[RepositoryRecord]) {
    if projects.is_empty() {
        return;
    }

    document.heading("🚀 Top Projects");
    document.push("| Project | Description | Stars | Language |");
    document.push("|---------|-------------|-------|----------|");
    for project in projects {
        let description = project
            .description
            .as_deref()
            .map_or_else(|| MISSING_CELL.to_owned(), escape_table_cell);
        document.push(format!(
            "| [**{}**]({}) | {} | ⭐ {} | {} |",
            project.name,
            project.html_url,
            description,
            project.stargazers_count,
            project.language.as_deref().unwrap_or(MISSING_CELL)
        ));
    }
    document.blank();
}

fn write_stats(document: &mut GeneratedDocument, report: &ProfileReport, options: &RenderOptions) {
    let login = &report.user.login;
    document.heading("📊 GitHub Stats");

    match options.provider {
        BadgeProvider::Shields => {
            let style = options.style;
            let badges = [
                ("Total Stars", report.total_stars, "58a6ff", "github"),
                ("Repositories", report.totals.original_repos, "3fb950", "bookmarks"),
                ("Followers", report.user.followers, "bc8cff", "people"),
                ("Forks", report.totals.forks, "d29922", "git"),
            ];
            document.centered(
                badges
                    .iter()
                    .map(|&(label, value, color, logo)| {
                        badge::image(
                            "",
                            &badge::static_badge_url(label, &value.to_string(), color, style, Some(logo))
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            );

            let shares: Vec<String> = report
                .languages
                .iter()
                .take(LANGUAGE_SHARE_LIMIT)
                .map(|stat| {
                    badge::image(
                        "",
                        &badge::static_badge_url(
                            &stat.name,
                            &format!("{:.1}%", stat.percentage),
                            stat.color,
                            style,
                            None
                        )
                    )
                })
                .collect();
            if !shares.is_empty() {
                document.centered(shares.join(" "));
            }
        }
        BadgeProvider::ReadmeStats => {
            document.centered(format!(
                "<img src=\"{}\" alt=\"GitHub Stats\" />",
                badge::readme_stats_card_url(login)
            ));
            if !report.languages.is_empty() {
                document.centered(format!(
                    "<img src=\"{}\" alt=\"Top Languages\" />",
                    badge::readme_stats_languages_url(login)
                ));
            }
        }
    }
}

fn write_achievements(document: &mut GeneratedDocument, report: &ProfileReport, style: BadgeStyle) {
    if report.achievements.is_empty() {
        return;
    }

    document.heading("🏆 GitHub Trophies");
    document.centered(
        report
            .achievements
            .iter()
            .map(|achievement| {
                let label = format!("{} {}", achievement.tier.icon, achievement.tier.label);
                badge::image(
                    "",
                    &badge::static_badge_url(&label, &achievement.value, achievement.tier.color, style, None)
                )
            })
            .collect::<Vec<_>>()
            .join(" ")
    );
}

fn write_contact(document: &mut GeneratedDocument, report: &ProfileReport, style: BadgeStyle) {
    let user = &report.user;
    document.heading("📫 Connect with Me");

    let mut badges = vec![badge::contact_badge(
        "GitHub",
        "181717",
        "github",
        &format!("https://github.com/{}", user.login),
        style
    )];
    if let Some(handle) = user.twitter_username.as_deref() {
        badges.push(badge::contact_badge(
            "Twitter",
            "1DA1F2",
            "twitter",
            &format!("https://twitter.com/{handle}"),
            style
        ));
    }
    if let Some(blog) = user.blog.as_deref() {
        badges.push(badge::contact_badge("Website", "4285F4", "googlechrome", &website_url(blog), style));
    }
    if let Some(email) = user.email.as_deref() {
        badges.push(badge::contact_badge("Email", "D14836", "gmail", &format!("mailto:{email}"), style));
    }

    document.push(badges.join(" "));
    document.blank();
}

fn write_footer(document: &mut GeneratedDocument) {
    document.push(SECTION_RULE);
    document.blank();
    document.push("<div align=\"center\">");
    document.blank();
    document.push("**⭐ Star my repos if you find them useful!**");
    document.blank();
    document.push(format!("<img src=\"{FOOTER_WAVE}\" width=\"100%\" />"));
    document.blank();
    document.push("</div>");
}

/// Normalizes a blog reference to an `https://` URL.
fn website_url(blog: &str) -> String {
    let trimmed = blog.trim();
    let host = trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed);
    format!("https://{host}")
}

fn escape_table_cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        github::{Profile, tests::user},
        model::UserProfile,
        stats::tests::repository,
    };

    fn render(user: UserProfile, repositories: Vec<RepositoryRecord>, options: &RenderOptions) -> String {
        let report = ProfileReport::build(
            Profile {
                user,
                repositories
            },
            6,
            2024
        );
        render_document(&report, options).to_markdown()
    }

    fn full_user() -> UserProfile {
        UserProfile {
            name: Some("Octo Cat".to_owned()),
            bio: Some("Building tools for developers".to_owned()),
            followers: 150,
            following: 12,
            company: Some("GitHub".to_owned()),
            location: Some("San Francisco".to_owned()),
            blog: Some("http://octo.dev".to_owned()),
            twitter_username: Some("octo".to_owned()),
            email: Some("octo@example.com".to_owned()),
            hireable: Some(true),
            ..user("octocat")
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let repositories = vec![repository("docker-tools", Some("Go"), 12), repository("site", Some("HTML"), 3)];
        let options = RenderOptions::default();

        let first = render(full_user(), repositories.clone(), &options);
        let second = render(full_user(), repositories, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn minimal_profile_omits_optional_lines_and_tools() {
        let repositories = vec![repository("alpha", None, 0), repository("beta", None, 0)];
        let markdown = render(user("plain"), repositories, &RenderOptions::default());

        assert!(markdown.contains("# Hi there, I'm plain"));
        assert!(markdown.contains(&format!("### {DEFAULT_TAGLINE}")));
        assert!(!markdown.contains("Based from"));
        assert!(!markdown.contains("Working at"));
        assert!(!markdown.contains("blog/portfolio"));
        assert!(!markdown.contains("Open to new opportunities"));
        assert!(!markdown.contains("### Frameworks & Tools"));
        assert!(!markdown.contains("### Languages"));
        assert!(!markdown.contains("Twitter"));
        assert!(!markdown.contains("mailto:"));
    }

    #[test]
    fn full_profile_includes_optional_sections() {
        let mut project = repository("react-dashboard", Some("TypeScript"), 42);
        project.description = Some("Charts | tables".to_owned());
        let markdown = render(full_user(), vec![project], &RenderOptions::default());

        assert!(markdown.contains("# Hi there, I'm Octo Cat"));
        assert!(markdown.contains("### Building tools for developers"));
        assert!(markdown.contains("- 🌍 Based from San Francisco"));
        assert!(markdown.contains("- 🏢 Working at **GitHub**"));
        assert!(markdown.contains("[http://octo.dev](https://octo.dev)"));
        assert!(markdown.contains("- 💼 Open to new opportunities!"));
        assert!(markdown.contains("twitter.com/octo"));
        assert!(markdown.contains("(mailto:octo@example.com)"));
        assert!(markdown.contains("### Languages"));
        assert!(markdown.contains("### Frameworks & Tools"));
        assert!(markdown.contains("badge/React-61DAFB"));
        assert!(markdown.contains("| Charts \\| tables |"));
    }

    #[test]
    fn top_projects_table_lists_ranked_repositories() {
        let mut fork = repository("forked", None, 5);
        fork.fork = true;
        let repositories = vec![repository("popular", Some("Go"), 120), fork, repository("untyped", None, 10)];
        let markdown = render(user("gopher"), repositories, &RenderOptions::default());

        let popular = markdown.find("[**popular**]").expect("popular listed");
        let untyped = markdown.find("[**untyped**]").expect("untyped listed");
        assert!(popular < untyped);
        assert!(!markdown.contains("[**forked**]"));
        assert!(markdown.contains("| [**untyped**](https://github.com/octocat/untyped) | — | ⭐ 10 | — |"));
        assert!(markdown.contains("badge/Total_Stars-135-58a6ff"));
        assert!(markdown.contains("badge/Repositories-2-3fb950"));
        assert!(markdown.contains("badge/Go-100.0%25-00ADD8"));
        assert!(!markdown.contains("github-readme-stats"));
    }

    #[test]
    fn empty_repository_list_skips_projects_table() {
        let markdown = render(user("empty"), Vec::new(), &RenderOptions::default());
        assert!(!markdown.contains("Top Projects"));
        assert!(!markdown.contains("GitHub Trophies"));
        assert!(markdown.contains("I have **0** public repositories"));
    }

    #[test]
    fn achievements_render_one_badge_per_tier() {
        let repositories = vec![repository("popular", Some("Go"), 120)];
        let markdown = render(user("gopher"), repositories, &RenderOptions::default());

        assert!(markdown.contains("## 🏆 GitHub Trophies"));
        assert!(markdown.contains("Star_Master-120_Stars-FF4500"));
        assert!(markdown.contains("First_Repo-1_Repos-C0C0C0"));
        assert!(markdown.contains("Coder-1_Languages-C0C0C0"));
    }

    #[test]
    fn readme_stats_provider_uses_cards() {
        let options = RenderOptions {
            provider: BadgeProvider::ReadmeStats,
            ..RenderOptions::default()
        };
        let repositories = vec![repository("popular", Some("Go"), 120)];
        let markdown = render(user("gopher"), repositories, &options);

        assert!(markdown.contains("github-readme-stats.vercel.app/api?username=gopher"));
        assert!(markdown.contains("/top-langs/?username=gopher"));
        assert!(!markdown.contains("badge/Total_Stars"));
        assert!(!markdown.contains("badge/Go-100.0"));
    }

    #[test]
    fn style_and_streak_options_apply() {
        let options = RenderOptions {
            style: BadgeStyle::Flat,
            streak: false,
            ..RenderOptions::default()
        };
        let markdown = render(user("gopher"), vec![repository("popular", Some("Go"), 1)], &options);

        assert!(markdown.contains("style=flat)"));
        assert!(!markdown.contains("for-the-badge"));
        assert!(!markdown.contains("streak-stats"));
    }

    #[test]
    fn document_ends_with_footer() {
        let document = render_document(
            &ProfileReport::build(
                Profile {
                    user:         user("gopher"),
                    repositories: Vec::new()
                },
                6,
                2024
            ),
            &RenderOptions::default()
        );

        assert_eq!(document.lines().last().map(String::as_str), Some("</div>"));
        assert_eq!(document.to_string(), document.to_markdown());
    }

    #[test]
    fn website_url_normalizes_scheme() {
        assert_eq!(website_url("http://example.com"), "https://example.com");
        assert_eq!(website_url("https://example.com"), "https://example.com");
        assert_eq!(website_url("example.com"), "https://example.com");
    }
}
