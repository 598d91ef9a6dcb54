// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use profile_readme::{
    Profile, ProfileReport, RenderOptions, RepositoryRecord, UserProfile, aggregate_languages,
    escape_badge_text, infer_tools, render_document,
};

const LANGUAGES: [&str; 8] = ["Rust", "Go", "TypeScript", "Python", "C", "Shell", "HTML", "Zig"];
const TOPICS: [&str; 6] = ["docker", "kubernetes", "react", "postgres", "cli", "github-actions"];

fn repositories(count: usize,) -> Vec<RepositoryRecord,>
{
    (0..count)
        .map(|index| RepositoryRecord {
            name:              format!("project-{index}"),
            description:       Some(format!("Service number {index} | built with care"),),
            language:          (index % 5 != 0).then(|| LANGUAGES[index % LANGUAGES.len()].to_owned(),),
            stargazers_count:  (index * 37 % 500) as u64,
            forks_count:       (index % 11) as u64,
            open_issues_count: (index % 4) as u64,
            fork:              index % 7 == 0,
            updated_at:        Utc.timestamp_opt(1_700_000_000 - index as i64 * 3_600, 0,).unwrap(),
            topics:            vec![TOPICS[index % TOPICS.len()].to_owned()],
            html_url:          format!("https://github.com/octocat/project-{index}"),
            size:              Some((index * 131 % 10_000) as u64,),
        },)
        .collect()
}

fn user() -> UserProfile
{
    UserProfile {
        login:            "octocat".to_owned(),
        name:             Some("The Octocat".to_owned(),),
        bio:              Some("Building developer tools".to_owned(),),
        avatar_url:       "https://avatars.example.com/octocat".to_owned(),
        public_repos:     100,
        followers:        4_200,
        following:        9,
        company:          Some("GitHub".to_owned(),),
        location:         Some("San Francisco".to_owned(),),
        blog:             Some("https://github.blog".to_owned(),),
        twitter_username: Some("github".to_owned(),),
        email:            None,
        hireable:         Some(true,),
        created_at:       Utc.with_ymd_and_hms(2011, 1, 25, 18, 44, 36,).unwrap(),
    }
}

fn benchmark_language_aggregation(c: &mut Criterion,)
{
    let repositories = repositories(100,);

    c.bench_function("aggregate_languages_100", |b| {
        b.iter(|| aggregate_languages(black_box(&repositories,),),)
    },);
}

fn benchmark_tool_inference(c: &mut Criterion,)
{
    let repositories = repositories(100,);

    c.bench_function("infer_tools_100", |b| b.iter(|| infer_tools(black_box(&repositories,),),),);
}

fn benchmark_badge_escaping(c: &mut Criterion,)
{
    c.bench_function("escape_badge_text", |b| {
        b.iter(|| escape_badge_text(black_box("🌟 Star Master-135 Stars_42.5%",),).into_owned(),)
    },);
}

fn benchmark_document_rendering(c: &mut Criterion,)
{
    let report = ProfileReport::build(
        Profile {
            user:         user(),
            repositories: repositories(100,),
        },
        6,
        2025,
    );
    let options = RenderOptions::default();

    c.bench_function("render_document_100", |b| {
        b.iter(|| render_document(black_box(&report,), black_box(&options,),),)
    },);
}

criterion_group!(
    benches,
    benchmark_language_aggregation,
    benchmark_tool_inference,
    benchmark_badge_escaping,
    benchmark_document_rendering
);
criterion_main!(benches);
