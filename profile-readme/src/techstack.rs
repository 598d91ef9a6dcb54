// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Tech-stack detection for the generated document.
//!
//! Languages map to badges through a fixed lookup table. Frameworks and tools
//! are inferred by matching keyword patterns against repository names,
//! descriptions and topics; each pattern contributes at most one badge no
//! matter how many repositories match it.

use std::sync::LazyLock;

use regex::Regex;

use crate::{badge::SkillBadge, model::RepositoryRecord};

const fn skill(
    label: &'static str,
    color: &'static str,
    logo: &'static str,
    logo_color: &'static str
) -> SkillBadge {
    SkillBadge {
        label,
        color,
        logo,
        logo_color
    }
}

/// Returns the badge for a language reported by the forge.
pub fn language_badge(language: &str) -> Option<SkillBadge> {
    let badge = match language {
        "JavaScript" => skill("JavaScript", "F7DF1E", "javascript", "black"),
        "TypeScript" => skill("TypeScript", "3178C6", "typescript", "white"),
        "Python" => skill("Python", "3776AB", "python", "white"),
        "Java" => skill("Java", "ED8B00", "openjdk", "white"),
        "C++" => skill("C++", "00599C", "cplusplus", "white"),
        "C" => skill("C", "A8B9CC", "c", "black"),
        "C#" => skill("C#", "239120", "csharp", "white"),
        "Go" => skill("Go", "00ADD8", "go", "white"),
        "Rust" => skill("Rust", "000000", "rust", "white"),
        "Ruby" => skill("Ruby", "CC342D", "ruby", "white"),
        "PHP" => skill("PHP", "777BB4", "php", "white"),
        "Swift" => skill("Swift", "F05138", "swift", "white"),
        "Kotlin" => skill("Kotlin", "7F52FF", "kotlin", "white"),
        "Dart" => skill("Dart", "0175C2", "dart", "white"),
        "Scala" => skill("Scala", "DC322F", "scala", "white"),
        "R" => skill("R", "276DC3", "r", "white"),
        "Perl" => skill("Perl", "39457E", "perl", "white"),
        "Haskell" => skill("Haskell", "5D4F85", "haskell", "white"),
        "Elixir" => skill("Elixir", "4B275F", "elixir", "white"),
        "Shell" => skill("Shell", "4EAA25", "gnubash", "white"),
        "Lua" => skill("Lua", "2C2D72", "lua", "white"),
        "Zig" => skill("Zig", "F7A41D", "zig", "black"),
        "Nim" => skill("Nim", "FFE953", "nim", "black"),
        "HTML" => skill("HTML5", "E34F26", "html5", "white"),
        "CSS" => skill("CSS3", "1572B6", "css3", "white"),
        "SCSS" => skill("Sass", "CC6699", "sass", "white"),
        "Vue" => skill("Vue.js", "4FC08D", "vuedotjs", "white"),
        "Svelte" => skill("Svelte", "FF3E00", "svelte", "white"),
        "Jupyter Notebook" | "Jupyter" => skill("Jupyter", "F37626", "jupyter", "white"),
        "Dockerfile" => skill("Docker", "2496ED", "docker", "white"),
        "HCL" => skill("Terraform", "7B42BC", "terraform", "white"),
        "Nix" => skill("Nix", "5277C3", "nixos", "white"),
        "PowerShell" => skill("PowerShell", "5391FE", "powershell", "white"),
        _ => return None
    };
    Some(badge)
}

/// Keyword patterns matched against lowercased repository text.
///
/// `git` must not be followed by `hub`; the regex engine has no look-around,
/// so the negation is spelled out.
const TOOL_PATTERNS: &[(&str, SkillBadge)] = &[
    ("react", skill("React", "61DAFB", "react", "black")),
    (r"next\.?js|nextjs", skill("Next.js", "000000", "nextdotjs", "white")),
    ("angular", skill("Angular", "DD0031", "angular", "white")),
    ("vue", skill("Vue.js", "4FC08D", "vuedotjs", "white")),
    ("svelte", skill("Svelte", "FF3E00", "svelte", "white")),
    ("node", skill("Node.js", "339933", "nodedotjs", "white")),
    ("express", skill("Express", "000000", "express", "white")),
    ("django", skill("Django", "092E20", "django", "white")),
    ("flask", skill("Flask", "000000", "flask", "white")),
    ("fastapi", skill("FastAPI", "009688", "fastapi", "white")),
    ("spring", skill("Spring", "6DB33F", "spring", "white")),
    ("rails", skill("Rails", "CC0000", "rubyonrails", "white")),
    ("docker", skill("Docker", "2496ED", "docker", "white")),
    ("kubernetes|k8s", skill("Kubernetes", "326CE5", "kubernetes", "white")),
    ("terraform", skill("Terraform", "7B42BC", "terraform", "white")),
    ("aws", skill("AWS", "232F3E", "amazonwebservices", "white")),
    ("gcp|google.cloud", skill("GCP", "4285F4", "googlecloud", "white")),
    ("azure", skill("Azure", "0078D4", "microsoftazure", "white")),
    ("firebase", skill("Firebase", "FFCA28", "firebase", "black")),
    ("mongo", skill("MongoDB", "47A248", "mongodb", "white")),
    ("postgres", skill("PostgreSQL", "4169E1", "postgresql", "white")),
    ("mysql", skill("MySQL", "4479A1", "mysql", "white")),
    ("redis", skill("Redis", "DC382D", "redis", "white")),
    ("graphql", skill("GraphQL", "E10098", "graphql", "white")),
    ("tailwind", skill("Tailwind CSS", "06B6D4", "tailwindcss", "white")),
    ("bootstrap", skill("Bootstrap", "7952B3", "bootstrap", "white")),
    (r"tensorflow|\btf\b", skill("TensorFlow", "FF6F00", "tensorflow", "white")),
    ("pytorch", skill("PyTorch", "EE4C2C", "pytorch", "white")),
    ("flutter", skill("Flutter", "02569B", "flutter", "white")),
    ("electron", skill("Electron", "47848F", "electron", "white")),
    ("git(?:$|[^h]|h(?:$|[^u])|hu(?:$|[^b]))", skill("Git", "F05032", "git", "white")),
    ("linux", skill("Linux", "FCC624", "linux", "black")),
];

static TOOL_MATCHERS: LazyLock<Vec<(Regex, SkillBadge)>> = LazyLock::new(|| {
    TOOL_PATTERNS
        .iter()
        .map(|(pattern, badge)| {
            let regex = Regex::new(pattern).expect("tool patterns are valid regular expressions");
            (regex, *badge)
        })
        .collect()
});

/// Badges for the top `limit` languages that have a known badge.
///
/// Languages without a badge still consume a slot of the limit.
pub fn language_badges<'a, I>(languages: I, limit: usize) -> Vec<SkillBadge>
where
    I: IntoIterator<Item = &'a str>
{
    languages
        .into_iter()
        .take(limit)
        .filter_map(language_badge)
        .collect()
}

/// Infers framework and tool badges from repository metadata.
///
/// Matching is case-insensitive and runs over the names, descriptions and
/// topics of every repository. Badges are returned in pattern order.
pub fn infer_tools(repositories: &[RepositoryRecord]) -> Vec<SkillBadge> {
    let corpus = repositories
        .iter()
        .map(|repository| {
            format!(
                "{} {} {}",
                repository.name,
                repository.description.as_deref().unwrap_or_default(),
                repository.topics.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase();

    TOOL_MATCHERS
        .iter()
        .filter(|(regex, _)| regex.is_match(&corpus))
        .map(|(_, badge)| *badge)
        .collect()
}
