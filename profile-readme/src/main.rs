// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line interface for the profile README generator.
//!
//! The CLI exposes subcommands for rendering the Markdown document and for
//! printing the aggregated profile report as JSON.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process,
    time::Duration,
};

use clap::{ArgAction, Args, Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use profile_readme::{
    BadgeProvider, BadgeStyle, Error, GeneratedDocument, GitHubClient, ProfileReport,
    RenderOptions, Username, build_profile_report, generate_profile_document, io_error,
    load_options,
};
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Command line interface for generating GitHub profile READMEs.
#[derive(Debug, Parser,)]
#[command(name = "profile-readme", version, about = "Generate GitHub profile README documents")]
struct Cli
{
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand,)]
/// Supported commands exposed by the CLI.
enum Command
{
    /// Render the Markdown profile document.
    Generate(GenerateArgs,),
    /// Print the aggregated profile report as JSON.
    Summary(SummaryArgs,),
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `generate` subcommand.
struct GenerateArgs
{
    /// GitHub username to generate the document for.
    #[arg(value_name = "USERNAME")]
    username: String,

    /// Path to an optional YAML file with render options.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Badge service used for the stats section (shields, readme-stats).
    #[arg(long = "provider", value_name = "PROVIDER")]
    provider: Option<BadgeProvider,>,

    /// shields.io style preset (flat, flat-square, plastic, for-the-badge).
    #[arg(long = "style", value_name = "STYLE")]
    style: Option<BadgeStyle,>,

    /// Number of projects listed in the top-projects table.
    #[arg(long = "top", value_name = "COUNT", value_parser = clap::value_parser!(u8).range(1..=20))]
    top: Option<u8,>,

    /// Omit the contribution streak card.
    #[arg(long = "no-streak", action = ArgAction::SetTrue)]
    no_streak: bool,

    /// Write the document to a file instead of stdout.
    #[arg(long = "output", value_name = "PATH")]
    output: Option<PathBuf,>,
}

#[derive(Debug, Args,)]
/// Arguments accepted by the `summary` subcommand.
struct SummaryArgs
{
    /// GitHub username to summarize.
    #[arg(value_name = "USERNAME")]
    username: String,

    /// Path to an optional YAML file with render options.
    #[arg(long = "config", value_name = "PATH")]
    config: Option<PathBuf,>,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main()
{
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr,),)
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn",),),)
        .init();

    if let Err(error,) = run(Cli::parse(),).await {
        eprintln!("{}", error.to_display_string());
        process::exit(1,);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from option loading, fetching and output.
async fn run(cli: Cli,) -> Result<(), Error,>
{
    match cli.command {
        Command::Generate(args,) => run_generate(args,).await,
        Command::Summary(args,) => run_summary(args,).await,
    }
}

async fn run_generate(args: GenerateArgs,) -> Result<(), Error,>
{
    let login = Username::parse(&args.username,)?;
    let options = resolve_options(&args,)?;
    let client = build_client(&options,)?;

    let spinner = spinner(format!("Fetching GitHub profile for {login}..."),);
    let result = generate_profile_document(&client, &login, &options,).await;
    spinner.finish_and_clear();
    let document = result?;

    match args.output.as_deref() {
        Some(path,) => write_document_file(path, &document,),
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            writeln!(handle, "{document}").map_err(|source| io_error(Path::new("<stdout>",), source,),)
        }
    }
}

async fn run_summary(args: SummaryArgs,) -> Result<(), Error,>
{
    let login = Username::parse(&args.username,)?;
    let options = match args.config.as_deref() {
        Some(path,) => load_options(path,)?,
        None => RenderOptions::default(),
    };
    let client = build_client(&options,)?;

    let spinner = spinner(format!("Fetching GitHub profile for {login}..."),);
    let result = build_profile_report(&client, &login, &options,).await;
    spinner.finish_and_clear();
    let report = result?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_report(&mut handle, &report, args.pretty,)
}

/// Loads the optional config file and applies command line overrides.
fn resolve_options(args: &GenerateArgs,) -> Result<RenderOptions, Error,>
{
    let mut options = match args.config.as_deref() {
        Some(path,) => {
            debug!("Loading render options from {}", path.display());
            load_options(path,)?
        }
        None => RenderOptions::default(),
    };

    if let Some(provider,) = args.provider {
        options.provider = provider;
    }
    if let Some(style,) = args.style {
        options.style = style;
    }
    if let Some(top,) = args.top {
        options.top_projects = top;
    }
    if args.no_streak {
        options.streak = false;
    }

    Ok(options,)
}

fn build_client(options: &RenderOptions,) -> Result<GitHubClient, Error,>
{
    match options.api_base_url.as_deref() {
        Some(base_url,) => GitHubClient::with_base_url(base_url,),
        None => GitHubClient::new(),
    }
}

fn spinner(message: String,) -> ProgressBar
{
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.yellow} [{elapsed_precise}] {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_spinner(),),
    );
    pb.set_message(message,);
    pb.enable_steady_tick(Duration::from_millis(100,),);
    pb
}

fn write_document_file(path: &Path, document: &GeneratedDocument,) -> Result<(), Error,>
{
    let mut contents = document.to_markdown();
    contents.push('\n',);
    fs::write(path, contents,).map_err(|source| io_error(path, source,),)?;
    debug!("Wrote {} lines to {}", document.lines().len(), path.display());
    Ok((),)
}

fn write_report<W: io::Write,>(
    writer: &mut W,
    report: &ProfileReport,
    pretty: bool,
) -> Result<(), Error,>
{
    if pretty {
        serde_json::to_writer_pretty(writer, report,)?;
    } else {
        serde_json::to_writer(writer, report,)?;
    }

    Ok((),)
}

#[cfg(test)]
mod tests
{
    use std::{fs, io::Cursor, path::Path};

    use clap::Parser;
    use profile_readme::{
        BadgeProvider, BadgeStyle, Error, ProfileReport, RenderOptions, render_document,
    };
    use tempfile::tempdir;

    use super::{Cli, Command, GenerateArgs, resolve_options, run, write_document_file, write_report};

    fn generate_args(arguments: &[&str],) -> GenerateArgs
    {
        let mut argv = vec![env!("CARGO_PKG_NAME"), "generate"];
        argv.extend_from_slice(arguments,);
        let cli = Cli::try_parse_from(argv,).expect("failed to parse CLI",);
        match cli.command {
            Command::Generate(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        }
    }

    fn empty_report() -> ProfileReport
    {
        let yaml = r#"
login: octocat
avatar_url: https://avatars.example.com/octocat
public_repos: 0
followers: 0
following: 0
created_at: 2020-01-01T00:00:00Z
"#;
        let user = serde_yaml::from_str(yaml,).expect("valid user record",);
        ProfileReport::build(
            profile_readme::Profile {
                user,
                repositories: Vec::new(),
            },
            6,
            2024,
        )
    }

    #[test]
    fn generate_accepts_all_overrides()
    {
        let args = generate_args(&[
            "octocat",
            "--provider",
            "readme-stats",
            "--style",
            "flat-square",
            "--top",
            "3",
            "--no-streak",
            "--output",
            "README.md",
        ],);

        assert_eq!(args.username, "octocat");
        assert_eq!(args.output.as_deref(), Some(Path::new("README.md")));

        let options = resolve_options(&args,).expect("options should resolve",);
        assert_eq!(options.provider, BadgeProvider::ReadmeStats);
        assert_eq!(options.style, BadgeStyle::FlatSquare);
        assert_eq!(options.top_projects, 3);
        assert!(!options.streak);
    }

    #[test]
    fn generate_defaults_without_flags()
    {
        let args = generate_args(&["octocat"],);
        let options = resolve_options(&args,).expect("options should resolve",);
        assert_eq!(options, RenderOptions::default());
    }

    #[test]
    fn top_outside_range_is_rejected()
    {
        let result =
            Cli::try_parse_from([env!("CARGO_PKG_NAME"), "generate", "octocat", "--top", "0",],);
        assert!(result.is_err());
    }

    #[test]
    fn unknown_provider_is_rejected()
    {
        let result = Cli::try_parse_from([
            env!("CARGO_PKG_NAME"),
            "generate",
            "octocat",
            "--provider",
            "carrier-pigeon",
        ],);
        assert!(result.is_err());
    }

    #[test]
    fn flags_override_config_file()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let config_path = temp.path().join("profile.yaml",);
        fs::write(&config_path, "provider: readme_stats\nstyle: plastic\ntop_projects: 10\n",)
            .expect("failed to write config",);

        let args = generate_args(&[
            "octocat",
            "--config",
            config_path.to_str().expect("utf8",),
            "--style",
            "flat",
        ],);
        let options = resolve_options(&args,).expect("options should resolve",);

        assert_eq!(options.provider, BadgeProvider::ReadmeStats);
        assert_eq!(options.style, BadgeStyle::Flat);
        assert_eq!(options.top_projects, 10);
    }

    #[test]
    fn missing_config_file_reports_io_error()
    {
        let args = generate_args(&["octocat", "--config", "/nonexistent/profile.yaml"],);
        let error = resolve_options(&args,).expect_err("expected io error",);
        assert!(matches!(error, Error::Io { .. }));
    }

    #[tokio::test]
    async fn invalid_username_fails_before_fetching()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "generate", "octocat-",],)
            .expect("failed to parse CLI",);

        let error = run(cli,).await.expect_err("expected validation error",);
        assert!(matches!(error, Error::Validation { .. }));
    }

    #[test]
    fn summary_pretty_flag_uses_pretty_writer()
    {
        let cli = Cli::try_parse_from([env!("CARGO_PKG_NAME"), "summary", "octocat", "--pretty",],)
            .expect("failed to parse CLI",);
        let args = match cli.command {
            Command::Summary(args,) => args,
            other => panic!("unexpected command variant: {other:?}"),
        };
        assert!(args.pretty);

        let report = empty_report();
        let mut pretty = Cursor::new(Vec::new(),);
        write_report(&mut pretty, &report, true,).expect("failed to serialize report",);
        let mut compact = Cursor::new(Vec::new(),);
        write_report(&mut compact, &report, false,).expect("failed to serialize report",);

        let pretty = String::from_utf8(pretty.into_inner(),).expect("invalid UTF-8",);
        let compact = String::from_utf8(compact.into_inner(),).expect("invalid UTF-8",);
        assert!(pretty.contains("\n  \"user\""));
        assert!(!compact.contains('\n'));
        assert_eq!(
            serde_json::from_str::<serde_json::Value,>(&pretty,).expect("valid json",),
            serde_json::from_str::<serde_json::Value,>(&compact,).expect("valid json",)
        );
    }

    #[test]
    fn document_file_ends_with_newline()
    {
        let temp = tempdir().expect("failed to create tempdir",);
        let path = temp.path().join("README.md",);
        let document = render_document(&empty_report(), &RenderOptions::default(),);

        write_document_file(&path, &document,).expect("failed to write document",);

        let written = fs::read_to_string(&path,).expect("failed to read document",);
        assert_eq!(written, format!("{}\n", document.to_markdown()));
    }
}
