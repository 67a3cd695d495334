//! Command-line interface for the gh-stats binary.
//!
//! Exactly one repository source is used per run (`--repos`, `--org` or
//! `--user`), and the records are printed as a table unless `--output-file`
//! points at a `.csv` or `.json` file.

use std::{env, path::PathBuf, process};

use clap::{ArgAction, Parser};
use gh_stats::{
    Credentials, Error, OctocrabClient, OutputTarget, RepoSource, TOKEN_ENV, run_pipeline,
};
use tracing_subscriber::EnvFilter;

/// Fetch GitHub repository stats.
///
/// Requires either a repositories YAML file, an organization name, or a
/// user name.
#[derive(Debug, Parser,)]
#[command(
    name = "gh-stats",
    version,
    about = "Fetch GitHub repository stats",
    after_help = "Typical usage:\n  gh-stats -r repos.yaml\n  gh-stats --org acme --output-file stats.csv"
)]
struct Cli
{
    /// YAML file listing the repositories to query, grouped by owner.
    #[arg(short = 'r', long = "repos", value_name = "PATH")]
    repos: Option<PathBuf,>,

    /// Query every repository owned by this organization.
    #[arg(short = 'o', long = "org", value_name = "NAME")]
    org: Option<String,>,

    /// Query every repository owned by this user.
    #[arg(short = 'u', long = "user", value_name = "NAME")]
    user: Option<String,>,

    /// Output file path. Only CSV and JSON are supported.
    #[arg(short = 'f', long = "output-file", value_name = "PATH")]
    output_file: Option<PathBuf,>,

    /// GitHub access token; falls back to the GH_TOKEN environment variable.
    #[arg(short = 't', long = "auth-token", value_name = "TOKEN")]
    auth_token: Option<String,>,

    /// Emit debug diagnostics.
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    verbose: bool,
}

/// Validated inputs of a run, resolved before any network activity.
#[derive(Debug,)]
struct RunPlan
{
    credentials: Credentials,
    source:      RepoSource,
    output:      OutputTarget,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main(flavor = "current_thread")]
async fn main()
{
    let cli = Cli::parse();
    init_tracing(cli.verbose,);

    if let Err(error,) = run(&cli,).await {
        eprintln!("{}", error.to_display_string());
        process::exit(error.exit_code(),);
    }
}

fn init_tracing(verbose: bool,)
{
    let default_directive = if verbose { "gh_stats=debug" } else { "gh_stats=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive,),),
        )
        .with_writer(std::io::stderr,)
        .with_target(false,)
        .init();
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates configuration errors before any request is issued, and errors
/// from owner resolution and output rendering afterwards.
async fn run(cli: &Cli,) -> Result<(), Error,>
{
    let environment_token = env::var(TOKEN_ENV,).ok();
    let plan = plan(cli, environment_token.as_deref(),)?;

    let client = OctocrabClient::new(&plan.credentials,)?;
    run_pipeline(&client, &plan.source, &plan.output,).await?;

    Ok((),)
}

/// Resolves credentials, the repository source and the output destination.
///
/// # Errors
///
/// Returns [`Error::Validation`] when any of the three cannot be resolved.
fn plan(cli: &Cli, environment_token: Option<&str,>,) -> Result<RunPlan, Error,>
{
    let credentials = Credentials::resolve(cli.auth_token.as_deref(), environment_token,)?;
    let source =
        RepoSource::select(cli.repos.as_deref(), cli.org.as_deref(), cli.user.as_deref(),)?;
    let output = OutputTarget::from_path(cli.output_file.as_deref(),)?;

    Ok(RunPlan {
        credentials,
        source,
        output,
    },)
}
