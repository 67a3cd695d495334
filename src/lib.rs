//! Repository popularity and traffic statistics collected from GitHub.
//!
//! The library resolves which repositories to query (a YAML manifest, an
//! organization, or a user), fetches metadata, views and clones for each of
//! them, merges the three responses into one record per repository, and
//! renders the records as a console table, CSV or JSON. A repository whose
//! requests fail is reported and skipped; the rest of the run continues.

mod client;
mod credentials;
mod error;
mod fetch;
mod manifest;
mod output;
mod pipeline;
mod record;
mod source;
#[cfg(test)]
mod testing;

pub use client::{
    GitHubApi, OctocrabClient, Owner, RepositoryListing, RepositoryMetadata, TrafficSummary,
};
pub use credentials::{Credentials, TOKEN_ENV};
pub use error::{CONFIGURATION_EXIT_CODE, Error, FAILURE_EXIT_CODE, io_error, output_error};
pub use fetch::fetch_repo_stats;
pub use manifest::{OwnerEntry, OwnersManifest, load_manifest, parse_manifest};
pub use output::{OutputTarget, render_table, write_csv, write_json, write_output};
pub use pipeline::{StatsCollection, collect_stats, run_pipeline};
pub use record::{COLUMNS, RepoStatsRecord, RepoTarget, StatsDocument};
pub use source::{RepoSource, resolve_targets};
