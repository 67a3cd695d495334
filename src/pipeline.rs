// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Sequential aggregation of stats across all targets.

use indicatif::{ProgressBar, ProgressStyle};
use tracing::{info, warn};

use crate::{
    client::GitHubApi,
    error::Error,
    fetch::fetch_with_progress,
    output::{OutputTarget, write_output},
    record::{RepoStatsRecord, RepoTarget},
    source::{RepoSource, resolve_targets},
};

/// Outcome of a run over all targets.
#[derive(Debug, Clone, Default, PartialEq, Eq,)]
pub struct StatsCollection
{
    /// Successful records in target order.
    pub records: Vec<RepoStatsRecord,>,
    /// Targets dropped because at least one request failed.
    pub failed:  Vec<RepoTarget,>,
}

/// Fetches every target in order, keeping successful records and dropping
/// failed targets. Nothing is retried.
pub async fn collect_stats<A,>(api: &A, targets: &[RepoTarget],) -> StatsCollection
where
    A: GitHubApi,
{
    let pb = ProgressBar::new(targets.len() as u64,);
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} [{elapsed_precise}] {bar:30} {pos}/{len} {msg}",)
            .unwrap_or_else(|_| ProgressStyle::default_bar(),),
    );

    let mut collection = StatsCollection {
        records: Vec::with_capacity(targets.len(),),
        failed:  Vec::new(),
    };

    for target in targets {
        pb.set_message(target.to_string(),);
        match fetch_with_progress(api, target, &pb,).await {
            Some(record,) => collection.records.push(record,),
            None => {
                pb.suspend(|| warn!("Skipping {}", target),);
                collection.failed.push(target.clone(),);
            }
        }
        pb.inc(1,);
    }

    pb.finish_and_clear();
    info!(
        "Collected stats for {} of {} repositories",
        collection.records.len(),
        targets.len()
    );

    collection
}

/// Resolves targets from `source`, collects their stats and renders the
/// records to `output`.
///
/// An empty collection still produces a (header-only) artifact.
///
/// # Errors
///
/// Returns an [`Error`] when targets cannot be resolved or the output cannot
/// be written. Failures of individual repositories are not errors.
pub async fn run_pipeline<A,>(
    api: &A,
    source: &RepoSource,
    output: &OutputTarget,
) -> Result<StatsCollection, Error,>
where
    A: GitHubApi,
{
    let targets = resolve_targets(api, source,).await?;
    let collection = collect_stats(api, &targets,).await;
    write_output(output, &collection.records,)?;

    if !collection.failed.is_empty() {
        let failed: Vec<String,> = collection.failed.iter().map(ToString::to_string,).collect();
        warn!("No stats written for: {}", failed.join(", "));
    }

    Ok(collection,)
}
