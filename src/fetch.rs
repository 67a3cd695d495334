// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Per-repository stats retrieval.

use indicatif::ProgressBar;
use masterror::AppError;
use tracing::{debug, warn};

use crate::{
    client::GitHubApi,
    record::{RepoStatsRecord, RepoTarget},
};

/// Fetches metadata, views and clones for one repository and merges them.
///
/// All three requests are always issued, in that order. Every failed request
/// is reported with the repository identifier and the upstream detail, and
/// `None` is returned unless all three succeeded; partial records are never
/// produced.
///
/// # Example
///
/// ```no_run
/// use gh_stats::{Credentials, OctocrabClient, RepoTarget, fetch_repo_stats};
///
/// # async fn example() -> Result<(), gh_stats::Error> {
/// let credentials = Credentials::resolve(Some("ghp_token",), None,)?;
/// let client = OctocrabClient::new(&credentials,)?;
/// if let Some(record,) = fetch_repo_stats(&client, &RepoTarget::new("acme", "widget",),).await {
///     println!("{} has {} stars", record.repo, record.stars);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn fetch_repo_stats<A,>(api: &A, target: &RepoTarget,) -> Option<RepoStatsRecord,>
where
    A: GitHubApi,
{
    fetch_with_progress(api, target, &ProgressBar::hidden(),).await
}

/// Same as [`fetch_repo_stats`], printing failure reports above `progress`.
pub(crate) async fn fetch_with_progress<A,>(
    api: &A,
    target: &RepoTarget,
    progress: &ProgressBar,
) -> Option<RepoStatsRecord,>
where
    A: GitHubApi,
{
    debug!("Fetching stats for {}", target);

    let metadata = report(progress, target, "metadata", api.repository(target,).await,);
    let views = report(progress, target, "views", api.traffic_views(target,).await,);
    let clones = report(progress, target, "clones", api.traffic_clones(target,).await,);

    Some(RepoStatsRecord::merge(target, &metadata?, &views?, &clones?,),)
}

fn report<T,>(
    progress: &ProgressBar,
    target: &RepoTarget,
    what: &str,
    result: Result<T, AppError,>,
) -> Option<T,>
{
    match result {
        Ok(value,) => Some(value,),
        Err(error,) => {
            let message = failure_message(target, what, &error,);
            progress.suspend(|| warn!("{}", message),);
            None
        }
    }
}

/// Report line for a failed request; carries the upstream detail rather than
/// the bare error kind.
fn failure_message(target: &RepoTarget, what: &str, error: &AppError,) -> String
{
    format!("Repo {} returned an error for {}: {}", target, what, error.render_message())
}

#[cfg(test)]
mod tests
{
    use indicatif::ProgressBar;
    use masterror::AppError;

    use super::{failure_message, fetch_repo_stats, fetch_with_progress};
    use crate::{
        RepoStatsRecord, RepoTarget,
        testing::{Endpoint, FakeGitHub},
    };

    #[tokio::test]
    async fn merges_three_successful_responses()
    {
        let target = RepoTarget::new("acme", "widget",);
        let api = FakeGitHub::default().with_repository(&target, (3, 10, 10,), (5, 2,), (1, 1,),);

        let record = fetch_repo_stats(&api, &target,).await.expect("record expected",);
        assert_eq!(
            record,
            RepoStatsRecord {
                repo:          "acme/widget".to_owned(),
                forks:         3,
                stars:         10,
                watchers:      10,
                clones_total:  1,
                clones_unique: 1,
                views_total:   5,
                views_unique:  2,
            }
        );
        assert_eq!(api.request_count(), 3);
    }

    #[tokio::test]
    async fn any_failed_request_drops_the_record()
    {
        for endpoint in [Endpoint::Metadata, Endpoint::Views, Endpoint::Clones,] {
            let target = RepoTarget::new("acme", "widget",);
            let api = FakeGitHub::default()
                .with_repository(&target, (3, 10, 10,), (5, 2,), (1, 1,),)
                .failing(&target, endpoint,);

            assert!(fetch_repo_stats(&api, &target).await.is_none(), "{endpoint:?} should fail");
            assert_eq!(api.request_count(), 3, "all requests are issued for {endpoint:?}");
        }
    }

    #[test]
    fn failure_message_keeps_upstream_detail()
    {
        let target = RepoTarget::new("acme", "widget",);
        let error = AppError::service(
            "GET /repos/acme/widget/traffic/views failed: Must have push access (403 Forbidden)",
        );

        assert_eq!(
            failure_message(&target, "views", &error,),
            "Repo acme/widget returned an error for views: GET /repos/acme/widget/traffic/views \
             failed: Must have push access (403 Forbidden)"
        );
    }

    #[tokio::test]
    async fn failure_report_names_repository_and_detail()
    {
        let target = RepoTarget::new("acme", "widget",);
        let api = FakeGitHub::default()
            .with_repository(&target, (3, 10, 10,), (5, 2,), (1, 1,),)
            .failing(&target, Endpoint::Clones,);

        let error = crate::GitHubApi::traffic_clones(&api, &target,)
            .await
            .expect_err("clones should fail",);
        let message = failure_message(&target, "clones", &error,);
        assert!(message.starts_with("Repo acme/widget returned an error for clones: "));
        assert!(message.contains("500 Server Error"), "{message}");
    }

    #[tokio::test]
    async fn failures_reported_under_progress_bar_drop_the_record()
    {
        let target = RepoTarget::new("acme", "widget",);
        let api = FakeGitHub::default()
            .with_repository(&target, (3, 10, 10,), (5, 2,), (1, 1,),)
            .failing(&target, Endpoint::Metadata,);
        let progress = ProgressBar::new(1,);

        assert!(fetch_with_progress(&api, &target, &progress).await.is_none());
        assert_eq!(api.request_count(), 3);
        assert!(!progress.is_finished());
    }

    #[tokio::test]
    async fn unknown_repository_yields_no_record()
    {
        let api = FakeGitHub::default();
        let target = RepoTarget::new("acme", "missing",);
        assert!(fetch_repo_stats(&api, &target).await.is_none());
    }
}
