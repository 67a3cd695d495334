//! Scripted in-memory [`GitHubApi`] used by unit tests.

use std::{
    cell::Cell,
    collections::{HashMap, HashSet},
};

use masterror::AppError;

use crate::{
    client::{GitHubApi, Owner, RepositoryListing, RepositoryMetadata, TrafficSummary},
    record::RepoTarget,
};

/// Per-repository endpoint that can be scripted to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash,)]
pub(crate) enum Endpoint
{
    Metadata,
    Views,
    Clones,
}

#[derive(Debug, Default,)]
pub(crate) struct FakeGitHub
{
    metadata: HashMap<RepoTarget, RepositoryMetadata,>,
    views:    HashMap<RepoTarget, TrafficSummary,>,
    clones:   HashMap<RepoTarget, TrafficSummary,>,
    listings: HashMap<Owner, Vec<String,>,>,
    failures: HashSet<(RepoTarget, Endpoint,),>,
    requests: Cell<usize,>,
}

impl FakeGitHub
{
    /// Registers `(forks, stars, watchers)`, `(views, unique views)` and
    /// `(clones, unique clones)` for a repository.
    pub(crate) fn with_repository(
        mut self,
        target: &RepoTarget,
        metadata: (u64, u64, u64,),
        views: (u64, u64,),
        clones: (u64, u64,),
    ) -> Self
    {
        self.metadata.insert(
            target.clone(),
            RepositoryMetadata {
                forks_count:      metadata.0,
                stargazers_count: metadata.1,
                watchers_count:   metadata.2,
            },
        );
        self.views.insert(
            target.clone(),
            TrafficSummary {
                count: views.0, uniques: views.1,
            },
        );
        self.clones.insert(
            target.clone(),
            TrafficSummary {
                count: clones.0, uniques: clones.1,
            },
        );
        self
    }

    pub(crate) fn with_listing(mut self, owner: Owner, names: &[&str],) -> Self
    {
        self.listings.insert(owner, names.iter().map(|name| (*name).to_owned(),).collect(),);
        self
    }

    pub(crate) fn failing(mut self, target: &RepoTarget, endpoint: Endpoint,) -> Self
    {
        self.failures.insert((target.clone(), endpoint,),);
        self
    }

    pub(crate) fn request_count(&self,) -> usize
    {
        self.requests.get()
    }

    fn lookup<T: Copy,>(
        &self,
        table: &HashMap<RepoTarget, T,>,
        target: &RepoTarget,
        endpoint: Endpoint,
    ) -> Result<T, AppError,>
    {
        self.requests.set(self.requests.get() + 1,);
        if self.failures.contains(&(target.clone(), endpoint,),) {
            return Err(AppError::service(format!("{endpoint:?} for {target}: 500 Server Error"),),);
        }
        table
            .get(target,)
            .copied()
            .ok_or_else(|| AppError::service(format!("{endpoint:?} for {target}: 404 Not Found"),),)
    }
}

impl GitHubApi for FakeGitHub
{
    async fn repository(&self, target: &RepoTarget,) -> Result<RepositoryMetadata, AppError,>
    {
        self.lookup(&self.metadata, target, Endpoint::Metadata,)
    }

    async fn traffic_views(&self, target: &RepoTarget,) -> Result<TrafficSummary, AppError,>
    {
        self.lookup(&self.views, target, Endpoint::Views,)
    }

    async fn traffic_clones(&self, target: &RepoTarget,) -> Result<TrafficSummary, AppError,>
    {
        self.lookup(&self.clones, target, Endpoint::Clones,)
    }

    async fn owner_repositories(&self, owner: &Owner,)
    -> Result<Vec<RepositoryListing,>, AppError,>
    {
        self.requests.set(self.requests.get() + 1,);
        self.listings
            .get(owner,)
            .map(|names| {
                names
                    .iter()
                    .map(|name| RepositoryListing {
                        name: name.clone(),
                    },)
                    .collect()
            },)
            .ok_or_else(|| AppError::service(format!("{owner}: 404 Not Found"),),)
    }
}
