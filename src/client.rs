// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! GitHub REST access used by the stats pipeline.
//!
//! The pipeline only depends on the [`GitHubApi`] trait. [`OctocrabClient`]
//! is the production implementation; every request is an authenticated GET
//! whose non-success status is surfaced as an [`AppError`] carrying the
//! route and the raw upstream detail.

use masterror::AppError;
use octocrab::Octocrab;
use serde::{Deserialize, de::DeserializeOwned};
use tracing::debug;

use crate::{credentials::Credentials, record::RepoTarget};

/// Popularity counters returned by `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize,)]
pub struct RepositoryMetadata
{
    pub forks_count:      u64,
    pub stargazers_count: u64,
    pub watchers_count:   u64,
}

/// Totals returned by the `traffic/views` and `traffic/clones` endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize,)]
pub struct TrafficSummary
{
    pub count:   u64,
    pub uniques: u64,
}

/// Single entry of an owner repository listing.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct RepositoryListing
{
    pub name: String,
}

/// Account whose repositories are listed.
#[derive(Debug, Clone, PartialEq, Eq, Hash,)]
pub enum Owner
{
    /// GitHub organization.
    Organization(String,),
    /// GitHub user.
    User(String,),
}

impl Owner
{
    /// Account login.
    pub fn login(&self,) -> &str
    {
        match self {
            Self::Organization(login,) | Self::User(login,) => login,
        }
    }

    /// REST route listing the account's repositories.
    pub fn repositories_route(&self,) -> String
    {
        match self {
            Self::Organization(login,) => format!("/orgs/{login}/repos"),
            Self::User(login,) => format!("/users/{login}/repos"),
        }
    }
}

impl std::fmt::Display for Owner
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        match self {
            Self::Organization(login,) => write!(f, "organization {login}"),
            Self::User(login,) => write!(f, "user {login}"),
        }
    }
}

/// Read-only GitHub operations consumed by the pipeline.
#[allow(async_fn_in_trait)]
pub trait GitHubApi
{
    /// Fetches repository metadata.
    async fn repository(&self, target: &RepoTarget,) -> Result<RepositoryMetadata, AppError,>;

    /// Fetches the traffic views summary.
    async fn traffic_views(&self, target: &RepoTarget,) -> Result<TrafficSummary, AppError,>;

    /// Fetches the traffic clones summary.
    async fn traffic_clones(&self, target: &RepoTarget,) -> Result<TrafficSummary, AppError,>;

    /// Lists the repositories owned by an organization or user.
    async fn owner_repositories(&self, owner: &Owner,)
    -> Result<Vec<RepositoryListing,>, AppError,>;
}

/// [`GitHubApi`] implementation backed by an authenticated Octocrab client.
#[derive(Clone,)]
pub struct OctocrabClient
{
    octocrab: Octocrab,
}

impl OctocrabClient
{
    /// Builds a client that sends `credentials` with every request.
    ///
    /// # Errors
    ///
    /// Returns [`AppError`] when the underlying HTTP client cannot be
    /// initialized.
    pub fn new(credentials: &Credentials,) -> Result<Self, AppError,>
    {
        let octocrab = Octocrab::builder()
            .personal_token(credentials.token().to_owned(),)
            .build()
            .map_err(|e| {
                AppError::unauthorized(format!("failed to initialize GitHub client: {e}"),)
            },)?;

        Ok(Self {
            octocrab,
        },)
    }

    async fn get_json<R,>(&self, route: String,) -> Result<R, AppError,>
    where
        R: DeserializeOwned,
    {
        debug!("GET {}", route);
        self.octocrab
            .get::<R, _, (),>(&route, None,)
            .await
            .map_err(|e| AppError::service(format!("GET {route} failed: {}", describe(&e)),),)
    }
}

impl GitHubApi for OctocrabClient
{
    async fn repository(&self, target: &RepoTarget,) -> Result<RepositoryMetadata, AppError,>
    {
        self.get_json(format!("/repos/{}/{}", target.owner, target.name),).await
    }

    async fn traffic_views(&self, target: &RepoTarget,) -> Result<TrafficSummary, AppError,>
    {
        self.get_json(format!("/repos/{}/{}/traffic/views", target.owner, target.name),).await
    }

    async fn traffic_clones(&self, target: &RepoTarget,) -> Result<TrafficSummary, AppError,>
    {
        self.get_json(format!("/repos/{}/{}/traffic/clones", target.owner, target.name),).await
    }

    async fn owner_repositories(&self, owner: &Owner,)
    -> Result<Vec<RepositoryListing,>, AppError,>
    {
        self.get_json(owner.repositories_route(),).await
    }
}

/// Extracts the raw upstream detail from an Octocrab error.
fn describe(error: &octocrab::Error,) -> String
{
    match error {
        octocrab::Error::GitHub {
            source, ..
        } => format!("{} ({})", source.message, source.status_code),
        other => other.to_string(),
    }
}
