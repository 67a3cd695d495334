// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Repository identifiers and the merged per-repository stats row.

use serde::{Deserialize, Serialize};

use crate::client::{RepositoryMetadata, TrafficSummary};

/// Column headers shared by the console table and the CSV artifact.
pub const COLUMNS: [&str; 8] = [
    "Repo",
    "Forks",
    "Stars",
    "Watchers",
    "Clones Total",
    "Clones Unique",
    "Views Total",
    "Views Unique",
];

/// Repository selected for stats retrieval.
#[derive(Debug, Clone, PartialEq, Eq, Hash,)]
pub struct RepoTarget
{
    /// Organization or user that owns the repository.
    pub owner: String,
    /// Repository name.
    pub name:  String,
}

impl RepoTarget
{
    /// Creates a target from owner and repository names.
    pub fn new(owner: impl Into<String,>, name: impl Into<String,>,) -> Self
    {
        Self {
            owner: owner.into(), name: name.into(),
        }
    }
}

impl std::fmt::Display for RepoTarget
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Merged metadata and traffic counters for one repository.
///
/// Field order matches the output column order and the key order of the JSON
/// artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct RepoStatsRecord
{
    /// Repository identifier in `owner/name` form.
    #[serde(rename = "Repo")]
    pub repo:          String,
    #[serde(rename = "Forks")]
    pub forks:         u64,
    #[serde(rename = "Stars")]
    pub stars:         u64,
    #[serde(rename = "Watchers")]
    pub watchers:      u64,
    #[serde(rename = "Clones Total")]
    pub clones_total:  u64,
    #[serde(rename = "Clones Unique")]
    pub clones_unique: u64,
    #[serde(rename = "Views Total")]
    pub views_total:   u64,
    #[serde(rename = "Views Unique")]
    pub views_unique:  u64,
}

impl RepoStatsRecord
{
    /// Builds a record from the three upstream payloads of a repository.
    ///
    /// Counters are copied verbatim; nothing is derived or rounded.
    pub fn merge(
        target: &RepoTarget,
        metadata: &RepositoryMetadata,
        views: &TrafficSummary,
        clones: &TrafficSummary,
    ) -> Self
    {
        Self {
            repo:          target.to_string(),
            forks:         metadata.forks_count,
            stars:         metadata.stargazers_count,
            watchers:      metadata.watchers_count,
            clones_total:  clones.count,
            clones_unique: clones.uniques,
            views_total:   views.count,
            views_unique:  views.uniques,
        }
    }

    /// Stringified values in [`COLUMNS`] order.
    pub fn cells(&self,) -> [String; 8]
    {
        [
            self.repo.clone(),
            self.forks.to_string(),
            self.stars.to_string(),
            self.watchers.to_string(),
            self.clones_total.to_string(),
            self.clones_unique.to_string(),
            self.views_total.to_string(),
            self.views_unique.to_string(),
        ]
    }
}

/// Document written to JSON artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize,)]
pub struct StatsDocument
{
    /// Records in target order.
    #[serde(rename = "Data")]
    pub data: Vec<RepoStatsRecord,>,
}
