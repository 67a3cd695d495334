//! Selection of the repositories to query.
//!
//! Exactly one source is used per run: a manifest file, every repository of
//! an organization, or every repository of a user. When several are supplied
//! the manifest wins, then the organization, then the user, and the ignored
//! inputs are reported.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::{
    client::{GitHubApi, Owner},
    error::Error,
    manifest::load_manifest,
    record::RepoTarget,
};

/// Where the list of repositories comes from.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub enum RepoSource
{
    /// YAML manifest listing owners and repositories.
    Manifest(PathBuf,),
    /// Every repository returned by an owner listing.
    Owner(Owner,),
}

impl RepoSource
{
    /// Picks the source from the raw command-line inputs.
    ///
    /// Blank values count as absent. Organization and user names are trimmed
    /// of whitespace and surrounding slashes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when no input is
    /// supplied.
    ///
    /// # Examples
    ///
    /// ```
    /// use gh_stats::{Owner, RepoSource};
    ///
    /// let source = RepoSource::select(None, Some(" /acme/ ",), Some("octocat",),)?;
    /// assert_eq!(source, RepoSource::Owner(Owner::Organization("acme".to_owned())));
    /// # Ok::<(), gh_stats::Error>(())
    /// ```
    pub fn select(
        repos: Option<&Path,>,
        org: Option<&str,>,
        user: Option<&str,>,
    ) -> Result<Self, Error,>
    {
        let repos = repos.filter(|path| !path.as_os_str().is_empty(),);
        let org = org.and_then(normalize_owner,);
        let user = user.and_then(normalize_owner,);

        let source = if let Some(path,) = repos {
            Self::Manifest(path.to_path_buf(),)
        } else if let Some(login,) = org.clone() {
            Self::Owner(Owner::Organization(login,),)
        } else if let Some(login,) = user.clone() {
            Self::Owner(Owner::User(login,),)
        } else {
            return Err(Error::validation(
                "please provide a repositories file (--repos), an organization (--org), or a user \
                 (--user)",
            ),);
        };

        let mut ignored = Vec::new();
        if !matches!(source, Self::Owner(Owner::Organization(_,),)) && org.is_some() {
            ignored.push("--org",);
        }
        if !matches!(source, Self::Owner(Owner::User(_,),)) && user.is_some() {
            ignored.push("--user",);
        }
        if !ignored.is_empty() {
            warn!("Using {}; ignoring {}", source, ignored.join(", "));
        }

        Ok(source,)
    }
}

impl std::fmt::Display for RepoSource
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        match self {
            Self::Manifest(path,) => write!(f, "manifest {}", path.display()),
            Self::Owner(owner,) => write!(f, "{owner}"),
        }
    }
}

/// Produces the ordered list of targets for a source.
///
/// An owner without repositories yields an empty list.
///
/// # Errors
///
/// Returns an [`Error`] when the manifest cannot be loaded or the owner
/// listing request fails.
pub async fn resolve_targets<A,>(api: &A, source: &RepoSource,) -> Result<Vec<RepoTarget,>, Error,>
where
    A: GitHubApi,
{
    let targets = match source {
        RepoSource::Manifest(path,) => load_manifest(path,)?.targets()?,
        RepoSource::Owner(owner,) => {
            let listing = api.owner_repositories(owner,).await.map_err(|e| {
                Error::service(format!(
                    "failed to list repositories of {owner}: {}",
                    e.render_message()
                ),)
            },)?;
            listing.into_iter().map(|entry| RepoTarget::new(owner.login(), entry.name,),).collect()
        }
    };

    info!("Resolved {} repositories from {}", targets.len(), source);

    Ok(targets,)
}

fn normalize_owner(input: &str,) -> Option<String,>
{
    let trimmed = input.trim().trim_matches('/',).trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_owned(),) }
}
