//! Repositories manifest describing which repositories to query.
//!
//! The manifest is a YAML document with a top-level `Owners` key holding a
//! sequence of single-key mappings, each mapping an owner to the names of its
//! repositories:
//!
//! ```yaml
//! Owners:
//!   - acme:
//!       - widget
//!       - gadget
//!   - octocat:
//!       - hello-world
//! ```
//!
//! Owner order and repository order are preserved exactly as written.

use std::{fmt, fs, path::Path};

use serde::{
    Deserialize, Deserializer,
    de::{self, MapAccess, Visitor},
};

use crate::{
    error::{self, Error},
    record::RepoTarget,
};

/// Decoded repositories manifest.
///
/// # Examples
///
/// ```
/// use gh_stats::parse_manifest;
///
/// let manifest = parse_manifest("Owners:\n  - acme:\n      - widget\n",)?;
/// assert_eq!(manifest.owners.len(), 1);
/// # Ok::<(), gh_stats::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize,)]
pub struct OwnersManifest
{
    /// Owners in document order.
    #[serde(rename = "Owners")]
    pub owners: Vec<OwnerEntry,>,
}

/// One owner and the repositories listed under it.
#[derive(Debug, Clone, PartialEq, Eq,)]
pub struct OwnerEntry
{
    /// Organization or user name.
    pub owner:        String,
    /// Repository names in document order.
    pub repositories: Vec<String,>,
}

impl OwnersManifest
{
    /// Flattens the manifest into targets, owners first, then repositories.
    ///
    /// Duplicate entries are kept and will be fetched once per occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when an owner or
    /// repository name is blank.
    pub fn targets(&self,) -> Result<Vec<RepoTarget,>, Error,>
    {
        let total = self.owners.iter().map(|entry| entry.repositories.len(),).sum();
        let mut targets = Vec::with_capacity(total,);

        for entry in &self.owners {
            let owner = normalize_name(&entry.owner, "owner names",)?;
            for repository in &entry.repositories {
                let name = normalize_name(repository, "repository names",)?;
                targets.push(RepoTarget::new(owner.clone(), name,),);
            }
        }

        Ok(targets,)
    }
}

/// Loads a manifest from the provided YAML file path.
///
/// # Errors
///
/// Returns an [`Error`] when the file cannot be read or the YAML cannot be
/// decoded into a manifest.
pub fn load_manifest(path: &Path,) -> Result<OwnersManifest, Error,>
{
    let contents = fs::read_to_string(path,).map_err(|source| error::io_error(path, source,),)?;
    parse_manifest(&contents,)
}

/// Parses a manifest from the provided YAML document string.
///
/// # Errors
///
/// Propagates [`Error::Parse`](Error::Parse) when the YAML does not match the
/// manifest structure.
pub fn parse_manifest(contents: &str,) -> Result<OwnersManifest, Error,>
{
    Ok(serde_yaml::from_str(contents,)?,)
}

fn normalize_name(input: &str, what: &str,) -> Result<String, Error,>
{
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{what} cannot be empty strings"),),);
    }

    Ok(trimmed.to_owned(),)
}

impl<'de,> Deserialize<'de,> for OwnerEntry
{
    fn deserialize<D,>(deserializer: D,) -> Result<Self, D::Error,>
    where
        D: Deserializer<'de,>,
    {
        deserializer.deserialize_map(OwnerEntryVisitor,)
    }
}

struct OwnerEntryVisitor;

impl<'de,> Visitor<'de,> for OwnerEntryVisitor
{
    type Value = OwnerEntry;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_,>,) -> fmt::Result
    {
        formatter.write_str("a mapping from one owner name to a list of repository names",)
    }

    fn visit_map<A,>(self, mut map: A,) -> Result<Self::Value, A::Error,>
    where
        A: MapAccess<'de,>,
    {
        let (owner, repositories,) = map
            .next_entry::<String, Option<Vec<String,>,>>()?
            .ok_or_else(|| <A::Error as de::Error>::custom("owner entry must not be empty",),)?;

        if map.next_key::<de::IgnoredAny>()?.is_some() {
            return Err(de::Error::custom(format!(
                "owner entry for '{owner}' must contain exactly one owner"
            ),),);
        }

        Ok(OwnerEntry {
            owner,
            repositories: repositories.unwrap_or_default(),
        },)
    }
}
