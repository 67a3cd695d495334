// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Bearer token resolution.

use crate::error::Error;

/// Environment variable consulted when no token is passed explicitly.
pub const TOKEN_ENV: &str = "GH_TOKEN";

/// GitHub access token resolved once at startup.
///
/// The token never appears in `Debug` output.
#[derive(Clone, PartialEq, Eq,)]
pub struct Credentials
{
    token: String,
}

impl Credentials
{
    /// Resolves the token from an explicit value, falling back to the value
    /// read from [`TOKEN_ENV`].
    ///
    /// Both candidates are trimmed; blank values are treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`](Error::Validation) when neither candidate
    /// holds a usable token.
    ///
    /// # Examples
    ///
    /// ```
    /// use gh_stats::Credentials;
    ///
    /// let credentials = Credentials::resolve(Some("  ghp_cli  ",), Some("ghp_env",),)?;
    /// assert_eq!(credentials.token(), "ghp_cli");
    /// # Ok::<(), gh_stats::Error>(())
    /// ```
    pub fn resolve(explicit: Option<&str,>, environment: Option<&str,>,) -> Result<Self, Error,>
    {
        [explicit, environment,]
            .into_iter()
            .flatten()
            .map(str::trim,)
            .find(|candidate| !candidate.is_empty(),)
            .map(|token| Self {
                token: token.to_owned(),
            },)
            .ok_or_else(|| {
                Error::validation(format!(
                    "please set a GitHub access token with --auth-token or {TOKEN_ENV}"
                ),)
            },)
    }

    /// Raw token value.
    pub fn token(&self,) -> &str
    {
        &self.token
    }
}

impl std::fmt::Debug for Credentials
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_,>,) -> std::fmt::Result
    {
        f.debug_struct("Credentials",).field("token", &"<redacted>",).finish()
    }
}
