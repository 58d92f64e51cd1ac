//! Remote synchronization operations
//!
//! Push, pull, and fetch mirror their Git counterparts; remotes are managed
//! through `DOLT_REMOTE` and enumerated from the `dolt_remotes` system
//! table. Unreachable or unauthorized remotes surface as connection errors
//! from the server, not as status results.

use mysql_async::prelude::Queryable;

use crate::client::Dolt;
use crate::error::Result;
use crate::outcome::MergeOutcome;
use crate::procedure::ProcedureCall;

/// Options for [`Dolt::push`].
#[derive(Debug, Clone, Default)]
pub struct PushOptions {
    /// Remote to push to; defaults to the branch's upstream.
    pub remote: Option<String>,
    /// Branch to push; defaults to the current branch.
    pub branch: Option<String>,
    /// Record the remote branch as upstream for the pushed branch
    /// (`--set-upstream`).
    pub set_upstream: bool,
    /// Push even when the remote branch has diverged (`--force`).
    pub force: bool,
}

impl PushOptions {
    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = Some(remote.into());
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn set_upstream(mut self, value: bool) -> Self {
        self.set_upstream = value;
        self
    }

    pub fn force(mut self, value: bool) -> Self {
        self.force = value;
        self
    }
}

/// Options for [`Dolt::pull`].
#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// Remote to pull from; defaults to the branch's upstream.
    pub remote: Option<String>,
    /// Remote branch to pull; defaults to the tracked branch.
    pub branch: Option<String>,
    /// Merge the fetched changes without replaying commits (`--squash`).
    pub squash: bool,
    /// Always create a merge commit, even when fast-forward is possible
    /// (`--no-ff`).
    pub no_fast_forward: bool,
}

impl PullOptions {
    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = Some(remote.into());
        self
    }

    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn squash(mut self, value: bool) -> Self {
        self.squash = value;
        self
    }

    pub fn no_fast_forward(mut self, value: bool) -> Self {
        self.no_fast_forward = value;
        self
    }
}

/// Options for [`Dolt::fetch`].
#[derive(Debug, Clone, Default)]
pub struct FetchOptions {
    /// Remote to fetch from; defaults to `origin`.
    pub remote: Option<String>,
    /// Refspec restricting what is fetched.
    pub ref_spec: Option<String>,
}

impl FetchOptions {
    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = Some(remote.into());
        self
    }

    pub fn ref_spec(mut self, ref_spec: impl Into<String>) -> Self {
        self.ref_spec = Some(ref_spec.into());
        self
    }
}

impl<'a, C: Queryable> Dolt<'a, C> {
    /// Push local commits to a remote.
    pub async fn push(&mut self, options: &PushOptions) -> Result<bool> {
        self.procedure_status(push_call(options)).await
    }

    /// Fetch from a remote and merge into the current branch.
    ///
    /// Reports like [`Dolt::merge`]: conflicts come back in the outcome
    /// rather than as an `Err`.
    pub async fn pull(&mut self, options: &PullOptions) -> Result<MergeOutcome> {
        self.procedure_merge(pull_call(options)).await
    }

    /// Fetch remote refs without merging.
    pub async fn fetch(&mut self, options: &FetchOptions) -> Result<bool> {
        self.procedure_status(fetch_call(options)).await
    }

    /// Register a remote under `name`.
    pub async fn add_remote(&mut self, name: &str, url: &str) -> Result<bool> {
        self.procedure_status(add_remote_call(name, url)).await
    }

    /// Remove a remote and its tracked branches.
    pub async fn remove_remote(&mut self, name: &str) -> Result<bool> {
        self.procedure_status(remove_remote_call(name)).await
    }

    /// Names of all remotes of the current database, in server order.
    pub async fn list_remotes(&mut self) -> Result<Vec<String>> {
        self.statement_names(LIST_REMOTES_QUERY).await
    }
}

pub(crate) const LIST_REMOTES_QUERY: &str = "SELECT name FROM dolt_remotes";

pub(crate) fn push_call(options: &PushOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_PUSH")
        .flag_if(options.set_upstream, "--set-upstream")
        .flag_if(options.force, "--force")
        .positional_opt(options.remote.as_deref())
        .positional_opt(options.branch.as_deref())
}

pub(crate) fn pull_call(options: &PullOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_PULL")
        .flag_if(options.squash, "--squash")
        .flag_if(options.no_fast_forward, "--no-ff")
        .positional_opt(options.remote.as_deref())
        .positional_opt(options.branch.as_deref())
}

pub(crate) fn fetch_call(options: &FetchOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_FETCH")
        .positional_opt(options.remote.as_deref())
        .positional_opt(options.ref_spec.as_deref())
}

pub(crate) fn add_remote_call(name: &str, url: &str) -> ProcedureCall {
    ProcedureCall::new("DOLT_REMOTE")
        .positional("add")
        .positional(name)
        .positional(url)
}

pub(crate) fn remove_remote_call(name: &str) -> ProcedureCall {
    ProcedureCall::new("DOLT_REMOTE")
        .positional("remove")
        .positional(name)
}
