//! Staging, commits, history, branches, and tags
//!
//! These operations map one-to-one onto Dolt's `DOLT_*` stored procedures
//! and system tables. Procedures that report a `status` column come back as
//! `Ok(true)` for status zero and `Ok(false)` otherwise; a transport or
//! statement failure is an `Err` regardless.

use chrono::{DateTime, Utc};
use mysql_async::prelude::Queryable;

use crate::client::Dolt;
use crate::error::Result;
use crate::outcome::MergeOutcome;
use crate::procedure::ProcedureCall;

/// Options for [`Dolt::commit`].
#[derive(Debug, Clone, Default)]
pub struct CommitOptions {
    /// Commit author as `Name <email>`.
    pub author: Option<String>,
    /// Commit date, serialized as `YYYY-MM-DDTHH:MM:SS`. Defaults to the
    /// server clock.
    pub date: Option<DateTime<Utc>>,
    /// Stage every table, including new ones, before committing (`-A`).
    pub stage_all: bool,
    /// Stage modified tracked tables but not new ones (`-a`).
    pub stage_modified: bool,
    /// Permit a commit with no staged changes (`--allow-empty`).
    pub allow_empty: bool,
    /// Return an empty hash instead of failing when there is nothing to
    /// commit (`--skip-empty`).
    pub skip_if_empty: bool,
}

impl CommitOptions {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn date(mut self, date: DateTime<Utc>) -> Self {
        self.date = Some(date);
        self
    }

    pub fn stage_all(mut self, value: bool) -> Self {
        self.stage_all = value;
        self
    }

    pub fn stage_modified(mut self, value: bool) -> Self {
        self.stage_modified = value;
        self
    }

    pub fn allow_empty(mut self, value: bool) -> Self {
        self.allow_empty = value;
        self
    }

    pub fn skip_if_empty(mut self, value: bool) -> Self {
        self.skip_if_empty = value;
        self
    }
}

/// Reset depth for [`Dolt::reset`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResetMode {
    /// Unstage the target without touching the working set.
    #[default]
    Soft,
    /// Discard staged and working changes, restoring the target revision's
    /// contents exactly.
    Hard,
}

/// Options for [`Dolt::revert`].
#[derive(Debug, Clone, Default)]
pub struct RevertOptions {
    /// Author of the revert commit as `Name <email>`.
    pub author: Option<String>,
}

impl RevertOptions {
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Options for [`Dolt::tag`].
#[derive(Debug, Clone, Default)]
pub struct TagOptions {
    /// Tag message; makes the tag annotated.
    pub message: Option<String>,
    /// Tagger as `Name <email>`.
    pub author: Option<String>,
}

impl TagOptions {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }
}

/// Options for [`Dolt::branch`].
#[derive(Debug, Clone, Default)]
pub struct BranchOptions {
    /// Revision the new branch starts from; defaults to the session head.
    pub start_point: Option<String>,
    /// Move the branch if it already exists (`-f`).
    pub force: bool,
}

impl BranchOptions {
    pub fn start_point(mut self, revision: impl Into<String>) -> Self {
        self.start_point = Some(revision.into());
        self
    }

    pub fn force(mut self, value: bool) -> Self {
        self.force = value;
        self
    }
}

/// Options for [`Dolt::checkout`].
#[derive(Debug, Clone, Default)]
pub struct CheckoutOptions {
    /// Create the branch before switching to it (`-b`).
    pub create_branch: bool,
    /// Revision the created branch starts from.
    pub start_point: Option<String>,
}

impl CheckoutOptions {
    pub fn create_branch(mut self, value: bool) -> Self {
        self.create_branch = value;
        self
    }

    pub fn start_point(mut self, revision: impl Into<String>) -> Self {
        self.start_point = Some(revision.into());
        self
    }
}

/// Options for [`Dolt::merge`].
#[derive(Debug, Clone, Default)]
pub struct MergeOptions {
    /// Message for the merge commit.
    pub message: Option<String>,
    /// Author of the merge commit as `Name <email>`.
    pub author: Option<String>,
    /// Merge the changes without replaying the source commits (`--squash`).
    pub squash: bool,
    /// Always create a merge commit, even when fast-forward is possible
    /// (`--no-ff`).
    pub no_fast_forward: bool,
}

impl MergeOptions {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
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

impl<'a, C: Queryable> Dolt<'a, C> {
    /// Stage tables for the next commit.
    ///
    /// An empty slice stages everything, including new tables (`-A`); a
    /// non-empty slice stages exactly the named tables.
    pub async fn add(&mut self, tables: &[&str]) -> Result<bool> {
        self.procedure_status(add_call(tables)).await
    }

    /// Create a commit from the staged changes and return its hash.
    ///
    /// Committing with nothing staged is an `Err` unless
    /// [`CommitOptions::skip_if_empty`] is set, in which case the returned
    /// hash is empty.
    pub async fn commit(&mut self, message: &str, options: &CommitOptions) -> Result<String> {
        let hash = self.procedure_hash(commit_call(message, options)).await?;
        tracing::info!(hash = %hash, "created commit");
        Ok(hash)
    }

    /// Reset staged (and for [`ResetMode::Hard`], working) changes to a
    /// revision or unstage a table.
    ///
    /// The target is passed through verbatim: a commit hash, a reference
    /// like `HEAD~1`, or a table name for a soft per-table unstage.
    pub async fn reset(&mut self, target: &str, mode: ResetMode) -> Result<bool> {
        self.procedure_status(reset_call(target, mode)).await
    }

    /// Create a commit that undoes the changes introduced by `revision`.
    pub async fn revert(&mut self, revision: &str, options: &RevertOptions) -> Result<bool> {
        self.procedure_status(revert_call(revision, options)).await
    }

    /// Tag a revision.
    pub async fn tag(&mut self, name: &str, revision: &str, options: &TagOptions) -> Result<bool> {
        self.procedure_status(tag_call(name, revision, options)).await
    }

    /// Delete a tag by name.
    pub async fn delete_tag(&mut self, name: &str) -> Result<bool> {
        self.procedure_status(delete_tag_call(name)).await
    }

    /// Names of all tags in the current database, in server order.
    pub async fn list_tags(&mut self) -> Result<Vec<String>> {
        self.statement_names(LIST_TAGS_QUERY).await
    }

    /// Create a branch.
    pub async fn branch(&mut self, name: &str, options: &BranchOptions) -> Result<bool> {
        self.procedure_status(branch_call(name, options)).await
    }

    /// Delete a branch; `force` deletes it even when unmerged (`-D`).
    pub async fn delete_branch(&mut self, name: &str, force: bool) -> Result<bool> {
        self.procedure_status(delete_branch_call(name, force)).await
    }

    /// Rename a branch; `force` overwrites an existing target name.
    pub async fn rename_branch(&mut self, old: &str, new: &str, force: bool) -> Result<bool> {
        self.procedure_status(rename_branch_call(old, new, force)).await
    }

    /// Names of all branches in the current database, in server order.
    pub async fn list_branches(&mut self) -> Result<Vec<String>> {
        self.statement_names(LIST_BRANCHES_QUERY).await
    }

    /// Branch the session is checked out on, if any.
    pub async fn current_branch(&mut self) -> Result<Option<String>> {
        self.statement_scalar(CURRENT_BRANCH_QUERY).await
    }

    /// Switch the session to a branch, or restore a table from head.
    pub async fn checkout(&mut self, target: &str, options: &CheckoutOptions) -> Result<bool> {
        self.procedure_status(checkout_call(target, options)).await
    }

    /// Merge a revision into the current branch.
    ///
    /// A conflicted merge is not an `Err`: the returned [`MergeOutcome`]
    /// reports the conflict count and the caller decides how to resolve.
    pub async fn merge(&mut self, revision: &str, options: &MergeOptions) -> Result<MergeOutcome> {
        let outcome = self.procedure_merge(merge_call(revision, options)).await?;
        if !outcome.is_clean() {
            tracing::warn!(conflicts = outcome.conflicts, revision, "merge left conflicts");
        }
        Ok(outcome)
    }
}

pub(crate) const LIST_TAGS_QUERY: &str = "SELECT tag_name FROM dolt_tags";
pub(crate) const LIST_BRANCHES_QUERY: &str = "SELECT name FROM dolt_branches";
pub(crate) const CURRENT_BRANCH_QUERY: &str = "SELECT active_branch()";

pub(crate) fn add_call(tables: &[&str]) -> ProcedureCall {
    if tables.is_empty() {
        ProcedureCall::new("DOLT_ADD").positional("-A")
    } else {
        ProcedureCall::new("DOLT_ADD").positionals(tables.iter().copied())
    }
}

pub(crate) fn commit_call(message: &str, options: &CommitOptions) -> ProcedureCall {
    let date = options
        .date
        .map(|date| date.format("%Y-%m-%dT%H:%M:%S").to_string());
    ProcedureCall::new("DOLT_COMMIT")
        .option("-m", Some(message))
        .option("--author", options.author.as_deref())
        .option("--date", date.as_deref())
        .flag_if(options.stage_all, "-A")
        .flag_if(options.stage_modified, "-a")
        .flag_if(options.allow_empty, "--allow-empty")
        .flag_if(options.skip_if_empty, "--skip-empty")
}

pub(crate) fn reset_call(target: &str, mode: ResetMode) -> ProcedureCall {
    ProcedureCall::new("DOLT_RESET")
        .flag_if(mode == ResetMode::Hard, "--hard")
        .positional(target)
}

pub(crate) fn revert_call(revision: &str, options: &RevertOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_REVERT")
        .positional(revision)
        .option("--author", options.author.as_deref())
}

pub(crate) fn tag_call(name: &str, revision: &str, options: &TagOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_TAG")
        .option("-m", options.message.as_deref())
        .option("--author", options.author.as_deref())
        .positional(name)
        .positional(revision)
}

pub(crate) fn delete_tag_call(name: &str) -> ProcedureCall {
    ProcedureCall::new("DOLT_TAG").positional("-d").positional(name)
}

pub(crate) fn branch_call(name: &str, options: &BranchOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_BRANCH")
        .flag_if(options.force, "-f")
        .positional(name)
        .positional_opt(options.start_point.as_deref())
}

pub(crate) fn delete_branch_call(name: &str, force: bool) -> ProcedureCall {
    ProcedureCall::new("DOLT_BRANCH")
        .positional(if force { "-D" } else { "-d" })
        .positional(name)
}

pub(crate) fn rename_branch_call(old: &str, new: &str, force: bool) -> ProcedureCall {
    ProcedureCall::new("DOLT_BRANCH")
        .positional("-m")
        .flag_if(force, "-f")
        .positional(old)
        .positional(new)
}

pub(crate) fn checkout_call(target: &str, options: &CheckoutOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_CHECKOUT")
        .flag_if(options.create_branch, "-b")
        .positional(target)
        .positional_opt(options.start_point.as_deref())
}

pub(crate) fn merge_call(revision: &str, options: &MergeOptions) -> ProcedureCall {
    ProcedureCall::new("DOLT_MERGE")
        .flag_if(options.squash, "--squash")
        .flag_if(options.no_fast_forward, "--no-ff")
        .option("-m", options.message.as_deref())
        .option("--author", options.author.as_deref())
        .positional(revision)
}
