//! Database management operations
//!
//! Dolt serves many databases from one server process. Creation and removal
//! are plain DDL; cloning, undropping, and purging go through stored
//! procedures.

use mysql_async::prelude::Queryable;

use crate::client::Dolt;
use crate::error::Result;
use crate::procedure::{ProcedureCall, quote_identifier};

/// Options for [`Dolt::clone_database`].
#[derive(Debug, Clone, Default)]
pub struct CloneOptions {
    /// Clone only this branch.
    pub branch: Option<String>,
    /// Name to give the tracked remote instead of `origin`.
    pub remote: Option<String>,
    /// Clone depth for a shallow clone.
    pub depth: Option<u32>,
    /// Database name to clone into, when it should differ from the remote's.
    pub target_name: Option<String>,
}

impl CloneOptions {
    pub fn branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = Some(branch.into());
        self
    }

    pub fn remote(mut self, remote: impl Into<String>) -> Self {
        self.remote = Some(remote.into());
        self
    }

    pub fn depth(mut self, depth: u32) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn target_name(mut self, name: impl Into<String>) -> Self {
        self.target_name = Some(name.into());
        self
    }
}

impl<'a, C: Queryable> Dolt<'a, C> {
    /// Create a database, succeeding if it already exists.
    ///
    /// Returns whether the server counted affected rows; the no-op path of
    /// `IF NOT EXISTS` reports success too, so repeated calls are safe.
    pub async fn create_database(&mut self, name: &str) -> Result<bool> {
        self.statement_affected(create_database_statement(name)).await
    }

    /// Drop a database, succeeding if it does not exist.
    ///
    /// Dropped Dolt databases are kept server-side and can be restored with
    /// [`Dolt::undrop_database`] until purged.
    pub async fn drop_database(&mut self, name: &str) -> Result<bool> {
        self.statement_affected(drop_database_statement(name)).await
    }

    /// Names of all databases visible to the session, in server order.
    pub async fn list_databases(&mut self) -> Result<Vec<String>> {
        self.statement_names(LIST_DATABASES_QUERY).await
    }

    /// Select the database subsequent statements operate on.
    pub async fn use_database(&mut self, name: &str) -> Result<()> {
        self.statement_drop(use_database_statement(name)).await
    }

    /// Clone a database from a remote URL or file path.
    pub async fn clone_database(&mut self, source: &str, options: &CloneOptions) -> Result<bool> {
        self.procedure_status(clone_call(source, options)).await
    }

    /// Restore a previously dropped database.
    pub async fn undrop_database(&mut self, name: &str) -> Result<bool> {
        self.procedure_status(undrop_call(name)).await
    }

    /// Permanently discard all dropped databases held for undrop.
    pub async fn purge_dropped_databases(&mut self) -> Result<bool> {
        self.procedure_status(purge_dropped_call()).await
    }
}

pub(crate) const LIST_DATABASES_QUERY: &str = "SHOW DATABASES";

pub(crate) fn create_database_statement(name: &str) -> String {
    format!("CREATE DATABASE IF NOT EXISTS {}", quote_identifier(name))
}

pub(crate) fn drop_database_statement(name: &str) -> String {
    format!("DROP DATABASE IF EXISTS {}", quote_identifier(name))
}

pub(crate) fn use_database_statement(name: &str) -> String {
    format!("USE {}", quote_identifier(name))
}

pub(crate) fn clone_call(source: &str, options: &CloneOptions) -> ProcedureCall {
    let depth = options.depth.map(|depth| depth.to_string());
    ProcedureCall::new("DOLT_CLONE")
        .option("--branch", options.branch.as_deref())
        .option("--remote", options.remote.as_deref())
        .option("--depth", depth.as_deref())
        .positional(source)
        .positional_opt(options.target_name.as_deref())
}

pub(crate) fn undrop_call(name: &str) -> ProcedureCall {
    ProcedureCall::new("DOLT_UNDROP").positional(name)
}

pub(crate) fn purge_dropped_call() -> ProcedureCall {
    ProcedureCall::new("DOLT_PURGE_DROPPED_DATABASES")
}
