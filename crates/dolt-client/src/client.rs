//! Connection adapter and statement plumbing

use mysql_async::Row;
use mysql_async::prelude::Queryable;

use crate::error::Result;
use crate::outcome::{self, MergeOutcome};
use crate::procedure::ProcedureCall;

/// Version-control operations over a Dolt SQL connection.
///
/// `Dolt` holds an exclusive borrow of a caller-owned connection for the
/// lifetime of the session. Operations are serialized by the borrow, the
/// caller keeps ownership (and the eventual disconnect), and the adapter
/// works over anything that implements [`Queryable`], so a pooled
/// [`mysql_async::Conn`] and an open [`mysql_async::Transaction`] both work.
pub struct Dolt<'a, C> {
    conn: &'a mut C,
}

impl<'a, C: Queryable> Dolt<'a, C> {
    /// Wrap an established connection.
    pub fn new(conn: &'a mut C) -> Self {
        Self { conn }
    }

    /// The borrowed connection, for running plain SQL mid-session.
    pub fn connection(&mut self) -> &mut C {
        self.conn
    }

    /// Invoke a procedure and return the first row of its result set.
    #[tracing::instrument(skip(self, call), fields(procedure = call.procedure()))]
    pub(crate) async fn procedure_row(
        &mut self,
        call: ProcedureCall,
    ) -> Result<(&'static str, Option<Row>)> {
        let procedure = call.procedure();
        let statement = call.into_statement();
        tracing::debug!(statement = %statement, "invoking stored procedure");
        let row: Option<Row> = self.conn.query_first(statement).await?;
        Ok((procedure, row))
    }

    /// Invoke a procedure whose result row carries a `status` column.
    pub(crate) async fn procedure_status(&mut self, call: ProcedureCall) -> Result<bool> {
        let (procedure, row) = self.procedure_row(call).await?;
        let ok = outcome::status_is_ok(procedure, row)?;
        if !ok {
            tracing::debug!(procedure, "procedure reported a nonzero status");
        }
        Ok(ok)
    }

    /// Invoke a procedure whose result row carries a commit `hash` column.
    pub(crate) async fn procedure_hash(&mut self, call: ProcedureCall) -> Result<String> {
        let (procedure, row) = self.procedure_row(call).await?;
        outcome::commit_hash(procedure, row)
    }

    /// Invoke a procedure whose result row carries a `violations` column.
    pub(crate) async fn procedure_violations(&mut self, call: ProcedureCall) -> Result<bool> {
        let (procedure, row) = self.procedure_row(call).await?;
        outcome::violations_found(procedure, row)
    }

    /// Invoke a merge-shaped procedure and project its outcome triple.
    pub(crate) async fn procedure_merge(&mut self, call: ProcedureCall) -> Result<MergeOutcome> {
        let (procedure, row) = self.procedure_row(call).await?;
        outcome::merge_outcome(procedure, row)
    }

    /// Run a statement and report whether the server counted affected rows.
    #[tracing::instrument(skip(self, statement), fields(sql_preview = %statement.chars().take(100).collect::<String>()))]
    pub(crate) async fn statement_affected(&mut self, statement: String) -> Result<bool> {
        let result = self.conn.query_iter(statement).await?;
        let affected = result.affected_rows();
        result.drop_result().await?;
        tracing::debug!(affected_rows = affected, "statement executed");
        Ok(affected > 0)
    }

    /// Run a statement for its side effect only.
    pub(crate) async fn statement_drop(&mut self, statement: String) -> Result<()> {
        tracing::debug!(statement = %statement, "executing statement");
        self.conn.query_drop(statement).await?;
        Ok(())
    }

    /// Collect a single-column result in the order the server returned it.
    pub(crate) async fn statement_names(&mut self, statement: &str) -> Result<Vec<String>> {
        let rows: Vec<(String,)> = self.conn.query(statement).await?;
        tracing::debug!(statement, rows = rows.len(), "enumeration query executed");
        Ok(rows.into_iter().map(|(name,)| name).collect())
    }

    /// First column of the first row, if any; NULL maps to `None`.
    pub(crate) async fn statement_scalar(&mut self, statement: &str) -> Result<Option<String>> {
        let row: Option<(Option<String>,)> = self.conn.query_first(statement).await?;
        Ok(row.and_then(|(value,)| value))
    }
}
