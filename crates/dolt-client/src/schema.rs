//! Schema maintenance and constraint verification

use mysql_async::prelude::Queryable;

use crate::client::Dolt;
use crate::error::Result;
use crate::procedure::ProcedureCall;
use crate::version_control::CommitOptions;

/// Options for [`Dolt::update_column_tag`].
#[derive(Debug, Clone, Default)]
pub struct ColumnTagOptions {
    /// Commit the tag change right after applying it.
    pub commit: bool,
}

impl ColumnTagOptions {
    pub fn commit(mut self, value: bool) -> Self {
        self.commit = value;
        self
    }
}

/// Options for [`Dolt::verify_constraints`].
#[derive(Debug, Clone, Default)]
pub struct VerifyConstraintsOptions {
    /// Verify every row instead of only rows changed since the last commit
    /// (`--all`).
    pub every_row: bool,
    /// Report violations without recording them in the
    /// `dolt_constraint_violations` tables (`--output-only`).
    pub output_only: bool,
}

impl VerifyConstraintsOptions {
    pub fn every_row(mut self, value: bool) -> Self {
        self.every_row = value;
        self
    }

    pub fn output_only(mut self, value: bool) -> Self {
        self.output_only = value;
        self
    }
}

impl<'a, C: Queryable> Dolt<'a, C> {
    /// Overwrite the schema tag of a column.
    ///
    /// Column tags identify columns across schema changes; rewriting one is
    /// a maintenance operation for repairing tag collisions after imports.
    /// With [`ColumnTagOptions::commit`] set, the change is committed
    /// immediately with a generated message.
    pub async fn update_column_tag(
        &mut self,
        table: &str,
        column: &str,
        tag: u64,
        options: &ColumnTagOptions,
    ) -> Result<bool> {
        let updated = self
            .procedure_status(update_column_tag_call(table, column, tag))
            .await?;
        if updated && options.commit {
            let message = format!("update tag for column {table}.{column} to {tag}");
            self.commit(&message, &CommitOptions::default().stage_modified(true))
                .await?;
        }
        Ok(updated)
    }

    /// Check constraint violations, scoped to one table or the whole
    /// database.
    ///
    /// Returns `Ok(true)` when violations were found. Violations do not
    /// occur on ordinary writes (those fail up front); they appear after
    /// operations that bypass constraint enforcement, such as merges.
    pub async fn verify_constraints(
        &mut self,
        table: Option<&str>,
        options: &VerifyConstraintsOptions,
    ) -> Result<bool> {
        self.procedure_violations(verify_constraints_call(table, options))
            .await
    }
}

pub(crate) fn update_column_tag_call(table: &str, column: &str, tag: u64) -> ProcedureCall {
    ProcedureCall::new("DOLT_UPDATE_COLUMN_TAG")
        .positional(table)
        .positional(column)
        .positional(&tag.to_string())
}

pub(crate) fn verify_constraints_call(
    table: Option<&str>,
    options: &VerifyConstraintsOptions,
) -> ProcedureCall {
    ProcedureCall::new("DOLT_VERIFY_CONSTRAINTS")
        .flag_if(options.every_row, "--all")
        .flag_if(options.output_only, "--output-only")
        .positional_opt(table)
}
