//! Stored procedure statement assembly
//!
//! Dolt procedures take CLI-style string arguments, e.g.
//! `CALL DOLT_COMMIT('-m', 'message', '--author', 'a <a@b>')`. A
//! [`ProcedureCall`] collects the argument slots of one call in procedure
//! order; absent optional slots contribute nothing, and the present
//! fragments are joined when the statement is rendered, so a skipped slot
//! can never leave a dangling separator behind.

/// A single `CALL` statement under construction.
#[derive(Debug, Clone)]
pub(crate) struct ProcedureCall {
    procedure: &'static str,
    arguments: Vec<String>,
}

impl ProcedureCall {
    pub(crate) fn new(procedure: &'static str) -> Self {
        Self {
            procedure,
            arguments: Vec::new(),
        }
    }

    /// Name of the target procedure, for diagnostics.
    pub(crate) fn procedure(&self) -> &'static str {
        self.procedure
    }

    /// Append a bare flag (e.g. `-A`) when `enabled` is set.
    pub(crate) fn flag_if(mut self, enabled: bool, flag: &str) -> Self {
        if enabled {
            self.arguments.push(quote_literal(flag));
        }
        self
    }

    /// Append a flag and its value (e.g. `--branch main`) when the value is
    /// present.
    pub(crate) fn option(mut self, flag: &str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            self.arguments.push(quote_literal(flag));
            self.arguments.push(quote_literal(value));
        }
        self
    }

    /// Append a required positional argument.
    pub(crate) fn positional(mut self, value: &str) -> Self {
        self.arguments.push(quote_literal(value));
        self
    }

    /// Append a positional argument when present.
    pub(crate) fn positional_opt(self, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.positional(value),
            None => self,
        }
    }

    /// Append one positional argument per element.
    pub(crate) fn positionals<'v>(mut self, values: impl IntoIterator<Item = &'v str>) -> Self {
        for value in values {
            self.arguments.push(quote_literal(value));
        }
        self
    }

    /// Render the final statement text.
    pub(crate) fn into_statement(self) -> String {
        format!("CALL {}({})", self.procedure, self.arguments.join(", "))
    }
}

/// Quote a string literal for embedding in a statement.
pub(crate) fn quote_literal(value: &str) -> String {
    format!("'{}'", value.replace('\'', "''").replace('\\', "\\\\"))
}

/// Quote an identifier (database or table name) with backticks.
pub(crate) fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}
