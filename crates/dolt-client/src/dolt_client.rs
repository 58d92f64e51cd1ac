//! Dolt version-control client
//!
//! Dolt is a MySQL-compatible database with Git-style version control. The
//! server exposes every version-control operation as a stored procedure
//! (`DOLT_COMMIT`, `DOLT_TAG`, ...) or a system table; this crate wraps an
//! established [`mysql_async`] connection and turns those procedures into
//! typed method calls. All version-control logic stays in the server: each
//! call assembles one SQL statement and projects the returned row into a
//! typed outcome.
//!
//! The connection remains owned by the caller. [`Dolt`] borrows it
//! exclusively for the session and never closes it, so it works equally over
//! a pooled `Conn` or an open `Transaction`. Transport and statement errors
//! pass through from [`mysql_async`] unchanged; failures the server reports
//! through a `status` column come back as `Ok(false)` instead.
//!
//! # Example
//!
//! ```no_run
//! use dolt_client::{CommitOptions, Dolt};
//!
//! # async fn example() -> dolt_client::Result<()> {
//! let pool = mysql_async::Pool::new("mysql://root@127.0.0.1:3306/app");
//! let mut conn = pool.get_conn().await?;
//!
//! let mut dolt = Dolt::new(&mut conn);
//! dolt.add(&[]).await?;
//! let hash = dolt
//!     .commit(
//!         "initial import",
//!         &CommitOptions::default().author("ci <ci@example.com>"),
//!     )
//!     .await?;
//! println!("committed {hash}");
//! # Ok(())
//! # }
//! ```

mod client;
mod database;
mod error;
mod outcome;
mod procedure;
mod schema;
mod sync;
mod version_control;

#[cfg(test)]
mod database_tests;
#[cfg(test)]
mod outcome_tests;
#[cfg(test)]
mod procedure_tests;
#[cfg(test)]
mod schema_tests;
#[cfg(test)]
mod sync_tests;
#[cfg(test)]
mod version_control_tests;

pub use client::Dolt;
pub use database::CloneOptions;
pub use error::{DoltError, Result};
pub use outcome::MergeOutcome;
pub use schema::{ColumnTagOptions, VerifyConstraintsOptions};
pub use sync::{FetchOptions, PullOptions, PushOptions};
pub use version_control::{
    BranchOptions, CheckoutOptions, CommitOptions, MergeOptions, ResetMode, RevertOptions,
    TagOptions,
};
