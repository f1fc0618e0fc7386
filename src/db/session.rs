//! Connection seam for the data-access layer.
//!
//! A [`Connector`] opens one [`DbSession`] per operation. [`with_session`] is the
//! only place sessions are opened, and it closes them on every exit path.

use crate::db::models::RecordSet;
use crate::error::AppError;
use futures::future::BoxFuture;
use std::future::Future;
use tracing::{debug, warn};

/// A single open database connection.
pub trait DbSession: Send {
    /// Run a statement without bind parameters and collect every row.
    fn fetch_all(
        &mut self,
        sql: &str,
    ) -> impl Future<Output = Result<RecordSet, sqlx::Error>> + Send;

    /// Run a parameterized insert in its own transaction and commit it.
    /// Returns the number of affected rows.
    fn insert(
        &mut self,
        sql: &str,
        values: &[String],
    ) -> impl Future<Output = Result<u64, sqlx::Error>> + Send;

    fn close(self) -> impl Future<Output = Result<(), sqlx::Error>> + Send;
}

/// Opens sessions. Implementations carry whatever they need to connect.
pub trait Connector: Send + Sync {
    type Session: DbSession;

    fn connect(&self) -> impl Future<Output = Result<Self::Session, sqlx::Error>> + Send;
}

/// Acquire a session, run `op` on it, then release it whether `op` succeeded or not.
///
/// A failure to close is logged and does not replace the result of `op`.
pub async fn with_session<C, T, F>(connector: &C, op: F) -> Result<T, AppError>
where
    C: Connector,
    F: for<'s> FnOnce(&'s mut C::Session) -> BoxFuture<'s, Result<T, sqlx::Error>>,
{
    let mut session = connector.connect().await?;
    debug!("database session opened");

    let result = op(&mut session).await;

    match session.close().await {
        Ok(()) => debug!("database session closed"),
        Err(e) => warn!(error = %e, "failed to close database session cleanly"),
    }

    Ok(result?)
}
