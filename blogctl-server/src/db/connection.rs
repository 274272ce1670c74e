//! Per-call SQLite connections
//!
//! Every gateway call opens its own connection and closes it before
//! returning. Connections are not pooled or shared between requests.

use std::path::Path;
use std::time::Duration;

use futures::future::BoxFuture;
use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::{ConnectOptions, Connection};

use super::DbError;

/// How long a connection waits on a locked database before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Build connect options for the database file at `path`.
///
/// The file is created on first use if it does not exist.
pub fn connect_options(path: &Path) -> SqliteConnectOptions {
    SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .busy_timeout(BUSY_TIMEOUT)
}

/// Open one connection, run `f` with it, then close it.
///
/// The connection is closed whether `f` succeeds or fails, and the result
/// of `f` is returned unchanged. A failure while closing is logged and does
/// not replace that result.
///
/// # Example
///
/// ```ignore
/// let count: i64 = with_connection(&options, |conn| {
///     Box::pin(async move {
///         sqlx::query_scalar("SELECT COUNT(*) FROM posts").fetch_one(conn).await
///     })
/// })
/// .await?;
/// ```
pub async fn with_connection<T, F>(options: &SqliteConnectOptions, f: F) -> Result<T, DbError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut SqliteConnection) -> BoxFuture<'c, Result<T, sqlx::Error>> + Send,
{
    let mut conn = options.connect().await?;
    let result = f(&mut conn).await;

    if let Err(e) = conn.close().await {
        tracing::warn!(error = %e, "failed to close sqlite connection");
    }

    result.map_err(DbError::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn runs_closure_and_returns_value() {
        let dir = tempfile::tempdir().unwrap();
        let options = connect_options(&dir.path().join("conn.db"));

        let value: i64 = with_connection(&options, |conn| {
            Box::pin(async move { sqlx::query_scalar("SELECT 41 + 1").fetch_one(conn).await })
        })
        .await
        .unwrap();

        assert_eq!(value, 42);
    }

    #[tokio::test]
    async fn propagates_closure_failure() {
        let dir = tempfile::tempdir().unwrap();
        let options = connect_options(&dir.path().join("conn.db"));

        let result: Result<i64, DbError> = with_connection(&options, |conn| {
            Box::pin(async move {
                sqlx::query_scalar("SELECT id FROM missing_table")
                    .fetch_one(conn)
                    .await
            })
        })
        .await;

        assert!(matches!(result, Err(DbError::Sqlx(_))));
    }

    #[tokio::test]
    async fn creates_missing_database_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fresh.db");
        let options = connect_options(&path);

        with_connection(&options, |conn| {
            Box::pin(async move { sqlx::query("SELECT 1").execute(conn).await.map(|_| ()) })
        })
        .await
        .unwrap();

        assert!(path.exists());
    }
}
