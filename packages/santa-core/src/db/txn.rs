//! Transaction helper wrapping multi-row mutations in one atomic unit.

use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::domain::DomainError;

/// Execute a closure within a database transaction.
///
/// Commits when the closure returns `Ok`; rolls back (best effort, the
/// original error is preserved) when it returns `Err`. Draw and the two
/// resets go through here so that their reads of the ready set and all of
/// their writes share a single transaction boundary.
///
/// Call sites pass `|txn| Box::pin(async move { .. })`.
pub async fn with_txn<R, F>(db: &DatabaseConnection, f: F) -> Result<R, DomainError>
where
    F: for<'c> FnOnce(
        &'c DatabaseTransaction,
    ) -> Pin<Box<dyn Future<Output = Result<R, DomainError>> + Send + 'c>>,
{
    let txn = db.begin().await?;
    let out = f(&txn).await;

    match out {
        Ok(val) => {
            txn.commit().await?;
            Ok(val)
        }
        Err(err) => {
            // Best-effort rollback; preserve original error
            let _ = txn.rollback().await;
            Err(err)
        }
    }
}
