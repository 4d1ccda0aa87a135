//! Shared MongoDB error mapping for repositories with basic CRUD semantics.

use mongodb::error::ErrorKind;
use tracing::debug;

use super::mongo_repository::RepositoryError;

/// True when the failure means the server could not be reached at all.
fn is_connection_failure(kind: &ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::Io(_)
            | ErrorKind::ServerSelection { .. }
            | ErrorKind::ConnectionPoolCleared { .. }
            | ErrorKind::DnsResolve { .. }
    )
}

/// Map repository errors into query/connection constructors.
///
/// Reachability problems map to `connection`; everything else, including
/// documents that fail to decode, maps to `query`.
pub fn map_basic_mongo_error<E, Q, C>(error: RepositoryError, query: Q, connection: C) -> E
where
    Q: Fn(String) -> E,
    C: Fn(String) -> E,
{
    debug!(%error, "mongodb operation failed");

    match error {
        RepositoryError::Driver(driver) if is_connection_failure(&driver.kind) => {
            connection(driver.to_string())
        }
        RepositoryError::Driver(driver) => query(driver.to_string()),
        unexpected @ RepositoryError::UnexpectedId(_) => query(unexpected.to_string()),
    }
}
