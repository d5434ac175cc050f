use derive_more::{Display, Error};

pub(crate) mod connection;
#[cfg(test)]
pub(crate) mod mock;
pub(crate) mod pool;
pub(crate) mod pool_config;
pub(crate) mod queries;

#[derive(Debug, Display, Error)]
pub(crate) enum DbError {
    #[display("no connection available after {seconds}s")]
    PoolExhausted { seconds: u64 },
    #[display("failed to connect, {source}")]
    Connect { source: tokio_postgres::Error },
    #[display("query failed, {source}")]
    Query { source: tokio_postgres::Error },
    #[display("failed to begin transaction, {source}")]
    Begin { source: tokio_postgres::Error },
    #[display("insert failed, {source}")]
    Insert { source: tokio_postgres::Error },
    #[display("failed to commit, {source}")]
    Commit { source: tokio_postgres::Error },
    #[display("failed to roll back, {source}")]
    Rollback { source: tokio_postgres::Error },
    #[cfg(test)]
    #[display("injected failure: {reason}")]
    Injected { reason: &'static str },
}
