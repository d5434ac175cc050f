use crate::server::database::connection::{connect_util, Connection};
use crate::server::database::pool_config::PoolConfig;
use crate::server::database::DbError;
use crate::server::model::menu_item::MenuItem;
use crate::server::model::order::{OrderId, OrderLine};
use crate::server::model::validation::TableNumber;
use chrono::{DateTime, Utc};
use log::{error, info, warn};
use rust_decimal::Decimal;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tokio::time;
use tokio_postgres::Client;

/// Storage operations the order desk needs from a single connection.
pub(crate) trait DbClient: Send + 'static {
    type Transaction<'a>: DbTransaction
    where
        Self: 'a;

    async fn select_menu_items(&self) -> Result<Vec<MenuItem>, DbError>;

    async fn begin(&mut self) -> Result<Self::Transaction<'_>, DbError>;
}

/// Writes that must land together or not at all.
pub(crate) trait DbTransaction {
    async fn insert_order(
        &self,
        table_number: TableNumber,
        total_amount: Decimal,
        placed_at: DateTime<Utc>,
    ) -> Result<OrderId, DbError>;

    async fn insert_order_item(&self, order_id: OrderId, line: &OrderLine) -> Result<(), DbError>;

    async fn commit(self) -> Result<(), DbError>;

    async fn rollback(self) -> Result<(), DbError>;
}

pub(crate) struct CommonPool<M>
where M: DbClient
{
    /// idle connections, handed out in a FIFO manner
    pub(crate) idle: Mutex<VecDeque<M>>,
    /// one permit per idle connection
    pub(crate) available: Arc<Semaphore>,
}

pub(crate) struct Pool<M>(pub(crate) Arc<CommonPool<M>>) where M: DbClient;

impl<M> Clone for Pool<M>
where M: DbClient
{
    fn clone(&self) -> Pool<M> {
        Pool(self.0.clone())
    }
}

impl Pool<Client> {
    /// Open `config.size()` connections concurrently. Fails if any of them cannot connect.
    pub async fn connect(config: &PoolConfig) -> Result<Self, DbError> {
        let mut set = JoinSet::new();
        for _ in 0..config.size() {
            let conn_str = config.conn_str().to_string();
            set.spawn(async move { connect_util::connect(conn_str.as_str()).await });
        }
        let mut clients = Vec::with_capacity(config.size());
        while let Some(res) = set.join_next().await {
            match res {
                Ok(Ok(client)) => {
                    info!("connection created");
                    clients.push(client);
                },
                Ok(Err(e)) => return Err(e),
                Err(e) => {
                    error!("join_next failed when joining, {}", e);
                }
            };
        }
        if clients.len() < config.size() {
            error!("only {} of {} connections were created", clients.len(), config.size());
        }
        Ok(Self::with_clients(clients))
    }
}

impl<M> Pool<M>
where M: DbClient
{
    pub fn with_clients(clients: impl IntoIterator<Item = M>) -> Self {
        let idle: VecDeque<M> = clients.into_iter().collect();
        let available = Arc::new(Semaphore::new(idle.len()));
        Self(Arc::new(CommonPool {
            idle: Mutex::new(idle),
            available,
        }))
    }

    /// acquire a connection with specified timeout, bail out if timeout exceeds.
    pub async fn acquire(&self, timeout: Duration) -> Result<Connection<M>, DbError> {
        let exhausted = || DbError::PoolExhausted { seconds: timeout.as_secs() };
        let permit = match time::timeout(timeout, self.0.available.clone().acquire_owned()).await {
            Ok(Ok(permit)) => permit,
            Ok(Err(_)) => return Err(exhausted()),
            Err(_) => {
                error!("timed out to acquire a new connection from pool after {:?}", timeout);
                return Err(exhausted());
            }
        };
        let client = self.idle().pop_front();
        match client {
            Some(client) => Ok(Connection::new(client, self.clone(), permit)),
            None => Err(exhausted()),
        }
    }

    pub(crate) fn release(&self, client: M) {
        self.idle().push_back(client);
    }

    // A push or pop can't leave the queue half-updated, so a poisoned lock still guards
    // exactly one idle client per free permit.
    fn idle(&self) -> MutexGuard<'_, VecDeque<M>> {
        self.0.idle.lock().unwrap_or_else(|poisoned: PoisonError<_>| {
            warn!("pool lock poisoned by a panicked holder, recovering the idle queue");
            poisoned.into_inner()
        })
    }

    pub fn idle_count(&self) -> usize {
        self.0.available.available_permits()
    }
}

#[cfg(test)]
mod tests {
    use crate::server::database::mock::MockClient;
    use super::*;

    const TIMEOUT: Duration = Duration::from_millis(50);

    #[tokio::test]
    async fn empty_pool_times_out() {
        let pool = Pool::<MockClient>::with_clients(vec![]);
        assert!(matches!(pool.acquire(TIMEOUT).await, Err(DbError::PoolExhausted { .. })));
    }

    #[tokio::test]
    async fn test_acquire_and_release() {
        let pool = Pool::with_clients(vec![MockClient::default()]);
        assert_eq!(pool.idle_count(), 1);
        {
            let _conn = pool.acquire(TIMEOUT).await.unwrap();
            assert_eq!(pool.idle_count(), 0);
            assert!(pool.acquire(TIMEOUT).await.is_err());
        } // conn drops here, and is released automatically

        assert_eq!(pool.idle_count(), 1);
        assert!(pool.acquire(TIMEOUT).await.is_ok());
        assert!(pool.acquire(TIMEOUT).await.is_ok());
    }

    #[tokio::test]
    async fn waiter_gets_released_connection() {
        let pool = Pool::with_clients(vec![MockClient::default()]);
        let conn = pool.acquire(TIMEOUT).await.unwrap();
        let waiter = {
            let pool = pool.clone();
            tokio::spawn(async move { pool.acquire(Duration::from_secs(1)).await.is_ok() })
        };
        tokio::task::yield_now().await;
        drop(conn);
        assert!(waiter.await.unwrap());
    }

    #[tokio::test]
    async fn poisoned_lock_keeps_connections() {
        let pool = Pool::with_clients(vec![MockClient::default()]);
        let holder = pool.clone();
        let _ = std::thread::spawn(move || {
            let _idle = holder.0.idle.lock().unwrap();
            panic!("panic while holding the idle queue");
        })
        .join();
        assert!(pool.0.idle.is_poisoned());

        drop(pool.acquire(TIMEOUT).await.unwrap());
        assert_eq!(pool.idle_count(), 1);
        assert_eq!(pool.0.idle.lock().unwrap_or_else(PoisonError::into_inner).len(), 1);
        assert!(pool.acquire(TIMEOUT).await.is_ok());
    }
}
