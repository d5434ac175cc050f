use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio_postgres::Client;
use crate::server::database::pool::{DbClient, Pool};
use crate::server::service::accumulator::OrderAccumulator;
use crate::server::service::catalog::MenuCatalog;

/// Everything a request handler can reach: the pool, the menu loaded at
/// startup, and the single in-progress order of this session.
pub(crate) struct AppState<M: DbClient = Client> {
    db_pool: Pool<M>,
    catalog: Arc<MenuCatalog>,
    order: Arc<Mutex<OrderAccumulator>>,
    db_timeout: Duration,
}

impl<M: DbClient> Clone for AppState<M> {
    fn clone(&self) -> Self {
        Self {
            db_pool: self.db_pool.clone(),
            catalog: self.catalog.clone(),
            order: self.order.clone(),
            db_timeout: self.db_timeout,
        }
    }
}

impl<M: DbClient> AppState<M> {
    pub fn new(db_pool: Pool<M>, catalog: MenuCatalog, db_timeout: Duration) -> Self {
        Self {
            db_pool,
            catalog: Arc::new(catalog),
            order: Arc::new(Mutex::new(OrderAccumulator::new())),
            db_timeout,
        }
    }

    pub fn db_pool(&self) -> &Pool<M> {
        &self.db_pool
    }

    pub fn catalog(&self) -> &MenuCatalog {
        &self.catalog
    }

    /// Held for the whole of an action so actions on the order never interleave.
    pub fn order(&self) -> &Mutex<OrderAccumulator> {
        &self.order
    }

    pub fn db_timeout(&self) -> Duration {
        self.db_timeout
    }
}
