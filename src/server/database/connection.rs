use std::ops::{Deref, DerefMut};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tokio::sync::OwnedSemaphorePermit;
use tokio_postgres::{Client, Row, Transaction};
use crate::server::database::pool::{DbClient, DbTransaction, Pool};
use crate::server::database::queries;
use crate::server::database::DbError;
use crate::server::model::menu_item::MenuItem;
use crate::server::model::order::{OrderId, OrderLine};
use crate::server::model::validation::TableNumber;

/// A client checked out of the pool. Goes back to the pool on drop.
pub(crate) struct Connection<M>
where M: DbClient
{
    client: Option<M>,
    pool: Pool<M>,
    // released after the client is back in the idle queue
    _permit: OwnedSemaphorePermit,
}

impl<M> Connection<M>
where M: DbClient
{
    pub fn new(client: M, pool: Pool<M>, permit: OwnedSemaphorePermit) -> Self {
        Self { client: Some(client), pool, _permit: permit }
    }
}

impl<M> Deref for Connection<M>
where M: DbClient
{
    type Target = M;

    fn deref(&self) -> &M {
        self.client.as_ref().expect("client is present until the connection drops")
    }
}

impl<M> DerefMut for Connection<M>
where M: DbClient
{
    fn deref_mut(&mut self) -> &mut M {
        self.client.as_mut().expect("client is present until the connection drops")
    }
}

impl<M> Drop for Connection<M>
where M: DbClient
{
    fn drop(&mut self) {
        if let Some(client) = self.client.take() {
            self.pool.release(client);
        }
    }
}

pub(crate) mod connect_util {
    use log::error;
    use tokio_postgres::{Client, NoTls};
    use crate::server::database::DbError;

    pub async fn connect(str: &str) -> Result<Client, DbError> {
        let (client, conn) = tokio_postgres::connect(str, NoTls)
            .await
            .map_err(|source| DbError::Connect { source })?;
        tokio::spawn(async move {
            if let Err(e) = conn.await {
                error!("connection returned error and aborted, {}", e);
            }
        });
        Ok(client)
    }
}

fn menu_item_from_row(row: &Row) -> Result<MenuItem, tokio_postgres::Error> {
    Ok(MenuItem {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        price: row.try_get("price")?,
    })
}

impl DbClient for Client {
    type Transaction<'a> = Transaction<'a>;

    async fn select_menu_items(&self) -> Result<Vec<MenuItem>, DbError> {
        let rows = self
            .query(queries::SELECT_MENU_ITEMS, &[])
            .await
            .map_err(|source| DbError::Query { source })?;
        rows.iter()
            .map(|row| menu_item_from_row(row).map_err(|source| DbError::Query { source }))
            .collect()
    }

    async fn begin(&mut self) -> Result<Self::Transaction<'_>, DbError> {
        self.transaction().await.map_err(|source| DbError::Begin { source })
    }
}

impl DbTransaction for Transaction<'_> {
    async fn insert_order(
        &self,
        table_number: TableNumber,
        total_amount: Decimal,
        placed_at: DateTime<Utc>,
    ) -> Result<OrderId, DbError> {
        let row = self
            .query_one(queries::INSERT_ORDER, &[&table_number.get(), &total_amount, &placed_at])
            .await
            .map_err(|source| DbError::Insert { source })?;
        row.try_get("id").map_err(|source| DbError::Insert { source })
    }

    async fn insert_order_item(&self, order_id: OrderId, line: &OrderLine) -> Result<(), DbError> {
        self.execute(
            queries::INSERT_ORDER_ITEM,
            &[&order_id, &line.menu_item_id(), &line.quantity().get(), &line.line_total()],
        )
            .await
            .map(|_| ())
            .map_err(|source| DbError::Insert { source })
    }

    async fn commit(self) -> Result<(), DbError> {
        Transaction::commit(self).await.map_err(|source| DbError::Commit { source })
    }

    async fn rollback(self) -> Result<(), DbError> {
        Transaction::rollback(self).await.map_err(|source| DbError::Rollback { source })
    }
}
