//! In-memory stand-in for the order tables, used by tests.

use std::cell::RefCell;
use std::sync::{Arc, Mutex, MutexGuard};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use crate::server::database::pool::{DbClient, DbTransaction};
use crate::server::database::DbError;
use crate::server::model::menu_item::{MenuItem, MenuItemId};
use crate::server::model::order::{OrderId, OrderLine};
use crate::server::model::validation::TableNumber;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoredOrder {
    pub id: OrderId,
    pub table_number: i32,
    pub total_amount: Decimal,
    pub placed_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StoredOrderItem {
    pub order_id: OrderId,
    pub menu_item_id: MenuItemId,
    pub quantity: i32,
    pub line_total: Decimal,
}

#[derive(Debug, Default)]
pub(crate) struct MockStore {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<StoredOrder>,
    pub order_items: Vec<StoredOrderItem>,
    /// every call fails as if the server were down
    pub unavailable: bool,
    /// fail the n-th (0-based) line insert of a transaction
    pub fail_item_insert_at: Option<usize>,
    pub fail_commit: bool,
    pub rollbacks: usize,
    last_order_id: OrderId,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct MockClient(Arc<Mutex<MockStore>>);

impl MockClient {
    pub fn with_menu(menu: Vec<MenuItem>) -> Self {
        let client = Self::default();
        client.store().menu = menu;
        client
    }

    pub fn store(&self) -> MutexGuard<'_, MockStore> {
        self.0.lock().unwrap()
    }

    fn check_available(&self) -> Result<(), DbError> {
        match self.store().unavailable {
            true => Err(DbError::Injected { reason: "database unavailable" }),
            false => Ok(()),
        }
    }
}

#[derive(Default)]
struct Staged {
    orders: Vec<StoredOrder>,
    order_items: Vec<StoredOrderItem>,
}

pub(crate) struct MockTransaction<'a> {
    client: &'a MockClient,
    staged: RefCell<Staged>,
}

impl DbClient for MockClient {
    type Transaction<'a> = MockTransaction<'a>;

    async fn select_menu_items(&self) -> Result<Vec<MenuItem>, DbError> {
        self.check_available()?;
        Ok(self.store().menu.clone())
    }

    async fn begin(&mut self) -> Result<Self::Transaction<'_>, DbError> {
        self.check_available()?;
        Ok(MockTransaction { client: self, staged: RefCell::new(Staged::default()) })
    }
}

impl DbTransaction for MockTransaction<'_> {
    async fn insert_order(
        &self,
        table_number: TableNumber,
        total_amount: Decimal,
        placed_at: DateTime<Utc>,
    ) -> Result<OrderId, DbError> {
        self.client.check_available()?;
        let id = {
            let mut store = self.client.store();
            store.last_order_id += 1;
            store.last_order_id
        };
        self.staged.borrow_mut().orders.push(StoredOrder {
            id,
            table_number: table_number.get(),
            total_amount,
            placed_at,
        });
        Ok(id)
    }

    async fn insert_order_item(&self, order_id: OrderId, line: &OrderLine) -> Result<(), DbError> {
        self.client.check_available()?;
        let mut staged = self.staged.borrow_mut();
        if self.client.store().fail_item_insert_at == Some(staged.order_items.len()) {
            return Err(DbError::Injected { reason: "order item insert failed" });
        }
        staged.order_items.push(StoredOrderItem {
            order_id,
            menu_item_id: line.menu_item_id(),
            quantity: line.quantity().get(),
            line_total: line.line_total(),
        });
        Ok(())
    }

    async fn commit(self) -> Result<(), DbError> {
        let mut store = self.client.store();
        if store.fail_commit {
            return Err(DbError::Injected { reason: "commit failed" });
        }
        let staged = self.staged.into_inner();
        store.orders.extend(staged.orders);
        store.order_items.extend(staged.order_items);
        Ok(())
    }

    async fn rollback(self) -> Result<(), DbError> {
        self.client.store().rollbacks += 1;
        Ok(())
    }
}
