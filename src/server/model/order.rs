use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use crate::server::model::menu_item::{MenuItem, MenuItemId};
use crate::server::model::validation::{Quantity, TableNumber};

pub(crate) type OrderId = i64;

/// One entry of the in-progress order. Never changes once created.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct OrderLine {
    menu_item_id: MenuItemId,
    item_name: String,
    quantity: Quantity,
    unit_price: Decimal,
    line_total: Decimal,
}

impl OrderLine {
    pub fn new(item: &MenuItem, quantity: Quantity) -> Self {
        Self {
            menu_item_id: item.id,
            item_name: item.name.clone(),
            quantity,
            unit_price: item.price,
            line_total: item.price * Decimal::from(quantity.get()),
        }
    }

    pub fn menu_item_id(&self) -> MenuItemId {
        self.menu_item_id
    }

    pub fn item_name(&self) -> &str {
        &self.item_name
    }

    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn line_total(&self) -> Decimal {
        self.line_total
    }
}

/// What gets written for one submission: the order header plus its lines.
#[derive(Debug)]
pub(crate) struct NewOrder<'a> {
    pub table_number: TableNumber,
    pub total_amount: Decimal,
    pub placed_at: chrono::DateTime<chrono::Utc>,
    pub lines: &'a [OrderLine],
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct SubmittedOrder {
    pub order_id: OrderId,
    pub table_number: TableNumber,
    pub total_amount: Decimal,
    pub line_count: usize,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostOrderLineRequest {
    pub menu_item_id: Option<MenuItemId>,
    pub quantity: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PostOrderRequest {
    pub table_number: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderResponse {
    pub lines: Vec<OrderLine>,
    pub running_total: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct PostOrderResponse {
    pub order_id: OrderId,
    pub table_number: TableNumber,
    pub total_amount: String,
    pub line_count: usize,
}
