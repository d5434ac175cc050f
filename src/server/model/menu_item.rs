use rust_decimal::Decimal;
use serde::Serialize;

pub(crate) type MenuItemId = i32;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: Decimal,
}

#[derive(Debug, Serialize)]
pub(crate) struct GetMenuResponse {
    pub items: Vec<MenuItem>,
}
