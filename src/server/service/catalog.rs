use std::time::Duration;
use log::info;
use crate::server::database::pool::{DbClient, Pool};
use crate::server::database::DbError;
use crate::server::model::menu_item::{MenuItem, MenuItemId};
use crate::server::model::validation::ValidationError;

/// Menu items loaded once when the service starts.
#[derive(Debug, Default)]
pub(crate) struct MenuCatalog {
    items: Vec<MenuItem>,
}

impl MenuCatalog {
    pub fn new(items: Vec<MenuItem>) -> Self {
        Self { items }
    }

    /// Read every menu item, in the order storage returns them.
    pub async fn fetch<M: DbClient>(pool: &Pool<M>, timeout: Duration) -> Result<Self, DbError> {
        let conn = pool.acquire(timeout).await?;
        let items = conn.select_menu_items().await?;
        info!("loaded {} menu items", items.len());
        Ok(Self::new(items))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn find(&self, id: MenuItemId) -> Option<&MenuItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Resolve the item picked by staff, if any.
    pub fn select(&self, id: Option<MenuItemId>) -> Result<&MenuItem, ValidationError> {
        let id = id.ok_or(ValidationError::NoMenuItemSelected)?;
        self.find(id).ok_or(ValidationError::UnknownMenuItem { id })
    }
}
