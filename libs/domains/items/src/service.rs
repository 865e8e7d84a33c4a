//! Item Service - Business logic layer

use observability::ItemMetrics;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::error::{ItemError, ItemResult};
use crate::models::Item;
use crate::repository::ItemRepository;

/// Item service providing the CRUD operations
///
/// Turns empty lookups into [`ItemError::NotFound`]; every other repository
/// error is passed through unchanged.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Persist a new item. The store assigns the id; any id on the input is dropped.
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, item: Item) -> ItemResult<Item> {
        let saved = self.repository.save(Item { id: None, ..item }).await?;

        ItemMetrics::record_created();
        info!(item_id = ?saved.id, "Created item");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn get_item_by_id(&self, id: i64) -> ItemResult<Item> {
        self.find_existing(id, "get").await
    }

    #[instrument(skip(self))]
    pub async fn get_all_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.find_all().await
    }

    /// Replace the name of an existing item. The id of `new_data` is ignored.
    #[instrument(skip(self, new_data))]
    pub async fn update_item(&self, id: i64, new_data: Item) -> ItemResult<Item> {
        let mut existing = self.find_existing(id, "update").await?;
        existing.name = new_data.name;

        let saved = self.repository.save(existing).await?;

        ItemMetrics::record_updated();
        info!(item_id = id, "Updated item");
        Ok(saved)
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i64) -> ItemResult<()> {
        let existing = self.find_existing(id, "delete").await?;
        self.repository.delete(existing).await?;

        ItemMetrics::record_deleted();
        info!(item_id = id, "Deleted item");
        Ok(())
    }

    async fn find_existing(&self, id: i64, operation: &'static str) -> ItemResult<Item> {
        match self.repository.find_by_id(id).await? {
            Some(item) => Ok(item),
            None => {
                ItemMetrics::record_not_found(operation);
                Err(ItemError::not_found(id))
            }
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
