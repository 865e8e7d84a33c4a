use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI64, Ordering};
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::Item;

/// Repository trait for Item persistence
///
/// Implementations: [`InMemoryItemRepository`] and
/// [`PgItemRepository`](crate::postgres::PgItemRepository).
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert when `item.id` is `None` (the store assigns the id),
    /// otherwise overwrite the stored item with that id.
    async fn save(&self, item: Item) -> ItemResult<Item>;

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>>;

    /// All items in ascending id order
    async fn find_all(&self) -> ItemResult<Vec<Item>>;

    /// Delete the stored item with `item.id`. Deleting an absent id is a no-op.
    async fn delete(&self, item: Item) -> ItemResult<()>;
}

/// In-memory repository, used for tests and local runs without PostgreSQL.
///
/// Ids come from a sequence starting at 1 and are never reused.
#[derive(Clone)]
pub struct InMemoryItemRepository {
    items: Arc<RwLock<BTreeMap<i64, Item>>>,
    next_id: Arc<AtomicI64>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
        }
    }
}

impl Default for InMemoryItemRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn save(&self, item: Item) -> ItemResult<Item> {
        let mut items = self.items.write().await;

        match item.id {
            None => {
                let id = self.next_id.fetch_add(1, Ordering::SeqCst);
                let saved = Item::with_id(id, item.name);
                items.insert(id, saved.clone());
                Ok(saved)
            }
            Some(id) => match items.get_mut(&id) {
                Some(existing) => {
                    existing.name = item.name;
                    Ok(existing.clone())
                }
                None => Err(ItemError::Storage(format!("Item {id} does not exist"))),
            },
        }
    }

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let items = self.items.read().await;
        Ok(items.values().cloned().collect())
    }

    async fn delete(&self, item: Item) -> ItemResult<()> {
        let id = item
            .id
            .ok_or_else(|| ItemError::Storage("Cannot delete an unsaved item".to_string()))?;

        self.items.write().await.remove(&id);
        Ok(())
    }
}
