use async_trait::async_trait;
use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder};

use crate::{
    entity,
    error::{ItemError, ItemResult},
    models::Item,
    repository::ItemRepository,
};

/// PostgreSQL-backed repository for the `items` table
#[derive(Clone)]
pub struct PgItemRepository {
    db: DatabaseConnection,
}

impl PgItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    async fn save(&self, item: Item) -> ItemResult<Item> {
        match item.id {
            None => {
                let model = entity::ActiveModel {
                    id: NotSet,
                    name: Set(item.name),
                }
                .insert(&self.db)
                .await?;

                tracing::debug!(item_id = model.id, "Inserted item");
                Ok(model.into())
            }
            Some(id) => {
                let result = entity::ActiveModel {
                    id: Set(id),
                    name: Set(item.name),
                }
                .update(&self.db)
                .await;

                match result {
                    Ok(model) => Ok(model.into()),
                    Err(DbErr::RecordNotUpdated) => {
                        Err(ItemError::Storage(format!("Item {id} does not exist")))
                    }
                    Err(e) => Err(e.into()),
                }
            }
        }
    }

    async fn find_by_id(&self, id: i64) -> ItemResult<Option<Item>> {
        let model = entity::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(Into::into))
    }

    async fn find_all(&self) -> ItemResult<Vec<Item>> {
        let models = entity::Entity::find()
            .order_by_asc(entity::Column::Id)
            .all(&self.db)
            .await?;

        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn delete(&self, item: Item) -> ItemResult<()> {
        let id = item
            .id
            .ok_or_else(|| ItemError::Storage("Cannot delete an unsaved item".to_string()))?;

        let result = entity::Entity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(item_id = id, rows = result.rows_affected, "Deleted item");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn model(id: i64, name: &str) -> entity::Model {
        entity::Model {
            id,
            name: name.to_string(),
        }
    }

    #[tokio::test]
    async fn test_save_new_item_returns_assigned_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Sample Item")]])
            .append_exec_results([MockExecResult {
                last_insert_id: 1,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let saved = repo.save(Item::new("Sample Item")).await.unwrap();

        assert_eq!(saved, Item::with_id(1, "Sample Item"));
    }

    #[tokio::test]
    async fn test_save_existing_item_updates_name() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(3, "Renamed")]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let saved = repo.save(Item::with_id(3, "Renamed")).await.unwrap();

        assert_eq!(saved, Item::with_id(3, "Renamed"));
    }

    #[tokio::test]
    async fn test_save_missing_item_is_storage_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let result = repo.save(Item::with_id(404, "ghost")).await;

        assert!(matches!(result, Err(ItemError::Storage(_))));
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "Sample Item")]])
            .append_query_results([Vec::<entity::Model>::new()])
            .into_connection();
        let repo = PgItemRepository::new(db);

        assert_eq!(
            repo.find_by_id(1).await.unwrap(),
            Some(Item::with_id(1, "Sample Item"))
        );
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_find_all_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![model(1, "a"), model(2, "b")]])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let items = repo.find_all().await.unwrap();

        assert_eq!(items, vec![Item::with_id(1, "a"), Item::with_id(2, "b")]);
    }

    #[tokio::test]
    async fn test_delete_executes_by_id() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = PgItemRepository::new(db);

        repo.delete(Item::with_id(1, "a")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_unsaved_item_fails_without_query() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PgItemRepository::new(db);

        let result = repo.delete(Item::new("unsaved")).await;

        assert!(matches!(result, Err(ItemError::Storage(_))));
    }

    #[tokio::test]
    async fn test_database_errors_propagate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("boom".to_string())])
            .into_connection();
        let repo = PgItemRepository::new(db);

        let result = repo.find_all().await;

        assert!(matches!(result, Err(ItemError::Database(_))));
    }
}
