use std::sync::Arc;
use tracing::info;
use crate::books::repository::BookRepository;
use crate::books::repository::ddb_book_repository::DDBBookRepository;
use crate::books::repository::sqlite_book_repository::SqliteBookRepository;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::RepositoryStore;
use crate::utils::ddb::build_db_client;
use crate::utils::sqlite::open_pool;

// Opens the store handle described by the configuration. The returned
// repository is the only writer of the books table and is closed by the
// caller at shutdown.
pub async fn create_book_repository(config: &Configuration) -> LibraryResult<Arc<dyn BookRepository>> {
    info!("creating book repository store={} table={}", config.store, config.table_name);
    match config.store {
        RepositoryStore::DynamoDB => {
            let client = build_db_client(config.store).await?;
            Ok(Arc::new(DDBBookRepository::new(client, config.table_name.as_str())))
        }
        RepositoryStore::LocalDynamoDB => {
            let client = build_db_client(config.store).await?;
            let repo = DDBBookRepository::new(client, config.table_name.as_str());
            repo.ensure_schema().await;
            Ok(Arc::new(repo))
        }
        RepositoryStore::Sqlite => {
            let pool = open_pool(config.database_url.as_str()).await?;
            let repo = SqliteBookRepository::new(pool, config.table_name.as_str());
            repo.ensure_schema().await?;
            Ok(Arc::new(repo))
        }
    }
}

// in-memory sqlite repository with a fresh books table, private to each caller
#[cfg(test)]
pub(crate) async fn create_test_repository() -> Arc<dyn BookRepository> {
    let repo = create_book_repository(&Configuration::in_memory("test")).await.expect("should create repository");
    repo.initialize_schema().await.expect("should initialize schema");
    repo
}

#[cfg(test)]
mod tests {
    use crate::books::domain::model::BookEntity;
    use crate::books::factory::create_book_repository;
    use crate::books::repository::BookRepository;
    use crate::core::domain::Configuration;
    use crate::core::repository::Repository;

    #[tokio::test]
    async fn test_should_create_sqlite_repository() {
        let repo = create_book_repository(&Configuration::in_memory("test")).await.expect("should create repository");
        let book = BookEntity::new("X1", "test book", "author", 1987, 20.0, &["Action"]);
        repo.create(&book).await.expect("should create book");
        assert_eq!(1, repo.get_all().await.expect("should list books").len());
        repo.close().await;
    }
}
