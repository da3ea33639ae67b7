use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use async_trait::async_trait;
use crate::core::library::{LibraryError, LibraryResult};

// Not-found is never an error at this layer: lookups return None and
// writes report whether a record matched.
#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, failing with DuplicateKey if its id is already stored
    async fn create(&self, entity: &Entity) -> LibraryResult<()>;

    // updates an entity, returns false when no entity has the same id
    async fn update(&self, entity: &Entity) -> LibraryResult<bool>;

    // get an entity
    async fn get(&self, id: &str) -> LibraryResult<Option<Entity>>;

    // delete an entity, returns false when nothing was removed
    async fn delete(&self, id: &str) -> LibraryResult<bool>;

    // all entities in store order
    async fn get_all(&self) -> LibraryResult<Vec<Entity>>;
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum RepositoryStore {
    DynamoDB,
    LocalDynamoDB,
    Sqlite,
}

impl FromStr for RepositoryStore {
    type Err = LibraryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dynamodb" => Ok(RepositoryStore::DynamoDB),
            "local-dynamodb" => Ok(RepositoryStore::LocalDynamoDB),
            "sqlite" => Ok(RepositoryStore::Sqlite),
            _ => Err(LibraryError::validation(
                format!("unknown repository store {}", s).as_str(), Some("CATALOG_STORE".to_string()))),
        }
    }
}

impl Display for RepositoryStore {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            RepositoryStore::DynamoDB => write!(f, "dynamodb"),
            RepositoryStore::LocalDynamoDB => write!(f, "local-dynamodb"),
            RepositoryStore::Sqlite => write!(f, "sqlite"),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::repository::RepositoryStore;

    #[tokio::test]
    async fn test_should_format_repository_store() {
        let stores = vec![
            RepositoryStore::DynamoDB,
            RepositoryStore::LocalDynamoDB,
            RepositoryStore::Sqlite,
        ];
        for store in stores {
            let str = store.to_string();
            let parsed: RepositoryStore = str.parse().expect("should parse store");
            assert_eq!(store, parsed);
        }
        assert!("mongo".parse::<RepositoryStore>().is_err());
    }
}
