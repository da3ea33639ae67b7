pub mod ddb_book_repository;
pub mod sqlite_book_repository;

use async_trait::async_trait;
use crate::books::domain::model::BookEntity;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

// Genre sequences are stored as one delimited string. The delimiter is not
// escaped, so genre names must not contain it.
pub const GENRE_DELIMITER: &str = ",";

#[async_trait]
pub trait BookRepository: Repository<BookEntity> {
    // drops any existing books table and creates an empty one
    async fn initialize_schema(&self) -> LibraryResult<()>;

    // releases the underlying store handle
    async fn close(&self);
}

pub fn encode_genre(genre: &[String]) -> String {
    genre.join(GENRE_DELIMITER)
}

pub fn decode_genre(encoded: &str) -> Vec<String> {
    if encoded.is_empty() {
        return vec![];
    }
    encoded.split(GENRE_DELIMITER).map(str::to_string).collect()
}
