use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct SortedBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl SortedBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[async_trait]
impl Command<(), Vec<BookDto>> for SortedBooksCommand {
    async fn execute(&self, _req: ()) -> Result<Vec<BookDto>, CommandError> {
        self.catalog_service.find_books_sorted_by_price().await.map_err(CommandError::from)
    }
}
