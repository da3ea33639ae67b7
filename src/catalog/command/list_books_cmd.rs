use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct ListBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl ListBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[async_trait]
impl Command<(), Vec<BookDto>> for ListBooksCommand {
    async fn execute(&self, _req: ()) -> Result<Vec<BookDto>, CommandError> {
        self.catalog_service.find_all_books().await.map_err(CommandError::from)
    }
}
