use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::DiscountedBook;
use crate::core::command::{Command, CommandError};

pub struct DiscountedBooksCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl DiscountedBooksCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DiscountedBooksCommandRequest {
    pub discount: f64,
}

impl DiscountedBooksCommandRequest {
    pub fn new(discount: f64) -> Self {
        Self {
            discount,
        }
    }
}

#[async_trait]
impl Command<DiscountedBooksCommandRequest, Vec<DiscountedBook>> for DiscountedBooksCommand {
    async fn execute(&self, req: DiscountedBooksCommandRequest) -> Result<Vec<DiscountedBook>, CommandError> {
        self.catalog_service.discount_all_books(req.discount).await.map_err(CommandError::from)
    }
}
