use async_trait::async_trait;
use serde::Deserialize;
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct PriceRangeCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl PriceRangeCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct PriceRangeCommandRequest {
    pub min_price: f64,
    pub max_price: f64,
}

impl PriceRangeCommandRequest {
    pub fn new(min_price: f64, max_price: f64) -> Self {
        Self {
            min_price,
            max_price,
        }
    }
}

#[async_trait]
impl Command<PriceRangeCommandRequest, Vec<BookDto>> for PriceRangeCommand {
    async fn execute(&self, req: PriceRangeCommandRequest) -> Result<Vec<BookDto>, CommandError> {
        self.catalog_service.find_books_in_price_range(req.min_price, req.max_price).await
            .map_err(CommandError::from)
    }
}
