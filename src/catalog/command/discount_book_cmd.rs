use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::DiscountInfo;
use crate::core::command::{Command, CommandError};

pub struct DiscountBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl DiscountBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct DiscountBookCommandRequest {
    pub isbn: String,
    pub discount: f64,
}

impl DiscountBookCommandRequest {
    pub fn new(isbn: &str, discount: f64) -> Self {
        Self {
            isbn: isbn.to_string(),
            discount,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct DiscountBookCommandResponse {
    #[serde(flatten)]
    pub info: DiscountInfo,
}

#[async_trait]
impl Command<DiscountBookCommandRequest, DiscountBookCommandResponse> for DiscountBookCommand {
    async fn execute(&self, req: DiscountBookCommandRequest) -> Result<DiscountBookCommandResponse, CommandError> {
        match self.catalog_service.discount_book(req.isbn.as_str(), req.discount).await? {
            Some(info) => Ok(DiscountBookCommandResponse { info }),
            None => Err(CommandError::not_found("Book not found")),
        }
    }
}
