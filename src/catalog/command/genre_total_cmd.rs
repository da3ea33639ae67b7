use async_trait::async_trait;
use serde::Deserialize;
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::GenreTotal;
use crate::core::command::{Command, CommandError};

pub struct GenreTotalCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl GenreTotalCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct GenreTotalCommandRequest {
    pub genre: String,
}

impl GenreTotalCommandRequest {
    pub fn new(genre: &str) -> Self {
        Self {
            genre: genre.to_string(),
        }
    }
}

#[async_trait]
impl Command<GenreTotalCommandRequest, GenreTotal> for GenreTotalCommand {
    async fn execute(&self, req: GenreTotalCommandRequest) -> Result<GenreTotal, CommandError> {
        self.catalog_service.genre_total(req.genre.as_str()).await.map_err(CommandError::from)
    }
}
