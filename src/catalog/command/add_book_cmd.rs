use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct AddBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl AddBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct AddBookCommandRequest {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub price: f64,
    #[serde(default)]
    pub genre: Vec<String>,
}

impl AddBookCommandRequest {
    pub fn new(book: &BookDto) -> Self {
        Self {
            isbn: book.isbn.to_string(),
            title: book.title.to_string(),
            author: book.author.to_string(),
            published_year: book.published_year,
            price: book.price,
            genre: book.genre.clone(),
        }
    }

    pub fn build_book(&self) -> BookDto {
        BookDto {
            isbn: self.isbn.to_string(),
            title: self.title.to_string(),
            author: self.author.to_string(),
            published_year: self.published_year,
            price: self.price,
            genre: self.genre.clone(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AddBookCommandResponse {
    pub message: String,
    pub isbn: String,
}

impl AddBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            message: "Book created".to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[async_trait]
impl Command<AddBookCommandRequest, AddBookCommandResponse> for AddBookCommand {
    async fn execute(&self, req: AddBookCommandRequest) -> Result<AddBookCommandResponse, CommandError> {
        let book = req.build_book();
        self.catalog_service.add_book(&book).await
            .map_err(CommandError::from)
            .map(|saved| AddBookCommandResponse::new(saved.isbn.as_str()))
    }
}
