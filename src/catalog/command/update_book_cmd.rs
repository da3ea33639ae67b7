use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use crate::books::dto::BookDto;
use crate::catalog::domain::CatalogService;
use crate::core::command::{Command, CommandError};

pub struct UpdateBookCommand {
    catalog_service: Box<dyn CatalogService>,
}

impl UpdateBookCommand {
    pub fn new(catalog_service: Box<dyn CatalogService>) -> Self {
        Self {
            catalog_service,
        }
    }
}

// isbn is taken from the request path, any isbn in the body is ignored
#[derive(Debug, Deserialize)]
pub struct UpdateBookCommandRequest {
    #[serde(skip)]
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub price: f64,
    #[serde(default)]
    pub genre: Vec<String>,
}

impl UpdateBookCommandRequest {
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

    pub fn with_isbn(mut self, isbn: &str) -> Self {
        self.isbn = isbn.to_string();
        self
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
pub struct UpdateBookCommandResponse {
    pub message: String,
    pub isbn: String,
}

impl UpdateBookCommandResponse {
    pub fn new(isbn: &str) -> Self {
        Self {
            message: "Book updated".to_string(),
            isbn: isbn.to_string(),
        }
    }
}

#[async_trait]
impl Command<UpdateBookCommandRequest, UpdateBookCommandResponse> for UpdateBookCommand {
    async fn execute(&self, req: UpdateBookCommandRequest) -> Result<UpdateBookCommandResponse, CommandError> {
        let book = req.build_book();
        if self.catalog_service.update_book(&book).await? {
            Ok(UpdateBookCommandResponse::new(book.isbn.as_str()))
        } else {
            Err(CommandError::not_found("Book not found or not updated"))
        }
    }
}
