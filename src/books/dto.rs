use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;
use crate::core::library::{LibraryError, LibraryResult};

// BookDto is a data transfer object for Catalog service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookDto {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub price: f64,
    pub genre: Vec<String>,
}

impl BookDto {
    pub fn new(isbn: &str, title: &str, author: &str, published_year: i32, price: f64, genre: &[&str]) -> BookDto {
        BookDto {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            published_year,
            price,
            genre: genre.iter().map(|g| g.to_string()).collect(),
        }
    }

    // Checked before any write reaches the store. Genre entries containing the
    // storage delimiter are accepted and will be split on read.
    pub fn validate(&self) -> LibraryResult<()> {
        if self.isbn.trim().is_empty() {
            return Err(LibraryError::validation("isbn must not be blank", Some("isbn".to_string())));
        }
        if self.title.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("title must not be blank for {}", self.isbn).as_str(), Some("title".to_string())));
        }
        if self.author.trim().is_empty() {
            return Err(LibraryError::validation(
                format!("author must not be blank for {}", self.isbn).as_str(), Some("author".to_string())));
        }
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(LibraryError::validation(
                format!("price {} must be a non-negative number for {}", self.price, self.isbn).as_str(),
                Some("price".to_string())));
        }
        if self.genre.iter().any(|g| g.trim().is_empty()) {
            return Err(LibraryError::validation(
                format!("genre entries must not be blank for {}", self.isbn).as_str(), Some("genre".to_string())));
        }
        Ok(())
    }
}

impl Identifiable for BookDto {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookDto {
    fn title(&self) -> &str {
        self.title.as_str()
    }

    fn price(&self) -> f64 {
        self.price
    }

    fn genre(&self) -> &[String] {
        self.genre.as_slice()
    }
}
