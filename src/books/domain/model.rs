use serde::{Deserialize, Serialize};
use crate::books::domain::Book;
use crate::core::domain::Identifiable;

// BookEntity is the persisted form of one catalog item, keyed by isbn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookEntity {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub published_year: i32,
    pub price: f64,
    pub genre: Vec<String>,
}

impl BookEntity {
    pub fn new(isbn: &str, title: &str, author: &str, published_year: i32, price: f64, genre: &[&str]) -> Self {
        Self {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            published_year,
            price,
            genre: genre.iter().map(|g| g.to_string()).collect(),
        }
    }
}

impl Identifiable for BookEntity {
    fn id(&self) -> String {
        self.isbn.to_string()
    }
}

impl Book for BookEntity {
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
