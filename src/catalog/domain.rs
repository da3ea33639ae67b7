pub mod filter;
pub mod pricing;
pub mod service;

use async_trait::async_trait;
use crate::books::dto::BookDto;
use crate::catalog::dto::{DiscountInfo, DiscountedBook, GenreTotal};
use crate::core::library::LibraryResult;

#[async_trait]
pub trait CatalogService: Sync + Send {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto>;
    async fn update_book(&self, book: &BookDto) -> LibraryResult<bool>;
    async fn remove_book(&self, isbn: &str) -> LibraryResult<bool>;
    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>>;
    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>>;
    async fn discount_book(&self, isbn: &str, discount_percentage: f64) -> LibraryResult<Option<DiscountInfo>>;
    async fn find_books_sorted_by_price(&self) -> LibraryResult<Vec<BookDto>>;
    async fn genre_total(&self, genre: &str) -> LibraryResult<GenreTotal>;
    async fn discount_all_books(&self, discount_percentage: f64) -> LibraryResult<Vec<DiscountedBook>>;
    async fn find_books_in_price_range(&self, min_price: f64, max_price: f64) -> LibraryResult<Vec<BookDto>>;
}
