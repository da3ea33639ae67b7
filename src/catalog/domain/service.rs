use std::sync::Arc;
use async_trait::async_trait;
use tracing::{debug, info};
use crate::books::domain::model::BookEntity;
use crate::books::dto::BookDto;
use crate::books::repository::BookRepository;
use crate::catalog::domain::CatalogService;
use crate::catalog::domain::filter::{filter_and_sort, sort_by_price_then_title};
use crate::catalog::domain::pricing::{discount_info, discounted_books, genre_total};
use crate::catalog::dto::{DiscountInfo, DiscountedBook, GenreTotal};
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub(crate) struct CatalogServiceImpl {
    branch_id: String,
    book_repository: Arc<dyn BookRepository>,
}

impl CatalogServiceImpl {
    pub(crate) fn new(config: &Configuration, book_repository: Arc<dyn BookRepository>) -> Self {
        Self {
            branch_id: config.branch_id.to_string(),
            book_repository,
        }
    }

    async fn load_all(&self) -> LibraryResult<Vec<BookDto>> {
        let books = self.book_repository.get_all().await?;
        debug!("loaded {} books for branch {}", books.len(), self.branch_id);
        Ok(books.iter().map(BookDto::from).collect())
    }
}

#[async_trait]
impl CatalogService for CatalogServiceImpl {
    async fn add_book(&self, book: &BookDto) -> LibraryResult<BookDto> {
        book.validate()?;
        self.book_repository.create(&BookEntity::from(book)).await?;
        info!("added book {} to branch {}", book.isbn, self.branch_id);
        Ok(book.clone())
    }

    async fn update_book(&self, book: &BookDto) -> LibraryResult<bool> {
        book.validate()?;
        let updated = self.book_repository.update(&BookEntity::from(book)).await?;
        if updated {
            info!("updated book {} in branch {}", book.isbn, self.branch_id);
        }
        Ok(updated)
    }

    async fn remove_book(&self, isbn: &str) -> LibraryResult<bool> {
        let removed = self.book_repository.delete(isbn).await?;
        if removed {
            info!("removed book {} from branch {}", isbn, self.branch_id);
        }
        Ok(removed)
    }

    async fn find_book_by_isbn(&self, isbn: &str) -> LibraryResult<Option<BookDto>> {
        Ok(self.book_repository.get(isbn).await?.as_ref().map(BookDto::from))
    }

    async fn find_all_books(&self) -> LibraryResult<Vec<BookDto>> {
        self.load_all().await
    }

    async fn discount_book(&self, isbn: &str, discount_percentage: f64) -> LibraryResult<Option<DiscountInfo>> {
        let book = self.book_repository.get(isbn).await?;
        Ok(book.map(|b| discount_info(&b, discount_percentage)))
    }

    async fn find_books_sorted_by_price(&self) -> LibraryResult<Vec<BookDto>> {
        Ok(sort_by_price_then_title(&self.load_all().await?))
    }

    async fn genre_total(&self, genre: &str) -> LibraryResult<GenreTotal> {
        let books = self.load_all().await?;
        Ok(GenreTotal::new(genre, genre_total(&books, genre)))
    }

    async fn discount_all_books(&self, discount_percentage: f64) -> LibraryResult<Vec<DiscountedBook>> {
        Ok(discounted_books(&self.load_all().await?, discount_percentage))
    }

    async fn find_books_in_price_range(&self, min_price: f64, max_price: f64) -> LibraryResult<Vec<BookDto>> {
        Ok(filter_and_sort(&self.load_all().await?, min_price, max_price))
    }
}

impl From<&BookEntity> for BookDto {
    fn from(other: &BookEntity) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
            price: other.price,
            genre: other.genre.clone(),
        }
    }
}

impl From<&BookDto> for BookEntity {
    fn from(other: &BookDto) -> Self {
        Self {
            isbn: other.isbn.to_string(),
            title: other.title.to_string(),
            author: other.author.to_string(),
            published_year: other.published_year,
            price: other.price,
            genre: other.genre.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::books::dto::BookDto;
    use crate::books::factory::create_test_repository;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::factory;
    use crate::catalog::seed::seed_catalog;
    use crate::core::domain::Configuration;
    use crate::core::library::LibraryError;

    async fn build_service() -> Box<dyn CatalogService> {
        let repo = create_test_repository().await;
        factory::create_catalog_service(&Configuration::in_memory("test"), repo)
    }

    async fn build_seeded_service() -> Box<dyn CatalogService> {
        let repo = create_test_repository().await;
        seed_catalog(repo.as_ref()).await.expect("should seed catalog");
        factory::create_catalog_service(&Configuration::in_memory("test"), repo)
    }

    #[tokio::test]
    async fn test_should_add_book() {
        let catalog_svc = build_service().await;

        let book = BookDto::new("X1", "test book", "author", 1987, 20.0, &["Action"]);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        let loaded = catalog_svc.find_book_by_isbn("X1").await.expect("should return book").expect("should find book");
        assert_eq!(book, loaded);
        let info = catalog_svc.discount_book("X1", 10.0).await.expect("should not fail").expect("should find book");
        assert_eq!(18.0, info.discounted_price);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let catalog_svc = build_service().await;

        let book = BookDto::new("X1", "test book", "author", 1987, 20.0, &["Action"]);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::DuplicateKey { .. })));
    }

    #[tokio::test]
    async fn test_should_reject_invalid_book() {
        let catalog_svc = build_service().await;

        let book = BookDto::new("X1", "", "author", 1987, 20.0, &["Action"]);
        let res = catalog_svc.add_book(&book).await;
        assert!(matches!(res, Err(LibraryError::Validation { .. })));
        assert!(catalog_svc.find_all_books().await.expect("should list books").is_empty());
    }

    #[tokio::test]
    async fn test_should_update_book() {
        let catalog_svc = build_service().await;

        let mut book = BookDto::new("X1", "test book", "author", 1987, 20.0, &["Action"]);
        let _ = catalog_svc.add_book(&book).await.expect("should add book");

        book.title = "new title".to_string();
        book.price = 9.5;
        assert!(catalog_svc.update_book(&book).await.expect("should update book"));

        let loaded = catalog_svc.find_book_by_isbn("X1").await.expect("should return book").expect("should find book");
        assert_eq!(book, loaded);
    }

    #[tokio::test]
    async fn test_should_not_update_missing_book() {
        let catalog_svc = build_service().await;
        let book = BookDto::new("missing", "test book", "author", 1987, 20.0, &[]);
        assert!(!catalog_svc.update_book(&book).await.expect("should not fail"));
    }

    #[tokio::test]
    async fn test_should_remove_book() {
        let catalog_svc = build_seeded_service().await;

        assert!(catalog_svc.remove_book("9781401232565").await.expect("should remove book"));
        assert!(catalog_svc.find_book_by_isbn("9781401232565").await.expect("should not fail").is_none());
        assert!(!catalog_svc.remove_book("missing").await.expect("should not fail"));
        assert_eq!(4, catalog_svc.find_all_books().await.expect("should list books").len());
    }

    #[tokio::test]
    async fn test_should_find_nothing_for_missing_book() {
        let catalog_svc = build_seeded_service().await;
        assert!(catalog_svc.find_book_by_isbn("missing").await.expect("should not fail").is_none());
        assert!(catalog_svc.discount_book("missing", 10.0).await.expect("should not fail").is_none());
    }

    #[tokio::test]
    async fn test_should_sort_books_by_price() {
        let catalog_svc = build_seeded_service().await;
        let sorted = catalog_svc.find_books_sorted_by_price().await.expect("should sort books");
        let prices: Vec<f64> = sorted.iter().map(|b| b.price).collect();
        assert_eq!(vec![14.99, 17.99, 19.99, 21.99, 24.99], prices);
    }

    #[tokio::test]
    async fn test_should_total_genre() {
        let catalog_svc = build_seeded_service().await;
        let total = catalog_svc.genre_total("action").await.expect("should total genre");
        assert_eq!("action", total.genre.as_str());
        assert_eq!(99.95, total.total_price);
        assert_eq!(0.0, catalog_svc.genre_total("Horror").await.expect("should total genre").total_price);
    }

    #[tokio::test]
    async fn test_should_discount_all_books() {
        let catalog_svc = build_seeded_service().await;
        let discounted = catalog_svc.discount_all_books(10.0).await.expect("should discount books");
        assert_eq!(5, discounted.len());
        let year_one = discounted.iter().find(|b| b.isbn == "9781401232565").expect("should find book");
        assert_eq!(17.99, year_one.discounted_price);
    }

    #[tokio::test]
    async fn test_should_find_books_in_price_range() {
        let catalog_svc = build_seeded_service().await;
        let res = catalog_svc.find_books_in_price_range(15.0, 22.0).await.expect("should filter books");
        let isbns: Vec<&str> = res.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["9781401285516", "9781401232565", "9781401207529"], isbns);
        assert!(catalog_svc.find_books_in_price_range(15.0, 10.0).await.expect("should filter books").is_empty());
    }
}
