use axum::{
    body::HttpBody,
    extract::{Path, Query, State},
    http::StatusCode,
    response::Json,
    routing::get,
    BoxError, Router,
};
use serde_json::Value;
use crate::books::dto::BookDto;
use crate::catalog::command::add_book_cmd::{AddBookCommand, AddBookCommandRequest, AddBookCommandResponse};
use crate::catalog::command::discount_book_cmd::{DiscountBookCommand, DiscountBookCommandRequest, DiscountBookCommandResponse};
use crate::catalog::command::discounted_books_cmd::{DiscountedBooksCommand, DiscountedBooksCommandRequest};
use crate::catalog::command::genre_total_cmd::{GenreTotalCommand, GenreTotalCommandRequest};
use crate::catalog::command::get_book_cmd::{GetBookCommand, GetBookCommandRequest, GetBookCommandResponse};
use crate::catalog::command::list_books_cmd::ListBooksCommand;
use crate::catalog::command::price_range_cmd::{PriceRangeCommand, PriceRangeCommandRequest};
use crate::catalog::command::remove_book_cmd::{RemoveBookCommand, RemoveBookCommandRequest, RemoveBookCommandResponse};
use crate::catalog::command::sorted_books_cmd::SortedBooksCommand;
use crate::catalog::command::update_book_cmd::{UpdateBookCommand, UpdateBookCommandRequest, UpdateBookCommandResponse};
use crate::catalog::domain::CatalogService;
use crate::catalog::dto::{DiscountedBook, GenreTotal};
use crate::catalog::factory;
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};

fn build_service(state: &AppState) -> Box<dyn CatalogService> {
    factory::create_catalog_service(&state.config, state.repository.clone())
}

// Generic over the request body so the same routes serve both hyper and the lambda runtime.
pub fn build_router<B>(state: AppState) -> Router<(), B>
    where B: HttpBody + Send + 'static, B::Data: Send, B::Error: Into<BoxError> {
    Router::new()
        .route("/books", get(list_books).post(add_book))
        .route("/books/sorted", get(sorted_books))
        .route("/books/price-range", get(books_in_price_range))
        .route("/books/discount/:isbn/:discount", get(discount_book))
        .route("/books/discounted/:discount", get(discounted_books))
        .route("/books/genre/:genre/total", get(genre_total))
        .route("/books/:isbn",
               get(find_book_by_isbn).put(update_book).delete(remove_book))
        .with_state(state)
}

pub async fn list_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = ListBooksCommand::new(build_service(&state)).execute(()).await?;
    Ok(Json(res))
}

pub async fn find_book_by_isbn(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<GetBookCommandResponse>, ServerError> {
    let req = GetBookCommandRequest { isbn };
    let res = GetBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn add_book(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<(StatusCode, Json<AddBookCommandResponse>), ServerError> {
    let req: AddBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = AddBookCommand::new(build_service(&state)).execute(req).await?;
    Ok((StatusCode::CREATED, Json(res)))
}

pub async fn update_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
    json: Json<Value>) -> Result<Json<UpdateBookCommandResponse>, ServerError> {
    let req: UpdateBookCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = UpdateBookCommand::new(build_service(&state)).execute(req.with_isbn(isbn.as_str())).await?;
    Ok(Json(res))
}

pub async fn remove_book(
    State(state): State<AppState>,
    Path(isbn): Path<String>) -> Result<Json<RemoveBookCommandResponse>, ServerError> {
    let req = RemoveBookCommandRequest { isbn };
    let res = RemoveBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn discount_book(
    State(state): State<AppState>,
    Path((isbn, discount)): Path<(String, f64)>) -> Result<Json<DiscountBookCommandResponse>, ServerError> {
    let req = DiscountBookCommandRequest { isbn, discount };
    let res = DiscountBookCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn sorted_books(
    State(state): State<AppState>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = SortedBooksCommand::new(build_service(&state)).execute(()).await?;
    Ok(Json(res))
}

pub async fn genre_total(
    State(state): State<AppState>,
    Path(genre): Path<String>) -> Result<Json<GenreTotal>, ServerError> {
    let req = GenreTotalCommandRequest { genre };
    let res = GenreTotalCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn discounted_books(
    State(state): State<AppState>,
    Path(discount): Path<f64>) -> Result<Json<Vec<DiscountedBook>>, ServerError> {
    let req = DiscountedBooksCommandRequest { discount };
    let res = DiscountedBooksCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

pub async fn books_in_price_range(
    State(state): State<AppState>,
    Query(req): Query<PriceRangeCommandRequest>) -> Result<Json<Vec<BookDto>>, ServerError> {
    let res = PriceRangeCommand::new(build_service(&state)).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::{Json, Router};
    use serde_json::json;
    use crate::books::factory::create_test_repository;
    use crate::catalog::command::price_range_cmd::PriceRangeCommandRequest;
    use crate::catalog::controller::{add_book, books_in_price_range, build_router, discount_book, discounted_books,
                                     find_book_by_isbn, genre_total, list_books, remove_book, sorted_books, update_book};
    use crate::catalog::seed::seed_catalog;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;

    async fn build_state() -> AppState {
        let repo = create_test_repository().await;
        seed_catalog(repo.as_ref()).await.expect("should seed catalog");
        AppState::new(&Configuration::in_memory("test"), repo)
    }

    fn new_book_json() -> serde_json::Value {
        json!({
            "isbn": "X1",
            "title": "test book",
            "author": "author",
            "published_year": 1987,
            "price": 20.0,
            "genre": ["Action"]
        })
    }

    #[tokio::test]
    async fn test_should_build_router() {
        let _router: Router = build_router(build_state().await);
    }

    #[tokio::test]
    async fn test_should_add_and_find_book() {
        let state = build_state().await;

        let (status, res) = add_book(State(state.clone()), Json(new_book_json())).await.expect("should add book");
        assert_eq!(StatusCode::CREATED, status);
        assert_eq!("Book created", res.0.message.as_str());
        assert_eq!("X1", res.0.isbn.as_str());

        let res = find_book_by_isbn(State(state.clone()), Path("X1".to_string())).await.expect("should find book");
        assert_eq!(20.0, res.0.book.price);

        let res = discount_book(State(state), Path(("X1".to_string(), 10.0))).await.expect("should discount book");
        assert_eq!(18.0, res.0.info.discounted_price);
    }

    #[tokio::test]
    async fn test_should_reject_duplicate_book() {
        let state = build_state().await;
        add_book(State(state.clone()), Json(new_book_json())).await.expect("should add book");

        let err = add_book(State(state), Json(new_book_json())).await.expect_err("should reject duplicate");
        assert_eq!(StatusCode::CONFLICT, err.0);
    }

    #[tokio::test]
    async fn test_should_reject_malformed_book() {
        let state = build_state().await;

        let err = add_book(State(state.clone()), Json(json!({"isbn": "X1"}))).await.expect_err("should reject body");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);

        let mut invalid = new_book_json();
        invalid["title"] = json!(" ");
        let err = add_book(State(state), Json(invalid)).await.expect_err("should reject blank title");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }

    #[tokio::test]
    async fn test_should_return_not_found() {
        let state = build_state().await;

        let err = find_book_by_isbn(State(state.clone()), Path("missing".to_string())).await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
        assert_eq!("Book not found", err.1.0["message"]);

        let err = discount_book(State(state.clone()), Path(("missing".to_string(), 10.0))).await.expect_err("should not find book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);

        let err = update_book(State(state.clone()), Path("missing".to_string()), Json(new_book_json())).await.expect_err("should not update book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);

        let err = remove_book(State(state.clone()), Path("missing".to_string())).await.expect_err("should not remove book");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
        assert_eq!(5, list_books(State(state)).await.expect("should list books").0.len());
    }

    #[tokio::test]
    async fn test_should_update_and_remove_book() {
        let state = build_state().await;

        let mut body = new_book_json();
        body["title"] = json!("Year One");
        let res = update_book(State(state.clone()), Path("9781401232565".to_string()), Json(body)).await.expect("should update book");
        assert_eq!("Book updated", res.0.message.as_str());
        assert_eq!("9781401232565", res.0.isbn.as_str());

        let res = find_book_by_isbn(State(state.clone()), Path("9781401232565".to_string())).await.expect("should find book");
        assert_eq!("Year One", res.0.book.title.as_str());
        assert!(find_book_by_isbn(State(state.clone()), Path("X1".to_string())).await.is_err());

        let res = remove_book(State(state.clone()), Path("9781401232565".to_string())).await.expect("should remove book");
        assert_eq!("Book deleted", res.0.message.as_str());
        assert_eq!(4, list_books(State(state)).await.expect("should list books").0.len());
    }

    #[tokio::test]
    async fn test_should_list_sorted_books() {
        let state = build_state().await;
        let res = sorted_books(State(state)).await.expect("should sort books");
        let isbns: Vec<&str> = res.0.iter().map(|b| b.isbn.as_str()).collect();
        assert_eq!(vec!["9781401263112", "9781401285516", "9781401232565", "9781401207529", "9780785121792"], isbns);
    }

    #[tokio::test]
    async fn test_should_total_genre() {
        let state = build_state().await;
        let res = genre_total(State(state), Path("ACTION".to_string())).await.expect("should total genre");
        assert_eq!("ACTION", res.0.genre.as_str());
        assert_eq!(99.95, res.0.total_price);
    }

    #[tokio::test]
    async fn test_should_discount_all_books() {
        let state = build_state().await;
        let res = discounted_books(State(state), Path(100.0)).await.expect("should discount books");
        assert_eq!(5, res.0.len());
        assert!(res.0.iter().all(|b| b.discounted_price == 0.0));
    }

    #[tokio::test]
    async fn test_should_filter_by_price_range() {
        let state = build_state().await;
        let res = books_in_price_range(State(state.clone()), Query(PriceRangeCommandRequest::new(20.0, 25.0)))
            .await.expect("should filter books");
        let titles: Vec<&str> = res.0.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(vec!["Superman: Red Son", "Spider-Man: Blue"], titles);

        let res = books_in_price_range(State(state), Query(PriceRangeCommandRequest::new(15.0, 10.0)))
            .await.expect("should filter books");
        assert!(res.0.is_empty());
    }
}
