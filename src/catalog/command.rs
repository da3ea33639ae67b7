pub mod add_book_cmd;
pub mod discount_book_cmd;
pub mod discounted_books_cmd;
pub mod genre_total_cmd;
pub mod get_book_cmd;
pub mod list_books_cmd;
pub mod price_range_cmd;
pub mod remove_book_cmd;
pub mod sorted_books_cmd;
pub mod update_book_cmd;
