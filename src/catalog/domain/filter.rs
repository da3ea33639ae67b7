use std::cmp::Ordering;
use crate::books::domain::Book;

/// Books whose price lies in `[min_price, max_price]`, in input order.
/// An inverted range selects nothing.
pub fn filter_by_price_range<B: Book + Clone>(books: &[B], min_price: f64, max_price: f64) -> Vec<B> {
    if max_price < min_price {
        return vec![];
    }
    books.iter()
        .filter(|book| book.price() >= min_price && book.price() <= max_price)
        .cloned()
        .collect()
}

/// Ascending by price, ties broken by title compared byte-wise. The sort is
/// stable so books equal on both keys keep their input order.
pub fn sort_by_price_then_title<B: Book + Clone>(books: &[B]) -> Vec<B> {
    let mut sorted = books.to_vec();
    sorted.sort_by(compare_price_then_title);
    sorted
}

pub fn filter_and_sort<B: Book + Clone>(books: &[B], min_price: f64, max_price: f64) -> Vec<B> {
    sort_by_price_then_title(&filter_by_price_range(books, min_price, max_price))
}

fn compare_price_then_title<B: Book>(a: &B, b: &B) -> Ordering {
    a.price().total_cmp(&b.price()).then_with(|| a.title().cmp(b.title()))
}
