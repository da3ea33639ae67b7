//! Discount and aggregation arithmetic over book prices.
//!
//! Prices are `f64` at the edges but every derived value is computed in
//! `Decimal` from the shortest decimal form of its inputs, then rounded to two
//! places with midpoints away from zero. `19.995` therefore rounds to `20.0`
//! even though its nearest `f64` lies just below the midpoint. Inputs that
//! `Decimal` cannot represent fall back to `f64` arithmetic.

use std::str::FromStr;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use crate::books::domain::Book;
use crate::catalog::dto::{DiscountInfo, DiscountedBook};

const PRICE_SCALE: u32 = 2;

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(value.to_string().as_str()).ok()
}

fn round_decimal(value: Decimal) -> f64 {
    let rounded = value
        .round_dp_with_strategy(PRICE_SCALE, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or_default();
    normalize_zero(rounded)
}

fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 { 0.0 } else { value }
}

/// Rounds a monetary value to two decimal places, midpoints away from zero.
pub fn round_price(value: f64) -> f64 {
    match to_decimal(value) {
        Some(d) => round_decimal(d),
        None => normalize_zero((value * 100.0).round() / 100.0),
    }
}

/// `price * (1 - discount_percentage / 100)` rounded to two places.
///
/// The percentage is not clamped: negative values mark the price up and
/// values above 100 produce a negative price.
pub fn discounted_price(price: f64, discount_percentage: f64) -> f64 {
    let exact = to_decimal(price).zip(to_decimal(discount_percentage)).and_then(|(p, d)| {
        let factor = Decimal::ONE.checked_sub(d.checked_div(Decimal::ONE_HUNDRED)?)?;
        p.checked_mul(factor)
    });
    match exact {
        Some(value) => round_decimal(value),
        None => round_price(price * (1.0 - discount_percentage / 100.0)),
    }
}

pub fn discount_label(discount_percentage: f64) -> String {
    format!("{}%", discount_percentage)
}

pub fn discount_info<B: Book>(book: &B, discount_percentage: f64) -> DiscountInfo {
    DiscountInfo {
        isbn: book.id(),
        title: book.title().to_string(),
        original_price: book.price(),
        discount: discount_label(discount_percentage),
        discounted_price: discounted_price(book.price(), discount_percentage),
    }
}

pub fn discounted_books<B: Book>(books: &[B], discount_percentage: f64) -> Vec<DiscountedBook> {
    books.iter().map(|book| DiscountedBook {
        isbn: book.id(),
        title: book.title().to_string(),
        original_price: book.price(),
        discounted_price: discounted_price(book.price(), discount_percentage),
    }).collect()
}

/// Sum of prices over books carrying `genre`, matched case-insensitively
/// against whole genre entries. Zero when nothing matches.
pub fn genre_total<B: Book>(books: &[B], genre: &str) -> f64 {
    let prices: Vec<f64> = books.iter()
        .filter(|book| book.has_genre(genre))
        .map(|book| book.price())
        .collect();
    let exact = prices.iter()
        .try_fold(Decimal::ZERO, |acc, price| to_decimal(*price).and_then(|d| acc.checked_add(d)));
    match exact {
        Some(total) => round_decimal(total),
        None => round_price(prices.iter().sum()),
    }
}
