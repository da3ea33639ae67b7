use serde::{Deserialize, Serialize};

// DiscountInfo presents one book's price before and after a discount
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountInfo {
    pub isbn: String,
    pub title: String,
    pub original_price: f64,
    pub discount: String,
    pub discounted_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiscountedBook {
    pub isbn: String,
    pub title: String,
    pub original_price: f64,
    pub discounted_price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenreTotal {
    pub genre: String,
    pub total_price: f64,
}

impl GenreTotal {
    pub fn new(genre: &str, total_price: f64) -> Self {
        Self {
            genre: genre.to_string(),
            total_price,
        }
    }
}
