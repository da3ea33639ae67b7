use crate::core::domain::Identifiable;

pub mod model;

// Book exposes the fields the pricing and filtering functions read, so they
// work over both the persisted entity and the transfer object.
pub trait Book: Identifiable {
    fn title(&self) -> &str;
    fn price(&self) -> f64;
    fn genre(&self) -> &[String];

    // exact genre membership, compared case-insensitively
    fn has_genre(&self, genre: &str) -> bool {
        let wanted = genre.to_lowercase();
        self.genre().iter().any(|g| g.to_lowercase() == wanted)
    }
}
