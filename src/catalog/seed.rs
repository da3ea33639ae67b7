use tracing::info;
use crate::books::domain::model::BookEntity;
use crate::books::repository::BookRepository;
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

pub fn sample_books() -> Vec<BookEntity> {
    vec![
        BookEntity::new("9781401232565", "Batman: Year One", "Frank Miller", 1987, 19.99,
                        &["Action", "Crime", "Superhero"]),
        BookEntity::new("9781401285516", "Batman: The Killing Joke", "Alan Moore", 1988, 17.99,
                        &["Action", "Psychological", "Superhero"]),
        BookEntity::new("9780785121792", "Spider-Man: Blue", "Jeph Loeb", 2002, 24.99,
                        &["Action", "Romance", "Superhero"]),
        BookEntity::new("9781401207529", "Superman: Red Son", "Mark Millar", 2003, 21.99,
                        &["Action", "Alternate Universe", "Superhero"]),
        BookEntity::new("9781401263112", "Wonder Woman: The Hiketeia", "Greg Rucka", 2002, 14.99,
                        &["Action", "Mythology", "Superhero"]),
    ]
}

// Drops every stored book and loads the sample graphic novels.
pub async fn seed_catalog(repository: &dyn BookRepository) -> LibraryResult<usize> {
    repository.initialize_schema().await?;
    let books = sample_books();
    for book in &books {
        repository.create(book).await?;
    }
    info!("seeded catalog with {} books", books.len());
    Ok(books.len())
}
