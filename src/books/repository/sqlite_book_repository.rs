use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::{debug, info};

use crate::books::domain::model::BookEntity;
use crate::books::repository::{decode_genre, encode_genre, BookRepository};
use crate::core::library::LibraryResult;
use crate::core::repository::Repository;

#[derive(sqlx::FromRow)]
struct BookRow {
    isbn: String,
    title: String,
    author: String,
    published_year: i32,
    price: f64,
    genre: String,
}

impl From<BookRow> for BookEntity {
    fn from(row: BookRow) -> Self {
        BookEntity {
            isbn: row.isbn,
            title: row.title,
            author: row.author,
            published_year: row.published_year,
            price: row.price,
            genre: decode_genre(row.genre.as_str()),
        }
    }
}

#[derive(Debug)]
pub struct SqliteBookRepository {
    pool: SqlitePool,
    table_name: String,
}

impl SqliteBookRepository {
    pub fn new(pool: SqlitePool, table_name: &str) -> Self {
        Self {
            pool,
            table_name: table_name.to_string(),
        }
    }

    // creates the books table unless it already exists
    pub async fn ensure_schema(&self) -> LibraryResult<()> {
        sqlx::query(self.create_table_sql("CREATE TABLE IF NOT EXISTS").as_str())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    fn create_table_sql(&self, prefix: &str) -> String {
        format!(
            r#"{} "{}" (
                isbn TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                author TEXT NOT NULL,
                published_year INTEGER NOT NULL,
                price REAL NOT NULL,
                genre TEXT NOT NULL
            )"#,
            prefix, self.table_name)
    }
}

#[async_trait]
impl Repository<BookEntity> for SqliteBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<()> {
        sqlx::query(format!(
            r#"INSERT INTO "{}" (isbn, title, author, published_year, price, genre) VALUES (?, ?, ?, ?, ?, ?)"#,
            self.table_name).as_str())
            .bind(&entity.isbn)
            .bind(&entity.title)
            .bind(&entity.author)
            .bind(entity.published_year)
            .bind(entity.price)
            .bind(encode_genre(&entity.genre))
            .execute(&self.pool)
            .await?;
        debug!("inserted book {}", entity.isbn);
        Ok(())
    }

    async fn update(&self, entity: &BookEntity) -> LibraryResult<bool> {
        let res = sqlx::query(format!(
            r#"UPDATE "{}" SET title = ?, author = ?, published_year = ?, price = ?, genre = ? WHERE isbn = ?"#,
            self.table_name).as_str())
            .bind(&entity.title)
            .bind(&entity.author)
            .bind(entity.published_year)
            .bind(entity.price)
            .bind(encode_genre(&entity.genre))
            .bind(&entity.isbn)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        let row = sqlx::query_as::<_, BookRow>(format!(
            r#"SELECT isbn, title, author, published_year, price, genre FROM "{}" WHERE isbn = ?"#,
            self.table_name).as_str())
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(BookEntity::from))
    }

    async fn delete(&self, id: &str) -> LibraryResult<bool> {
        let res = sqlx::query(format!(r#"DELETE FROM "{}" WHERE isbn = ?"#, self.table_name).as_str())
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(res.rows_affected() > 0)
    }

    async fn get_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let rows = sqlx::query_as::<_, BookRow>(format!(
            r#"SELECT isbn, title, author, published_year, price, genre FROM "{}""#,
            self.table_name).as_str())
            .fetch_all(&self.pool)
            .await?;
        Ok(rows.into_iter().map(BookEntity::from).collect())
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn initialize_schema(&self) -> LibraryResult<()> {
        let mut tx = self.pool.begin().await?;
        sqlx::query(format!(r#"DROP TABLE IF EXISTS "{}""#, self.table_name).as_str())
            .execute(&mut *tx)
            .await?;
        sqlx::query(self.create_table_sql("CREATE TABLE").as_str())
            .execute(&mut *tx)
            .await?;
        tx.commit().await?;
        info!("initialized sqlite table {}", self.table_name);
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
