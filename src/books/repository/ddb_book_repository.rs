use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::Client;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use tracing::{debug, info};

use crate::books::domain::model::BookEntity;
use crate::books::repository::{decode_genre, encode_genre, BookRepository};
use crate::core::library::{LibraryError, LibraryResult};
use crate::core::repository::Repository;
use crate::utils::ddb::{create_table, delete_table, is_conditional_check_failure, parse_float_attribute, parse_number_attribute, parse_string_attribute};

#[derive(Debug)]
pub struct DDBBookRepository {
    client: Client,
    table_name: String,
}

impl DDBBookRepository {
    pub fn new(client: Client, table_name: &str) -> Self {
        Self {
            client,
            table_name: table_name.to_string(),
        }
    }

    // creates the books table, ignoring the failure when it already exists
    pub async fn ensure_schema(&self) {
        let _ = create_table(&self.client, self.table_name.as_str(), "isbn").await;
    }
}

#[async_trait]
impl Repository<BookEntity> for DDBBookRepository {
    async fn create(&self, entity: &BookEntity) -> LibraryResult<()> {
        let table_name: &str = self.table_name.as_ref();
        match self.client
            .put_item()
            .table_name(table_name)
            .condition_expression("attribute_not_exists(isbn)")
            .set_item(Some(map_to_item(entity)))
            .send()
            .await {
            Ok(_) => {
                debug!("put book {}", entity.isbn);
                Ok(())
            }
            Err(err) if is_conditional_check_failure(&err) => {
                Err(LibraryError::duplicate_key(format!("book already exists for {}", entity.isbn).as_str()))
            }
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    // Note you cannot use certain reserved words per https://docs.aws.amazon.com/amazondynamodb/latest/developerguide/ReservedWords.html
    async fn update(&self, entity: &BookEntity) -> LibraryResult<bool> {
        let table_name: &str = self.table_name.as_ref();
        match self.client
            .update_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(entity.isbn.clone()))
            .update_expression("SET #title = :title, #author = :author, #published_year = :published_year, #price = :price, #genre = :genre")
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#author", "author")
            .expression_attribute_names("#published_year", "published_year")
            .expression_attribute_names("#price", "price")
            .expression_attribute_names("#genre", "genre")
            .expression_attribute_values(":title", AttributeValue::S(entity.title.to_string()))
            .expression_attribute_values(":author", AttributeValue::S(entity.author.to_string()))
            .expression_attribute_values(":published_year", AttributeValue::N(entity.published_year.to_string()))
            .expression_attribute_values(":price", AttributeValue::N(entity.price.to_string()))
            .expression_attribute_values(":genre", AttributeValue::S(encode_genre(&entity.genre)))
            .condition_expression("attribute_exists(isbn)")
            .send()
            .await {
            Ok(_) => Ok(true),
            Err(err) if is_conditional_check_failure(&err) => Ok(false),
            Err(err) => Err(LibraryError::from(err)),
        }
    }

    async fn get(&self, id: &str) -> LibraryResult<Option<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let out = self.client
            .get_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(id.to_string()))
            .consistent_read(true)
            .send()
            .await?;
        Ok(out.item().map(map_to_book))
    }

    async fn delete(&self, id: &str) -> LibraryResult<bool> {
        let table_name: &str = self.table_name.as_ref();
        let out = self.client.delete_item()
            .table_name(table_name)
            .key("isbn", AttributeValue::S(id.to_string()))
            .return_values(ReturnValue::AllOld)
            .send()
            .await?;
        Ok(out.attributes().map(|attrs| !attrs.is_empty()).unwrap_or(false))
    }

    async fn get_all(&self) -> LibraryResult<Vec<BookEntity>> {
        let table_name: &str = self.table_name.as_ref();
        let mut books = vec![];
        let mut exclusive_start_key: Option<HashMap<String, AttributeValue>> = None;
        loop {
            let out = self.client
                .scan()
                .table_name(table_name)
                .consistent_read(true)
                .set_exclusive_start_key(exclusive_start_key)
                .send()
                .await?;
            let def_items = vec![];
            let items = out.items.as_ref().unwrap_or(&def_items);
            books.extend(items.iter().map(map_to_book));
            exclusive_start_key = out.last_evaluated_key().cloned();
            if exclusive_start_key.is_none() {
                break;
            }
        }
        Ok(books)
    }
}

#[async_trait]
impl BookRepository for DDBBookRepository {
    async fn initialize_schema(&self) -> LibraryResult<()> {
        let _ = delete_table(&self.client, self.table_name.as_str()).await;
        create_table(&self.client, self.table_name.as_str(), "isbn").await?;
        info!("initialized dynamodb table {}", self.table_name);
        Ok(())
    }

    async fn close(&self) {}
}

fn map_to_item(entity: &BookEntity) -> HashMap<String, AttributeValue> {
    HashMap::from([
        ("isbn".to_string(), AttributeValue::S(entity.isbn.to_string())),
        ("title".to_string(), AttributeValue::S(entity.title.to_string())),
        ("author".to_string(), AttributeValue::S(entity.author.to_string())),
        ("published_year".to_string(), AttributeValue::N(entity.published_year.to_string())),
        ("price".to_string(), AttributeValue::N(entity.price.to_string())),
        ("genre".to_string(), AttributeValue::S(encode_genre(&entity.genre))),
    ])
}

fn map_to_book(map: &HashMap<String, AttributeValue>) -> BookEntity {
    BookEntity {
        isbn: parse_string_attribute("isbn", map).unwrap_or(String::from("")),
        title: parse_string_attribute("title", map).unwrap_or(String::from("")),
        author: parse_string_attribute("author", map).unwrap_or(String::from("")),
        published_year: parse_number_attribute("published_year", map) as i32,
        price: parse_float_attribute("price", map),
        genre: decode_genre(parse_string_attribute("genre", map).unwrap_or(String::from("")).as_str()),
    }
}
