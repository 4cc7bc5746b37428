use content_sdk::{
    notion::{NotionStore, NotionStoreOptions},
    DocumentStore,
};
use dotenvy::dotenv;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let store = NotionStore::new(NotionStoreOptions {
        token: std::env::var("NOTION_API_KEY").expect("NOTION_API_KEY must be set"),
        database_id: std::env::var("NOTION_DATABASE_ID").expect("NOTION_DATABASE_ID must be set"),
        ..Default::default()
    })
    .unwrap();

    println!("Database: {}", store.database_title().await.unwrap());

    for record in store.list_recent(10).await.unwrap() {
        println!("{record:#?}");
    }
}
