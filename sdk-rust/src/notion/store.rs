use super::api::{
    self, CreatePageRequest, Database, Page, PageReference, Parent, QueryDatabaseRequest,
    QueryDatabaseResponse, Sort,
};
use crate::{
    client_utils, DocumentStore, NewRecord, StoreError, StoreResult, StoredRecord,
};
use chrono::{DateTime, Utc};
use reqwest::{
    header::{HeaderMap, HeaderValue, AUTHORIZATION},
    Client,
};
use serde_json::Map;
use std::time::Duration;
use tracing::{error, info};

const STORE: &str = "notion";
const NOTION_VERSION: &str = "2022-06-28";

/// Stores generated content as pages of a Notion database.
///
/// The database is expected to have these properties: Title (title),
/// Content (text), Type (select), Status (select), "AI Model Used" (text),
/// "Word Count" (number) and Tags (multi-select).
pub struct NotionStore {
    token: String,
    database_id: String,
    base_url: String,
    client: Client,
    timeout: Duration,
}

#[derive(Clone, Default)]
pub struct NotionStoreOptions {
    pub token: String,
    pub database_id: String,
    pub base_url: Option<String>,
    pub client: Option<Client>,
    /// Per-request timeout. Defaults to 30 seconds.
    pub timeout: Option<Duration>,
}

impl NotionStore {
    /// Create a store for the given database. Fails when the token is unset.
    pub fn new(options: NotionStoreOptions) -> StoreResult<Self> {
        let NotionStoreOptions {
            token,
            database_id,
            base_url,
            client,
            timeout,
        } = options;

        if token.trim().is_empty() {
            return Err(StoreError::InvalidInput("Notion token is not set".to_string()));
        }

        let base_url = base_url
            .unwrap_or_else(|| "https://api.notion.com/v1".to_string())
            .trim_end_matches('/')
            .to_string();

        info!(database_id = %database_id, "Notion client initialized");

        Ok(Self {
            token,
            database_id,
            base_url,
            client: client.unwrap_or_default(),
            timeout: timeout.unwrap_or(Duration::from_secs(30)),
        })
    }

    #[must_use]
    pub fn database_id(&self) -> &str {
        &self.database_id
    }

    fn request_headers(&self) -> StoreResult<HeaderMap> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.token)).map_err(|error| {
            StoreError::InvalidInput(format!("Invalid Notion token: {error}"))
        })?;
        headers.insert(AUTHORIZATION, bearer);
        headers.insert("Notion-Version", HeaderValue::from_static(NOTION_VERSION));
        Ok(headers)
    }

    /// Title of the configured database.
    pub async fn database_title(&self) -> StoreResult<String> {
        let url = format!("{}/databases/{}", self.base_url, self.database_id);
        let database: Database =
            client_utils::get_json(&self.client, &url, self.request_headers()?, self.timeout)
                .await?;
        let title: String = database
            .title
            .iter()
            .map(|fragment| fragment.plain_text.as_str())
            .collect();
        if title.is_empty() {
            Ok("No title".to_string())
        } else {
            Ok(title)
        }
    }
}

#[async_trait::async_trait]
impl DocumentStore for NotionStore {
    fn name(&self) -> &'static str {
        STORE
    }

    async fn create_record(&self, record: NewRecord) -> StoreResult<String> {
        crate::opentelemetry::trace_store(STORE, "create_page", async {
            let request = CreatePageRequest {
                parent: Parent {
                    database_id: self.database_id.clone(),
                },
                properties: page_properties(&record),
            };
            let url = format!("{}/pages", self.base_url);

            let result: StoreResult<PageReference> = client_utils::send_json(
                &self.client,
                &url,
                &request,
                self.request_headers()?,
                self.timeout,
            )
            .await
            .map_err(StoreError::from);

            match result {
                Ok(page) => {
                    info!(page_id = %page.id, "Created Notion page");
                    Ok(page.id)
                }
                Err(err) => {
                    error!(error = %err, "Failed to create Notion page");
                    Err(err)
                }
            }
        })
        .await
    }

    async fn list_recent(&self, limit: usize) -> StoreResult<Vec<StoredRecord>> {
        crate::opentelemetry::trace_store(STORE, "query_database", async {
            let request = QueryDatabaseRequest {
                page_size: limit,
                sorts: vec![Sort {
                    timestamp: "created_time",
                    direction: "descending",
                }],
            };
            let url = format!("{}/databases/{}/query", self.base_url, self.database_id);

            let response: QueryDatabaseResponse = client_utils::send_json(
                &self.client,
                &url,
                &request,
                self.request_headers()?,
                self.timeout,
            )
            .await?;

            info!(count = response.results.len(), "Retrieved pages from database");
            Ok::<_, StoreError>(response.results.into_iter().map(map_page).collect())
        })
        .await
    }

    async fn check_connection(&self) -> StoreResult<()> {
        info!(database_id = %self.database_id, "Testing connection to database");
        let title = self.database_title().await.map_err(|err| {
            error!(error = %err, "Notion connection failed");
            err
        })?;
        info!(title = %title, "Notion connection successful");
        Ok(())
    }
}

fn page_properties(record: &NewRecord) -> Map<String, serde_json::Value> {
    let mut properties = Map::new();
    properties.insert("Title".to_string(), api::title_property(&record.title));
    properties.insert(
        "Content".to_string(),
        api::rich_text_property(&record.content),
    );
    properties.insert(
        "Type".to_string(),
        api::select_property(&record.content_type),
    );
    properties.insert(
        "Status".to_string(),
        api::select_property(record.status.as_str()),
    );
    properties.insert(
        "AI Model Used".to_string(),
        api::rich_text_property(&record.provider),
    );
    properties.insert(
        "Word Count".to_string(),
        api::number_property(record.word_count),
    );
    if !record.tags.is_empty() {
        properties.insert(
            "Tags".to_string(),
            api::multi_select_property(&record.tags),
        );
    }
    properties
}

fn map_page(page: Page) -> StoredRecord {
    let Page {
        id,
        created_time,
        properties,
    } = page;

    StoredRecord {
        title: api::plain_text(properties.get("Title"))
            .filter(|title| !title.is_empty())
            .unwrap_or_else(|| "Untitled".to_string()),
        status: api::select_name(properties.get("Status")).unwrap_or_else(|| "Unknown".to_string()),
        content_type: api::select_name(properties.get("Type"))
            .unwrap_or_else(|| "Unknown".to_string()),
        word_count: api::number(properties.get("Word Count")),
        provider: api::plain_text(properties.get("AI Model Used"))
            .filter(|provider| !provider.is_empty())
            .unwrap_or_else(|| "Unknown".to_string()),
        created_time: created_time
            .as_deref()
            .and_then(|time| DateTime::parse_from_rfc3339(time).ok())
            .map(|time| time.with_timezone(&Utc)),
        id,
    }
}
