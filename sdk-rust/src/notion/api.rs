use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

#[derive(Serialize, Debug, Clone)]
pub struct CreatePageRequest {
    pub parent: Parent,
    pub properties: Map<String, Value>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Parent {
    pub database_id: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PageReference {
    pub id: String,
}

#[derive(Serialize, Debug, Clone)]
pub struct QueryDatabaseRequest {
    pub page_size: usize,
    pub sorts: Vec<Sort>,
}

#[derive(Serialize, Debug, Clone)]
pub struct Sort {
    pub timestamp: &'static str,
    pub direction: &'static str,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct QueryDatabaseResponse {
    #[serde(default)]
    pub results: Vec<Page>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub created_time: Option<String>,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Database {
    pub id: String,
    #[serde(default)]
    pub title: Vec<RichText>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct RichText {
    #[serde(default)]
    pub plain_text: String,
}

pub fn title_property(content: &str) -> Value {
    json!({ "title": [{ "text": { "content": content } }] })
}

pub fn rich_text_property(content: &str) -> Value {
    json!({ "rich_text": [{ "text": { "content": content } }] })
}

pub fn select_property(name: &str) -> Value {
    json!({ "select": { "name": name } })
}

pub fn number_property(number: usize) -> Value {
    json!({ "number": number })
}

pub fn multi_select_property(names: &[String]) -> Value {
    let options: Vec<Value> = names.iter().map(|name| json!({ "name": name })).collect();
    json!({ "multi_select": options })
}

/// Concatenated plain text of a `title` or `rich_text` property.
pub fn plain_text(property: Option<&Value>) -> Option<String> {
    let property = property?;
    let fragments = property
        .get("title")
        .or_else(|| property.get("rich_text"))?
        .as_array()?;

    let text: String = fragments
        .iter()
        .filter_map(|fragment| {
            fragment
                .get("plain_text")
                .or_else(|| fragment.get("text").and_then(|t| t.get("content")))
                .and_then(Value::as_str)
        })
        .collect();

    Some(text)
}

pub fn select_name(property: Option<&Value>) -> Option<String> {
    property?
        .get("select")?
        .get("name")?
        .as_str()
        .map(ToString::to_string)
}

pub fn number(property: Option<&Value>) -> Option<u64> {
    property?.get("number")?.as_u64()
}
