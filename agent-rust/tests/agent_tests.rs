use content_agent::{
    prompt::TemplateSet, AgentParams, ContentAgent, ContentError, ContentRequest, ContentStats,
    ContentType, Length, PromptEngine, Settings, Tone,
};
use content_sdk::{
    content_sdk_test::{MockDocumentStore, MockGenerateResult, MockLanguageModel},
    LanguageModelError, LanguageModelRegistry, RecordStatus, StoreError, StoredRecord,
};
use std::sync::Arc;

struct Harness {
    gemini: Arc<MockLanguageModel>,
    ollama: Arc<MockLanguageModel>,
    store: Arc<MockDocumentStore>,
}

impl Harness {
    fn new() -> Self {
        Self {
            gemini: Arc::new(MockLanguageModel::with_provider("gemini")),
            ollama: Arc::new(MockLanguageModel::with_provider("ollama")),
            store: Arc::new(MockDocumentStore::new()),
        }
    }

    fn params(&self) -> AgentParams {
        let registry = LanguageModelRegistry::new(self.gemini.clone(), self.ollama.clone());
        ContentAgent::builder(registry, self.store.clone())
    }

    fn agent(&self) -> ContentAgent {
        ContentAgent::new(self.params())
    }
}

fn unavailable(provider: &'static str) -> MockGenerateResult {
    MockGenerateResult::error(LanguageModelError::Unavailable(provider, "offline".into()))
}

#[tokio::test]
async fn run_generates_and_stores_content() {
    let harness = Harness::new();
    harness
        .gemini
        .enqueue_generate(MockGenerateResult::text(
            "# Healthy Soil\nCompost feeds machine learning models of gardens.",
        ));
    harness.store.enqueue_created_id("page-1");

    let summary = harness
        .agent()
        .run("healthy soil", "blog", "gemini", "professional", "short")
        .await
        .expect("run succeeds");

    assert_eq!(summary.title, "Healthy Soil");
    assert_eq!(summary.record_id, "page-1");
    assert_eq!(summary.provider, "gemini");
    assert_eq!(summary.word_count, 10);
    assert_eq!(summary.tags, ["Healthy", "Soil", "ML", "Health"]);
    assert_eq!(
        summary.content_preview,
        "# Healthy Soil\nCompost feeds machine learning models of gardens."
    );

    let created = harness.store.created_records();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].title, "Healthy Soil");
    assert_eq!(created[0].content_type, "Blog");
    assert_eq!(created[0].provider, "Gemini");
    assert_eq!(created[0].status, RecordStatus::Draft);

    let inputs = harness.gemini.tracked_generate_inputs();
    assert_eq!(inputs.len(), 1);
    assert!(inputs[0].prompt.contains("blog post about \"healthy soil\""));
    assert!(inputs[0].prompt.contains("300-500 words"));
}

#[tokio::test]
async fn stored_body_is_truncated_but_word_count_is_not() {
    let harness = Harness::new();
    let body = "word ".repeat(1000);
    harness
        .gemini
        .enqueue_generate(MockGenerateResult::text(body.clone()));
    harness.store.enqueue_created_id("page-2");

    let agent = ContentAgent::new(harness.params().max_content_length(100));
    let summary = agent
        .run("Long reads", "article", "gemini", "formal", "long")
        .await
        .expect("run succeeds");

    assert_eq!(summary.word_count, 1000);
    assert_eq!(summary.content_preview.chars().count(), 203);

    let created = harness.store.created_records();
    assert_eq!(created[0].content.chars().count(), 100);
    assert_eq!(created[0].word_count, 1000);
    assert_eq!(created[0].content_type, "Article");
}

#[tokio::test]
async fn unknown_provider_falls_back_to_ollama() {
    let harness = Harness::new();
    harness.gemini.enqueue_generate(unavailable("gemini"));
    harness
        .ollama
        .enqueue_generate(MockGenerateResult::text("Local draft\nbody"));
    harness.store.enqueue_created_id("page-3");

    let summary = harness
        .agent()
        .run("Edge computing", "social", "unknown", "casual", "short")
        .await
        .expect("fallback succeeds");

    assert_eq!(summary.provider, "ollama");
    assert_eq!(harness.store.created_records()[0].provider, "Ollama");
    assert_eq!(harness.gemini.tracked_generate_inputs().len(), 1);
}

#[tokio::test]
async fn generation_failure_stores_nothing() {
    let harness = Harness::new();
    harness.gemini.enqueue_generate(unavailable("gemini"));
    harness.ollama.enqueue_generate(unavailable("ollama"));

    let err = harness
        .agent()
        .run("Edge computing", "blog", "auto", "casual", "short")
        .await
        .expect_err("both providers fail");

    assert!(matches!(err, ContentError::GenerationFailed(ref provider) if provider == "auto"));
    assert!(harness.store.created_records().is_empty());
}

#[tokio::test]
async fn explicit_gemini_failure_does_not_fall_back() {
    let harness = Harness::new();
    harness.gemini.enqueue_generate(unavailable("gemini"));
    harness
        .ollama
        .enqueue_generate(MockGenerateResult::text("unused"));

    let err = harness
        .agent()
        .run("Edge computing", "blog", "gemini", "casual", "short")
        .await
        .expect_err("gemini fails");

    assert!(matches!(err, ContentError::GenerationFailed(_)));
    assert!(harness.ollama.tracked_generate_inputs().is_empty());
}

#[tokio::test]
async fn persistence_failure_is_reported() {
    let harness = Harness::new();
    harness
        .gemini
        .enqueue_generate(MockGenerateResult::text("# Title\nbody"));
    harness
        .store
        .enqueue_create_error(StoreError::InvalidInput("bad property".into()));

    let err = harness
        .agent()
        .run("Anything", "email", "gemini", "friendly", "medium")
        .await
        .expect_err("store fails");

    assert!(
        matches!(err, ContentError::PersistenceFailed(ref msg) if msg.contains("bad property"))
    );
    assert_eq!(harness.store.created_records().len(), 1);
}

#[tokio::test]
async fn invalid_request_never_reaches_providers() {
    let harness = Harness::new();
    let agent = harness.agent();

    let err = agent
        .run("Topic", "podcast", "gemini", "casual", "short")
        .await
        .expect_err("unknown content type");
    assert!(matches!(err, ContentError::Validation(_)));

    let err = agent
        .run("  ", "blog", "gemini", "casual", "short")
        .await
        .expect_err("blank topic");
    assert!(matches!(err, ContentError::Validation(_)));

    assert!(harness.gemini.tracked_generate_inputs().is_empty());
    assert!(harness.ollama.tracked_generate_inputs().is_empty());
}

#[tokio::test]
async fn missing_template_is_unsupported() {
    let harness = Harness::new();
    let agent = ContentAgent::new(
        harness
            .params()
            .engine(PromptEngine::new(TemplateSet::builtin().without(ContentType::Tutorial))),
    );
    let request = ContentRequest::builder(
        "Rust lifetimes",
        ContentType::Tutorial,
        Tone::Friendly,
        Length::Medium,
    )
    .build()
    .expect("valid request");

    let err = agent
        .run_request(&request, "gemini")
        .await
        .expect_err("no template");

    assert!(matches!(
        err,
        ContentError::UnsupportedContentType(ContentType::Tutorial)
    ));
    assert!(harness.gemini.tracked_generate_inputs().is_empty());
}

#[tokio::test]
async fn record_status_is_configurable() {
    let harness = Harness::new();
    harness
        .gemini
        .enqueue_generate(MockGenerateResult::text("Review me"));
    harness.store.enqueue_created_id("page-4");

    let agent = ContentAgent::new(harness.params().record_status(RecordStatus::Review));
    agent
        .run("Quarterly update", "press_release", "gemini", "formal", "short")
        .await
        .expect("run succeeds");

    let created = harness.store.created_records();
    assert_eq!(created[0].status, RecordStatus::Review);
    assert_eq!(created[0].content_type, "Press Release");
}

#[tokio::test]
async fn list_recent_returns_records() {
    let harness = Harness::new();
    harness.store.set_records(vec![
        StoredRecord {
            id: "b".to_string(),
            title: "Newest".to_string(),
            status: "Draft".to_string(),
            content_type: "Blog".to_string(),
            word_count: Some(120),
            provider: "Gemini".to_string(),
            created_time: None,
        },
        StoredRecord {
            id: "a".to_string(),
            title: "Older".to_string(),
            status: "Published".to_string(),
            content_type: "Email".to_string(),
            word_count: None,
            provider: "Ollama".to_string(),
            created_time: None,
        },
    ]);

    let records = harness.agent().list_recent(1).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].title, "Newest");
}

#[tokio::test]
async fn library_stats_summarize_recent_records() {
    let harness = Harness::new();
    let record = |id: &str, status: &str, content_type: &str, words: Option<u64>| {
        StoredRecord {
            id: id.to_string(),
            title: "Untitled".to_string(),
            status: status.to_string(),
            content_type: content_type.to_string(),
            word_count: words,
            provider: "Gemini".to_string(),
            created_time: None,
        }
    };
    harness.store.set_records(vec![
        record("c", "Draft", "Blog Post", Some(400)),
        record("b", "Draft", "Email", Some(200)),
        record("a", "Published", "Blog Post", Some(1000)),
    ]);

    let stats = harness.agent().library_stats(2).await;
    assert_eq!(stats.total_items, 2);
    assert_eq!(stats.total_words, 600);
    assert_eq!(stats.drafts, 2);
    assert_eq!(stats.by_provider["Gemini"], 2);

    harness.store.set_fail_listing(true);
    assert_eq!(harness.agent().library_stats(20).await, ContentStats::default());
}

#[tokio::test]
async fn list_recent_failure_yields_empty_list() {
    let harness = Harness::new();
    harness.store.set_fail_listing(true);

    assert!(harness.agent().list_recent(10).await.is_empty());
}

#[tokio::test]
async fn system_status_reports_each_dependency() {
    let harness = Harness::new();
    harness.ollama.set_unavailable("connection refused");
    harness.store.set_connection_error("unauthorized");

    let status = harness.agent().system_status().await;

    assert!(status.gemini.available);
    assert!(!status.ollama.available);
    assert!(status
        .ollama
        .detail
        .as_deref()
        .is_some_and(|detail| detail.contains("connection refused")));
    assert!(!status.store_connected);
    assert_eq!(
        status.recommendation(),
        "Ollama not available. Content generation will use Gemini only."
    );
}

#[test]
fn from_settings_requires_notion_token() {
    let settings = Settings {
        notion_token: String::new(),
        ..Settings::default()
    };

    assert!(matches!(
        ContentAgent::from_settings(&settings),
        Err(ContentError::Configuration(_))
    ));
}

#[test]
fn from_settings_builds_agent_with_token() {
    let settings = Settings {
        notion_token: "secret_abc".to_string(),
        notion_database_id: "0123456789abcdef0123456789abcdef".to_string(),
        ..Settings::default()
    };

    assert!(ContentAgent::from_settings(&settings).is_ok());
}
