use content_agent::{
    prompt::catalog, ContentAgent, ContentRequest, ContentType, Length, Settings, Tone,
};
use std::{env, error::Error};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Settings::load(".env")?;
    let missing = settings.missing_required();
    if !missing.is_empty() {
        eprintln!("Missing required settings: {}", missing.join(", "));
    }

    let agent = ContentAgent::from_settings(&settings)?;

    let status = agent.system_status().await;
    println!("{}", status.recommendation());

    let mut args = env::args().skip(1);
    let topic = args
        .next()
        .unwrap_or_else(|| "The future of remote work".to_string());
    let provider = args.next().unwrap_or_else(|| "auto".to_string());

    let suggestions = agent.suggest(&topic, settings.default_content_type);
    println!("Title ideas: {}", suggestions.titles.join(" | "));

    if let Some(profile) = catalog::industry_profile("technology") {
        println!("Technology keywords: {}", profile.keywords.join(", "));
    }

    let request = ContentRequest::builder(
        topic,
        ContentType::Blog,
        Tone::Conversational,
        Length::Medium,
    )
    .target_audience("team leads and managers")
    .keywords(["hybrid work", "async communication"])
    .include_examples(true)
    .seo_focused(true)
    .build()?;

    let summary = agent.run_request(&request, &provider).await?;
    println!("{}", serde_json::to_string_pretty(&summary)?);

    for record in agent.list_recent(5).await {
        println!(
            "- {} [{} / {} / {}]",
            record.title, record.content_type, record.status, record.provider
        );
    }

    let stats = agent.library_stats(20).await;
    println!(
        "{} items, {} words, {:.2} average, {} drafts",
        stats.total_items, stats.total_words, stats.average_words, stats.drafts
    );

    Ok(())
}
