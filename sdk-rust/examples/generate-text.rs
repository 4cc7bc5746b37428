use content_sdk::{LanguageModelInput, LanguageModelRegistry};
use dotenvy::dotenv;

mod common;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let registry =
        LanguageModelRegistry::new(common::get_model("gemini"), common::get_model("ollama"));

    let generated = registry
        .generate("Write a haiku about the sea.", "auto")
        .await
        .expect("no provider produced text");
    println!(
        "[{} / {}]\n{}",
        generated.provider, generated.model_id, generated.text
    );

    let model = common::get_model("ollama");
    let response = model
        .generate(LanguageModelInput {
            prompt: "Summarize the plot of Moby Dick in one sentence.".to_string(),
            system_prompt: Some("You are a terse literary critic.".to_string()),
            temperature: Some(0.2),
            ..Default::default()
        })
        .await
        .unwrap();

    println!("{response:#?}");
}
