//! One-off completion against OpenRouter using the process settings.
//!
//! ```sh
//! OPENROUTER_API_KEY=sk-or-... cargo run -p chat --example generate
//! ```

use anyhow::Result;
use chat::{GenerationOptions, ModelClient, OpenRouterModel};
use common::get_settings;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = get_settings()?;
    let model = OpenRouterModel::from_settings(settings)?;

    let options = GenerationOptions::default().temperature(0.5).max_tokens(150);
    match model.generate("hi how are you?", options).await {
        Ok(text) => {
            println!("{} response:", model.model_name());
            println!("{text}");
        }
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
