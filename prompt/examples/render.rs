//! Renders the bundled chat prompt with the bundled persona.
//!
//! Templates are read from `PROMPT_DIR` (default `prompt_files`), so run it
//! from the workspace root:
//!
//! ```sh
//! cargo run -p prompt --example render
//! ```

use anyhow::Result;
use common::get_settings;
use dotenv::dotenv;
use prompt::PromptRenderer;
use serde_json::json;

fn main() -> Result<()> {
    dotenv().ok();

    let renderer = PromptRenderer::from_settings(get_settings()?);
    let persona = renderer.load_structured("shared/persona.yaml")?;

    let context = json!({
        "user_input": "Tell me a joke",
        "tone": "funny",
        "language": "en",
        "assistant": persona["assistant"],
    });

    match renderer.render("chat/chatting.yaml", &context) {
        Ok(prompt) => println!("{prompt}"),
        Err(e) => println!("Error: {e}"),
    }

    Ok(())
}
