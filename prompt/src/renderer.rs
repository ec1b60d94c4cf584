use common::Settings;
use minijinja::{AutoEscape, Environment, ErrorKind, UndefinedBehavior, path_loader};
use serde::Serialize;
use serde_json::Value;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::PromptError;

/// Renders Jinja templates and loads YAML data from one base directory.
///
/// Template names and data file names are relative to the base directory,
/// e.g. `chat/chatting.yaml` or `shared/persona.yaml`.
pub struct PromptRenderer {
    base_dir: PathBuf,
    env: Environment<'static>,
}

impl PromptRenderer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        let base_dir = base_dir.into();

        let mut env = Environment::new();
        env.set_loader(path_loader(base_dir.clone()));
        // A variable missing from the context is an error, never an empty string.
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_auto_escape_callback(|_| AutoEscape::None);

        Self { base_dir, env }
    }

    /// Reads templates from the configured `PROMPT_DIR`.
    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.prompt_dir.clone())
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn render<S: Serialize>(
        &self,
        template_name: &str,
        context: &S,
    ) -> Result<String, PromptError> {
        debug!("Rendering prompt template: {template_name}");

        let template = self
            .env
            .get_template(template_name)
            .map_err(|source| match source.kind() {
                ErrorKind::TemplateNotFound => PromptError::TemplateNotFound {
                    name: template_name.to_string(),
                },
                _ => PromptError::TemplateRender {
                    name: template_name.to_string(),
                    source,
                },
            })?;

        template
            .render(context)
            .map_err(|source| PromptError::TemplateRender {
                name: template_name.to_string(),
                source,
            })
    }

    /// Parses a YAML file into a tree of mappings, sequences and scalars.
    pub fn load_structured(&self, file_name: &str) -> Result<Value, PromptError> {
        let path = self.base_dir.join(file_name);
        debug!("Loading structured data: {}", path.display());

        let raw = std::fs::read_to_string(&path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => PromptError::NotFound { path: path.clone() },
            _ => PromptError::Io {
                path: path.clone(),
                source,
            },
        })?;

        serde_yaml::from_str(&raw).map_err(|source| PromptError::Parse { path, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    fn fixture() -> (TempDir, PromptRenderer) {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("chat")).unwrap();
        fs::create_dir_all(dir.path().join("shared")).unwrap();
        fs::write(
            dir.path().join("chat/greeting.txt"),
            "Hello {{ name }}, I am {{ assistant.name }}.",
        )
        .unwrap();
        fs::write(
            dir.path().join("chat/quoted.yaml"),
            "user: {{ user_input }}",
        )
        .unwrap();
        fs::write(dir.path().join("chat/broken.txt"), "{% if %}").unwrap();
        fs::write(
            dir.path().join("shared/persona.yaml"),
            "assistant:\n  name: Nova\n  traits: [calm, kind]\n  age: 3\n",
        )
        .unwrap();
        fs::write(dir.path().join("shared/bad.yaml"), "assistant: [unclosed\n").unwrap();

        let renderer = PromptRenderer::new(dir.path());
        (dir, renderer)
    }

    #[test]
    fn renders_nested_context() {
        let (_dir, renderer) = fixture();
        let context = json!({"name": "Sam", "assistant": {"name": "Nova"}});

        let prompt = renderer.render("chat/greeting.txt", &context).unwrap();
        assert_eq!(prompt, "Hello Sam, I am Nova.");
    }

    #[test]
    fn does_not_escape_yaml_templates() {
        let (_dir, renderer) = fixture();
        let context = json!({"user_input": "Tell me a \"joke\" & more"});

        let prompt = renderer.render("chat/quoted.yaml", &context).unwrap();
        assert_eq!(prompt, "user: Tell me a \"joke\" & more");
    }

    #[test]
    fn missing_variable_is_a_render_error() {
        let (_dir, renderer) = fixture();
        let context = json!({"name": "Sam"});

        let err = renderer.render("chat/greeting.txt", &context).unwrap_err();
        assert!(matches!(err, PromptError::TemplateRender { .. }));
    }

    #[test]
    fn missing_template_is_not_found() {
        let (_dir, renderer) = fixture();

        let err = renderer
            .render("chat/missing.txt", &json!({}))
            .unwrap_err();
        assert!(
            matches!(err, PromptError::TemplateNotFound { ref name } if name == "chat/missing.txt")
        );
    }

    #[test]
    fn syntax_error_is_a_render_error() {
        let (_dir, renderer) = fixture();

        let err = renderer.render("chat/broken.txt", &json!({})).unwrap_err();
        assert!(matches!(err, PromptError::TemplateRender { .. }));
    }

    #[test]
    fn from_settings_uses_prompt_dir() {
        let (dir, _) = fixture();
        let settings = Settings {
            app_name: "Advance Prompt".to_string(),
            app_version: "0.1.0".to_string(),
            chatbot_name: "Assistant".to_string(),
            model_name: "qwen/qwen3-0.6b-04-28:free".to_string(),
            api_key: SecretString::from("k".to_owned()),
            openrouter_base_url: "https://openrouter.ai/api/v1".to_string(),
            prompt_dir: dir.path().to_path_buf(),
        };

        let renderer = PromptRenderer::from_settings(&settings);
        assert_eq!(renderer.base_dir(), dir.path());

        let context = json!({"name": "Sam", "assistant": {"name": "Nova"}});
        assert_eq!(
            renderer.render("chat/greeting.txt", &context).unwrap(),
            "Hello Sam, I am Nova."
        );
    }

    #[test]
    fn loads_yaml_tree() {
        let (_dir, renderer) = fixture();

        let persona = renderer.load_structured("shared/persona.yaml").unwrap();
        assert_eq!(
            persona,
            json!({"assistant": {"name": "Nova", "traits": ["calm", "kind"], "age": 3}})
        );
    }

    #[test]
    fn missing_yaml_is_not_found() {
        let (dir, renderer) = fixture();

        let err = renderer.load_structured("shared/nope.yaml").unwrap_err();
        assert!(
            matches!(err, PromptError::NotFound { ref path } if *path == dir.path().join("shared/nope.yaml"))
        );
    }

    #[test]
    fn malformed_yaml_is_a_parse_error() {
        let (_dir, renderer) = fixture();

        let err = renderer.load_structured("shared/bad.yaml").unwrap_err();
        assert!(matches!(err, PromptError::Parse { .. }));
    }
}
