use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PromptError {
    #[error("template not found: {name}")]
    TemplateNotFound { name: String },

    /// Syntax errors and variables missing from the render context.
    #[error("failed to render template {name}: {source}")]
    TemplateRender {
        name: String,
        #[source]
        source: minijinja::Error,
    },

    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
