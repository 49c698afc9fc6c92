//! Pull request templates.
//!
//! Templates are Markdown files whose type is the file name up to the first
//! `.` (lowercased): `bug.md` is the `bug` template. A catalog reads them
//! from a directory, or falls back to the set bundled with this crate.

use course_core::{Error, Result, files};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const BUILTIN_TEMPLATES: &[(&str, &str)] = &[
    ("bug.md", include_str!("../templates/bug.md")),
    ("docs.md", include_str!("../templates/docs.md")),
    ("feature.md", include_str!("../templates/feature.md")),
    ("performance.md", include_str!("../templates/performance.md")),
    ("refactor.md", include_str!("../templates/refactor.md")),
    ("security.md", include_str!("../templates/security.md")),
    ("test.md", include_str!("../templates/test.md")),
];

/// Hint attached to every suggestion.
pub const USAGE_HINT: &str =
    "LLM can help you fill out this template based on the specific changes in your PR.";

/// One PR template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PrTemplate {
    /// File name, e.g. `bug.md`.
    pub filename: String,
    /// Template type derived from the file name.
    #[serde(rename = "type")]
    pub kind: String,
    /// Markdown body.
    pub content: String,
}

impl PrTemplate {
    fn new(filename: impl Into<String>, content: impl Into<String>) -> Self {
        let filename = filename.into();
        Self {
            kind: template_type(&filename),
            filename,
            content: content.into(),
        }
    }
}

/// A recommended template with the reasoning behind it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TemplateSuggestion {
    /// The chosen template.
    pub recommended_template: PrTemplate,
    /// Why it was chosen.
    pub reasoning: String,
    /// Template body, repeated for convenience.
    pub template_content: String,
    /// How to use the template.
    pub usage_hint: String,
}

/// Type of a template file: the name up to the first `.`, lowercased.
pub fn template_type(filename: &str) -> String {
    filename
        .split('.')
        .next()
        .unwrap_or_default()
        .to_lowercase()
}

/// Normalize a caller-supplied change type to a template type.
pub fn normalize_change_type(change_type: &str) -> String {
    let normalized = change_type.trim().to_lowercase();
    let canonical = match normalized.as_str() {
        "fix" | "bugfix" | "bug fix" => "bug",
        "enhancement" | "feat" => "feature",
        "documentation" | "doc" => "docs",
        "testing" | "tests" => "test",
        "cleanup" | "refactoring" => "refactor",
        "optimization" | "perf" => "performance",
        other => other,
    };
    canonical.to_string()
}

/// Where templates come from.
#[derive(Clone, Debug, PartialEq)]
pub enum TemplateSource {
    /// Templates bundled with this crate.
    Builtin,
    /// Markdown files in a directory.
    Directory(PathBuf),
}

/// Lists and selects PR templates.
#[derive(Clone, Debug)]
pub struct TemplateCatalog {
    source: TemplateSource,
}

impl TemplateCatalog {
    /// Catalog of the bundled templates.
    pub fn builtin() -> Self {
        Self {
            source: TemplateSource::Builtin,
        }
    }

    /// Catalog reading `dir`.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        Self {
            source: TemplateSource::Directory(dir.into()),
        }
    }

    /// Directory catalog when configured, bundled templates otherwise.
    pub fn from_config(dir: Option<PathBuf>) -> Self {
        dir.map_or_else(Self::builtin, Self::from_dir)
    }

    /// Where the templates come from.
    pub fn source(&self) -> &TemplateSource {
        &self.source
    }

    /// Human-readable location for messages.
    pub fn location(&self) -> String {
        match &self.source {
            TemplateSource::Builtin => "built-in templates".to_string(),
            TemplateSource::Directory(dir) => dir.display().to_string(),
        }
    }

    /// All templates, sorted by file name.
    pub async fn list(&self) -> Result<Vec<PrTemplate>> {
        match &self.source {
            TemplateSource::Builtin => Ok(BUILTIN_TEMPLATES
                .iter()
                .map(|(name, content)| PrTemplate::new(*name, *content))
                .collect()),
            TemplateSource::Directory(dir) => list_dir(dir).await,
        }
    }

    /// Pick the template matching `change_type`.
    pub async fn suggest(&self, changes_summary: &str, change_type: &str) -> Result<TemplateSuggestion> {
        let wanted = normalize_change_type(change_type);
        let template = self
            .list()
            .await?
            .into_iter()
            .find(|t| t.kind == wanted)
            .ok_or_else(|| Error::not_found("Pull Request template", change_type))?;

        Ok(TemplateSuggestion {
            reasoning: format!(
                "Based on your analysis: '{changes_summary}', this appears to be a {change_type} change."
            ),
            template_content: template.content.clone(),
            recommended_template: template,
            usage_hint: USAGE_HINT.to_string(),
        })
    }
}

async fn list_dir(dir: &std::path::Path) -> Result<Vec<PrTemplate>> {
    let mut entries = tokio::fs::read_dir(dir)
        .await
        .map_err(|e| Error::io_with_path(e, dir))?;

    let mut templates = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| Error::io_with_path(e, dir))?
    {
        let path = entry.path();
        let is_file = tokio::fs::metadata(&path)
            .await
            .map(|m| m.is_file())
            .unwrap_or(false);
        if !is_file {
            continue;
        }

        let filename = entry.file_name().to_string_lossy().into_owned();
        let content = files::read_file(&path).await?;
        templates.push(PrTemplate::new(filename, content));
    }

    templates.sort_by(|a, b| a.filename.cmp(&b.filename));
    tracing::debug!(dir = %dir.display(), count = templates.len(), "Loaded PR templates");
    Ok(templates)
}
