//! Output formats for wireframe sections
//!
//! This module provides a pluggable registry of serialization formats
//! for the pipeline's output. Each format implements the `Formatter`
//! trait and can be registered with `FormatRegistry`.

use crate::copyframe::pipeline::WireframeSection;
use std::collections::HashMap;
use std::fmt;

/// Error that can occur during formatting
#[derive(Debug, Clone, PartialEq)]
pub enum FormatError {
    /// Format not found in registry
    FormatNotFound(String),
    /// Error during serialization
    SerializationError(String),
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::FormatNotFound(name) => write!(f, "Format '{name}' not found"),
            FormatError::SerializationError(msg) => write!(f, "Serialization error: {msg}"),
        }
    }
}

impl std::error::Error for FormatError {}

/// Trait for wireframe formatters
pub trait Formatter: Send + Sync {
    /// The name of this format (e.g., "simple", "json")
    fn name(&self) -> &str;

    /// Serialize a wireframe to this format
    fn serialize(&self, sections: &[WireframeSection]) -> Result<String, FormatError>;

    /// Optional description of this format
    fn description(&self) -> &str {
        ""
    }
}

/// Human-readable outline: one line per section, indented element lines.
pub struct SimpleFormatter;

impl Formatter for SimpleFormatter {
    fn name(&self) -> &str {
        "simple"
    }

    fn serialize(&self, sections: &[WireframeSection]) -> Result<String, FormatError> {
        let mut out = String::new();
        for (index, section) in sections.iter().enumerate() {
            out.push_str(&format!(
                "{}. {} [{}]\n",
                index + 1,
                section.kind,
                section.template.layout_key
            ));
            for element in &section.elements {
                let label = match element.heading_level() {
                    Some(level) => format!("heading({level})"),
                    None if element.is_bullet() => "bullet".to_string(),
                    None => "paragraph".to_string(),
                };
                out.push_str(&format!("  {label}: {}\n", element.content));
            }
        }
        Ok(out)
    }

    fn description(&self) -> &str {
        "Indented plain-text outline"
    }
}

/// Pretty-printed JSON.
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn name(&self) -> &str {
        "json"
    }

    fn serialize(&self, sections: &[WireframeSection]) -> Result<String, FormatError> {
        serde_json::to_string_pretty(sections)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "Pretty-printed JSON array of sections"
    }
}

/// YAML document.
pub struct YamlFormatter;

impl Formatter for YamlFormatter {
    fn name(&self) -> &str {
        "yaml"
    }

    fn serialize(&self, sections: &[WireframeSection]) -> Result<String, FormatError> {
        serde_yaml::to_string(sections)
            .map_err(|err| FormatError::SerializationError(err.to_string()))
    }

    fn description(&self) -> &str {
        "YAML array of sections"
    }
}

/// Registry of wireframe formatters, retrieved by name.
pub struct FormatRegistry {
    formatters: HashMap<String, Box<dyn Formatter>>,
}

impl FormatRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        FormatRegistry {
            formatters: HashMap::new(),
        }
    }

    /// Create a registry with the built-in formatters
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(SimpleFormatter);
        registry.register(JsonFormatter);
        registry.register(YamlFormatter);
        registry
    }

    /// Register a formatter, replacing any existing one with the same name
    pub fn register<F: Formatter + 'static>(&mut self, formatter: F) {
        self.formatters
            .insert(formatter.name().to_string(), Box::new(formatter));
    }

    /// Get a formatter by name
    pub fn get(&self, name: &str) -> Option<&dyn Formatter> {
        self.formatters.get(name).map(|f| f.as_ref())
    }

    /// Serialize sections using the named format
    pub fn serialize(
        &self,
        sections: &[WireframeSection],
        format: &str,
    ) -> Result<String, FormatError> {
        let formatter = self
            .get(format)
            .ok_or_else(|| FormatError::FormatNotFound(format.to_string()))?;
        formatter.serialize(sections)
    }

    /// List all available format names (sorted)
    pub fn list_formats(&self) -> Vec<String> {
        let mut names: Vec<_> = self.formatters.keys().cloned().collect();
        names.sort();
        names
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        FormatRegistry::with_defaults()
    }
}
