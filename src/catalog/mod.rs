//! Methodology catalog
//!
//! The catalog bundles every content-strategy methodology the studio
//! offers: id, title, description, icon, and one or more prompt templates
//! with their field lists. Data is compiled in and never mutated at
//! runtime.

mod builtin;
mod guide;

pub use guide::{FieldGuide, KNOWN_FIELDS, field_label, guide_for};

use serde::Serialize;

/// A named category of content-strategy guidance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Methodology {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    /// Whether the methodology exposes multiple selectable prompt variants
    /// (a single-variant methodology auto-selects its only template).
    pub multi_prompt: bool,
    pub prompts: &'static [PromptTemplate],
}

/// A parameterized instruction string. Placeholders use `[fieldName]`
/// syntax; `fields` lists the names the form should collect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PromptTemplate {
    pub id: &'static str,
    pub label: &'static str,
    pub template: &'static str,
    pub fields: &'static [&'static str],
}

impl Methodology {
    /// Find a prompt template by id.
    pub fn prompt(&self, id: &str) -> Option<&PromptTemplate> {
        self.prompts.iter().find(|p| p.id == id)
    }

    /// The template a single-variant methodology starts with.
    pub fn default_prompt(&self) -> Option<&PromptTemplate> {
        self.prompts.first()
    }

    /// Context label passed to the generation call:
    /// "{methodology title} - {template label}".
    pub fn context_label(&self, prompt: &PromptTemplate) -> String {
        format!("{} - {}", self.title, prompt.label)
    }
}

/// The immutable methodology catalog.
#[derive(Debug, Clone)]
pub struct Catalog {
    methodologies: Vec<Methodology>,
}

impl Catalog {
    /// The built-in catalog, ordered alphabetically by title.
    pub fn builtin() -> Self {
        Self {
            methodologies: builtin::methodologies(),
        }
    }

    pub fn all(&self) -> &[Methodology] {
        &self.methodologies
    }

    pub fn len(&self) -> usize {
        self.methodologies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methodologies.is_empty()
    }

    /// Look up a methodology by exact id.
    pub fn get(&self, id: &str) -> Option<&Methodology> {
        self.methodologies.iter().find(|m| m.id == id)
    }

    /// Resolve a user-supplied selector: exact id first, then a
    /// case-insensitive title substring.
    pub fn find(&self, selector: &str) -> Option<&Methodology> {
        if let Some(m) = self.get(selector) {
            return Some(m);
        }
        let needle = selector.to_lowercase();
        self.methodologies
            .iter()
            .find(|m| m.title.to_lowercase().contains(&needle))
    }
}
