//! Content Studio
//!
//! A methodology-driven content strategy studio for the terminal: pick a
//! marketing methodology, fill in a few fields, send the resolved prompt
//! to a generative-language API, and read the returned markdown as styled
//! blocks with export/copy actions.
//!
//! # Core Concepts
//!
//! - **Pure core**: template resolution and markdown rendering are plain
//!   functions over immutable input, independent of any UI concern
//! - **One request at a time**: a busy flag gates submission for the
//!   duration of the single outstanding generation call
//! - **Catalog is data**: methodologies and their prompt templates are
//!   compiled in and never mutated
//!
//! # Modules
//!
//! - [`catalog`] - methodologies, prompt templates, and the field guide
//! - [`template`] - `[fieldName]` placeholder resolution
//! - [`render`] - constrained markdown to display blocks
//! - [`llm`] - generation API client
//! - [`export`] - timestamped markdown/JSON artifacts
//! - [`tui`] - interactive terminal interface
//! - [`config`] - configuration types and loading
//! - [`cli`] - command-line interface

pub mod catalog;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod export;
pub mod llm;
pub mod printer;
pub mod render;
pub mod template;
pub mod tui;

// Re-export commonly used types
pub use catalog::{Catalog, FieldGuide, Methodology, PromptTemplate};
pub use config::{Config, ExportConfig, LlmConfig, UiConfig};
pub use export::ExportFormat;
pub use llm::{GeminiClient, LlmError};
pub use render::{Block, InlineSpan, TableBlock, bold_spans, render};
pub use template::{FieldValues, referenced_fields, resolve};
