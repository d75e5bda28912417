//! Export of generation results
//!
//! Two artifact formats: raw markdown (the result verbatim) and a
//! structured JSON form pairing the result with the field values that
//! produced it. Filenames carry a millisecond timestamp suffix so repeated
//! exports never collide.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use eyre::{Context, Result};
use serde::Serialize;

use crate::template::FieldValues;

/// Export artifact format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Markdown => "md",
            Self::Json => "json",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "md" | "markdown" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown export format: {}. Use: md or json", s)),
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.extension())
    }
}

/// JSON export shape: the result plus the field values used to produce it
#[derive(Serialize)]
struct StructuredExport<'a> {
    result: &'a str,
    values: &'a FieldValues,
}

/// Export the result into `dir`, returning the written path.
pub fn export(dir: &Path, format: ExportFormat, result: &str, values: &FieldValues) -> Result<PathBuf> {
    write_export(dir, Utc::now().timestamp_millis(), format, result, values)
}

fn write_export(
    dir: &Path,
    timestamp_ms: i64,
    format: ExportFormat,
    result: &str,
    values: &FieldValues,
) -> Result<PathBuf> {
    fs::create_dir_all(dir).context(format!("Failed to create export directory {}", dir.display()))?;

    let path = dir.join(format!("content-strategy-{}.{}", timestamp_ms, format.extension()));

    let content = match format {
        ExportFormat::Markdown => result.to_string(),
        ExportFormat::Json => {
            serde_json::to_string_pretty(&StructuredExport { result, values }).context("Failed to serialize export")?
        }
    };

    fs::write(&path, content).context(format!("Failed to write export to {}", path.display()))?;
    tracing::info!("Exported result to {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_values() -> FieldValues {
        [("nicho".to_string(), "moda".to_string())].into_iter().collect()
    }

    #[test]
    fn test_markdown_export_is_verbatim() {
        let dir = TempDir::new().unwrap();
        let path = write_export(dir.path(), 1700000000000, ExportFormat::Markdown, "## Título", &sample_values())
            .unwrap();

        assert_eq!(path.file_name().unwrap(), "content-strategy-1700000000000.md");
        assert_eq!(fs::read_to_string(&path).unwrap(), "## Título");
    }

    #[test]
    fn test_json_export_pairs_result_and_values() {
        let dir = TempDir::new().unwrap();
        let path =
            write_export(dir.path(), 1700000000001, ExportFormat::Json, "conteúdo", &sample_values()).unwrap();

        assert_eq!(path.file_name().unwrap(), "content-strategy-1700000000001.json");

        let parsed: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed["result"], "conteúdo");
        assert_eq!(parsed["values"]["nicho"], "moda");
    }

    #[test]
    fn test_export_creates_missing_directory() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("a").join("b");
        let path = write_export(&nested, 42, ExportFormat::Markdown, "x", &sample_values()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_format_parsing() {
        assert_eq!("md".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert_eq!("markdown".parse::<ExportFormat>(), Ok(ExportFormat::Markdown));
        assert_eq!("json".parse::<ExportFormat>(), Ok(ExportFormat::Json));
        assert!("pdf".parse::<ExportFormat>().is_err());
    }
}
