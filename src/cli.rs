//! CLI command definitions and subcommands

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::export::ExportFormat;
use crate::template::FieldValues;

/// Content Studio - methodology-driven content strategy for the terminal
#[derive(Parser)]
#[command(
    name = "cst",
    about = "Methodology-driven content strategy studio",
    version,
    after_help = "Logs are written to: ~/.local/share/contentstudio/logs/contentstudio.log"
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand)]
pub enum Command {
    /// Launch the interactive TUI (default when no subcommand is given)
    Tui,

    /// Run one generation in batch mode
    Run {
        /// Methodology id or title fragment
        methodology: String,

        /// Prompt template id (defaults to the methodology's first)
        #[arg(short, long)]
        prompt: Option<String>,

        /// Field value as NAME=VALUE (repeatable)
        #[arg(short, long = "field", value_name = "NAME=VALUE")]
        fields: Vec<String>,

        /// Print the resolved prompt instead of calling the API
        #[arg(long)]
        show_prompt: bool,

        /// Print raw markdown instead of styled blocks
        #[arg(long)]
        raw: bool,

        /// Export the result after generation
        #[arg(short, long, value_name = "md|json")]
        export: Option<ExportFormat>,
    },

    /// List available methodologies
    List {
        /// Output format
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },

    /// Explain the form fields
    Guide {
        /// Specific field to explain (all fields when omitted)
        field: Option<String>,
    },

    /// Show application logs
    Logs {
        /// Follow log output (like tail -f)
        #[arg(short, long)]
        follow: bool,

        /// Number of lines to show
        #[arg(short, long, default_value = "50")]
        lines: usize,
    },
}

/// Output format for the list command
#[derive(Clone, Debug, Default)]
pub enum OutputFormat {
    Text,
    Json,
    #[default]
    Table,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "plain" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "table" => Ok(Self::Table),
            _ => Err(format!("Unknown format: {}. Use: text, json, or table", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Table => write!(f, "table"),
        }
    }
}

/// Parse repeated NAME=VALUE arguments into field values.
pub fn parse_fields(args: &[String]) -> Result<FieldValues, String> {
    let mut values = FieldValues::new();
    for arg in args {
        let Some((name, value)) = arg.split_once('=') else {
            return Err(format!("Invalid field '{}': expected NAME=VALUE", arg));
        };
        values.insert(name.trim().to_string(), value.to_string());
    }
    Ok(values)
}

/// Path of the application log file
pub fn get_log_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("contentstudio")
        .join("logs")
        .join("contentstudio.log")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_no_command() {
        let cli = Cli::parse_from(["cst"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_cli_parse_tui() {
        let cli = Cli::parse_from(["cst", "tui"]);
        assert!(matches!(cli.command, Some(Command::Tui)));
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::parse_from(["cst", "run", "m1", "--prompt", "m1p2", "--field", "tema=vendas"]);
        if let Some(Command::Run {
            methodology,
            prompt,
            fields,
            show_prompt,
            ..
        }) = cli.command
        {
            assert_eq!(methodology, "m1");
            assert_eq!(prompt.as_deref(), Some("m1p2"));
            assert_eq!(fields, vec!["tema=vendas".to_string()]);
            assert!(!show_prompt);
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_run_export() {
        let cli = Cli::parse_from(["cst", "run", "m2", "-f", "nicho=moda", "-e", "json"]);
        if let Some(Command::Run { export, .. }) = cli.command {
            assert_eq!(export, Some(ExportFormat::Json));
        } else {
            panic!("Expected Run command");
        }
    }

    #[test]
    fn test_cli_parse_list() {
        let cli = Cli::parse_from(["cst", "list", "--format", "json"]);
        assert!(matches!(
            cli.command,
            Some(Command::List {
                format: OutputFormat::Json
            })
        ));
    }

    #[test]
    fn test_cli_parse_guide() {
        let cli = Cli::parse_from(["cst", "guide", "nicho"]);
        if let Some(Command::Guide { field }) = cli.command {
            assert_eq!(field.as_deref(), Some("nicho"));
        } else {
            panic!("Expected Guide command");
        }
    }

    #[test]
    fn test_output_format_from_str() {
        assert!(matches!("text".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!(matches!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!("table".parse::<OutputFormat>(), Ok(OutputFormat::Table)));
        assert!("invalid".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_fields() {
        let values = parse_fields(&["nicho=moda".to_string(), "tema=looks de verão".to_string()]).unwrap();
        assert_eq!(values.get("nicho").map(String::as_str), Some("moda"));
        assert_eq!(values.get("tema").map(String::as_str), Some("looks de verão"));

        assert!(parse_fields(&["semvalor".to_string()]).is_err());
    }

    #[test]
    fn test_cli_with_config() {
        let cli = Cli::parse_from(["cst", "-c", "/path/to/config.yml", "list"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/config.yml")));
    }
}
