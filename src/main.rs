//! Content Studio - methodology-driven content strategy studio
//!
//! CLI entry point. With no subcommand the interactive TUI starts; batch
//! subcommands cover scripted generation, catalog listing, the field
//! guide, and log tailing.

use std::fs;
use std::io::{BufRead, BufReader};

use clap::Parser;
use eyre::{Context, Result, eyre};
use tracing::info;

use contentstudio::catalog::{Catalog, KNOWN_FIELDS, guide_for};
use contentstudio::cli::{Cli, Command, OutputFormat, get_log_path, parse_fields};
use contentstudio::config::Config;
use contentstudio::export::{self, ExportFormat};
use contentstudio::{llm, printer, render, template, tui};

fn setup_logging(verbose: bool) -> Result<()> {
    let log_path = get_log_path();
    if let Some(dir) = log_path.parent() {
        fs::create_dir_all(dir).context("Failed to create log directory")?;
    }

    // Write to a log file, not stdout/stderr - the TUI owns the terminal
    let level = if verbose { tracing::Level::DEBUG } else { tracing::Level::INFO };
    let log_file = fs::File::create(&log_path).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (verbose: {})", verbose);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;

    info!(
        "Loaded config: provider={}, model={}",
        config.llm.provider, config.llm.model
    );

    match cli.command {
        None | Some(Command::Tui) => cmd_tui(&config).await,
        Some(Command::Run {
            methodology,
            prompt,
            fields,
            show_prompt,
            raw,
            export,
        }) => cmd_run(&config, &methodology, prompt.as_deref(), &fields, show_prompt, raw, export).await,
        Some(Command::List { format }) => cmd_list(format),
        Some(Command::Guide { field }) => cmd_guide(field.as_deref()),
        Some(Command::Logs { follow, lines }) => cmd_logs(follow, lines),
    }
}

/// Launch the TUI
async fn cmd_tui(config: &Config) -> Result<()> {
    // Validate the credential early so the setup error reads as one clear
    // line instead of failing on the first submission
    config.validate()?;
    tui::run(config).await
}

/// Run one generation in batch mode
async fn cmd_run(
    config: &Config,
    selector: &str,
    prompt_id: Option<&str>,
    field_args: &[String],
    show_prompt: bool,
    raw: bool,
    export_format: Option<ExportFormat>,
) -> Result<()> {
    let catalog = Catalog::builtin();
    let methodology = catalog
        .find(selector)
        .ok_or_else(|| eyre!("Unknown methodology: {}. Try `cst list`.", selector))?;

    let prompt = match prompt_id {
        Some(id) => methodology
            .prompt(id)
            .ok_or_else(|| eyre!("Unknown prompt '{}' for {}", id, methodology.id))?,
        None => methodology
            .default_prompt()
            .ok_or_else(|| eyre!("Methodology {} has no prompts", methodology.id))?,
    };

    let values = parse_fields(field_args).map_err(|e| eyre!(e))?;
    let resolved = template::resolve(prompt.template, &values);

    if show_prompt {
        println!("{}", resolved);
        return Ok(());
    }

    config.validate()?;
    let client = llm::create_client(&config.llm).map_err(|e| eyre!(e.user_message()))?;

    let label = methodology.context_label(prompt);
    println!("{} {}", methodology.icon, label);
    println!();

    let text = client
        .generate(&resolved, &label)
        .await
        .map_err(|e| eyre!(e.user_message()))?;

    if raw {
        println!("{}", text);
    } else {
        printer::print_blocks(&render::render(&text));
    }

    if let Some(format) = export_format {
        let path = export::export(&config.export.dir, format, &text, &values)?;
        println!();
        println!("Exportado para {}", path.display());
    }

    Ok(())
}

/// List available methodologies
fn cmd_list(format: OutputFormat) -> Result<()> {
    let catalog = Catalog::builtin();

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.all())?);
        }
        OutputFormat::Table => {
            println!("{:<14} {:<3} {:<45} {}", "ID", "", "TITLE", "PROMPTS");
            for m in catalog.all() {
                println!("{:<14} {:<3} {:<45} {}", m.id, m.icon, m.title, m.prompts.len());
            }
        }
        OutputFormat::Text => {
            for m in catalog.all() {
                println!("{} {} ({})", m.icon, m.title, m.id);
                println!("    {}", m.description);
                for p in m.prompts {
                    println!("    - {} ({})", p.label, p.id);
                }
                println!();
            }
        }
    }

    Ok(())
}

/// Explain form fields
fn cmd_guide(field: Option<&str>) -> Result<()> {
    match field {
        Some(name) => {
            let guide = guide_for(name).ok_or_else(|| eyre!("Unknown field: {}", name))?;
            println!("{} ({})", guide.label, name);
            println!("    {}", guide.explanation);
        }
        None => {
            for name in KNOWN_FIELDS {
                if let Some(guide) = guide_for(name) {
                    println!("{} ({})", guide.label, name);
                    println!("    {}", guide.explanation);
                    println!();
                }
            }
        }
    }

    Ok(())
}

/// Show logs
fn cmd_logs(follow: bool, lines: usize) -> Result<()> {
    let log_path = get_log_path();

    if !log_path.exists() {
        println!("No log file found at: {}", log_path.display());
        return Ok(());
    }

    if follow {
        println!("Following log file: {} (Ctrl+C to stop)", log_path.display());
        println!();

        let mut child = std::process::Command::new("tail")
            .args(["-f", "-n", &lines.to_string()])
            .arg(&log_path)
            .spawn()
            .context("Failed to run tail -f")?;

        child.wait()?;
    } else {
        let file = fs::File::open(&log_path).context("Failed to open log file")?;
        let reader = BufReader::new(file);
        let all_lines: Vec<String> = reader.lines().map_while(Result::ok).collect();

        let start = all_lines.len().saturating_sub(lines);
        for line in &all_lines[start..] {
            println!("{}", line);
        }
    }

    Ok(())
}
