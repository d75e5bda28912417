//! Integration tests for Content Studio
//!
//! These tests verify the end-to-end pipeline (catalog -> template
//! resolution -> rendering -> export) and the CLI surface. No network
//! access: the generation call is the only external collaborator and is
//! exercised up to its request boundary elsewhere.

use assert_cmd::Command;
use predicates::prelude::*;

use contentstudio::catalog::Catalog;
use contentstudio::export::{self, ExportFormat};
use contentstudio::render::{Block, render};
use contentstudio::template::{FieldValues, resolve};

fn values(pairs: &[(&str, &str)]) -> FieldValues {
    pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

// =============================================================================
// Pipeline Tests
// =============================================================================

#[test]
fn test_resolve_example_from_catalog() {
    let catalog = Catalog::builtin();
    let methodology = catalog.get("m2").expect("builtin methodology");
    let prompt = methodology.default_prompt().expect("default prompt");

    let resolved = resolve(prompt.template, &values(&[("nicho", "moda")]));

    assert!(resolved.contains("o nicho de moda"));
    assert!(!resolved.contains("[nicho]"));
}

#[test]
fn test_resolve_all_catalog_templates_leave_no_tokens() {
    let catalog = Catalog::builtin();

    for methodology in catalog.all() {
        for prompt in methodology.prompts {
            let filled: FieldValues = prompt
                .fields
                .iter()
                .map(|f| (f.to_string(), "valor".to_string()))
                .collect();
            let resolved = resolve(prompt.template, &filled);

            for field in prompt.fields {
                assert!(
                    !resolved.contains(&format!("[{}]", field)),
                    "{}/{} left token [{}]",
                    methodology.id,
                    prompt.id,
                    field
                );
            }
        }
    }
}

#[test]
fn test_render_typical_generation_output() {
    let text = "\
## Estratégia de Conteúdo

> Foco total em retenção.

- Gancho de 3 segundos
- CTA para **salvar**

| Dia | Tema | Formato |
| --- | --- | --- |
| Seg | Dor | Reels |
| Ter | Prova | Carrossel |

Execute com consistência.";

    let blocks = render(text);

    assert!(matches!(&blocks[0], Block::Heading { level: 2, text } if text == "Estratégia de Conteúdo"));
    assert!(matches!(&blocks[1], Block::Blank));
    assert!(matches!(&blocks[2], Block::Quote { text } if text == "Foco total em retenção."));

    let bullets: Vec<_> = blocks.iter().filter(|b| matches!(b, Block::Bullet { .. })).collect();
    assert_eq!(bullets.len(), 2);

    let table = blocks
        .iter()
        .find_map(|b| match b {
            Block::Table(t) => Some(t),
            _ => None,
        })
        .expect("one table block");
    assert_eq!(table.header, vec!["Dia", "Tema", "Formato"]);
    assert_eq!(table.rows.len(), 2);

    assert!(matches!(blocks.last().unwrap(), Block::Paragraph { text } if text == "Execute com consistência."));
}

#[test]
fn test_render_is_pure_and_repeatable() {
    let text = "# A\n| x | y |\n| 1 | 2 |\n**fim";
    assert_eq!(render(text), render(text));
}

// =============================================================================
// Export Tests
// =============================================================================

#[test]
fn test_export_roundtrip() {
    let dir = tempfile::TempDir::new().unwrap();
    let field_values = values(&[("nicho", "moda")]);

    let md_path = export::export(dir.path(), ExportFormat::Markdown, "## Resultado", &field_values).unwrap();
    assert!(md_path.file_name().unwrap().to_string_lossy().ends_with(".md"));
    assert_eq!(std::fs::read_to_string(&md_path).unwrap(), "## Resultado");

    let json_path = export::export(dir.path(), ExportFormat::Json, "## Resultado", &field_values).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed["result"], "## Resultado");
    assert_eq!(parsed["values"]["nicho"], "moda");
}

// =============================================================================
// CLI Tests
// =============================================================================

#[test]
fn test_cli_list_shows_methodologies() {
    Command::cargo_bin("cst")
        .unwrap()
        .args(["list", "--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Growth Express"))
        .stdout(predicate::str::contains("Metodologia Proibida"));
}

#[test]
fn test_cli_guide_explains_field() {
    Command::cargo_bin("cst")
        .unwrap()
        .args(["guide", "nicho"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nicho de Atuação"));
}

#[test]
fn test_cli_run_show_prompt_resolves_without_api_key() {
    Command::cargo_bin("cst")
        .unwrap()
        .args(["run", "m2", "--field", "nicho=moda", "--show-prompt"])
        .env_remove("GEMINI_API_KEY")
        .assert()
        .success()
        .stdout(predicate::str::contains("o nicho de moda"))
        .stdout(predicate::str::contains("[nicho]").not());
}

#[test]
fn test_cli_run_unknown_methodology_fails() {
    Command::cargo_bin("cst")
        .unwrap()
        .args(["run", "does-not-exist", "--show-prompt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown methodology"));
}
