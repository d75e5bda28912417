//! Prompt template resolution
//!
//! Templates carry placeholder tokens of the form `[fieldName]` where the
//! name is strictly alphanumeric. Resolution substitutes every token with
//! the value supplied for that name, or empty text when no value exists.
//! Substituted values are never re-scanned, so a value containing bracket
//! syntax passes through untouched.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

/// Field values entered for the currently selected template, keyed by
/// field name. BTreeMap keeps export output stable across runs.
pub type FieldValues = BTreeMap<String, String>;

/// Matches `[name]` where name is alphanumeric. The name restriction keeps
/// markdown link/bracket syntax inside template prose from being treated
/// as a placeholder.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([A-Za-z0-9]+)\]").expect("valid token pattern"));

/// Resolve a template against the given field values.
///
/// Every `[name]` occurrence is replaced (all occurrences, not just the
/// first). Names missing from the map resolve to empty text. The transform
/// is pure and case-sensitive.
pub fn resolve(template: &str, values: &FieldValues) -> String {
    TOKEN
        .replace_all(template, |caps: &regex::Captures<'_>| {
            values.get(&caps[1]).map(String::as_str).unwrap_or("").to_string()
        })
        .into_owned()
}

/// List the field names referenced by a template, in order of first
/// appearance, without duplicates.
pub fn referenced_fields(template: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for caps in TOKEN.captures_iter(template) {
        let name = caps[1].to_string();
        if !seen.contains(&name) {
            seen.push(name);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn test_resolve_single_field() {
        let out = resolve("Gere ideias para [nicho]", &values(&[("nicho", "moda")]));
        assert_eq!(out, "Gere ideias para moda");
    }

    #[test]
    fn test_resolve_replaces_all_occurrences() {
        let out = resolve("[tema] e mais [tema]", &values(&[("tema", "vendas")]));
        assert_eq!(out, "vendas e mais vendas");
    }

    #[test]
    fn test_resolve_missing_field_substitutes_empty() {
        let out = resolve("para [nicho] sobre [tema]", &values(&[("nicho", "moda")]));
        assert_eq!(out, "para moda sobre ");
    }

    #[test]
    fn test_resolve_is_literal_not_recursive() {
        // A substituted value containing a token must not be expanded again
        let out = resolve("[a]", &values(&[("a", "[b]"), ("b", "nope")]));
        assert_eq!(out, "[b]");
    }

    #[test]
    fn test_resolve_ignores_non_alphanumeric_brackets() {
        let input = "veja [este link](https://example.com) e [nicho]";
        let out = resolve(input, &values(&[("nicho", "moda")]));
        assert_eq!(out, "veja [este link](https://example.com) e moda");
    }

    #[test]
    fn test_resolve_case_sensitive() {
        let out = resolve("[Nicho] [nicho]", &values(&[("nicho", "moda")]));
        assert_eq!(out, " moda");
    }

    #[test]
    fn test_resolve_no_tokens_is_identity() {
        let input = "texto sem placeholders";
        assert_eq!(resolve(input, &values(&[("nicho", "moda")])), input);
    }

    #[test]
    fn test_referenced_fields_order_and_dedup() {
        let fields = referenced_fields("para [nicho] sobre [tema] em [nicho]");
        assert_eq!(fields, vec!["nicho".to_string(), "tema".to_string()]);
    }

    #[test]
    fn test_referenced_fields_empty() {
        assert!(referenced_fields("sem campos").is_empty());
    }
}
