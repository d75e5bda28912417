//! Field guide
//!
//! Explains each form field to the user: what it means and why the model
//! needs it. Shown beside the inputs in the TUI and by `cst guide`.

use serde::Serialize;

/// Guidance for a single field name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldGuide {
    pub label: &'static str,
    pub explanation: &'static str,
}

/// All field names that carry guidance, in display order.
pub const KNOWN_FIELDS: [&str; 8] = [
    "nicho", "publico", "tema", "resultado", "texto", "assunto", "contexto", "regiao",
];

/// Look up the guidance for a field name.
pub fn guide_for(field: &str) -> Option<FieldGuide> {
    match field {
        "nicho" => Some(FieldGuide {
            label: "Nicho de Atuação",
            explanation: "Define seu mercado específico. É importante porque permite que a IA utilize o vocabulário técnico e os ganchos mentais que ressoam com seu setor.",
        }),
        "publico" => Some(FieldGuide {
            label: "Público-Alvo",
            explanation: "Identifica quem consumirá o conteúdo. Ajuda a IA a ajustar o tom de voz (formal vs informal) e a identificar as dores emocionais certas.",
        }),
        "tema" => Some(FieldGuide {
            label: "Tema Central",
            explanation: "O assunto específico do post. Quanto mais focado for o tema, menor a chance de o conteúdo parecer genérico ou superficial.",
        }),
        "resultado" => Some(FieldGuide {
            label: "Resultado Desejado",
            explanation: "O benefício final que seu produto/serviço gera. Serve como a 'promessa' do conteúdo, essencial para gerar desejo de compra.",
        }),
        "texto" => Some(FieldGuide {
            label: "Conteúdo Base",
            explanation: "Um rascunho ou transcrição bruta. A IA usará isso como matéria-prima para estruturar ganchos, legendas e roteiros profissionais.",
        }),
        "assunto" => Some(FieldGuide {
            label: "Assunto Técnico",
            explanation: "O tópico complexo que você quer simplificar. Fundamental para gerar autoridade ao explicar algo difícil de forma fácil.",
        }),
        "contexto" => Some(FieldGuide {
            label: "Contexto Situacional",
            explanation: "O cenário da comunicação (ex: palestra, direct, reunião). Permite que a IA adapte a abordagem para o nível de intimidade correto.",
        }),
        "regiao" => Some(FieldGuide {
            label: "Região Geográfica",
            explanation: "Localização do seu mercado. Importante para adaptar gírias, tendências locais e referências culturais específicas.",
        }),
        _ => None,
    }
}

/// Display label for a field: the guide label when one exists, otherwise
/// the raw field name.
pub fn field_label(field: &str) -> &str {
    match guide_for(field) {
        Some(guide) => guide.label,
        None => field,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_known_fields_have_guides() {
        for field in KNOWN_FIELDS {
            assert!(guide_for(field).is_some(), "missing guide for field: {}", field);
        }
    }

    #[test]
    fn test_unknown_field_has_no_guide() {
        assert!(guide_for("desconhecido").is_none());
    }

    #[test]
    fn test_field_label_falls_back_to_name() {
        assert_eq!(field_label("nicho"), "Nicho de Atuação");
        assert_eq!(field_label("xyz"), "xyz");
    }
}
