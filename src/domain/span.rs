//! Entity span data models
//!
//! Spans are half-open byte-offset intervals into the UTF-8 source text.
//! They are immutable once constructed; the pipeline only filters or merges
//! them, it never rewrites offsets in place.

use serde::{Deserialize, Serialize};

/// Entity category covering the pattern catalog and the recognizer's
/// label vocabulary (pt-BR administrative text).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntityCategory {
    // Pattern catalog - strong personal identifiers
    /// Cadastro de Pessoa Física (11-digit tax ID, checksum-validated)
    Cpf,
    /// Email addresses
    Email,
    /// Telephone numbers (fixed or mobile, with or without area code)
    Telefone,
    /// SEI administrative process numbers
    ProcessoSei,
    /// Birth-date-like strings (calendar-validated)
    DataNascimento,
    /// Vehicle license plates (including Mercosul format)
    VeiculoPlaca,
    /// RENAVAM vehicle registration numbers
    VeiculoRenavam,
    /// Generic enrollment/registration numbers ("inscrição", "matrícula")
    InscricaoGeral,
    /// Power utility customer identifiers
    Energia,
    /// IPTU/TLP property tax identifiers
    IptuTlp,
    /// Water meter identifiers
    Hidrometro,
    /// Bank account / PIX identifiers
    DadoBancario,

    // Recognizer label vocabulary
    /// Person name (recognizer PER tag)
    Pessoa,
    /// Place name (recognizer LOC tag)
    Local,
    /// Organization name (recognizer ORG tag)
    Organizacao,
    /// Miscellaneous recognizer entity
    Misc,
    /// Health condition mention
    SensivelSaude,
    /// Religion mention
    SensivelReligiao,
    /// Ethnicity/race mention
    SensivelRaca,
}

impl EntityCategory {
    /// Wire label for this category, matching the recognizer vocabulary
    /// and the pattern catalog TOML.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Email => "EMAIL",
            Self::Telefone => "TELEFONE",
            Self::ProcessoSei => "PROCESSO_SEI",
            Self::DataNascimento => "DATA_NASCIMENTO",
            Self::VeiculoPlaca => "VEICULO_PLACA",
            Self::VeiculoRenavam => "VEICULO_RENAVAM",
            Self::InscricaoGeral => "DADO_INSCRICAO_GERAL",
            Self::Energia => "DADO_ENERGIA",
            Self::IptuTlp => "DADO_IPTU_TLP",
            Self::Hidrometro => "DADO_HIDROMETRO",
            Self::DadoBancario => "DADO_BANCARIO",
            Self::Pessoa => "PER",
            Self::Local => "LOC",
            Self::Organizacao => "ORG",
            Self::Misc => "MISC",
            Self::SensivelSaude => "SENSIVEL_SAUDE",
            Self::SensivelReligiao => "SENSIVEL_RELIGIAO",
            Self::SensivelRaca => "SENSIVEL_RACA",
        }
    }

    /// Parse a wire label into a category. Unknown labels yield `None`
    /// so that a newer recognizer vocabulary degrades gracefully.
    pub fn parse_label(s: &str) -> Option<Self> {
        match s.to_uppercase().as_str() {
            "CPF" => Some(Self::Cpf),
            "EMAIL" => Some(Self::Email),
            "TELEFONE" => Some(Self::Telefone),
            "PROCESSO_SEI" => Some(Self::ProcessoSei),
            "DATA_NASCIMENTO" => Some(Self::DataNascimento),
            "VEICULO_PLACA" => Some(Self::VeiculoPlaca),
            "VEICULO_RENAVAM" => Some(Self::VeiculoRenavam),
            "DADO_INSCRICAO_GERAL" => Some(Self::InscricaoGeral),
            "DADO_ENERGIA" => Some(Self::Energia),
            "DADO_IPTU_TLP" => Some(Self::IptuTlp),
            "DADO_HIDROMETRO" => Some(Self::Hidrometro),
            "DADO_BANCARIO" => Some(Self::DadoBancario),
            "PER" => Some(Self::Pessoa),
            "LOC" => Some(Self::Local),
            "ORG" => Some(Self::Organizacao),
            "MISC" => Some(Self::Misc),
            "SENSIVEL_SAUDE" => Some(Self::SensivelSaude),
            "SENSIVEL_RELIGIAO" => Some(Self::SensivelReligiao),
            "SENSIVEL_RACA" => Some(Self::SensivelRaca),
            _ => None,
        }
    }

    /// Check if this category is a strong personal identifier
    /// (document, contact, financial, vehicle or process-number data).
    pub fn is_identifier(&self) -> bool {
        matches!(
            self,
            Self::Cpf
                | Self::Email
                | Self::Telefone
                | Self::ProcessoSei
                | Self::DataNascimento
                | Self::VeiculoPlaca
                | Self::VeiculoRenavam
                | Self::InscricaoGeral
                | Self::Energia
                | Self::IptuTlp
                | Self::Hidrometro
                | Self::DadoBancario
        )
    }

    /// Normalized sensitive category name, if this label denotes one.
    pub fn sensitive_category(&self) -> Option<&'static str> {
        match self {
            Self::SensivelSaude => Some("saude"),
            Self::SensivelReligiao => Some("religiao"),
            Self::SensivelRaca => Some("raca"),
            _ => None,
        }
    }

    /// Normalized detected-type name used in classification output.
    pub fn detected_type(&self) -> &'static str {
        match self {
            Self::Pessoa => "nome_pessoa",
            Self::Cpf => "cpf",
            Self::Email => "email",
            Self::Telefone => "telefone",
            Self::ProcessoSei => "processo_sei",
            Self::DataNascimento => "data_nascimento",
            Self::VeiculoPlaca => "veiculo_placa",
            Self::VeiculoRenavam => "veiculo_renavam",
            Self::InscricaoGeral => "dado_inscricao_geral",
            Self::Energia => "dado_energia",
            Self::IptuTlp => "dado_iptu_tlp",
            Self::Hidrometro => "dado_hidrometro",
            Self::DadoBancario => "dado_bancario",
            Self::Local => "local",
            Self::Organizacao => "organizacao",
            Self::Misc => "misc",
            Self::SensivelSaude => "sensivel_saude",
            Self::SensivelReligiao => "sensivel_religiao",
            Self::SensivelRaca => "sensivel_raca",
        }
    }
}

/// Which detection source produced a span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpanOrigin {
    /// Produced by a pattern-catalog rule
    PatternRule,
    /// Produced by the external named-entity recognizer
    Recognizer,
}

/// A labeled half-open interval `[start, end)` into the source text.
///
/// Invariant: `start < end` and both offsets fall on `char` boundaries of
/// the text the span was built against. [`EntitySpan::is_within`] checks
/// this; the engine drops spans that fail it instead of erroring out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Entity category
    pub category: EntityCategory,
    /// Detection source
    pub origin: SpanOrigin,
}

impl EntitySpan {
    /// Create a new span.
    pub fn new(start: usize, end: usize, category: EntityCategory, origin: SpanOrigin) -> Self {
        Self {
            start,
            end,
            category,
            origin,
        }
    }

    /// Span length in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// A zero-length span carries no text and is always discarded.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Check the span invariant against a concrete text: non-empty, in
    /// bounds, and not splitting a multi-byte unit.
    pub fn is_within(&self, text: &str) -> bool {
        self.start < self.end
            && self.end <= text.len()
            && text.is_char_boundary(self.start)
            && text.is_char_boundary(self.end)
    }

    /// Half-open interval overlap test.
    pub fn overlaps(&self, other: &EntitySpan) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Slice the source text covered by this span.
    ///
    /// Callers must have checked [`is_within`](Self::is_within) against the
    /// same text first.
    pub fn text<'t>(&self, text: &'t str) -> &'t str {
        &text[self.start..self.end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for cat in [
            EntityCategory::Cpf,
            EntityCategory::Telefone,
            EntityCategory::Pessoa,
            EntityCategory::SensivelSaude,
            EntityCategory::InscricaoGeral,
        ] {
            assert_eq!(EntityCategory::parse_label(cat.label()), Some(cat));
        }
    }

    #[test]
    fn test_unknown_label() {
        assert_eq!(EntityCategory::parse_label("GPE"), None);
    }

    #[test]
    fn test_identifier_buckets() {
        assert!(EntityCategory::Cpf.is_identifier());
        assert!(EntityCategory::DadoBancario.is_identifier());
        assert!(!EntityCategory::Pessoa.is_identifier());
        assert!(!EntityCategory::SensivelSaude.is_identifier());
    }

    #[test]
    fn test_sensitive_mapping() {
        assert_eq!(
            EntityCategory::SensivelSaude.sensitive_category(),
            Some("saude")
        );
        assert_eq!(
            EntityCategory::SensivelRaca.sensitive_category(),
            Some("raca")
        );
        assert_eq!(EntityCategory::Cpf.sensitive_category(), None);
    }

    #[test]
    fn test_span_overlap() {
        let a = EntitySpan::new(0, 5, EntityCategory::Cpf, SpanOrigin::PatternRule);
        let b = EntitySpan::new(4, 8, EntityCategory::Email, SpanOrigin::PatternRule);
        let c = EntitySpan::new(5, 8, EntityCategory::Email, SpanOrigin::PatternRule);
        assert!(a.overlaps(&b));
        assert!(!a.overlaps(&c));
    }

    #[test]
    fn test_span_within_multibyte() {
        let text = "ação";
        // "ç" occupies bytes 1..3; byte 2 splits its UTF-8 encoding
        let bad = EntitySpan::new(0, 2, EntityCategory::Misc, SpanOrigin::Recognizer);
        assert!(!bad.is_within(text));
        let good = EntitySpan::new(0, 3, EntityCategory::Misc, SpanOrigin::Recognizer);
        assert!(good.is_within(text));
    }

    #[test]
    fn test_span_text() {
        let text = "CPF 123.456.789-09";
        let span = EntitySpan::new(4, 18, EntityCategory::Cpf, SpanOrigin::PatternRule);
        assert!(span.is_within(text));
        assert_eq!(span.text(text), "123.456.789-09");
    }
}
