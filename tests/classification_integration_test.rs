//! End-to-end classification scenarios over realistic administrative text

use std::sync::Arc;

use async_trait::async_trait;
use vigia::adapters::recognizer::lexicon::LexiconRecognizer;
use vigia::adapters::recognizer::{EntityRecognizer, RecognizedEntity};
use vigia::analysis::AnalysisEngine;
use vigia::config::VigiaConfig;
use vigia::domain::RecognizerError;

fn engine() -> AnalysisEngine {
    let config = VigiaConfig::default();
    AnalysisEngine::new(&config, Arc::new(LexiconRecognizer::new())).unwrap()
}

/// Recognizer stub returning canned spans, for scenarios where the exact
/// recognizer output matters more than how it was produced.
struct StubRecognizer(Vec<RecognizedEntity>);

#[async_trait]
impl EntityRecognizer for StubRecognizer {
    async fn recognize(&self, _text: &str) -> Result<Vec<RecognizedEntity>, RecognizerError> {
        Ok(self.0.clone())
    }

    fn name(&self) -> &str {
        "stub"
    }
}

#[tokio::test]
async fn valid_cpf_is_personal_data() {
    let result = engine().analyze("Meu CPF é 123.456.789-09").await.unwrap();

    assert!(result.contains_personal_data);
    assert!(!result.contains_sensitive_data);
    assert!(result.detected_types.contains("cpf"));
    assert!(result.decision_origins.contains("pattern_rule"));
    assert_eq!(result.confidence, 0.95);
    assert_eq!(result.evidence, vec!["Dado pessoal validado: CPF"]);
}

#[tokio::test]
async fn cpf_with_bad_checksum_is_ignored() {
    let result = engine().analyze("Meu CPF é 123.456.789-00").await.unwrap();

    assert!(!result.contains_personal_data);
    assert_eq!(result.confidence, 0.0);
}

#[tokio::test]
async fn legislative_citation_is_not_personal_data() {
    let result = engine().analyze("Lei nº 1234/2023").await.unwrap();

    assert!(!result.contains_personal_data);
    assert!(!result.contains_sensitive_data);
    assert_eq!(result.confidence, 0.0);
    assert!(result.evidence.is_empty());
}

#[tokio::test]
async fn cpf_cited_after_decreto_is_filtered() {
    // checksum-valid digits, but the legislative context wins
    let result = engine()
        .analyze("nos termos do Decreto 123.456.789-09 publicado ontem")
        .await
        .unwrap();

    assert!(!result.contains_personal_data);
}

#[tokio::test]
async fn declared_health_condition_is_sensitive() {
    let result = engine().analyze("Tenho HIV").await.unwrap();

    assert!(result.contains_sensitive_data);
    assert!(result.sensitive_categories.contains("saude"));
    assert!(
        result.decision_origins.contains("context")
            || result.decision_origins.contains("recognizer+heuristic")
    );
    // the declarative context raises the floor above the entity alone
    assert_eq!(result.confidence, 0.9);
}

#[tokio::test]
async fn organization_phrase_triggers_nothing() {
    let result = engine()
        .analyze("Secretaria de Saúde do Distrito")
        .await
        .unwrap();

    assert!(!result.contains_personal_data);
    assert!(!result.contains_sensitive_data);
    assert!(result.detected_types.is_empty());
}

#[tokio::test]
async fn recognizer_person_tag_suppressed_by_exclusion_list() {
    // even if the recognizer insists an org noun is a person, the
    // exclusion list wins
    let text = "Secretaria notificada";
    let stub = StubRecognizer(vec![RecognizedEntity {
        start: 0,
        end: 10,
        label: "PER".to_string(),
    }]);
    let engine = AnalysisEngine::new(&VigiaConfig::default(), Arc::new(stub)).unwrap();

    let result = engine.analyze(text).await.unwrap();
    assert!(!result.contains_personal_data);
}

#[tokio::test]
async fn phone_number_is_contact_data() {
    let result = engine()
        .analyze("Telefone: (61) 99999-9999")
        .await
        .unwrap();

    assert!(result.contains_personal_data);
    assert!(result.detected_types.contains("telefone"));
    assert!(result.confidence >= 0.95);
}

#[tokio::test]
async fn person_name_alone_scores_lower() {
    let result = engine()
        .analyze("requerente João da Silva compareceu")
        .await
        .unwrap();

    assert!(result.contains_personal_data);
    assert!(result.detected_types.contains("nome_pessoa"));
    assert!(result.decision_origins.contains("recognizer"));
    assert_eq!(result.confidence, 0.75);
    assert_eq!(result.evidence, vec!["Nome detectado: João da Silva"]);
}

#[tokio::test]
async fn valid_birth_date_is_detected() {
    let result = engine().analyze("Nascido em 12/05/1990").await.unwrap();

    assert!(result.contains_personal_data);
    assert!(result.detected_types.contains("data_nascimento"));
}

#[tokio::test]
async fn impossible_calendar_date_is_rejected() {
    let result = engine().analyze("Nascido em 31/02/1990").await.unwrap();

    assert!(!result.detected_types.contains("data_nascimento"));
}

#[tokio::test]
async fn bare_year_enrollment_is_filtered() {
    let result = engine().analyze("Matrícula 2024 do servidor").await.unwrap();

    assert!(!result.detected_types.contains("dado_inscricao_geral"));
}

#[tokio::test]
async fn real_enrollment_number_is_detected() {
    let result = engine()
        .analyze("Inscrição nº 123456-8 da CAESB")
        .await
        .unwrap();

    assert!(result.contains_personal_data);
    assert!(result.detected_types.contains("dado_inscricao_geral"));
}

#[tokio::test]
async fn mixed_document_aggregates_all_sources() {
    let text = "João da Silva, telefone (61) 99999-9999, declara: tenho depressão";
    let result = engine().analyze(text).await.unwrap();

    assert!(result.contains_personal_data);
    assert!(result.contains_sensitive_data);
    assert!(result.detected_types.contains("nome_pessoa"));
    assert!(result.detected_types.contains("telefone"));
    assert!(result.sensitive_categories.contains("saude"));

    let origins: Vec<&str> = result.decision_origins.iter().map(String::as_str).collect();
    assert_eq!(
        origins,
        vec!["context", "pattern_rule", "recognizer", "recognizer+heuristic"]
    );
    assert_eq!(result.confidence, 0.95);
}

#[tokio::test]
async fn classification_is_idempotent() {
    let text = "Maria Souza, CPF 529.982.247-25, sou portadora de depressão";
    let engine = engine();

    let first = engine.analyze(text).await.unwrap();
    let second = engine.analyze(text).await.unwrap();

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}

#[tokio::test]
async fn empty_text_yields_empty_verdict() {
    let result = engine().analyze("").await.unwrap();

    assert!(!result.contains_personal_data);
    assert!(!result.contains_sensitive_data);
    assert_eq!(result.confidence, 0.0);
    assert!(result.detected_types.is_empty());
    assert!(result.evidence.is_empty());
}

#[tokio::test]
async fn output_serializes_with_external_field_names() {
    let result = engine().analyze("Meu CPF é 123.456.789-09").await.unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert!(json.get("contains_personal_data").is_some());
    assert!(json.get("contains_sensitive_data").is_some());
    assert!(json.get("origem_decisao").is_some());
    assert!(json.get("tipos_detectados").is_some());
    assert!(json.get("categorias_sensiveis").is_some());
    assert!(json.get("confianca").is_some());
    assert!(json.get("evidencias").is_some());
}
