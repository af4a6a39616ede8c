//! Engine integration with the HTTP recognizer adapter against a mock
//! NER service

use vigia::adapters::recognizer::create_recognizer;
use vigia::analysis::AnalysisEngine;
use vigia::config::{RecognizerConfig, VigiaConfig};
use vigia::domain::VigiaError;

fn http_config(endpoint: &str) -> VigiaConfig {
    VigiaConfig {
        recognizer: RecognizerConfig {
            provider: "http".to_string(),
            endpoint: Some(endpoint.to_string()),
            api_key: None,
            timeout_seconds: 5,
        },
        ..Default::default()
    }
}

#[tokio::test]
async fn classification_uses_remote_entities() {
    let text = "Maria Oliveira mora no Guará";

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/recognize")
        .with_status(200)
        .with_header("content-type", "application/json")
        // "Maria Oliveira" spans bytes 0..14
        .with_body(r#"{"entities":[{"start":0,"end":14,"label":"PER"}]}"#)
        .create_async()
        .await;

    let config = http_config(&server.url());
    let recognizer = create_recognizer(&config.recognizer).unwrap();
    let engine = AnalysisEngine::new(&config, recognizer).unwrap();

    let result = engine.analyze(text).await.unwrap();

    mock.assert_async().await;
    assert!(result.contains_personal_data);
    assert!(result.detected_types.contains("nome_pessoa"));
    assert!(result.decision_origins.contains("recognizer"));
    assert_eq!(result.evidence, vec!["Nome detectado: Maria Oliveira"]);
}

#[tokio::test]
async fn remote_sensitive_tag_is_classified() {
    let text = "paciente com esquizofrenia";

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/recognize")
        .with_status(200)
        .with_header("content-type", "application/json")
        // "esquizofrenia" spans bytes 13..26
        .with_body(r#"{"entities":[{"start":13,"end":26,"label":"SENSIVEL_SAUDE"}]}"#)
        .create_async()
        .await;

    let config = http_config(&server.url());
    let recognizer = create_recognizer(&config.recognizer).unwrap();
    let engine = AnalysisEngine::new(&config, recognizer).unwrap();

    let result = engine.analyze(text).await.unwrap();

    assert!(result.contains_sensitive_data);
    assert!(result.sensitive_categories.contains("saude"));
    assert!(result.decision_origins.contains("recognizer+heuristic"));
}

#[tokio::test]
async fn service_fault_surfaces_as_analysis_unavailable() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/recognize")
        .with_status(503)
        .create_async()
        .await;

    let config = http_config(&server.url());
    let recognizer = create_recognizer(&config.recognizer).unwrap();
    let engine = AnalysisEngine::new(&config, recognizer).unwrap();

    let err = engine.analyze("qualquer texto").await.unwrap_err();
    assert!(matches!(err, VigiaError::AnalysisUnavailable(_)));
}

#[tokio::test]
async fn garbage_offsets_from_service_are_dropped() {
    let text = "texto curto";

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/recognize")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"entities":[{"start":5,"end":500,"label":"PER"},{"start":7,"end":7,"label":"PER"}]}"#)
        .create_async()
        .await;

    let config = http_config(&server.url());
    let recognizer = create_recognizer(&config.recognizer).unwrap();
    let engine = AnalysisEngine::new(&config, recognizer).unwrap();

    // invalid spans are dropped per-match; the call still succeeds
    let result = engine.analyze(text).await.unwrap();
    assert!(!result.contains_personal_data);
}

#[tokio::test]
async fn remote_spans_win_ties_against_catalog_spans() {
    // the recognizer tags the same bytes the catalog matched; the
    // reconciled span must come from the recognizer
    let text = "contato: maria@example.gov.br";
    let start = text.find("maria@").unwrap();
    let end = text.len();

    let mut server = mockito::Server::new_async().await;
    server
        .mock("POST", "/recognize")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"entities":[{{"start":{start},"end":{end},"label":"EMAIL"}}]}}"#
        ))
        .create_async()
        .await;

    let config = http_config(&server.url());
    let recognizer = create_recognizer(&config.recognizer).unwrap();
    let engine = AnalysisEngine::new(&config, recognizer).unwrap();

    let result = engine.analyze(text).await.unwrap();

    assert!(result.detected_types.contains("email"));
    // tie broken toward the recognizer, so provenance says recognizer
    assert!(result.decision_origins.contains("recognizer"));
    assert!(!result.decision_origins.contains("pattern_rule"));
}
