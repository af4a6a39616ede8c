//! Configuration loading integration tests

use secrecy::ExposeSecret;
use std::io::Write;
use tempfile::NamedTempFile;
use vigia::config::load_config;

fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn full_config_roundtrip() {
    let file = write_config(
        r#"
[application]
name = "vigia"
log_level = "warn"

[analysis]
year_min = 1900
year_max = 2035
min_digits = 3
birth_year_min = 1904
birth_year_max = 2019
context_window = 8
batch_concurrency = 4

[recognizer]
provider = "lexicon"
timeout_seconds = 10

[audit]
enabled = true
log_path = "/tmp/vigia-audit.log"
json_format = true

[logging]
local_enabled = false
"#,
    );

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.analysis.context_window, 8);
    assert_eq!(config.analysis.batch_concurrency, 4);
    assert!(config.audit.enabled);
    assert_eq!(config.recognizer.timeout_seconds, 10);
}

#[test]
fn env_substitution_fills_api_key() {
    std::env::set_var("VIGIA_TEST_SUBST_KEY", "tok-abc-123");

    let file = write_config(
        r#"
[recognizer]
provider = "http"
endpoint = "https://ner.example.gov.br"
api_key = "${VIGIA_TEST_SUBST_KEY}"
"#,
    );

    let config = load_config(file.path()).unwrap();
    let key = config.recognizer.api_key.unwrap();
    assert_eq!(key.expose_secret().as_ref(), "tok-abc-123");

    std::env::remove_var("VIGIA_TEST_SUBST_KEY");
}

#[test]
fn missing_env_var_fails_load() {
    std::env::remove_var("VIGIA_TEST_NEVER_SET");

    let file = write_config(
        r#"
[recognizer]
provider = "http"
endpoint = "https://ner.example.gov.br"
api_key = "${VIGIA_TEST_NEVER_SET}"
"#,
    );

    let result = load_config(file.path());
    assert!(result.is_err());
    assert!(result
        .unwrap_err()
        .to_string()
        .contains("VIGIA_TEST_NEVER_SET"));
}

#[test]
fn defaults_fill_missing_sections() {
    let file = write_config("[application]\nlog_level = \"info\"\n");

    let config = load_config(file.path()).unwrap();
    assert_eq!(config.recognizer.provider, "lexicon");
    assert_eq!(config.analysis.birth_year_min, 1904);
    assert_eq!(config.analysis.birth_year_max, 2019);
    assert!(!config.audit.enabled);
    assert!(!config.logging.local_enabled);
}

#[test]
fn invalid_values_rejected() {
    let file = write_config(
        r#"
[analysis]
batch_concurrency = 0
"#,
    );
    assert!(load_config(file.path()).is_err());

    let file = write_config(
        r#"
[recognizer]
provider = "http"
"#,
    );
    assert!(load_config(file.path()).is_err());
}
