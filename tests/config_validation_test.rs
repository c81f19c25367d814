use std::path::PathBuf;

use punchd::config::{AppConfig, JsonlStoreSection, StoreBackendKind, StoreSection};
use punchd::store::StoreConfig;

#[test]
fn default_config_uses_log_store() {
    let config = AppConfig::default();

    assert_eq!(config.server.host, "0.0.0.0");
    assert_eq!(config.server.port, 3000);

    let runtime = config
        .store
        .to_runtime()
        .expect("default store config should be valid");
    assert!(matches!(runtime, StoreConfig::Log));
}

#[test]
fn jsonl_backend_defaults_path() {
    let section = StoreSection {
        backend: StoreBackendKind::Jsonl,
        jsonl: None,
    };

    let runtime = section
        .to_runtime()
        .expect("jsonl backend without a section should fall back to defaults");

    match runtime {
        StoreConfig::Jsonl { path } => {
            assert_eq!(path, PathBuf::from("./punches.jsonl"));
        }
        other => panic!("Unexpected store config: {other:?}"),
    }
}

#[test]
fn jsonl_backend_rejects_blank_path() {
    let section = StoreSection {
        backend: StoreBackendKind::Jsonl,
        jsonl: Some(JsonlStoreSection { path: "   ".into() }),
    };

    let result = section.to_runtime();
    assert!(
        result.is_err(),
        "Expected a blank jsonl path to fail validation"
    );
}
