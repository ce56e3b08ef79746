//! Tests for adapter registration, configuration and removal.

use conlog::adapter::{AdapterConfig, AdapterRegistry, LogRecord, from_fn};
use conlog::{Adapter, BufferOutput, Logger};
use serde_json::json;
use std::sync::Arc;

fn noop() -> Arc<dyn Adapter> {
    Arc::new(from_fn(|_: &LogRecord<'_>, _: &AdapterConfig| {}))
}

fn config(value: serde_json::Value) -> AdapterConfig {
    match value {
        serde_json::Value::Object(map) => map,
        _ => AdapterConfig::new(),
    }
}

#[test]
fn add_then_configure() {
    let registry = AdapterRegistry::new();
    registry.add("x", noop(), AdapterConfig::new());

    assert!(registry.set_config("x", config(json!({"k": "v"}))));
    assert_eq!(registry.config("x").unwrap()["k"], "v");
}

#[test]
fn configure_unknown_name_is_a_noop() {
    let registry = AdapterRegistry::new();
    registry.add("fack", noop(), AdapterConfig::new());

    assert!(!registry.set_config("fake", config(json!({"test": "value"}))));

    assert!(!registry.contains("fake"));
    assert_eq!(registry.config("fake"), None);
    assert_eq!(registry.names(), vec!["fack".to_string()]);
    assert_eq!(registry.config("fack"), Some(AdapterConfig::new()));
}

#[test]
fn remove_reports_absence() {
    let registry = AdapterRegistry::new();
    registry.add("x", noop(), AdapterConfig::new());

    assert!(registry.remove("x"));
    assert!(!registry.contains("x"));
    assert!(!registry.remove("x"));
    assert!(registry.is_empty());
}

#[test]
fn add_overwrites_existing_entry() {
    let registry = AdapterRegistry::new();
    registry.add("x", noop(), config(json!({"n": 1})));
    registry.add("x", noop(), config(json!({"n": 2})));

    assert_eq!(registry.len(), 1);
    assert_eq!(registry.config("x").unwrap()["n"], 2);
}

#[test]
fn config_is_replaced_wholesale() {
    let registry = AdapterRegistry::new();
    registry.add("x", noop(), config(json!({"a": 1, "b": 2})));
    registry.set_config("x", config(json!({"c": 3})));

    let current = registry.config("x").unwrap();
    assert_eq!(current.len(), 1);
    assert!(!current.contains_key("a"));
}

#[test]
fn snapshot_is_unaffected_by_later_changes() {
    let registry = AdapterRegistry::new();
    registry.add("a", noop(), config(json!({"v": 1})));
    registry.add("b", noop(), AdapterConfig::new());

    let snapshot = registry.snapshot();
    registry.remove("a");
    registry.set_config("b", config(json!({"v": 2})));

    assert_eq!(snapshot.len(), 2);
    assert!(snapshot.iter().all(|(_, cfg)| cfg.get("v") != Some(&json!(2))));
}

#[test]
fn names_are_sorted() {
    let registry = AdapterRegistry::new();
    for name in ["zeta", "alpha", "mid"] {
        registry.add(name, noop(), AdapterConfig::new());
    }
    assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
}

#[test]
fn logger_forwards_registry_operations() {
    let logger = Logger::builder().output(BufferOutput::new()).build();
    let noop = from_fn(|_: &LogRecord<'_>, _: &AdapterConfig| {});
    logger.add_adapter("x", noop, AdapterConfig::new());

    assert!(logger.set_adapter_config("x", config(json!({"k": "v"}))));
    assert!(!logger.set_adapter_config("never-added", config(json!({"k": "v"}))));
    assert_eq!(logger.adapters().names(), vec!["x"]);

    assert!(logger.remove_adapter("x"));
    assert!(!logger.remove_adapter("x"));
    assert!(!logger.adapters().contains("x"));
}

#[test]
fn adapters_can_touch_the_registry_while_dispatching() {
    let logger = Arc::new(Logger::builder().output(BufferOutput::new()).build());
    let inner = Arc::clone(&logger);
    logger.add_adapter(
        "self-removing",
        from_fn(move |_: &LogRecord<'_>, _: &AdapterConfig| {
            inner.remove_adapter("self-removing");
        }),
        AdapterConfig::new(),
    );

    logger.println(&["x".into()]);
    assert!(logger.adapters().is_empty());
}
