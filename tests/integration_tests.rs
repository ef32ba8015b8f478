use lifestyle_architect_server::{
    config::Config,
    constants::variants::builtin_variants,
    models::domain::{SinkPolicy, VariantDescriptor},
    services::variant_registry::VariantRegistry,
};

#[test]
fn test_variant_catalog_file_overrides_builtins() {
    let mut variants: Vec<VariantDescriptor> = builtin_variants().into_iter().take(2).collect();
    variants[1].sink_policy = SinkPolicy::Required;

    let path = std::env::temp_dir().join(format!("variants-{}.json", std::process::id()));
    std::fs::write(&path, serde_json::to_string_pretty(&variants).unwrap()).unwrap();

    let mut config = Config::from_env();
    config.variants_path = Some(path.to_string_lossy().to_string());
    config.default_variant = "digital-nomad".to_string();

    let registry = VariantRegistry::from_config(&config).unwrap();
    std::fs::remove_file(&path).ok();

    assert_eq!(registry.all().len(), 2);
    assert_eq!(registry.default_variant().id, "digital-nomad");
    assert_eq!(
        registry.get("digital-nomad").unwrap().sink_policy,
        SinkPolicy::Required
    );
    assert!(registry.get("concierge").is_err());
}

#[test]
fn test_missing_catalog_file_is_an_error() {
    let mut config = Config::from_env();
    config.variants_path = Some("/nonexistent/variants.json".to_string());
    assert!(VariantRegistry::from_config(&config).is_err());
}

#[test]
fn test_sink_policy_defaults_to_best_effort_in_catalog_files() {
    let mut value = serde_json::to_value(&builtin_variants()[0]).unwrap();
    value.as_object_mut().unwrap().remove("sink_policy");

    let variant: VariantDescriptor = serde_json::from_value(value).unwrap();
    assert_eq!(variant.sink_policy, SinkPolicy::BestEffort);
}
