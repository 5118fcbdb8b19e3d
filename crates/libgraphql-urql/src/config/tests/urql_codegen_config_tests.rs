use crate::ConfigWarning;
use crate::LoaderMode;
use crate::NamingConvention;
use crate::UrqlCodegenConfig;

#[test]
fn defaults() {
    let config = UrqlCodegenConfig::default();
    assert!(!config.with_component);
    assert!(config.with_hooks);
    assert_eq!(config.with_loaders, LoaderMode::Disabled);
    assert_eq!(config.urql_import_from, "urql");
    assert_eq!(config.router_import_from, "react-router");
    assert_eq!(config.document_variable_suffix, "Document");
    assert!(config.has_any_artifact());
    assert!(config.warnings().is_empty());
}

#[test]
fn deserializes_camel_case_json() {
    let config: UrqlCodegenConfig = serde_json::from_str(r#"{
        "withComponent": true,
        "withHooks": false,
        "withLoaders": "~/urql.server#client",
        "urqlImportFrom": "@urql/preact",
        "namingConvention": "keep",
        "dedupeOperationSuffix": true
    }"#).unwrap();

    assert!(config.with_component);
    assert!(!config.with_hooks);
    assert_eq!(
        config.with_loaders.client_import().map(|import| import.export_name()),
        Some("client"),
    );
    assert_eq!(config.urql_import_from, "@urql/preact");
    assert_eq!(config.naming_convention, NamingConvention::Keep);
    assert!(config.dedupe_operation_suffix);
    assert_eq!(config.router_import_from, "react-router");
}

#[test]
fn unknown_keys_are_rejected() {
    let result = serde_json::from_str::<UrqlCodegenConfig>(r#"{ "withHook": true }"#);
    assert!(result.is_err());
}

#[test]
fn nothing_enabled() {
    let config = UrqlCodegenConfig {
        with_hooks: false,
        ..Default::default()
    };
    assert!(!config.has_any_artifact());
}

#[test]
fn type_reference_applies_prefix() {
    let mut config = UrqlCodegenConfig::default();
    assert_eq!(config.type_reference("GetUserQuery"), "GetUserQuery");

    config.import_operation_types_from = Some("Operations".to_string());
    assert_eq!(config.type_reference("GetUserQuery"), "Operations.GetUserQuery");

    config.import_operation_types_from = Some(String::new());
    assert_eq!(config.type_reference("GetUserQuery"), "GetUserQuery");
}

#[test]
fn prefix_without_external_documents_warns() {
    let config = UrqlCodegenConfig {
        import_operation_types_from: Some("Operations".to_string()),
        ..Default::default()
    };
    assert_eq!(
        config.warnings(),
        vec![ConfigWarning::OperationTypesPrefixWithoutExternalDocuments],
    );
}

#[test]
fn non_default_prefix_warns() {
    let config = UrqlCodegenConfig {
        import_operation_types_from: Some("Types".to_string()),
        import_document_node_externally_from: Some("./operations".to_string()),
        ..Default::default()
    };
    assert_eq!(
        config.warnings(),
        vec![ConfigWarning::NonDefaultOperationTypesPrefix {
            prefix: "Types".to_string(),
        }],
    );
}

#[test]
fn consistent_prefix_config_does_not_warn() {
    let config = UrqlCodegenConfig {
        import_operation_types_from: Some("Operations".to_string()),
        import_document_node_externally_from: Some("./operations".to_string()),
        ..Default::default()
    };
    assert!(config.warnings().is_empty());
}

#[test]
fn warning_messages_name_the_option() {
    let warning = ConfigWarning::NonDefaultOperationTypesPrefix {
        prefix: "Types".to_string(),
    };
    assert!(warning.to_string().contains("`importOperationTypesFrom` is set to `Types`"));
}
