use crate::ClientImport;
use crate::LoaderMode;
use std::str::FromStr;

#[test]
fn client_import_with_named_export() {
    let import = ClientImport::parse("~/lib/urql.server#client");
    assert_eq!(import.module(), "~/lib/urql.server");
    assert_eq!(import.export_name(), "client");
    assert_eq!(
        import.to_import_statement(),
        "import { client as urqlClient } from '~/lib/urql.server';",
    );
}

#[test]
fn client_import_defaults_to_default_export() {
    for source in ["~/lib/urql.server", "~/lib/urql.server#"] {
        let import = ClientImport::parse(source);
        assert_eq!(import.module(), "~/lib/urql.server");
        assert_eq!(import.export_name(), "default");
        assert_eq!(
            import.to_import_statement(),
            "import urqlClient from '~/lib/urql.server';",
        );
    }
}

#[test]
fn loader_mode_from_json() {
    let mode: LoaderMode = serde_json::from_str("true").unwrap();
    assert_eq!(mode, LoaderMode::ContextClient);

    let mode: LoaderMode = serde_json::from_str("false").unwrap();
    assert_eq!(mode, LoaderMode::Disabled);
    assert!(!mode.is_enabled());

    let mode: LoaderMode = serde_json::from_str(r#""./client#urql""#).unwrap();
    assert_eq!(
        mode.client_import(),
        Some(&ClientImport::parse("./client#urql")),
    );
    assert!(mode.is_enabled());
}

#[test]
fn loader_mode_from_cli_string() {
    assert_eq!(LoaderMode::from_str("true").unwrap(), LoaderMode::ContextClient);
    assert_eq!(LoaderMode::from_str("false").unwrap(), LoaderMode::Disabled);
    assert_eq!(
        LoaderMode::from_str("./client").unwrap(),
        LoaderMode::ExternalClient(ClientImport::parse("./client#default")),
    );
}

#[test]
fn config_strings_follow_the_cli_rules() {
    for (json, expected) in [
        (r#""""#, LoaderMode::Disabled),
        (r#""  ""#, LoaderMode::Disabled),
        (r#""false""#, LoaderMode::Disabled),
        (r#""true""#, LoaderMode::ContextClient),
        (r##""#client""##, LoaderMode::Disabled),
    ] {
        let from_json: LoaderMode = serde_json::from_str(json).unwrap();
        assert_eq!(from_json, expected, "withLoaders = {json}");

        let raw: String = serde_json::from_str(json).unwrap();
        assert_eq!(LoaderMode::from_str(&raw).unwrap(), expected);
    }
}

#[test]
fn client_reference_is_trimmed() {
    let mode: LoaderMode = serde_json::from_str(r#"" ./client#urql ""#).unwrap();
    assert_eq!(
        mode,
        LoaderMode::ExternalClient(ClientImport::parse("./client#urql")),
    );
}
