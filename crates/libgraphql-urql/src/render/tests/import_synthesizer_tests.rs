use crate::ClientImport;
use crate::LoaderMode;
use crate::OMIT_UTILITY_TYPE;
use crate::UrqlCodegenConfig;
use crate::synthesize_imports;

const REACT: &str = "import * as React from 'react';";
const ROUTER: &str = "import { useActionData, useLoaderData, type ActionFunctionArgs, type LoaderFunctionArgs } from 'react-router';";
const URQL: &str = "import * as Urql from 'urql';";

fn base() -> Vec<String> {
    vec!["import gql from 'graphql-tag';".to_string()]
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| item.to_string()).collect()
}

#[test]
fn no_operations_yields_only_base_imports() {
    let config = UrqlCodegenConfig {
        with_component: true,
        with_loaders: LoaderMode::ExternalClient(ClientImport::parse("./client")),
        ..Default::default()
    };
    assert_eq!(synthesize_imports(&config, &base(), false), base());
    assert_eq!(synthesize_imports(&config, &[], false), Vec::<String>::new());
}

#[test]
fn hooks_only() {
    let imports = synthesize_imports(&UrqlCodegenConfig::default(), &base(), true);
    assert_eq!(imports, strings(&[
        "import gql from 'graphql-tag';",
        URQL,
        OMIT_UTILITY_TYPE,
    ]));
}

#[test]
fn everything_enabled_with_external_client() {
    let config = UrqlCodegenConfig {
        with_component: true,
        with_loaders: LoaderMode::ExternalClient(
            ClientImport::parse("~/urql.server#client"),
        ),
        ..Default::default()
    };
    assert_eq!(synthesize_imports(&config, &base(), true), strings(&[
        "import gql from 'graphql-tag';",
        REACT,
        ROUTER,
        "import { client as urqlClient } from '~/urql.server';",
        URQL,
        OMIT_UTILITY_TYPE,
    ]));
}

#[test]
fn context_client_loaders_do_not_import_a_client() {
    let config = UrqlCodegenConfig {
        with_hooks: false,
        with_loaders: LoaderMode::ContextClient,
        ..Default::default()
    };
    assert_eq!(synthesize_imports(&config, &[], true), strings(&[
        ROUTER,
        URQL,
        OMIT_UTILITY_TYPE,
    ]));
}

#[test]
fn nothing_enabled_skips_the_client_library() {
    let config = UrqlCodegenConfig {
        with_hooks: false,
        ..Default::default()
    };
    assert_eq!(
        synthesize_imports(&config, &[], true),
        strings(&[OMIT_UTILITY_TYPE]),
    );
}

#[test]
fn import_sources_are_configurable() {
    let config = UrqlCodegenConfig {
        with_loaders: LoaderMode::ContextClient,
        router_import_from: "@remix-run/react".to_string(),
        urql_import_from: "@urql/preact".to_string(),
        ..Default::default()
    };
    let imports = synthesize_imports(&config, &[], true);
    assert!(imports[0].ends_with("from '@remix-run/react';"));
    assert_eq!(imports[1], "import * as Urql from '@urql/preact';");
}
