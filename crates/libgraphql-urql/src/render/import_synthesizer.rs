use crate::UrqlCodegenConfig;

/// Declared once per module. Older TypeScript targets lack a usable `Omit`.
pub const OMIT_UTILITY_TYPE: &str =
    "export type Omit<T, K extends keyof T> = Pick<T, Exclude<keyof T, K>>;";

/// The import statements (and the `Omit` utility type) a generated module
/// needs on top of `base_imports`.
///
/// A module with no operations gets exactly `base_imports`, since none of
/// the extra imports would be used.
pub fn synthesize_imports(
    config: &UrqlCodegenConfig,
    base_imports: &[String],
    has_operations: bool,
) -> Vec<String> {
    let mut imports = base_imports.to_vec();
    if !has_operations {
        return imports;
    }

    if config.with_component {
        imports.push("import * as React from 'react';".to_string());
    }
    if config.with_loaders.is_enabled() {
        imports.push(format!(
            "import {{ useActionData, useLoaderData, type ActionFunctionArgs, type LoaderFunctionArgs }} from '{}';",
            config.router_import_from,
        ));
    }
    if let Some(client_import) = config.with_loaders.client_import() {
        imports.push(client_import.to_import_statement());
    }
    if config.has_any_artifact() {
        imports.push(format!(
            "import * as Urql from '{}';",
            config.urql_import_from,
        ));
    }
    imports.push(OMIT_UTILITY_TYPE.to_string());

    imports
}
