use crate::ConfigWarning;
use crate::LoaderMode;
use crate::NameConverter;
use crate::NamingConvention;

/// The prefix expected by `importOperationTypesFrom`.
pub const DEFAULT_OPERATION_TYPES_PREFIX: &str = "Operations";

/// Settings for one generation run. Deserializes from camelCase JSON (or
/// any other serde format); every field has a default.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct UrqlCodegenConfig {
    pub dedupe_operation_suffix: bool,
    pub document_variable_prefix: String,
    pub document_variable_suffix: String,
    pub import_document_node_externally_from: Option<String>,

    /// Namespace under which document, result and variables identifiers are
    /// referenced when operation types live in a separate module.
    pub import_operation_types_from: Option<String>,

    pub naming_convention: NamingConvention,
    pub omit_operation_suffix: bool,
    pub router_import_from: String,
    pub types_prefix: String,
    pub types_suffix: String,
    pub urql_import_from: String,
    pub with_component: bool,
    pub with_hooks: bool,
    pub with_loaders: LoaderMode,
}
impl UrqlCodegenConfig {
    /// Whether at least one artifact family is enabled.
    pub fn has_any_artifact(&self) -> bool {
        self.with_component || self.with_hooks || self.with_loaders.is_enabled()
    }

    /// A [`NameConverter`] carrying this config's naming options.
    pub fn name_converter(&self) -> NameConverter {
        NameConverter::new(self.naming_convention)
            .with_dedupe_operation_suffix(self.dedupe_operation_suffix)
            .with_document_variable_affixes(
                self.document_variable_prefix.as_str(),
                self.document_variable_suffix.as_str(),
            )
            .with_omit_operation_suffix(self.omit_operation_suffix)
            .with_types_affixes(
                self.types_prefix.as_str(),
                self.types_suffix.as_str(),
            )
    }

    /// The configured operation-types namespace. An empty string counts as
    /// unset.
    pub fn operation_types_prefix(&self) -> Option<&str> {
        self.import_operation_types_from
            .as_deref()
            .filter(|prefix| !prefix.is_empty())
    }

    /// Reference an operation identifier (document, result type or variables
    /// type), namespaced under the operation-types prefix when one is set.
    pub fn type_reference(&self, ident: &str) -> String {
        match self.operation_types_prefix() {
            Some(prefix) => format!("{prefix}.{ident}"),
            None => ident.to_string(),
        }
    }

    pub fn warnings(&self) -> Vec<ConfigWarning> {
        let mut warnings = vec![];
        let Some(prefix) = self.operation_types_prefix() else {
            return warnings;
        };

        let external_documents = self.import_document_node_externally_from
            .as_deref()
            .is_some_and(|from| !from.is_empty());
        if !external_documents {
            warnings.push(
                ConfigWarning::OperationTypesPrefixWithoutExternalDocuments,
            );
        }

        if prefix != DEFAULT_OPERATION_TYPES_PREFIX {
            warnings.push(ConfigWarning::NonDefaultOperationTypesPrefix {
                prefix: prefix.to_string(),
            });
        }

        warnings
    }
}
impl Default for UrqlCodegenConfig {
    fn default() -> Self {
        Self {
            dedupe_operation_suffix: false,
            document_variable_prefix: String::new(),
            document_variable_suffix: "Document".to_string(),
            import_document_node_externally_from: None,
            import_operation_types_from: None,
            naming_convention: NamingConvention::default(),
            omit_operation_suffix: false,
            router_import_from: "react-router".to_string(),
            types_prefix: String::new(),
            types_suffix: String::new(),
            urql_import_from: "urql".to_string(),
            with_component: false,
            with_hooks: true,
            with_loaders: LoaderMode::default(),
        }
    }
}
