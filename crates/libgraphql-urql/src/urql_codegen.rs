use crate::ConfigWarning;
use crate::GeneratedModule;
use crate::NameConverter;
use crate::NameResolver;
use crate::OperationAssembler;
use crate::OperationDescriptor;
use crate::UrqlCodegenConfig;
use crate::synthesize_imports;

/// Generates urql bindings for GraphQL operations.
///
/// Each call is a pure function of the config and its arguments, so
/// operations (or whole documents) can be generated in any order or in
/// parallel.
#[derive(Debug)]
pub struct UrqlCodegen<TNames: NameResolver = NameConverter> {
    config: UrqlCodegenConfig,
    names: TNames,
    warnings: Vec<ConfigWarning>,
}
impl UrqlCodegen<NameConverter> {
    /// Uses the [`NameConverter`] described by `config`. Configuration
    /// warnings are logged once here.
    pub fn new(config: UrqlCodegenConfig) -> Self {
        let names = config.name_converter();
        Self::with_name_resolver(config, names)
    }
}
impl<TNames: NameResolver> UrqlCodegen<TNames> {
    pub fn with_name_resolver(config: UrqlCodegenConfig, names: TNames) -> Self {
        let warnings = config.warnings();
        for warning in &warnings {
            log::warn!("{warning}");
        }
        Self {
            config,
            names,
            warnings,
        }
    }

    /// Generate the imports and artifacts of one module.
    pub fn generate<'a>(
        &self,
        base_imports: &[String],
        operations: impl IntoIterator<Item = &'a OperationDescriptor>,
    ) -> GeneratedModule {
        let operations: Vec<String> = operations.into_iter()
            .map(|operation| self.generate_operation(operation))
            .collect();
        GeneratedModule {
            imports: self.imports(base_imports, !operations.is_empty()),
            operations,
        }
    }

    /// The artifacts of one operation, joined by blank lines. Empty when no
    /// enabled artifact applies to the operation.
    pub fn generate_operation(&self, operation: &OperationDescriptor) -> String {
        log::debug!(
            "Generating artifacts for {} `{}`.",
            operation.kind(),
            operation.name(),
        );
        OperationAssembler::new(&self.config, &self.names)
            .assemble(operation)
            .join()
    }

    pub fn imports(
        &self,
        base_imports: &[String],
        has_operations: bool,
    ) -> Vec<String> {
        synthesize_imports(&self.config, base_imports, has_operations)
    }

    /// A [`NameResolver`] consistent with the generated artifact names, for
    /// building [`OperationDescriptor`]s.
    pub fn names(&self) -> &TNames {
        &self.names
    }

    pub fn warnings(&self) -> &[ConfigWarning] {
        self.warnings.as_slice()
    }
}
