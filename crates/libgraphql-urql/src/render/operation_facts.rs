use crate::ArtifactNames;
use crate::GenericArgs;
use crate::NameResolver;
use crate::OperationDescriptor;
use crate::OperationKind;
use crate::RequirednessPolicy;
use crate::UrqlCodegenConfig;

/// The facts every renderer of one operation works from. Computing them in
/// one place keeps the component, hook and loaders agreeing on generic
/// order and requiredness.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationFacts {
    pub(crate) document: String,
    pub(crate) generics: GenericArgs,
    pub(crate) kind: OperationKind,
    pub(crate) lenient_required: bool,
    pub(crate) names: ArtifactNames,
    pub(crate) strict_required: bool,
}
impl OperationFacts {
    pub fn resolve(
        operation: &OperationDescriptor,
        config: &UrqlCodegenConfig,
        names: &impl NameResolver,
    ) -> Self {
        let variables = operation.variables().values();
        Self {
            document: config.type_reference(operation.document_variable()),
            generics: GenericArgs::compose(
                operation.kind(),
                config.type_reference(operation.result_type()).as_str(),
                config.type_reference(operation.variables_type()).as_str(),
            ),
            kind: operation.kind(),
            lenient_required: RequirednessPolicy::Lenient.is_required(
                variables.clone(),
            ),
            names: ArtifactNames::resolve(
                operation.name(),
                operation.kind(),
                names,
            ),
            strict_required: RequirednessPolicy::Strict.is_required(variables),
        }
    }

    /// The (possibly namespaced) document identifier.
    pub fn document(&self) -> &str {
        self.document.as_str()
    }

    pub fn generics(&self) -> &GenericArgs {
        &self.generics
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// Requiredness under [`RequirednessPolicy::Lenient`].
    pub fn lenient_required(&self) -> bool {
        self.lenient_required
    }

    pub fn names(&self) -> &ArtifactNames {
        &self.names
    }

    /// Requiredness under [`RequirednessPolicy::Strict`].
    pub fn strict_required(&self) -> bool {
        self.strict_required
    }
}

/// `""` for a required parameter or property, `"?"` otherwise.
pub(crate) fn optional_marker(required: bool) -> &'static str {
    if required { "" } else { "?" }
}
