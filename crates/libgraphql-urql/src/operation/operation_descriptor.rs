use crate::OperationKind;
use crate::VariableDescriptor;
use indexmap::IndexMap;

/// Everything the generator needs to know about one operation definition:
/// its kind, its raw name, its declared variables and the already-resolved
/// identifiers for its document, result type and variables type.
///
/// Build one with
/// [`OperationDescriptorBuilder`](crate::OperationDescriptorBuilder) or read
/// them out of a GraphQL document with
/// [`OperationSource`](crate::OperationSource).
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperationDescriptor {
    pub(crate) document_variable: String,
    pub(crate) kind: OperationKind,
    pub(crate) name: String,
    pub(crate) result_type: String,
    pub(crate) variables: IndexMap<String, VariableDescriptor>,
    pub(crate) variables_type: String,
}
impl OperationDescriptor {
    pub fn document_variable(&self) -> &str {
        self.document_variable.as_str()
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The raw operation name. Empty for anonymous operations.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn result_type(&self) -> &str {
        self.result_type.as_str()
    }

    /// Declared variables, in declaration order.
    pub fn variables(&self) -> &IndexMap<String, VariableDescriptor> {
        &self.variables
    }

    pub fn variables_type(&self) -> &str {
        self.variables_type.as_str()
    }
}
