use crate::NameResolver;
use crate::OperationDescriptor;
use crate::OperationKind;
use crate::VariableDescriptor;
use indexmap::IndexMap;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationDescriptorBuildError>;

#[derive(Clone, Debug)]
pub struct OperationDescriptorBuilder {
    document_variable: Option<String>,
    kind: OperationKind,
    name: String,
    result_type: Option<String>,
    variables: IndexMap<String, VariableDescriptor>,
    variables_type: Option<String>,
}
impl OperationDescriptorBuilder {
    pub fn new(kind: OperationKind) -> Self {
        Self {
            document_variable: None,
            kind,
            name: String::new(),
            result_type: None,
            variables: IndexMap::new(),
            variables_type: None,
        }
    }

    /// Add a [`VariableDescriptor`] after any previously added ones.
    pub fn add_variable(mut self, variable: VariableDescriptor) -> Result<Self> {
        if self.variables.contains_key(variable.name()) {
            return Err(OperationDescriptorBuildError::DuplicateVariableName {
                operation_name: self.name,
                variable_name: variable.name,
            });
        }
        self.variables.insert(variable.name().to_string(), variable);
        Ok(self)
    }

    /// Consume this builder to produce an [`OperationDescriptor`]. Any
    /// identifier that was not set explicitly is derived from the operation
    /// name with `names`.
    pub fn build(self, names: &impl NameResolver) -> OperationDescriptor {
        let document_variable = self.document_variable.unwrap_or_else(
            || names.document_variable_name(&self.name),
        );
        let result_type = self.result_type.unwrap_or_else(
            || names.result_type_name(&self.name, self.kind),
        );
        let variables_type = self.variables_type.unwrap_or_else(
            || names.variables_type_name(&self.name, self.kind),
        );

        OperationDescriptor {
            document_variable,
            kind: self.kind,
            name: self.name,
            result_type,
            variables: self.variables,
            variables_type,
        }
    }

    pub fn set_document_variable(mut self, ident: impl Into<String>) -> Self {
        self.document_variable = Some(ident.into());
        self
    }

    /// Anonymous operations keep the default empty name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn set_result_type(mut self, ident: impl Into<String>) -> Self {
        self.result_type = Some(ident.into());
        self
    }

    pub fn set_variables_type(mut self, ident: impl Into<String>) -> Self {
        self.variables_type = Some(ident.into());
        self
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum OperationDescriptorBuildError {
    #[error(
        "The variable `${variable_name}` is declared more than once on \
        operation `{operation_name}`"
    )]
    DuplicateVariableName {
        operation_name: String,
        variable_name: String,
    },
}
