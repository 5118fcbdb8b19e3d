use crate::NameResolver;
use crate::OperationDescriptor;
use crate::OperationDescriptorBuildError;
use crate::OperationDescriptorBuilder;
use crate::OperationKind;
use crate::VariableDescriptor;
use crate::file_reader;
use graphql_parser::query as ast;
use std::path::Path;
use std::path::PathBuf;
use thiserror::Error;

type Result<T> = std::result::Result<T, OperationSourceError>;

/// Reads [`OperationDescriptor`]s out of executable GraphQL documents.
///
/// Fragment definitions are skipped. A shorthand `{ ... }` selection set is
/// treated as an anonymous query.
pub struct OperationSource;
impl OperationSource {
    pub fn from_ast(
        document: &ast::Document<'_, String>,
        names: &impl NameResolver,
    ) -> Result<Vec<OperationDescriptor>> {
        let mut operations = vec![];
        for def in &document.definitions {
            let op_def = match def {
                ast::Definition::Operation(op_def) => op_def,
                ast::Definition::Fragment(frag_def) => {
                    log::trace!(
                        "Skipping fragment definition `{}`.",
                        frag_def.name,
                    );
                    continue
                },
            };

            let (kind, name, var_defs) = match op_def {
                ast::OperationDefinition::SelectionSet(_) =>
                    (OperationKind::Query, None, &[][..]),
                ast::OperationDefinition::Query(op) =>
                    (OperationKind::Query, op.name.as_ref(), &op.variable_definitions[..]),
                ast::OperationDefinition::Mutation(op) =>
                    (OperationKind::Mutation, op.name.as_ref(), &op.variable_definitions[..]),
                ast::OperationDefinition::Subscription(op) =>
                    (OperationKind::Subscription, op.name.as_ref(), &op.variable_definitions[..]),
            };

            let mut builder = OperationDescriptorBuilder::new(kind);
            if let Some(name) = name {
                builder = builder.set_name(name.as_str());
            }
            for var_def in var_defs {
                builder = builder.add_variable(VariableDescriptor::new(
                    var_def.name.as_str(),
                    !matches!(var_def.var_type, ast::Type::NonNullType(_)),
                    var_def.default_value.is_some(),
                ))?;
            }
            operations.push(builder.build(names));
        }
        Ok(operations)
    }

    pub fn from_file(
        file_path: impl AsRef<Path>,
        names: &impl NameResolver,
    ) -> Result<Vec<OperationDescriptor>> {
        let file_path = file_path.as_ref();
        let content = file_reader::read_content(file_path)
            .map_err(|err| OperationSourceError::FileReadError(Box::new(err)))?;
        Self::from_str(content, Some(file_path), names)
    }

    pub fn from_str(
        content: impl AsRef<str>,
        file_path: Option<&Path>,
        names: &impl NameResolver,
    ) -> Result<Vec<OperationDescriptor>> {
        let document = ast::parse_query::<String>(content.as_ref())
            .map_err(|err| OperationSourceError::ParseError {
                file_path: file_path.map(Path::to_path_buf),
                message: err.to_string(),
            })?;
        Self::from_ast(&document, names)
    }
}

#[derive(Debug, Error)]
pub enum OperationSourceError {
    #[error("Invalid operation definition: {0}")]
    DescriptorBuildError(#[from] OperationDescriptorBuildError),

    #[error("Failure while trying to read an operation document from disk: {0}")]
    FileReadError(Box<file_reader::ReadContentError>),

    #[error("Error parsing operation document {file_path:?}: {message}")]
    ParseError {
        file_path: Option<PathBuf>,
        message: String,
    },
}
