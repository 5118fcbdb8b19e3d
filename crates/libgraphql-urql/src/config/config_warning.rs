use thiserror::Error;

/// A configuration inconsistency that does not stop generation but usually
/// produces a module that will not type-check.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum ConfigWarning {
    #[error(
        "`importOperationTypesFrom` is set to `{prefix}`, which only works \
        correctly when left empty or set to `Operations`"
    )]
    NonDefaultOperationTypesPrefix {
        prefix: String,
    },

    #[error(
        "`importOperationTypesFrom` should be used together with \
        `importDocumentNodeExternallyFrom` so that documents are imported \
        from the same external module as the operation types"
    )]
    OperationTypesPrefixWithoutExternalDocuments,
}
