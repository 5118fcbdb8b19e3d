use crate::OperationKind;

/// Options for a single [`NameResolver::convert_name`] call.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ConvertNameOptions<'a> {
    /// Appended verbatim after the converted name.
    pub suffix: &'a str,

    /// Whether the configured types prefix/suffix should decorate the name.
    /// Only type references use these; newly declared functions and
    /// components never do.
    pub use_types_prefix: bool,
}

/// The naming capabilities the generator needs from its host pipeline.
///
/// [`NameConverter`](crate::NameConverter) is the stock implementation; a
/// host with its own naming rules can supply another.
pub trait NameResolver {
    /// Convert a raw GraphQL name into a TypeScript identifier. Must return a
    /// valid identifier even when `raw` is empty.
    fn convert_name(&self, raw: &str, options: &ConvertNameOptions<'_>) -> String;

    /// The identifier bound to the executable document of the operation.
    fn document_variable_name(&self, raw: &str) -> String;

    /// The suffix to append to names derived from an operation named `raw`
    /// of the given kind. May be empty.
    fn operation_suffix(&self, raw: &str, kind: OperationKind) -> String;

    /// `GetUser` (query) -> `GetUserQuery`.
    fn result_type_name(&self, raw: &str, kind: OperationKind) -> String {
        let suffix = self.operation_suffix(raw, kind);
        self.convert_name(raw, &ConvertNameOptions {
            suffix: suffix.as_str(),
            use_types_prefix: true,
        })
    }

    /// `GetUser` (query) -> `GetUserQueryVariables`.
    fn variables_type_name(&self, raw: &str, kind: OperationKind) -> String {
        let suffix = format!("{}Variables", self.operation_suffix(raw, kind));
        self.convert_name(raw, &ConvertNameOptions {
            suffix: suffix.as_str(),
            use_types_prefix: true,
        })
    }
}
