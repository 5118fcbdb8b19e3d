use crate::VariableDescriptor;

/// Decides whether the variables/options parameter of a generated function
/// must be supplied by its caller.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequirednessPolicy {
    /// Used for loaders and actions. Any variable with a default can be left
    /// to the request-variable parser, so only non-null variables without a
    /// default make the parameter required.
    Lenient,

    /// Used for components and hooks. Any non-null variable makes the
    /// parameter required, defaults notwithstanding.
    Strict,
}
impl RequirednessPolicy {
    pub fn is_required<'a>(
        &self,
        variables: impl IntoIterator<Item = &'a VariableDescriptor>,
    ) -> bool {
        let mut variables = variables.into_iter();
        match self {
            Self::Lenient => variables.any(|var| !var.nullable() && !var.has_default()),
            Self::Strict => variables.any(|var| !var.nullable()),
        }
    }
}
