use crate::ConvertNameOptions;
use crate::NameResolver;
use crate::OperationKind;

/// The identifiers declared by the artifacts of one operation.
///
/// None of these carry the types prefix or the operation-types namespace:
/// those decorate references to existing types, not new declarations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ArtifactNames {
    base: String,
    component: String,
}
impl ArtifactNames {
    pub fn resolve(
        raw_name: &str,
        kind: OperationKind,
        names: &impl NameResolver,
    ) -> Self {
        let suffix = names.operation_suffix(raw_name, kind);
        let base = names.convert_name(raw_name, &ConvertNameOptions {
            suffix: suffix.as_str(),
            use_types_prefix: false,
        });
        let component = names.convert_name(raw_name, &ConvertNameOptions {
            suffix: "Component",
            use_types_prefix: false,
        });
        Self { base, component }
    }

    /// `GetUserQuery`: the converted name plus the operation suffix.
    pub fn base(&self) -> &str {
        self.base.as_str()
    }

    pub fn action(&self) -> String {
        format!("{}Action", self.base)
    }

    pub fn action_data_hook(&self) -> String {
        format!("use{}ActionData", self.base)
    }

    pub fn component(&self) -> &str {
        self.component.as_str()
    }

    pub fn hook(&self) -> String {
        format!("use{}", self.base)
    }

    pub fn loader(&self) -> String {
        format!("{}Loader", self.base)
    }

    pub fn loader_data_hook(&self) -> String {
        format!("use{}LoaderData", self.base)
    }
}
