use heck::ToLowerCamelCase;
use heck::ToPascalCase;

/// The casing applied to raw GraphQL operation names before they are used
/// to derive TypeScript identifiers.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, serde::Deserialize)]
pub enum NamingConvention {
    #[serde(rename = "camelCase")]
    CamelCase,

    #[serde(rename = "keep")]
    Keep,

    #[default]
    #[serde(rename = "PascalCase")]
    PascalCase,
}
impl NamingConvention {
    pub fn apply(&self, raw: &str) -> String {
        match self {
            Self::CamelCase => raw.to_lower_camel_case(),
            Self::Keep => raw.to_string(),
            Self::PascalCase => raw.to_pascal_case(),
        }
    }
}
