mod artifact_names;
mod name_converter;
mod name_resolver;
mod naming_convention;

pub use artifact_names::ArtifactNames;
pub use name_converter::NameConverter;
pub use name_resolver::ConvertNameOptions;
pub use name_resolver::NameResolver;
pub use naming_convention::NamingConvention;
