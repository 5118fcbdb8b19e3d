mod config_warning;
mod loader_mode;
mod urql_codegen_config;

pub use config_warning::ConfigWarning;
pub use loader_mode::CLIENT_BINDING;
pub use loader_mode::ClientImport;
pub use loader_mode::LoaderMode;
pub use urql_codegen_config::DEFAULT_OPERATION_TYPES_PREFIX;
pub use urql_codegen_config::UrqlCodegenConfig;

#[cfg(test)]
mod tests;
