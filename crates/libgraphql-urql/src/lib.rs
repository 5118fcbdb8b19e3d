//! Generates TypeScript bindings around [urql](https://commerce.nearform.com/open-source/urql/)
//! for GraphQL operations: React components, `use*` hooks, and
//! `react-router` loader/action pairs.
//!
//! ```
//! use libgraphql_urql::OperationSource;
//! use libgraphql_urql::UrqlCodegen;
//! use libgraphql_urql::UrqlCodegenConfig;
//!
//! let codegen = UrqlCodegen::new(UrqlCodegenConfig::default());
//! let operations = OperationSource::from_str(
//!     "query GetUser($id: ID!) { user(id: $id) { name } }",
//!     None,
//!     codegen.names(),
//! ).unwrap();
//! let module = codegen.generate(&[], &operations);
//! assert!(module.render().contains("export function useGetUserQuery("));
//! ```

mod config;
mod file_reader;
mod generated_module;
mod naming;
mod operation;
mod render;
mod urql_codegen;

pub use config::*;
pub use file_reader::ReadContentError;
pub use generated_module::GeneratedModule;
pub use naming::*;
pub use operation::*;
pub use render::*;
pub use urql_codegen::UrqlCodegen;
