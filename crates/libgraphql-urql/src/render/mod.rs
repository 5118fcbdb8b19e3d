mod component_renderer;
mod generic_args;
mod hook_renderer;
mod import_synthesizer;
mod loader_renderer;
mod operation_assembler;
pub(crate) mod operation_facts;
mod requiredness_policy;

pub use component_renderer::render_component;
pub use generic_args::GenericArgs;
pub use hook_renderer::render_hook;
pub use import_synthesizer::OMIT_UTILITY_TYPE;
pub use import_synthesizer::synthesize_imports;
pub use loader_renderer::render_loader_pair;
pub use operation_assembler::ArtifactSet;
pub use operation_assembler::OperationAssembler;
pub use operation_facts::OperationFacts;
pub use requiredness_policy::RequirednessPolicy;

#[cfg(test)]
mod tests;
