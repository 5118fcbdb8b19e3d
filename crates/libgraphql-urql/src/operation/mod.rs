mod operation_descriptor;
mod operation_descriptor_builder;
mod operation_kind;
mod operation_source;
mod variable_descriptor;

pub use operation_descriptor::OperationDescriptor;
pub use operation_descriptor_builder::OperationDescriptorBuildError;
pub use operation_descriptor_builder::OperationDescriptorBuilder;
pub use operation_kind::OperationKind;
pub use operation_source::OperationSource;
pub use operation_source::OperationSourceError;
pub use variable_descriptor::VariableDescriptor;
