use crate::NameResolver;
use crate::OperationDescriptor;
use crate::OperationFacts;
use crate::UrqlCodegenConfig;
use crate::render::render_component;
use crate::render::render_hook;
use crate::render::render_loader_pair;

/// The non-empty artifacts rendered for one operation, always in component,
/// hook, loaders order.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ArtifactSet {
    fragments: Vec<String>,
}
impl ArtifactSet {
    pub fn fragments(&self) -> &[String] {
        self.fragments.as_slice()
    }

    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }

    /// Joins the fragments with a single blank line.
    pub fn join(&self) -> String {
        self.fragments.join("\n\n")
    }

    fn push(&mut self, fragment: String) {
        if !fragment.is_empty() {
            self.fragments.push(fragment);
        }
    }
}

/// Runs the renderers enabled by a config over single operations.
#[derive(Debug)]
pub struct OperationAssembler<'a, TNames: NameResolver> {
    config: &'a UrqlCodegenConfig,
    names: &'a TNames,
}
impl<'a, TNames: NameResolver> OperationAssembler<'a, TNames> {
    pub fn new(config: &'a UrqlCodegenConfig, names: &'a TNames) -> Self {
        Self { config, names }
    }

    pub fn assemble(&self, operation: &OperationDescriptor) -> ArtifactSet {
        let facts = OperationFacts::resolve(operation, self.config, self.names);
        let mut artifacts = ArtifactSet::default();
        if self.config.with_component {
            artifacts.push(render_component(&facts));
        }
        if self.config.with_hooks {
            artifacts.push(render_hook(&facts));
        }
        if self.config.with_loaders.is_enabled() {
            artifacts.push(render_loader_pair(&facts, &self.config.with_loaders));
        }
        artifacts
    }
}
