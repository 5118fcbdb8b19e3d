/// The facts about a declared operation variable that matter when deciding
/// whether a generated function must be passed variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VariableDescriptor {
    pub(crate) has_default: bool,
    pub(crate) name: String,
    pub(crate) nullable: bool,
}
impl VariableDescriptor {
    pub fn new(
        name: impl Into<String>,
        nullable: bool,
        has_default: bool,
    ) -> Self {
        Self {
            has_default,
            name: name.into(),
            nullable,
        }
    }

    /// Whether the variable declares a default value (`$first: Int! = 10`).
    pub fn has_default(&self) -> bool {
        self.has_default
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Whether the outermost type annotation of the variable is nullable.
    pub fn nullable(&self) -> bool {
        self.nullable
    }
}
