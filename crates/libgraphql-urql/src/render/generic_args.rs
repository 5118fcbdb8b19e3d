use crate::OperationKind;

/// The ordered generic type arguments shared by every artifact generated
/// for one operation.
///
/// Queries and mutations use `<Result, Variables>`. Subscriptions use
/// `<Result, Result, Variables>`: urql separates the raw subscription
/// payload from the data its handler accumulates, and the second slot is the
/// one callers may specialize.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenericArgs {
    args: Vec<String>,
}
impl GenericArgs {
    pub fn compose(
        kind: OperationKind,
        result_type: &str,
        variables_type: &str,
    ) -> Self {
        let mut args = vec![result_type.to_string()];
        if kind == OperationKind::Subscription {
            args.push(result_type.to_string());
        }
        args.push(variables_type.to_string());
        Self { args }
    }

    pub fn as_slice(&self) -> &[String] {
        self.args.as_slice()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    /// Renders `<A, B>` (or `<A, B, C>`).
    pub fn render(&self) -> String {
        format!("<{}>", self.args.join(", "))
    }

    /// Renders the list with the caller-specializable data slot of a
    /// subscription replaced by `data_param`. Queries and mutations have no
    /// such slot and render unchanged.
    pub fn render_with_data_param(&self, data_param: &str) -> String {
        if self.args.len() < 3 {
            return self.render();
        }
        let mut args: Vec<&str> = self.args.iter().map(String::as_str).collect();
        args[1] = data_param;
        format!("<{}>", args.join(", "))
    }

    pub fn result_type(&self) -> &str {
        self.args[0].as_str()
    }

    pub fn variables_type(&self) -> &str {
        self.args[self.args.len() - 1].as_str()
    }
}
