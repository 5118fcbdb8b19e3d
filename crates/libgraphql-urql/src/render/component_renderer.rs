use crate::OperationFacts;
use crate::render::operation_facts::optional_marker;

/// Renders the `<Urql.Query>`/`<Urql.Mutation>`/`<Urql.Subscription>`
/// wrapper component for one operation. The document is bound internally,
/// so `query` is removed from the accepted props.
pub fn render_component(facts: &OperationFacts) -> String {
    let element = facts.kind().suffix();
    let generics = facts.generics();
    format!(
        concat!(
            "export const {component} = (props: Omit<Urql.{element}Props{generics}, 'query'> & {{ variables{opt}: {variables} }}) => (\n",
            "  <Urql.{element} {{...props}} query={{{document}}} />\n",
            ");",
        ),
        component = facts.names().component(),
        element = element,
        generics = generics.render(),
        opt = optional_marker(facts.strict_required()),
        variables = generics.variables_type(),
        document = facts.document(),
    )
}
